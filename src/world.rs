use crate::config::{GridConfig, HAZARD_COUNT, INITIAL_SNAKE_LENGTH};
use crate::geometry::{distance, Point};
use crate::mode_select::Mode;
use crate::snake::{Food, Hazard, Heading, Snake};
use log::{debug, info};
use rand::Rng;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    ModeSelect,
    Playing,
    GameOver,
}

/// One-shot events for the presentation layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Signal {
    FoodEaten,
    GameOver,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TickOutcome {
    pub signals: Vec<Signal>,
}

impl TickOutcome {
    pub fn food_eaten(&self) -> bool {
        self.signals.contains(&Signal::FoodEaten)
    }

    pub fn game_over(&self) -> bool {
        self.signals.contains(&Signal::GameOver)
    }
}

/// Everything a renderer needs to draw one frame.
#[derive(Clone, Debug, PartialEq)]
pub struct Snapshot {
    pub grid: GridConfig,
    pub mode: Mode,
    pub segments: Vec<Point>,
    pub food: Point,
    pub hazards: Vec<Point>,
    pub score: u32,
    pub phase: Phase,
}

/// A single session. Owns the snake, the food and the bombs.
#[derive(Debug)]
pub struct World<R> {
    grid: GridConfig,
    mode: Mode,
    rng: R,
    snake: Snake,
    food: Food,
    hazards: Vec<Hazard>,
    score: u32,
    phase: Phase,
}

impl<R: Rng> World<R> {
    pub fn new(grid: GridConfig, mode: Mode, mut rng: R) -> Self {
        let snake = Snake::new(grid, INITIAL_SNAKE_LENGTH);
        let food = Food::spawn(grid, &mut rng);
        let hazards = match mode {
            Mode::Normal => Vec::new(),
            Mode::Advance => {
                let count = rng.gen_range(HAZARD_COUNT);
                (0..count).map(|_| Hazard::spawn(grid, &mut rng)).collect()
            }
        };

        info!(
            "New {:?} world: food at {:?}, {} hazards",
            mode,
            food.position,
            hazards.len()
        );

        World::from_parts(grid, mode, rng, snake, food, hazards)
    }

    /// A world with a fixed layout, for scripted scenarios.
    pub fn from_parts(
        grid: GridConfig,
        mode: Mode,
        rng: R,
        snake: Snake,
        food: Food,
        hazards: Vec<Hazard>,
    ) -> Self {
        World {
            grid,
            mode,
            rng,
            snake,
            food,
            hazards,
            score: 0,
            phase: Phase::Playing,
        }
    }

    /// Advances the world by one tick.
    ///
    /// The order is fixed: turn, move, food, self collision, hazards. Food and
    /// hazard checks are independent, so a tick can both score and end the
    /// game. Once the game is over this does nothing.
    pub fn step(&mut self, turn: Option<Heading>) -> TickOutcome {
        let mut outcome = TickOutcome::default();
        if self.phase != Phase::Playing {
            return outcome;
        }

        if let Some(heading) = turn {
            self.snake.change_heading(heading);
        }

        self.snake.slither(self.grid);
        let head = self.snake.head();

        if self.is_near(head, self.food.position) {
            self.food.respawn(self.grid, &mut self.rng);
            self.snake.grow(self.grid);
            self.score += 1;
            outcome.signals.push(Signal::FoodEaten);
            debug!(
                "Food eaten at {:?}: score {}, length {}, next food at {:?}",
                head,
                self.score,
                self.snake.len(),
                self.food.position
            );
        }

        let mut dead = self.snake.hits_itself();

        if self.mode == Mode::Advance
            && self
                .hazards
                .iter()
                .any(|hazard| self.is_near(head, hazard.position))
        {
            dead = true;
        }

        if dead {
            self.phase = Phase::GameOver;
            outcome.signals.push(Signal::GameOver);
            info!("Game over at {:?} with score {}", head, self.score);
        }

        outcome
    }

    /// Proximity rule shared by food and bombs: strictly closer than one cell.
    fn is_near(&self, a: Point, b: Point) -> bool {
        distance(a, b) < self.grid.cell_size as f64
    }
}

impl<R> World<R> {
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            grid: self.grid,
            mode: self.mode,
            segments: self.snake.segments().iter().copied().collect(),
            food: self.food.position,
            hazards: self.hazards.iter().map(|h| h.position).collect(),
            score: self.score,
            phase: self.phase,
        }
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }
}
