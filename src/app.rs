use crate::config::GridConfig;
use crate::feedback::Feedback;
use crate::geometry::Point;
use crate::mode_select::{Mode, ModeSelector};
use crate::snake::Heading;
use crate::ui;
use crate::world::{Phase, World};
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use log::{info, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use ratatui::layout::Rect;
use ratatui::Frame;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Turn(Heading),
    Pick(Mode),
    Click { column: u16, row: u16 },
    /// Space/Enter: pick Normal, pause, resume or play again depending on the screen.
    Toggle,
    Quit,
}

impl Command {
    pub fn from_event(event: &Event) -> Option<Command> {
        match event {
            Event::Key(key) if key.kind != KeyEventKind::Release => Command::from_key(key),
            Event::Mouse(MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column,
                row,
                ..
            }) => Some(Command::Click {
                column: *column,
                row: *row,
            }),
            _ => None,
        }
    }

    fn from_key(key: &KeyEvent) -> Option<Command> {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Some(Command::Quit);
        }

        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => Some(Command::Quit),
            KeyCode::Up | KeyCode::Char('w') => Some(Command::Turn(Heading::North)),
            KeyCode::Down | KeyCode::Char('s') => Some(Command::Turn(Heading::South)),
            KeyCode::Left | KeyCode::Char('a') => Some(Command::Turn(Heading::West)),
            KeyCode::Right | KeyCode::Char('d') => Some(Command::Turn(Heading::East)),
            KeyCode::Char('1') | KeyCode::Char('n') => Some(Command::Pick(Mode::Normal)),
            KeyCode::Char('2') => Some(Command::Pick(Mode::Advance)),
            KeyCode::Char(' ') | KeyCode::Enter => Some(Command::Toggle),
            _ => None,
        }
    }
}

#[derive(Debug)]
pub enum Screen {
    ModeSelect(ModeSelector),
    Playing(World<StdRng>),
    Paused(World<StdRng>),
    GameOver(World<StdRng>),
    Exit,
}

/// Drives sessions: mode selection, play, game over, and back again.
pub struct App {
    grid: GridConfig,
    screen: Screen,
    seeder: StdRng,
    pending_turn: Option<Heading>,
    feedback: Box<dyn Feedback>,
    arena: Option<Rect>,
    too_small: bool,
}

impl App {
    /// `preset` skips the selector and starts straight into that mode.
    pub fn new(
        grid: GridConfig,
        seed: u64,
        preset: Option<Mode>,
        feedback: Box<dyn Feedback>,
    ) -> Self {
        let mut app = App {
            grid,
            screen: Screen::ModeSelect(ModeSelector::new(grid)),
            seeder: StdRng::seed_from_u64(seed),
            pending_turn: None,
            feedback,
            arena: None,
            too_small: false,
        };
        if let Some(mode) = preset {
            app.screen = app.start(mode);
        }
        app
    }

    /// Session phase as the player sees it. A world never reports
    /// `ModeSelect`; only the selector screen does. `None` once the app is
    /// exiting.
    pub fn phase(&self) -> Option<Phase> {
        match &self.screen {
            Screen::ModeSelect(_) => Some(Phase::ModeSelect),
            Screen::Playing(world) | Screen::Paused(world) | Screen::GameOver(world) => {
                Some(world.phase())
            }
            Screen::Exit => None,
        }
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn should_exit(&self) -> bool {
        matches!(self.screen, Screen::Exit)
    }

    pub fn handle_event(&mut self, event: &Event) {
        if let Some(command) = Command::from_event(event) {
            self.apply(command);
        }
    }

    pub fn apply(&mut self, command: Command) {
        let screen = std::mem::replace(&mut self.screen, Screen::Exit);

        self.screen = match (screen, command) {
            (_, Command::Quit) => {
                info!("Quit requested");
                Screen::Exit
            }
            (Screen::ModeSelect(mut selector), Command::Click { column, row }) => {
                let mode = match self.point_at(column, row) {
                    Some(point) => selector.click(point),
                    None => selector.choose(Mode::Normal),
                };
                self.start(mode)
            }
            (Screen::ModeSelect(mut selector), Command::Pick(mode)) => {
                let mode = selector.choose(mode);
                self.start(mode)
            }
            (Screen::ModeSelect(mut selector), Command::Toggle) => {
                let mode = selector.choose(Mode::Normal);
                self.start(mode)
            }
            (Screen::Playing(world), Command::Turn(heading)) => {
                self.pending_turn = Some(heading);
                Screen::Playing(world)
            }
            (Screen::Playing(world), Command::Toggle) => {
                info!("Paused at score {}", world.score());
                Screen::Paused(world)
            }
            (Screen::Paused(world), Command::Toggle) => {
                info!("Resumed");
                Screen::Playing(world)
            }
            (Screen::GameOver(_), Command::Toggle) => {
                Screen::ModeSelect(ModeSelector::new(self.grid))
            }
            (screen, _) => screen,
        };
    }

    /// Runs one simulation step if a game is in progress.
    pub fn tick(&mut self) {
        let Screen::Playing(world) = &mut self.screen else {
            return;
        };

        let outcome = world.step(self.pending_turn.take());
        for signal in &outcome.signals {
            self.feedback.signal(*signal);
        }

        if outcome.game_over() {
            if let Screen::Playing(world) = std::mem::replace(&mut self.screen, Screen::Exit) {
                self.screen = Screen::GameOver(world);
            }
        }
    }

    pub fn render(&mut self, frame: &mut Frame) {
        let arena = ui::draw(frame, &self.screen, self.grid);
        if arena.is_none() && !self.too_small {
            warn!("Terminal too small for the arena: {:?}", frame.area());
        }
        self.too_small = arena.is_none();
        self.arena = arena;
    }

    fn start(&mut self, mode: Mode) -> Screen {
        self.pending_turn = None;
        let rng = StdRng::seed_from_u64(self.seeder.gen());
        Screen::Playing(World::new(self.grid, mode, rng))
    }

    fn point_at(&self, column: u16, row: u16) -> Option<Point> {
        self.arena
            .and_then(|arena| ui::point_at(arena, self.grid, column, row))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snake::{Food, Hazard, Snake};
    use crate::world::Signal;
    use std::cell::RefCell;
    use std::collections::VecDeque;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct Recorder(Rc<RefCell<Vec<Signal>>>);

    impl Feedback for Recorder {
        fn signal(&mut self, signal: Signal) {
            self.0.borrow_mut().push(signal);
        }
    }

    fn new_app() -> (App, Recorder) {
        let recorder = Recorder::default();
        let app = App::new(GridConfig::default(), 9, None, Box::new(recorder.clone()));
        (app, recorder)
    }

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn click(column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    fn world(app: &App) -> &World<StdRng> {
        match app.screen() {
            Screen::Playing(world) | Screen::Paused(world) | Screen::GameOver(world) => world,
            other => panic!("no world on {:?}", other),
        }
    }

    #[test]
    fn test_key_mapping() {
        assert_eq!(
            Command::from_event(&key(KeyCode::Up)),
            Some(Command::Turn(Heading::North))
        );
        assert_eq!(
            Command::from_event(&key(KeyCode::Char('d'))),
            Some(Command::Turn(Heading::East))
        );
        assert_eq!(Command::from_event(&key(KeyCode::Esc)), Some(Command::Quit));
        assert_eq!(
            Command::from_event(&Event::Key(KeyEvent::new(
                KeyCode::Char('c'),
                KeyModifiers::CONTROL
            ))),
            Some(Command::Quit)
        );
        assert_eq!(Command::from_event(&key(KeyCode::Char('x'))), None);
        assert_eq!(
            Command::from_event(&click(3, 4)),
            Some(Command::Click { column: 3, row: 4 })
        );
    }

    #[test]
    fn test_starts_on_mode_select() {
        let (app, _) = new_app();
        assert_eq!(app.phase(), Some(Phase::ModeSelect));
        assert!(matches!(app.screen(), Screen::ModeSelect(_)));
    }

    #[test]
    fn test_preset_mode_skips_selection() {
        let app = App::new(GridConfig::default(), 1, Some(Mode::Advance), Box::new(Recorder::default()));
        assert_eq!(app.phase(), Some(Phase::Playing));
        assert_eq!(world(&app).mode(), Mode::Advance);
    }

    #[test]
    fn test_pick_advance_from_keyboard() {
        let (mut app, _) = new_app();
        app.handle_event(&key(KeyCode::Char('2')));

        assert_eq!(app.phase(), Some(Phase::Playing));
        assert_eq!(world(&app).mode(), Mode::Advance);
        assert!(!world(&app).snapshot().hazards.is_empty());
    }

    #[test]
    fn test_click_before_first_draw_picks_normal() {
        let (mut app, _) = new_app();
        app.handle_event(&click(20, 12));
        assert_eq!(world(&app).mode(), Mode::Normal);
    }

    #[test]
    fn test_click_on_advance_label() {
        let (mut app, _) = new_app();
        app.arena = Some(Rect::new(10, 5, 40, 15));

        // Cell (8, 9) is logical (160, 180), inside the Advance label.
        app.handle_event(&click(10 + 16, 5 + 9));
        assert_eq!(world(&app).mode(), Mode::Advance);
    }

    #[test]
    fn test_click_elsewhere_picks_normal() {
        let (mut app, _) = new_app();
        app.arena = Some(Rect::new(10, 5, 40, 15));

        app.handle_event(&click(11, 6));
        assert_eq!(world(&app).mode(), Mode::Normal);
    }

    #[test]
    fn test_turn_is_queued_until_the_next_tick() {
        let (mut app, _) = new_app();
        app.apply(Command::Pick(Mode::Normal));

        app.handle_event(&key(KeyCode::Down));
        app.handle_event(&key(KeyCode::Up));
        assert_eq!(world(&app).snake().heading(), Heading::East, "nothing turns between ticks");

        app.tick();
        assert_eq!(world(&app).snake().heading(), Heading::North, "latest request wins");

        app.handle_event(&key(KeyCode::Down));
        app.tick();
        assert_eq!(world(&app).snake().heading(), Heading::North, "reversal is ignored");
    }

    #[test]
    fn test_pause_stops_ticks() {
        let (mut app, _) = new_app();
        app.apply(Command::Pick(Mode::Normal));
        app.apply(Command::Toggle);
        assert!(matches!(app.screen(), Screen::Paused(_)));

        let before = world(&app).snapshot();
        app.tick();
        assert_eq!(world(&app).snapshot(), before);

        app.apply(Command::Toggle);
        app.tick();
        assert_ne!(world(&app).snapshot(), before);
    }

    #[test]
    fn test_game_over_and_play_again() {
        let (mut app, recorder) = new_app();
        let grid = GridConfig::default();
        app.screen = Screen::Playing(World::from_parts(
            grid,
            Mode::Advance,
            StdRng::seed_from_u64(0),
            Snake::new(grid, 4),
            Food {
                position: Point::new(220, 150),
            },
            vec![Hazard {
                position: Point::new(220, 160),
            }],
        ));

        app.tick();

        assert_eq!(app.phase(), Some(Phase::GameOver));
        assert_eq!(world(&app).score(), 1);
        assert_eq!(*recorder.0.borrow(), vec![Signal::FoodEaten, Signal::GameOver]);

        app.tick();
        assert_eq!(recorder.0.borrow().len(), 2, "no ticks after game over");

        app.apply(Command::Toggle);
        assert_eq!(app.phase(), Some(Phase::ModeSelect));
    }

    #[test]
    fn test_self_collision_through_the_app() {
        let (mut app, recorder) = new_app();
        let grid = GridConfig::default();
        let segments: VecDeque<Point> = [(100, 100), (120, 100), (120, 120), (100, 120), (80, 120)]
            .iter()
            .map(|&(x, y)| Point::new(x, y))
            .collect();
        app.screen = Screen::Playing(World::from_parts(
            grid,
            Mode::Normal,
            StdRng::seed_from_u64(0),
            Snake::from_segments(segments, Heading::South),
            Food {
                position: Point::new(300, 40),
            },
            Vec::new(),
        ));

        app.tick();
        assert_eq!(app.phase(), Some(Phase::GameOver));
        assert_eq!(*recorder.0.borrow(), vec![Signal::GameOver]);
    }

    #[test]
    fn test_quit_from_any_screen() {
        let (mut app, _) = new_app();
        app.handle_event(&key(KeyCode::Char('q')));
        assert!(app.should_exit());
        assert_eq!(app.phase(), None);

        let (mut app, _) = new_app();
        app.apply(Command::Pick(Mode::Normal));
        app.apply(Command::Quit);
        assert!(app.should_exit());

        app.tick();
        assert!(app.should_exit());
        assert_eq!(app.phase(), None);
    }
}
