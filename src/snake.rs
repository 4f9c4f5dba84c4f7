use crate::config::GridConfig;
use crate::geometry::{wrap, Delta, Point};
use rand::Rng;
use std::collections::VecDeque;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Heading {
    North,
    East,
    South,
    West,
}

impl Heading {
    pub fn opposite(&self) -> Heading {
        match self {
            Heading::North => Heading::South,
            Heading::South => Heading::North,
            Heading::East => Heading::West,
            Heading::West => Heading::East,
        }
    }

    /// Only the four unit deltas name a heading; anything else is rejected.
    pub fn from_delta(dx: i32, dy: i32) -> Option<Heading> {
        match (dx, dy) {
            (0, -1) => Some(Heading::North),
            (0, 1) => Some(Heading::South),
            (1, 0) => Some(Heading::East),
            (-1, 0) => Some(Heading::West),
            _ => None,
        }
    }
}

impl From<Heading> for Delta {
    fn from(heading: Heading) -> Self {
        match heading {
            Heading::North => Delta { x: 0, y: -1 },
            Heading::South => Delta { x: 0, y: 1 },
            Heading::East => Delta { x: 1, y: 0 },
            Heading::West => Delta { x: -1, y: 0 },
        }
    }
}

/// Ordered segments, head first.
#[derive(Clone, Debug, PartialEq)]
pub struct Snake {
    segments: VecDeque<Point>,
    heading: Heading,
}

impl Snake {
    /// A horizontal line centred on the grid, heading east.
    pub fn new(grid: GridConfig, length: usize) -> Self {
        let center = grid.center();
        let segments = (0..length as i32)
            .map(|i| Point::new(wrap(center.x - i * grid.cell_size, grid.width), center.y))
            .collect();
        Snake::from_segments(segments, Heading::East)
    }

    pub fn from_segments(segments: VecDeque<Point>, heading: Heading) -> Self {
        assert!(!segments.is_empty(), "a snake needs at least one segment");
        Snake { segments, heading }
    }

    pub fn head(&self) -> Point {
        *self
            .segments
            .front()
            .expect("snake lost all of its segments")
    }

    /// Every segment except the head.
    pub fn body(&self) -> impl Iterator<Item = &Point> + '_ {
        self.segments.iter().skip(1)
    }

    pub fn segments(&self) -> &VecDeque<Point> {
        &self.segments
    }

    pub fn heading(&self) -> Heading {
        self.heading
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Always false for a live snake.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Ignores a request to turn straight back on itself.
    pub fn change_heading(&mut self, heading: Heading) {
        if heading != self.heading.opposite() {
            self.heading = heading;
        }
    }

    /// One cell forward; the length does not change.
    pub fn slither(&mut self, grid: GridConfig) {
        let step = Delta::from(self.heading).scaled(grid.cell_size);
        let new_head = self.head().wrapped_add(step, grid.width, grid.height);
        self.segments.pop_back();
        self.segments.push_front(new_head);
    }

    /// Appends a segment one cell behind the tail, against the current heading.
    pub fn grow(&mut self, grid: GridConfig) {
        let back = Delta::from(self.heading).negated().scaled(grid.cell_size);
        let tail = *self
            .segments
            .back()
            .expect("snake lost all of its segments");
        self.segments
            .push_back(tail.wrapped_add(back, grid.width, grid.height));
    }

    /// Exact match only; being close to the body is not a hit.
    pub fn hits_itself(&self) -> bool {
        let head = self.head();
        self.body().any(|segment| *segment == head)
    }
}

/// A cell-aligned point at least one cell away from every edge.
pub fn inset_point(grid: GridConfig, rng: &mut impl Rng) -> Point {
    let cell = grid.cell_size;
    Point::new(
        rng.gen_range(1..=grid.columns() - 2) * cell,
        rng.gen_range(1..=grid.rows() - 2) * cell,
    )
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Food {
    pub position: Point,
}

impl Food {
    pub fn spawn(grid: GridConfig, rng: &mut impl Rng) -> Self {
        Food {
            position: inset_point(grid, rng),
        }
    }

    pub fn respawn(&mut self, grid: GridConfig, rng: &mut impl Rng) {
        self.position = inset_point(grid, rng);
    }
}

/// A bomb. Placed once and never moved.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hazard {
    pub position: Point,
}

impl Hazard {
    pub fn spawn(grid: GridConfig, rng: &mut impl Rng) -> Self {
        Hazard {
            position: inset_point(grid, rng),
        }
    }
}
