//! Hard-coded game configuration.
use crate::geometry::Point;
use std::ops::RangeInclusive;
use std::time::Duration;

/// Arena width in logical pixels
pub const GRID_WIDTH: i32 = 400;

/// Arena height in logical pixels
pub const GRID_HEIGHT: i32 = 300;

/// Size of one cell; the snake moves one cell per tick
pub const CELL_SIZE: i32 = 20;

/// Time between simulation steps (5 steps per second)
pub const TICK_RATE: Duration = Duration::from_millis(200);

pub const INITIAL_SNAKE_LENGTH: usize = 4;

/// How many bombs an Advance session starts with
pub const HAZARD_COUNT: RangeInclusive<usize> = 3..=5;

pub const LOG_FILE: &str = "hungry_snake.log";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridConfig {
    pub width: i32,
    pub height: i32,
    pub cell_size: i32,
}

impl Default for GridConfig {
    fn default() -> Self {
        GridConfig {
            width: GRID_WIDTH,
            height: GRID_HEIGHT,
            cell_size: CELL_SIZE,
        }
    }
}

impl GridConfig {
    pub fn new(width: i32, height: i32, cell_size: i32) -> Self {
        assert!(
            cell_size > 0 && width >= cell_size * 3 && height >= cell_size * 3,
            "grid {}x{} cannot hold cells of size {}",
            width,
            height,
            cell_size
        );
        GridConfig {
            width,
            height,
            cell_size,
        }
    }

    /// Number of cells across.
    pub fn columns(&self) -> i32 {
        self.width / self.cell_size
    }

    /// Number of cells down.
    pub fn rows(&self) -> i32 {
        self.height / self.cell_size
    }

    pub fn center(&self) -> Point {
        Point::new(self.width / 2, self.height / 2)
    }

    pub fn contains(&self, point: Point) -> bool {
        (0..self.width).contains(&point.x) && (0..self.height).contains(&point.y)
    }
}
