use crate::config::GridConfig;
use crate::geometry::Point;
use log::info;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    /// No bombs.
    Normal,
    /// A handful of bombs that end the game on contact.
    Advance,
}

/// Axis-aligned screen rectangle in logical pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Region {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Region {
    pub fn contains(&self, point: Point) -> bool {
        (self.x..self.x + self.width).contains(&point.x)
            && (self.y..self.y + self.height).contains(&point.y)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Selection {
    Selecting,
    Selected(Mode),
}

/// Pre-game screen. Waits for a single click, then stays on its choice.
#[derive(Clone, Debug)]
pub struct ModeSelector {
    selection: Selection,
    normal: Region,
    advance: Region,
}

impl ModeSelector {
    pub fn new(grid: GridConfig) -> Self {
        let center = grid.center();
        ModeSelector {
            selection: Selection::Selecting,
            normal: Region {
                x: center.x - 60,
                y: center.y,
                width: 120,
                height: 30,
            },
            advance: Region {
                x: center.x - 60,
                y: center.y + 30,
                width: 120,
                height: 30,
            },
        }
    }

    /// A click inside the Advance label picks Advance; anywhere else picks Normal.
    pub fn click(&mut self, point: Point) -> Mode {
        let mode = if self.advance.contains(point) {
            Mode::Advance
        } else {
            Mode::Normal
        };
        self.choose(mode)
    }

    /// Keyboard shortcut for the same choice. Later calls keep the first pick.
    pub fn choose(&mut self, mode: Mode) -> Mode {
        match self.selection {
            Selection::Selected(mode) => mode,
            Selection::Selecting => {
                info!("Selected {:?} mode", mode);
                self.selection = Selection::Selected(mode);
                mode
            }
        }
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn selected(&self) -> Option<Mode> {
        match self.selection {
            Selection::Selected(mode) => Some(mode),
            Selection::Selecting => None,
        }
    }

    pub fn normal_region(&self) -> Region {
        self.normal
    }

    pub fn advance_region(&self) -> Region {
        self.advance
    }
}
