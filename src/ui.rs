//! Terminal renderer. Reads snapshots only; every logical cell is two
//! terminal columns wide and one row tall.
use crate::app::Screen;
use crate::config::GridConfig;
use crate::geometry::{wrap, Point};
use crate::mode_select::{ModeSelector, Region};
use crate::world::{Phase, Snapshot};
use ratatui::{
    layout::Position,
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

const SNAKE_HEAD: &str = "😀";
const SNAKE_BODY: &str = "  ";
const DEAD_HEAD: &str = "××";
const FOOD: &str = "🍎";
const BOMB: &str = "💣";

/// Draws the whole screen and returns the arena rectangle, or `None` when
/// the terminal is too small to hold it.
pub fn draw(frame: &mut Frame, screen: &Screen, grid: GridConfig) -> Option<Rect> {
    let layout = Layout::default()
        .direction(layout::Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title + score
            Constraint::Min(0),    // Arena
        ])
        .split(frame.area());

    frame.render_widget(
        Paragraph::new(header(screen))
            .alignment(Alignment::Left)
            .block(Block::default().borders(Borders::ALL)),
        layout[0],
    );

    let Some(outer) = arena_frame(layout[1], grid) else {
        frame.render_widget(
            Paragraph::new(format!(
                "Terminal too small: need {}x{}",
                grid.columns() * 2 + 2,
                grid.rows() + 2 + 3
            ))
            .alignment(Alignment::Center),
            layout[1],
        );
        return None;
    };

    let block = Block::default().title(title(screen)).borders(Borders::ALL);
    let arena = block.inner(outer);
    frame.render_widget(block, outer);

    match screen {
        Screen::ModeSelect(selector) => {
            frame.render_widget(MenuView { selector, grid }, arena);
        }
        Screen::Playing(world) | Screen::Paused(world) => {
            frame.render_widget(ArenaView::new(&world.snapshot()), arena);
        }
        Screen::GameOver(world) => {
            let snapshot = world.snapshot();
            frame.render_widget(ArenaView::new(&snapshot), arena);

            let middle = Rect::new(arena.x, arena.y + arena.height / 2 - 1, arena.width, 3);
            frame.render_widget(
                Paragraph::new(format!(
                    "GAME OVER\nFinal Score: {}\nPress SPACE to play again",
                    snapshot.score
                ))
                .style(Style::default().fg(Color::Red).bold())
                .alignment(Alignment::Center),
                middle,
            );
        }
        Screen::Exit => {}
    }

    Some(arena)
}

/// Maps a terminal click to the logical point of the cell under it.
pub fn point_at(arena: Rect, grid: GridConfig, column: u16, row: u16) -> Option<Point> {
    if !arena.contains(Position::new(column, row)) {
        return None;
    }
    let point = Point::new(
        (column - arena.x) as i32 / 2 * grid.cell_size,
        (row - arena.y) as i32 * grid.cell_size,
    );
    grid.contains(point).then_some(point)
}

/// The bordered arena, centred in `area`.
fn arena_frame(area: Rect, grid: GridConfig) -> Option<Rect> {
    let width = (grid.columns() * 2 + 2) as u16;
    let height = (grid.rows() + 2) as u16;
    if area.width < width || area.height < height {
        return None;
    }
    Some(Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    ))
}

fn header(screen: &Screen) -> String {
    match screen {
        Screen::ModeSelect(_) => "HUNGRY SNAKE    Choose a mode".to_string(),
        Screen::Playing(world) | Screen::Paused(world) | Screen::GameOver(world) => format!(
            "HUNGRY SNAKE    Mode: {:?}    Score: {}",
            world.mode(),
            world.score()
        ),
        Screen::Exit => "HUNGRY SNAKE".to_string(),
    }
}

fn title(screen: &Screen) -> &'static str {
    match screen {
        Screen::ModeSelect(_) => "Click a mode",
        Screen::Playing(_) => "Playing",
        Screen::Paused(_) => "Paused. Press SPACE to continue",
        Screen::GameOver(_) => "Game over",
        Screen::Exit => "",
    }
}

/// Terminal cell for a logical point, rounded to the nearest grid cell.
///
/// The snake starts at y = 150 and so runs half a cell off the rows food and
/// bombs spawn on. Rounding puts an item half a cell below the head on the
/// head's own row, where truncation would draw it one row lower.
fn cell_position(area: Rect, grid: GridConfig, point: Point) -> Option<(u16, u16)> {
    if !grid.contains(point) {
        return None;
    }
    let half = grid.cell_size / 2;
    let column = wrap((point.x + half) / grid.cell_size, grid.columns());
    let row = wrap((point.y + half) / grid.cell_size, grid.rows());
    let x = area.x + (column * 2) as u16;
    let y = area.y + row as u16;
    (x + 1 < area.right() && y < area.bottom()).then_some((x, y))
}

struct MenuView<'a> {
    selector: &'a ModeSelector,
    grid: GridConfig,
}

impl MenuView<'_> {
    fn label(&self, area: Rect, buf: &mut Buffer, row: i32, text: &str, style: Style) {
        let y = area.y + (row / self.grid.cell_size) as u16;
        if y >= area.bottom() {
            return;
        }
        let x = area.x + area.width.saturating_sub(text.len() as u16) / 2;
        buf.set_string(x, y, text, style);
    }

    fn region_label(&self, area: Rect, buf: &mut Buffer, region: Region, text: &str) {
        self.label(area, buf, region.y, text, Style::default().fg(Color::Green).bold());
    }
}

impl Widget for MenuView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.label(
            area,
            buf,
            self.grid.height / 4,
            "Hungry Snake Game",
            Style::default().fg(Color::White).bold(),
        );
        self.region_label(area, buf, self.selector.normal_region(), "Normal");
        self.region_label(area, buf, self.selector.advance_region(), "Advance");
        self.label(
            area,
            buf,
            self.grid.height - self.grid.cell_size,
            "click a mode, or press 1 / 2",
            Style::default().fg(Color::DarkGray),
        );
    }
}

struct ArenaView<'a> {
    snapshot: &'a Snapshot,
}

impl<'a> ArenaView<'a> {
    fn new(snapshot: &'a Snapshot) -> Self {
        ArenaView { snapshot }
    }

    fn paint(&self, area: Rect, buf: &mut Buffer, point: Point, symbol: &str, style: Style) {
        if let Some((x, y)) = cell_position(area, self.snapshot.grid, point) {
            buf.set_string(x, y, symbol, style);
        }
    }
}

impl Widget for ArenaView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let snapshot = self.snapshot;

        for segment in snapshot.segments.iter().skip(1) {
            self.paint(area, buf, *segment, SNAKE_BODY, Style::default().bg(Color::Green));
        }

        for hazard in &snapshot.hazards {
            self.paint(area, buf, *hazard, BOMB, Style::default().fg(Color::Red));
        }

        self.paint(area, buf, snapshot.food, FOOD, Style::default().fg(Color::LightRed));

        if let Some(head) = snapshot.segments.first() {
            let (symbol, style) = match snapshot.phase {
                Phase::GameOver => (DEAD_HEAD, Style::default().fg(Color::Red).bold()),
                _ => (SNAKE_HEAD, Style::default().fg(Color::Yellow)),
            };
            self.paint(area, buf, *head, symbol, style);
        }
    }
}
