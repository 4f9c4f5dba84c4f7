//! Hungry Snake: a snake on a wrap-around grid that grows by eating food and
//! dies on hitting itself or, in Advance mode, a bomb.
//!
//! - `geometry`, `snake`, `world` and `mode_select` are the deterministic core
//! - `app`, `ui` and `feedback` drive it from a terminal

pub mod app;
pub mod config;
pub mod feedback;
pub mod geometry;
pub mod mode_select;
pub mod snake;
pub mod ui;
pub mod world;
