//! wam-tui - Terminal UI for WA Manager
//!
//! Renders [`wam_app::AppState`] with ratatui, converts crossterm key events
//! into [`wam_app::InputKey`]s and drives the event loop.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod startup;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

pub use runner::run;
