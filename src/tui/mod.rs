//! TUI (Text User Interface) module for termtype
//!
//! Terminal-based player built on ratatui/crossterm.

pub mod app;
pub mod player_app;
pub mod status_footer;
pub mod ui;

pub use app::App;
pub use player_app::{action_for, PlayerAction, PlayerApp, PlayerSettings, PlayerState};
