//! # zipline-tui - Terminal UI
//!
//! The ratatui-based view layer. Widgets are pure projections of
//! [`zipline_app::AppState`]; the runner owns the terminal, the input
//! thread, and the message pump.

pub mod event;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

// Re-export main entry point
pub use runner::run;
