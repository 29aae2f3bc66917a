//! bikemap-tui - Terminal map surface for bikemap
//!
//! This crate provides the ratatui-based map view. It drives an [`Engine`]
//! from bikemap-app and adds terminal rendering, key polling, and widgets.
//!
//! [`Engine`]: bikemap_app::Engine

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod surface;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

// Re-export main entry points
pub use runner::run;
pub use surface::TerminalSurface;
