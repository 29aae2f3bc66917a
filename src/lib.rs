//! bikemap Library
//!
//! A terminal map of metro stations and live YouBike availability.

// Module declarations
pub mod headless;

// Re-export main entry points
pub use bikemap_tui::run;
pub use headless::runner::{run_headless, run_headless_with};
