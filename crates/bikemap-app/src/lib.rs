//! bikemap-app - Map state and orchestration for bikemap
//!
//! This crate implements the TEA (The Elm Architecture) pattern for the map
//! view: a single [`AppState`] updated by [`handler::update`] in response to
//! [`Message`]s, with rendering reduced to a pure projection ([`MapFrame`])
//! handed to a [`MapSurface`]. It also owns the [`Engine`] shared by the TUI
//! and headless runners, configuration loading, and signal handling.

pub mod actions;
pub mod config;
pub mod engine;
pub mod handler;
pub mod input_key;
pub mod markers;
pub mod message;
pub mod process;
pub mod signals;
pub mod state;
pub mod surface;

// Re-export primary types
pub use actions::Services;
pub use engine::Engine;
pub use handler::{UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use markers::{MapFrame, Marker, MarkerKind, PieChart, PieSlice};
pub use message::{Message, ZoomDirection};
pub use state::{AppState, MessageLevel, MessageSource, StatusMessage};
pub use surface::MapSurface;
