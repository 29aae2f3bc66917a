//! Configuration file parsing for bikemap
//!
//! A single `config.toml` under the platform config directory. Every field
//! is optional.

pub mod settings;
pub mod types;

pub use settings::{default_config_path, init_config_file, load_settings};
pub use types::*;
