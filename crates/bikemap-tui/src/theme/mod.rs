//! Theme for the terminal map.
//!
//! - `palette` - Raw color constants and hex parsing
//! - `styles` - Semantic style builders

pub mod palette;
pub mod styles;

/// Braille spinner frames, advanced by the tick counter
pub const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Spinner frame for `tick`
pub fn spinner(tick: u64) -> &'static str {
    SPINNER_FRAMES[(tick % SPINNER_FRAMES.len() as u64) as usize]
}
