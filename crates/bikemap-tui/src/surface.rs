//! Terminal implementation of [`MapSurface`]

use bikemap_app::{MapFrame, MapSurface};
use bikemap_core::prelude::*;
use ratatui::backend::Backend;
use ratatui::Terminal;

use crate::render;

/// Draws map frames into a ratatui terminal
pub struct TerminalSurface<B: Backend> {
    terminal: Terminal<B>,
}

impl<B: Backend> TerminalSurface<B> {
    pub fn new(terminal: Terminal<B>) -> Self {
        Self { terminal }
    }

    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }
}

impl<B: Backend> MapSurface for TerminalSurface<B> {
    fn present(&mut self, frame: &MapFrame) -> Result<()> {
        self.terminal
            .draw(|f| render::view(f, frame))
            .map_err(|e| Error::terminal(e.to_string()))?;
        Ok(())
    }
}
