//! Map surface capability

use bikemap_core::Result;

use crate::markers::MapFrame;

/// Something that can draw a [`MapFrame`]: the terminal canvas, the headless
/// NDJSON printer, or a test mock.
#[cfg_attr(test, mockall::automock)]
pub trait MapSurface {
    fn present(&mut self, frame: &MapFrame) -> Result<()>;
}
