//! Pen configuration passed to the renderer per call

use crate::render::geometry::pen;

/// Immutable pen used to rasterize strokes
///
/// The pen always draws opaque black with round caps; only the width varies.
/// Widths are kept within [`pen::MIN_WIDTH`, `pen::MAX_WIDTH`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PenStyle {
    width: f32,
}

impl PenStyle {
    /// Create a pen, clamping the width into the allowed range
    pub fn new(width: f32) -> Self {
        let width = if width.is_finite() {
            width.clamp(pen::MIN_WIDTH, pen::MAX_WIDTH)
        } else {
            pen::DEFAULT_WIDTH
        };
        Self { width }
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    /// Next thicker pen, one spinner step up
    pub fn increase(self) -> Self {
        Self::new(self.width + pen::WIDTH_STEP)
    }

    /// Next thinner pen, one spinner step down
    pub fn decrease(self) -> Self {
        Self::new(self.width - pen::WIDTH_STEP)
    }
}

impl Default for PenStyle {
    fn default() -> Self {
        Self {
            width: pen::DEFAULT_WIDTH,
        }
    }
}
