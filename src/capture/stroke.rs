//! Freehand stroke capture
//!
//! Accumulates pointer samples into strokes. Capture is single-pointer: a
//! press while a stroke is already open closes that stroke first, so no
//! samples are lost or merged across gestures.

use crate::domain::{Drawing, Point, Stroke};

/// A pointer event in canvas pixel coordinates
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEvent {
    /// Button pressed; starts a stroke
    Press(Point),
    /// Pointer moved; extends the open stroke, if any
    Move(Point),
    /// Button released; closes the open stroke
    Release,
}

/// Builds a [`Drawing`] from drag gestures
#[derive(Clone, Debug, Default)]
pub struct StrokeCapture {
    drawing: Drawing,
    current: Option<Stroke>,
}

impl StrokeCapture {
    pub fn new() -> Self {
        Self::default()
    }

    /// Dispatch a pointer event to begin/extend/end
    pub fn handle(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Press(p) => self.begin(p),
            PointerEvent::Move(p) => self.extend(p),
            PointerEvent::Release => self.end(),
        }
    }

    /// Start a new stroke at `point`
    pub fn begin(&mut self, point: Point) {
        if self.current.is_some() {
            log::debug!("Stroke started while another was open, closing the previous one");
            self.end();
        }
        self.current = Some(Stroke::new(vec![point]));
    }

    /// Append `point` to the open stroke
    pub fn extend(&mut self, point: Point) {
        if let Some(stroke) = &mut self.current {
            stroke.push(point);
        }
    }

    /// Close the open stroke and add it to the drawing
    pub fn end(&mut self) {
        if let Some(stroke) = self.current.take() {
            log::debug!(
                "Stroke {} finished with {} points",
                self.drawing.strokes().len(),
                stroke.len()
            );
            self.drawing.push(stroke);
        }
    }

    /// Forget every stroke, including one in progress
    pub fn clear(&mut self) {
        self.drawing.clear();
        self.current = None;
    }

    /// Completed strokes
    pub fn drawing(&self) -> &Drawing {
        &self.drawing
    }

    /// The stroke being drawn right now
    pub fn current(&self) -> Option<&Stroke> {
        self.current.as_ref()
    }

    pub fn is_capturing(&self) -> bool {
        self.current.is_some()
    }

    /// Completed strokes plus the open one, for live preview
    pub fn snapshot(&self) -> Drawing {
        let mut drawing = self.drawing.clone();
        if let Some(stroke) = &self.current {
            drawing.push(stroke.clone());
        }
        drawing
    }
}
