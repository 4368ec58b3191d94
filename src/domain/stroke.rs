//! Stroke and drawing value types
//!
//! A drawing is the record of what the user drew; any bitmap is derived from
//! it on demand.

use serde::{Deserialize, Serialize};

use super::geometry::Point;

/// One continuous drag, in the order the points were sampled
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Stroke {
    pub points: Vec<Point>,
}

impl Stroke {
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Whether the stroke has at least one segment to draw
    pub fn is_drawable(&self) -> bool {
        self.points.len() >= 2
    }

    pub fn push(&mut self, point: Point) {
        self.points.push(point);
    }
}

impl From<Vec<Point>> for Stroke {
    fn from(points: Vec<Point>) -> Self {
        Self { points }
    }
}

/// All strokes captured since the last clear, in draw order
///
/// Serialized as `[[[x, y], ...], ...]`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Drawing {
    pub strokes: Vec<Stroke>,
}

impl Drawing {
    pub fn new(strokes: Vec<Stroke>) -> Self {
        Self { strokes }
    }

    pub fn strokes(&self) -> &[Stroke] {
        &self.strokes
    }

    pub fn push(&mut self, stroke: Stroke) {
        self.strokes.push(stroke);
    }

    pub fn clear(&mut self) {
        self.strokes.clear();
    }

    /// Number of points across every stroke
    pub fn point_count(&self) -> usize {
        self.strokes.iter().map(Stroke::len).sum()
    }

    /// True when there is nothing to recognize
    pub fn is_empty(&self) -> bool {
        self.point_count() == 0
    }

    /// Iterate over every point of every stroke in draw order
    pub fn points(&self) -> impl Iterator<Item = &Point> {
        self.strokes.iter().flat_map(|s| s.points.iter())
    }

    /// Build a drawing with the same shape where every point is mapped by `f`
    pub fn map_points(&self, mut f: impl FnMut(Point) -> Point) -> Drawing {
        Drawing {
            strokes: self
                .strokes
                .iter()
                .map(|s| Stroke::new(s.points.iter().map(|&p| f(p)).collect()))
                .collect(),
        }
    }

    /// Parse a drawing from its JSON interchange form
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Serialize the drawing to its JSON interchange form
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl From<Vec<Stroke>> for Drawing {
    fn from(strokes: Vec<Stroke>) -> Self {
        Self { strokes }
    }
}
