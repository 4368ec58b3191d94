//! Shared geometry calculations for strokes
//!
//! This module contains pen and canvas constants plus the centroid math used
//! to recentre a drawing before it is rasterized.

use crate::config::OffsetRounding;
use crate::domain::{CanvasSize, Centroid, Drawing, Point};
use crate::error::{InkError, Result};

/// Pen geometry constants
pub mod pen {
    /// Default pen width in pixels
    pub const DEFAULT_WIDTH: f32 = 15.0;
    /// Thinnest selectable pen
    pub const MIN_WIDTH: f32 = 5.0;
    /// Thickest selectable pen
    pub const MAX_WIDTH: f32 = 50.0;
    /// Width change per spinner step
    pub const WIDTH_STEP: f32 = 5.0;
}

/// Canvas geometry constants
pub mod canvas {
    use std::num::NonZeroU32;

    use crate::domain::CanvasSize;

    /// Default drawing panel width
    pub const DEFAULT_WIDTH: u32 = 350;
    /// Default drawing panel height
    pub const DEFAULT_HEIGHT: u32 = 350;
    /// Largest canvas side accepted from a config file
    pub const MAX_SIDE: u32 = 8192;

    pub const DEFAULT_SIZE: CanvasSize = CanvasSize {
        width: NonZeroU32::new(DEFAULT_WIDTH).unwrap(),
        height: NonZeroU32::new(DEFAULT_HEIGHT).unwrap(),
    };
}

/// Center of mass of every point in the drawing
///
/// Returns `None` when the drawing has no points.
pub fn centroid(drawing: &Drawing) -> Option<Centroid> {
    let count = drawing.point_count();
    if count == 0 {
        return None;
    }

    let (sum_x, sum_y) = drawing
        .points()
        .fold((0.0_f64, 0.0_f64), |(sx, sy), p| {
            (sx + p.x as f64, sy + p.y as f64)
        });

    Some(Centroid {
        x: sum_x / count as f64,
        y: sum_y / count as f64,
    })
}

/// Offset that moves `centroid` onto the canvas center
#[inline]
pub fn center_offset(centroid: Centroid, size: CanvasSize) -> (f64, f64) {
    let (cx, cy) = size.center();
    (cx - centroid.x, cy - centroid.y)
}

/// Recentre a drawing so its center of mass sits on the canvas center
///
/// Every point becomes `(rounding(x + dx), rounding(y + dy))`. Stroke and
/// point order is preserved and the input is left untouched.
pub fn normalize_centroid(
    drawing: &Drawing,
    size: CanvasSize,
    rounding: OffsetRounding,
) -> Result<Drawing> {
    let centroid = centroid(drawing).ok_or(InkError::EmptyInput)?;
    let (dx, dy) = center_offset(centroid, size);

    log::debug!(
        "Centroid ({:.2}, {:.2}) of {} points, shifting by ({:.2}, {:.2})",
        centroid.x,
        centroid.y,
        drawing.point_count(),
        dx,
        dy
    );

    Ok(drawing.map_points(|p| {
        Point::new(
            rounding.apply(p.x as f64 + dx),
            rounding.apply(p.y as f64 + dy),
        )
    }))
}

/// Shortest distance from `(px, py)` to the segment `a`-`b`
#[cfg(test)]
pub(crate) fn distance_to_segment(px: f32, py: f32, a: Point, b: Point) -> f32 {
    let (ax, ay) = (a.x as f32, a.y as f32);
    let (bx, by) = (b.x as f32, b.y as f32);
    let dx = bx - ax;
    let dy = by - ay;
    let len_sq = dx * dx + dy * dy;

    let t = if len_sq == 0.0 {
        0.0
    } else {
        (((px - ax) * dx + (py - ay) * dy) / len_sq).clamp(0.0, 1.0)
    };

    let cx = ax + t * dx;
    let cy = ay + t * dy;
    ((px - cx).powi(2) + (py - cy).powi(2)).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Stroke;

    fn drawing(strokes: &[&[(i32, i32)]]) -> Drawing {
        Drawing::new(
            strokes
                .iter()
                .map(|s| Stroke::new(s.iter().map(|&p| p.into()).collect()))
                .collect(),
        )
    }

    fn size(w: u32, h: u32) -> CanvasSize {
        CanvasSize::new(w, h).unwrap()
    }

    #[test]
    fn test_centroid_of_empty_drawing() {
        assert!(centroid(&Drawing::default()).is_none());
        assert!(centroid(&drawing(&[&[], &[]])).is_none());
    }

    #[test]
    fn test_centroid_weights_every_point() {
        // Three points on the left, one on the right
        let d = drawing(&[&[(0, 0), (0, 0), (0, 0)], &[(8, 4)]]);
        let c = centroid(&d).unwrap();
        assert_eq!(c, Centroid { x: 2.0, y: 1.0 });
    }

    #[test]
    fn test_normalize_empty_is_error() {
        let result = normalize_centroid(&Drawing::default(), size(10, 10), OffsetRounding::Truncate);
        assert!(matches!(result, Err(InkError::EmptyInput)));
    }

    #[test]
    fn test_normalize_vertical_line() {
        let d = drawing(&[&[(10, 10), (10, 50)]]);
        let n = normalize_centroid(&d, size(350, 350), OffsetRounding::Truncate).unwrap();
        assert_eq!(n, drawing(&[&[(175, 155), (175, 195)]]));
    }

    #[test]
    fn test_normalize_preserves_shape_and_input() {
        let d = drawing(&[&[(1, 1), (4, 1)], &[(2, 9)]]);
        let before = d.clone();
        let n = normalize_centroid(&d, size(100, 60), OffsetRounding::HalfEven).unwrap();
        assert_eq!(d, before);
        assert_eq!(n.strokes.len(), 2);
        assert_eq!(n.strokes[0].len(), 2);
        assert_eq!(n.strokes[1].len(), 1);
    }

    #[test]
    fn test_truncation_toward_zero_for_negative_coordinates() {
        // Centroid 300 on a 100 canvas gives offset -250
        let d = drawing(&[&[(299, 299), (301, 301)]]);
        let n = normalize_centroid(&d, size(100, 100), OffsetRounding::Truncate).unwrap();
        assert_eq!(n, drawing(&[&[(49, 49), (51, 51)]]));

        // Half-pixel offsets: center 2.5, centroid 0 -> 0 + 2.5
        let d = drawing(&[&[(-1, -1), (1, 1)]]);
        let n = normalize_centroid(&d, size(5, 5), OffsetRounding::Truncate).unwrap();
        assert_eq!(n, drawing(&[&[(1, 1), (3, 3)]]));
        let n = normalize_centroid(&d, size(5, 5), OffsetRounding::HalfEven).unwrap();
        assert_eq!(n, drawing(&[&[(2, 2), (4, 4)]]));
        let n = normalize_centroid(&d, size(5, 5), OffsetRounding::HalfAwayFromZero).unwrap();
        assert_eq!(n, drawing(&[&[(2, 2), (4, 4)]]));
    }

    #[test]
    fn test_normalized_centroid_lands_on_center() {
        let cases: Vec<Drawing> = vec![
            drawing(&[&[(10, 10), (10, 50)]]),
            drawing(&[&[(3, 7), (90, 12), (44, 300)], &[(200, 1)]]),
            drawing(&[&[(340, 340)]]),
            drawing(&[&[(0, 0), (1, 2), (3, 5), (8, 13), (21, 34)], &[(55, 89), (144, 233)]]),
        ];
        let canvas = size(350, 350);
        let (cx, cy) = canvas.center();

        for rounding in [
            OffsetRounding::Truncate,
            OffsetRounding::HalfEven,
            OffsetRounding::HalfAwayFromZero,
        ] {
            for d in &cases {
                let n = normalize_centroid(d, canvas, rounding).unwrap();
                let c = centroid(&n).unwrap();
                assert!((c.x - cx).abs() <= 1.0, "{:?} x off: {}", rounding, c.x);
                assert!((c.y - cy).abs() <= 1.0, "{:?} y off: {}", rounding, c.y);
            }
        }
    }

    #[test]
    fn test_distance_to_segment() {
        let a = Point::new(0, 0);
        let b = Point::new(10, 0);
        assert_eq!(distance_to_segment(5.0, 3.0, a, b), 3.0);
        assert_eq!(distance_to_segment(-4.0, 3.0, a, b), 5.0);
        assert_eq!(distance_to_segment(13.0, 4.0, a, b), 5.0);
        assert_eq!(distance_to_segment(3.0, 4.0, a, a), 5.0);
    }
}
