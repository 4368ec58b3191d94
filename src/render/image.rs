//! Image rendering for strokes using tiny-skia
//!
//! Every call rasterizes the drawing onto a fresh white canvas, so the bitmap
//! is always a pure function of the stroke data.

use std::io;
use std::path::Path;

use image::RgbaImage;
use tiny_skia::{Color, LineCap, LineJoin, Paint, PathBuilder, Pixmap, Stroke, Transform};

use crate::domain::{CanvasSize, Drawing, PenStyle};
use crate::error::{InkError, Result};

/// Rasterizes drawings onto a fixed-size canvas
#[derive(Clone, Copy, Debug)]
pub struct StrokeRenderer {
    size: CanvasSize,
}

impl StrokeRenderer {
    pub fn new(size: CanvasSize) -> Self {
        Self { size }
    }

    pub fn size(&self) -> CanvasSize {
        self.size
    }

    /// Draw every stroke of `drawing` in order with `pen`
    ///
    /// Strokes with fewer than two points leave no mark.
    pub fn render(&self, drawing: &Drawing, pen: PenStyle) -> Result<RgbaImage> {
        let (w, h) = (self.size.width(), self.size.height());
        let mut pixmap = Pixmap::new(w, h).ok_or(InkError::InvalidCanvas {
            width: w,
            height: h,
        })?;
        pixmap.fill(Color::WHITE);

        let mut paint = Paint::default();
        paint.set_color(Color::BLACK);
        paint.anti_alias = true;

        let stroke = Stroke {
            width: pen.width(),
            line_cap: LineCap::Round,
            line_join: LineJoin::Round,
            ..Default::default()
        };

        let mut drawn = 0usize;
        for s in drawing.strokes() {
            let Some(path) = build_stroke_path(&s.points) else {
                continue;
            };
            pixmap.stroke_path(&path, &paint, &stroke, Transform::identity(), None);
            drawn += 1;
        }

        log::debug!(
            "Rendered {} of {} strokes onto {}x{} canvas (pen {})",
            drawn,
            drawing.strokes().len(),
            w,
            h,
            pen.width()
        );

        // Opaque background, so premultiplied and straight RGBA agree
        let mut img = RgbaImage::new(w, h);
        img.copy_from_slice(pixmap.data());
        Ok(img)
    }
}

/// Build a polyline path through the points, or `None` for degenerate strokes
fn build_stroke_path(points: &[crate::domain::Point]) -> Option<tiny_skia::Path> {
    let [first, rest @ ..] = points else {
        return None;
    };
    if rest.is_empty() {
        return None;
    }

    let mut pb = PathBuilder::new();
    pb.move_to(first.x as f32, first.y as f32);
    for p in rest {
        pb.line_to(p.x as f32, p.y as f32);
    }
    pb.finish()
}

/// Write an RGBA image as an 8-bit PNG
pub fn write_png<W: io::Write>(w: W, image: &RgbaImage) -> std::result::Result<(), png::EncodingError> {
    let mut encoder = png::Encoder::new(w, image.width(), image.height());
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);
    let mut writer = encoder.write_header()?;
    writer.write_image_data(image.as_raw())
}

/// Save an image to `path` as PNG
pub fn save_png(image: &RgbaImage, path: &Path) -> Result<()> {
    let file = std::fs::File::create(path)?;
    write_png(io::BufWriter::new(file), image)?;
    log::debug!(
        "Saved {}x{} image to {}",
        image.width(),
        image.height(),
        path.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Point, Stroke};
    use crate::render::geometry::distance_to_segment;

    fn renderer(w: u32, h: u32) -> StrokeRenderer {
        StrokeRenderer::new(CanvasSize::new(w, h).unwrap())
    }

    fn is_white(px: &image::Rgba<u8>) -> bool {
        px.0 == [255, 255, 255, 255]
    }

    #[test]
    fn test_empty_drawing_is_white() {
        let img = renderer(40, 30).render(&Drawing::default(), PenStyle::default()).unwrap();
        assert_eq!(img.dimensions(), (40, 30));
        assert!(img.pixels().all(is_white));
    }

    #[test]
    fn test_degenerate_strokes_leave_no_mark() {
        let drawing = Drawing::new(vec![
            Stroke::default(),
            Stroke::new(vec![Point::new(20, 20)]),
        ]);
        let img = renderer(40, 40).render(&drawing, PenStyle::new(20.0)).unwrap();
        assert!(img.pixels().all(is_white));
    }

    #[test]
    fn test_segment_ink_stays_near_line() {
        let a = Point::new(100, 100);
        let b = Point::new(200, 140);
        let pen = PenStyle::new(10.0);
        let drawing = Drawing::new(vec![Stroke::new(vec![a, b])]);
        let img = renderer(350, 350).render(&drawing, pen).unwrap();

        // Ink is present and fully black on the line itself
        assert!(!img.pixels().all(is_white));
        assert_eq!(img.get_pixel(150, 120).0, [0, 0, 0, 255]);

        // One pixel of anti-aliasing slack beyond the round-capped pen radius
        let reach = pen.width() / 2.0 + 1.5;
        for (x, y, px) in img.enumerate_pixels() {
            let d = distance_to_segment(x as f32 + 0.5, y as f32 + 0.5, a, b);
            if d > reach {
                assert!(is_white(px), "ink at ({}, {}) distance {}", x, y, d);
            }
        }
    }

    #[test]
    fn test_pixels_are_opaque_gray() {
        let drawing = Drawing::new(vec![Stroke::new(vec![
            Point::new(5, 5),
            Point::new(30, 17),
            Point::new(12, 33),
        ])]);
        let img = renderer(40, 40).render(&drawing, PenStyle::new(7.0)).unwrap();
        for px in img.pixels() {
            assert_eq!(px[3], 255);
            assert_eq!(px[0], px[1]);
            assert_eq!(px[1], px[2]);
        }
    }

    #[test]
    fn test_points_off_canvas_are_clipped() {
        let drawing = Drawing::new(vec![Stroke::new(vec![
            Point::new(-50, 10),
            Point::new(500, 10),
        ])]);
        let img = renderer(20, 20).render(&drawing, PenStyle::new(5.0)).unwrap();
        assert_eq!(img.get_pixel(10, 10).0, [0, 0, 0, 255]);
        assert!(is_white(img.get_pixel(10, 19)));
    }

    #[test]
    fn test_save_png_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("canvas.png");
        let drawing = Drawing::new(vec![Stroke::new(vec![Point::new(2, 2), Point::new(14, 14)])]);
        let img = renderer(16, 16).render(&drawing, PenStyle::new(5.0)).unwrap();

        save_png(&img, &path).unwrap();

        let decoded = image::open(&path).unwrap().to_rgba8();
        assert_eq!(decoded, img);
    }
}
