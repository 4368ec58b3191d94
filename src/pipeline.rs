//! Stroke-to-tensor pipeline
//!
//! Normalize -> render -> extract, with a fresh canvas per call.

use image::RgbaImage;

use crate::classifier::{Classifier, Prediction};
use crate::config::{InkConfig, OffsetRounding};
use crate::domain::{CanvasSize, Drawing, PenStyle};
use crate::error::{InkError, Result};
use crate::render::geometry::{self, canvas};
use crate::render::image::StrokeRenderer;
use crate::tensor::{Tensor, TensorExtractor};

/// Every intermediate product of one recognition request
#[derive(Clone, Debug)]
pub struct Recognition {
    /// Drawing after centroid normalization
    pub normalized: Drawing,
    /// Full-size rendered canvas
    pub canvas: RgbaImage,
    /// Canvas downsampled to tensor resolution
    pub downsampled: RgbaImage,
    pub tensor: Tensor,
}

/// Composition root turning drawings into classifier input
#[derive(Clone, Copy, Debug)]
pub struct Pipeline {
    rounding: OffsetRounding,
    renderer: StrokeRenderer,
    extractor: TensorExtractor,
}

impl Pipeline {
    pub fn new(size: CanvasSize, rounding: OffsetRounding, extractor: TensorExtractor) -> Self {
        Self {
            rounding,
            renderer: StrokeRenderer::new(size),
            extractor,
        }
    }

    /// Build a pipeline from persisted settings
    pub fn from_config(config: &InkConfig) -> Self {
        Self::new(
            config.canvas_size(),
            config.rounding,
            TensorExtractor::new(
                config.tensor_width,
                config.tensor_height,
                config.resize_filter,
            ),
        )
    }

    pub fn canvas_size(&self) -> CanvasSize {
        self.renderer.size()
    }

    pub fn extractor(&self) -> &TensorExtractor {
        &self.extractor
    }

    /// Turn a drawing into the classifier's input tensor
    pub fn recognize(&self, drawing: &Drawing, pen: PenStyle) -> Result<Tensor> {
        Ok(self.recognize_detailed(drawing, pen)?.tensor)
    }

    /// Like [`Pipeline::recognize`], keeping each stage's output
    pub fn recognize_detailed(&self, drawing: &Drawing, pen: PenStyle) -> Result<Recognition> {
        if drawing.is_empty() {
            return Err(InkError::EmptyInput);
        }

        let normalized = geometry::normalize_centroid(drawing, self.canvas_size(), self.rounding)?;
        let canvas = self.renderer.render(&normalized, pen)?;
        let downsampled = self.extractor.resize(&canvas);
        let tensor = crate::tensor::tensor_from_image(&downsampled);

        log::debug!(
            "Recognized {} strokes into a {}x{} tensor",
            drawing.strokes().len(),
            tensor.width,
            tensor.height
        );

        Ok(Recognition {
            normalized,
            canvas,
            downsampled,
            tensor,
        })
    }

    /// Recognize and hand the tensor to `classifier`
    pub fn classify<C: Classifier>(
        &self,
        drawing: &Drawing,
        pen: PenStyle,
        classifier: &C,
    ) -> Result<Prediction> {
        let tensor = self.recognize(drawing, pen)?;
        Ok(classifier.forward(&tensor))
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new(
            canvas::DEFAULT_SIZE,
            OffsetRounding::default(),
            TensorExtractor::default(),
        )
    }
}

/// Run the default pipeline (350x350 canvas, 28x28 tensor)
pub fn recognize(drawing: &Drawing, pen: PenStyle) -> Result<Tensor> {
    Pipeline::default().recognize(drawing, pen)
}
