//! Freehand digit strokes to classifier-ready tensors
//!
//! Strokes are captured as plain point lists, recentred on their center of
//! mass, rasterized with a round black pen and shrunk to a small grayscale
//! tensor for an external digit classifier.

pub mod capture;
pub mod classifier;
pub mod config;
pub mod domain;
pub mod error;
pub mod pipeline;
pub mod render;
pub mod tensor;

pub use capture::stroke::{PointerEvent, StrokeCapture};
pub use classifier::{Classifier, Prediction};
pub use config::{InkConfig, OffsetRounding, ResizeFilter};
pub use domain::{CanvasSize, Drawing, PenStyle, Point, Stroke};
pub use error::{InkError, Result};
pub use pipeline::{Pipeline, Recognition, recognize};
pub use render::image::StrokeRenderer;
pub use tensor::{Tensor, TensorExtractor};
