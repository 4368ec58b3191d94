//! Grayscale tensor extraction
//!
//! Shrinks a rendered canvas to classifier resolution and turns each pixel
//! into an activation in [0.01, 1.0]: white paper maps to 0.01, black ink to
//! 1.0. Pixel order and the activation formula form the classifier's input
//! contract.

use image::RgbaImage;
use serde::{Deserialize, Serialize};

use crate::config::ResizeFilter;

/// Default tensor side length (28x28 = 784 values)
pub const DEFAULT_SIDE: u32 = 28;

/// Largest tensor side accepted from a config file
pub const MAX_SIDE: u32 = 1024;

/// Activation for a gray level in 0..=255
#[inline]
pub fn activation(intensity: f32) -> f32 {
    ((255.0 - intensity) / 255.0) * 0.99 + 0.01
}

/// Unweighted channel mean of a pixel
#[inline]
pub fn intensity(px: &image::Rgba<u8>) -> f32 {
    (px[0] as u32 + px[1] as u32 + px[2] as u32) as f32 / 3.0
}

/// Row-major activations of a downsampled image
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Tensor {
    pub width: u32,
    pub height: u32,
    pub values: Vec<f32>,
}

impl Tensor {
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn values(&self) -> &[f32] {
        &self.values
    }

    /// Value at column `x`, row `y`
    pub fn get(&self, x: u32, y: u32) -> Option<f32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.values.get((y * self.width + x) as usize).copied()
    }

    pub fn into_vec(self) -> Vec<f32> {
        self.values
    }
}

/// Converts rendered canvases into fixed-size tensors
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TensorExtractor {
    width: u32,
    height: u32,
    filter: ResizeFilter,
}

impl TensorExtractor {
    /// Extractor producing `width` x `height` tensors
    ///
    /// # Panics
    /// If either dimension is zero.
    pub fn new(width: u32, height: u32, filter: ResizeFilter) -> Self {
        assert!(
            width > 0 && height > 0,
            "tensor resolution must be positive, got {}x{}",
            width,
            height
        );
        Self {
            width,
            height,
            filter,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Stretch `img` to exactly the tensor resolution
    ///
    /// Sampling near the border clamps to the edge pixels, so the margin of a
    /// white canvas stays white.
    pub fn resize(&self, img: &RgbaImage) -> RgbaImage {
        image::imageops::resize(img, self.width, self.height, self.filter.into())
    }

    /// Resize and convert in one step
    pub fn extract(&self, img: &RgbaImage) -> Tensor {
        let small = self.resize(img);
        log::debug!(
            "Downsampled {}x{} canvas to {}x{}",
            img.width(),
            img.height(),
            small.width(),
            small.height()
        );
        tensor_from_image(&small)
    }
}

impl Default for TensorExtractor {
    fn default() -> Self {
        Self::new(DEFAULT_SIDE, DEFAULT_SIDE, ResizeFilter::default())
    }
}

/// Convert every pixel of `img` to an activation, row by row
pub fn tensor_from_image(img: &RgbaImage) -> Tensor {
    let (w, h) = img.dimensions();
    let mut values = Vec::with_capacity((w * h) as usize);
    for y in 0..h {
        for x in 0..w {
            values.push(activation(intensity(img.get_pixel(x, y))));
        }
    }
    Tensor {
        width: w,
        height: h,
        values,
    }
}
