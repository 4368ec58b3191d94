//! Configuration persistence for inktensor settings

use std::path::{Path, PathBuf};

use image::imageops::FilterType;
use serde::{Deserialize, Serialize};

use crate::domain::{CanvasSize, PenStyle};
use crate::error::Result;
use crate::render::geometry::{canvas, pen};
use crate::tensor;

/// How a recentred coordinate is snapped back onto the pixel grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OffsetRounding {
    /// Drop the fractional part (toward zero)
    #[default]
    Truncate,
    /// Nearest integer, ties to even
    HalfEven,
    /// Nearest integer, ties away from zero
    HalfAwayFromZero,
}

impl OffsetRounding {
    /// Snap a coordinate to an integer pixel
    pub fn apply(self, value: f64) -> i32 {
        let snapped = match self {
            OffsetRounding::Truncate => value.trunc(),
            OffsetRounding::HalfEven => value.round_ties_even(),
            OffsetRounding::HalfAwayFromZero => value.round(),
        };
        snapped as i32
    }
}

/// Interpolation used when shrinking the canvas to tensor resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ResizeFilter {
    /// Bicubic (Catmull-Rom)
    #[default]
    CatmullRom,
    Gaussian,
    Lanczos3,
    Triangle,
}

impl From<ResizeFilter> for FilterType {
    fn from(f: ResizeFilter) -> Self {
        match f {
            ResizeFilter::CatmullRom => FilterType::CatmullRom,
            ResizeFilter::Gaussian => FilterType::Gaussian,
            ResizeFilter::Lanczos3 => FilterType::Lanczos3,
            ResizeFilter::Triangle => FilterType::Triangle,
        }
    }
}

/// Application configuration persisted between sessions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InkConfig {
    /// Drawing canvas width in pixels
    #[serde(default = "default_canvas_width")]
    pub canvas_width: u32,
    /// Drawing canvas height in pixels
    #[serde(default = "default_canvas_height")]
    pub canvas_height: u32,
    /// Pen width in pixels (5-50)
    #[serde(default = "default_pen_width")]
    pub pen_width: f32,
    /// Tensor columns
    #[serde(default = "default_tensor_side")]
    pub tensor_width: u32,
    /// Tensor rows
    #[serde(default = "default_tensor_side")]
    pub tensor_height: u32,
    /// Rounding applied after the centroid shift
    #[serde(default)]
    pub rounding: OffsetRounding,
    /// Downsampling filter
    #[serde(default)]
    pub resize_filter: ResizeFilter,
}

fn default_canvas_width() -> u32 {
    canvas::DEFAULT_WIDTH
}

fn default_canvas_height() -> u32 {
    canvas::DEFAULT_HEIGHT
}

fn default_pen_width() -> f32 {
    pen::DEFAULT_WIDTH
}

fn default_tensor_side() -> u32 {
    tensor::DEFAULT_SIDE
}

impl InkConfig {
    /// Directory name under the user config dir
    pub const ID: &'static str = "inktensor";

    /// Default location of the config file, if the platform has a config dir
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(Self::ID).join("config.json"))
    }

    /// Load configuration from disk, or return defaults if unavailable
    pub fn load() -> Self {
        let Some(path) = Self::default_path() else {
            log::warn!("No config directory available, using defaults");
            return Self::default();
        };
        if !path.exists() {
            return Self::default();
        }
        match Self::load_from(&path) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("Error loading config, using defaults: {}", err);
                Self::default()
            }
        }
    }

    /// Save configuration to disk
    pub fn save(&self) {
        let Some(path) = Self::default_path() else {
            log::error!("No config directory available for saving");
            return;
        };
        if let Err(err) = self.save_to(&path) {
            log::error!("Failed to save config: {}", err);
        }
    }

    /// Read a config file, sanitizing out-of-range values
    pub fn load_from(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        let config: InkConfig = serde_json::from_str(&json)?;
        Ok(config.sanitized())
    }

    /// Write the config as pretty JSON, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Replace values the pipeline cannot work with by their defaults
    pub fn sanitized(mut self) -> Self {
        if !(1..=canvas::MAX_SIDE).contains(&self.canvas_width)
            || !(1..=canvas::MAX_SIDE).contains(&self.canvas_height)
        {
            log::warn!(
                "Invalid canvas size {}x{}, using default",
                self.canvas_width,
                self.canvas_height
            );
            self.canvas_width = canvas::DEFAULT_WIDTH;
            self.canvas_height = canvas::DEFAULT_HEIGHT;
        }
        if !(1..=tensor::MAX_SIDE).contains(&self.tensor_width)
            || !(1..=tensor::MAX_SIDE).contains(&self.tensor_height)
        {
            log::warn!(
                "Invalid tensor size {}x{}, using default",
                self.tensor_width,
                self.tensor_height
            );
            self.tensor_width = tensor::DEFAULT_SIDE;
            self.tensor_height = tensor::DEFAULT_SIDE;
        }
        self.pen_width = self.pen().width();
        self
    }

    /// Pen described by this config
    pub fn pen(&self) -> PenStyle {
        PenStyle::new(self.pen_width)
    }

    /// Remember `pen` as the default pen
    pub fn set_pen(&mut self, pen: PenStyle) {
        self.pen_width = pen.width();
    }

    /// Canvas dimensions, falling back to the default canvas when zero
    pub fn canvas_size(&self) -> CanvasSize {
        CanvasSize::new(self.canvas_width, self.canvas_height).unwrap_or(canvas::DEFAULT_SIZE)
    }
}

impl Default for InkConfig {
    fn default() -> Self {
        Self {
            canvas_width: default_canvas_width(),
            canvas_height: default_canvas_height(),
            pen_width: default_pen_width(),
            tensor_width: default_tensor_side(),
            tensor_height: default_tensor_side(),
            rounding: OffsetRounding::Truncate,
            resize_filter: ResizeFilter::CatmullRom,
        }
    }
}
