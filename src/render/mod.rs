//! Stroke rendering module
//!
//! This module contains:
//! - Geometry: pen constants and centroid normalization
//! - Image rendering using tiny-skia, plus PNG export

pub mod geometry;
pub mod image;
