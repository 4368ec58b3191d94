//! Pure domain types with minimal dependencies
//!
//! This module contains the value model shared by capture, rendering and
//! tensor extraction. Nothing here touches pixels.

pub mod geometry;
pub mod pen;
pub mod stroke;

pub use geometry::*;
pub use pen::*;
pub use stroke::*;
