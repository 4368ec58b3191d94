//! Pointer capture module
//!
//! Turns press/move/release events into the stroke model in `domain`.

pub mod stroke;
