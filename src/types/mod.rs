//! Core domain types for icongen.
//!
//! This module contains the fundamental types used throughout the pipeline:
//! - `Colour` - RGBA colour values
//! - `IconPalette` - the fixed brand colours
//! - `SizeSpec` / `ICON_SIZES` - the required output variants

mod colour;
mod palette;
mod size;

pub use colour::Colour;
pub use palette::IconPalette;
pub use size::{IconRole, SizeSpec, ICON_SIZES};
