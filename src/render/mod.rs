//! Rendering module for icongen.
//!
//! This module turns an edge length and the brand palette into PNG bytes:
//! layout resolution, vector composition onto a canvas, and encoding.

mod canvas;
mod glyph;
mod icon;
mod png;

pub use canvas::{Canvas, Rect};
pub use glyph::{draw_label, measure_label};
pub use icon::{render_icon, IconLayout};
pub use png::encode_png;
