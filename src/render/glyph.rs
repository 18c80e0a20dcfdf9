//! Seven-segment letterforms.
//!
//! No font files are shipped and no system fonts are consulted, so rendering
//! stays byte-deterministic across machines. Labels are built from rounded
//! bars in a unit em square, which reads as a heavy calculator-display face.
//! `measure_label` returns the exact drawn bounds, which the layout uses to
//! size the badge around its text.

use super::canvas::{Canvas, Rect};
use crate::types::Colour;

/// Glyph advance width, as a fraction of the em (the cap height).
pub const GLYPH_WIDTH: f32 = 0.58;

/// Bar thickness, as a fraction of the em.
pub const SEGMENT_THICKNESS: f32 = 0.16;

/// Space between adjacent glyphs, as a fraction of the em.
pub const TRACKING: f32 = 0.18;

const SEG_TOP: u8 = 1 << 0;
const SEG_TOP_RIGHT: u8 = 1 << 1;
const SEG_BOTTOM_RIGHT: u8 = 1 << 2;
const SEG_BOTTOM: u8 = 1 << 3;
const SEG_BOTTOM_LEFT: u8 = 1 << 4;
const SEG_TOP_LEFT: u8 = 1 << 5;
const SEG_MIDDLE: u8 = 1 << 6;

const SEG_ALL: u8 = SEG_TOP
    | SEG_TOP_RIGHT
    | SEG_BOTTOM_RIGHT
    | SEG_BOTTOM
    | SEG_BOTTOM_LEFT
    | SEG_TOP_LEFT
    | SEG_MIDDLE;

/// Segment mask for a letter. Unsupported characters light every segment,
/// the conventional "8" fallback.
fn segments_for(c: char) -> u8 {
    match c.to_ascii_uppercase() {
        'A' => SEG_ALL & !SEG_BOTTOM,
        'C' => SEG_TOP | SEG_TOP_LEFT | SEG_BOTTOM_LEFT | SEG_BOTTOM,
        'E' => SEG_TOP | SEG_TOP_LEFT | SEG_MIDDLE | SEG_BOTTOM_LEFT | SEG_BOTTOM,
        'F' => SEG_TOP | SEG_TOP_LEFT | SEG_MIDDLE | SEG_BOTTOM_LEFT,
        'H' => SEG_ALL & !(SEG_TOP | SEG_BOTTOM),
        'L' => SEG_TOP_LEFT | SEG_BOTTOM_LEFT | SEG_BOTTOM,
        'P' => SEG_TOP | SEG_TOP_RIGHT | SEG_MIDDLE | SEG_TOP_LEFT | SEG_BOTTOM_LEFT,
        'S' => SEG_TOP | SEG_TOP_LEFT | SEG_MIDDLE | SEG_BOTTOM_RIGHT | SEG_BOTTOM,
        'U' => SEG_ALL & !(SEG_TOP | SEG_MIDDLE),
        _ => SEG_ALL,
    }
}

/// Exact drawn bounds of `text` at cap height `size`: (width, height).
pub fn measure_label(text: &str, size: f32) -> (f32, f32) {
    let glyphs = text.chars().count();
    if glyphs == 0 {
        return (0.0, 0.0);
    }
    let width = glyphs as f32 * GLYPH_WIDTH * size + (glyphs - 1) as f32 * TRACKING * size;
    (width, size)
}

/// Draw `text` with its top-left corner at `(x, y)` and cap height `size`.
pub fn draw_label(canvas: &mut Canvas, text: &str, x: f32, y: f32, size: f32, colour: Colour) {
    let advance = (GLYPH_WIDTH + TRACKING) * size;
    for (i, c) in text.chars().enumerate() {
        draw_glyph(canvas, c, x + i as f32 * advance, y, size, colour);
    }
}

fn draw_glyph(canvas: &mut Canvas, c: char, x: f32, y: f32, size: f32, colour: Colour) {
    let mask = segments_for(c);
    let radius = SEGMENT_THICKNESS * size / 2.0;
    for bar in segment_rects(x, y, size, mask) {
        canvas.fill_round_rect(bar, radius, colour);
    }
}

/// Rectangles for the lit segments of one glyph cell.
fn segment_rects(x: f32, y: f32, size: f32, mask: u8) -> Vec<Rect> {
    let w = GLYPH_WIDTH * size;
    let t = SEGMENT_THICKNESS * size;
    let half = size / 2.0;

    let bars = [
        (SEG_TOP, Rect::new(x, y, w, t)),
        (SEG_MIDDLE, Rect::new(x, y + half - t / 2.0, w, t)),
        (SEG_BOTTOM, Rect::new(x, y + size - t, w, t)),
        (SEG_TOP_LEFT, Rect::new(x, y, t, half)),
        (SEG_BOTTOM_LEFT, Rect::new(x, y + half, t, half)),
        (SEG_TOP_RIGHT, Rect::new(x + w - t, y, t, half)),
        (SEG_BOTTOM_RIGHT, Rect::new(x + w - t, y + half, t, half)),
    ];

    bars.into_iter()
        .filter(|(bit, _)| mask & bit != 0)
        .map(|(_, rect)| rect)
        .collect()
}
