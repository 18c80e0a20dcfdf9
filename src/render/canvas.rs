//! Minimal 2D drawing surface.
//!
//! Wraps a `tiny_skia::Pixmap` with exactly the capabilities the icon
//! composition needs: fill a rounded rectangle (solid or linear-gradient
//! paint), stroke a circular arc, and convert to an `image::RgbaImage`.
//! All drawing is anti-aliased.

use image::{Rgba, RgbaImage};
use tiny_skia::{
    Color, FillRule, GradientStop, LineCap, LinearGradient, Paint, Path, PathBuilder, Pixmap,
    Point, SpreadMode, Stroke, Transform,
};

use crate::types::Colour;

/// Cubic Bezier circle constant: control distance for a 90-degree arc.
const KAPPA: f32 = 0.552_284_75;

/// An axis-aligned rectangle in canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    pub fn center(&self) -> (f32, f32) {
        (self.x + self.w / 2.0, self.y + self.h / 2.0)
    }

    /// Whether `other` lies entirely inside this rectangle (within epsilon).
    pub fn contains_rect(&self, other: &Rect) -> bool {
        const EPS: f32 = 1e-4;
        other.x >= self.x - EPS
            && other.y >= self.y - EPS
            && other.right() <= self.right() + EPS
            && other.bottom() <= self.bottom() + EPS
    }

    /// Whether the interiors of two rectangles overlap.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }
}

/// A square raster surface for one icon.
pub struct Canvas {
    pixmap: Pixmap,
}

impl Canvas {
    /// Create a transparent square canvas. `None` when `edge == 0`.
    pub fn new(edge: u32) -> Option<Self> {
        Pixmap::new(edge, edge).map(|pixmap| Self { pixmap })
    }

    /// Fill a rounded rectangle with a solid colour.
    pub fn fill_round_rect(&mut self, rect: Rect, radius: f32, colour: Colour) {
        let Some(path) = round_rect_path(rect, radius) else {
            return;
        };
        self.fill(&path, &solid_paint(colour));
    }

    /// Fill a rounded rectangle with a linear gradient between two canvas
    /// points. Falls back to a solid `start` fill if the axis is degenerate.
    pub fn fill_round_rect_gradient(
        &mut self,
        rect: Rect,
        radius: f32,
        start: Colour,
        end: Colour,
        from: (f32, f32),
        to: (f32, f32),
    ) {
        let Some(path) = round_rect_path(rect, radius) else {
            return;
        };

        let gradient = LinearGradient::new(
            Point::from_xy(from.0, from.1),
            Point::from_xy(to.0, to.1),
            vec![
                GradientStop::new(0.0, to_skia(start)),
                GradientStop::new(1.0, to_skia(end)),
            ],
            SpreadMode::Pad,
            Transform::identity(),
        );

        let paint = match gradient {
            Some(shader) => {
                let mut paint = Paint::default();
                paint.shader = shader;
                paint.anti_alias = true;
                paint
            }
            None => solid_paint(start),
        };
        self.fill(&path, &paint);
    }

    /// Stroke a circular arc with round caps.
    ///
    /// Angles are degrees, measured clockwise from the positive x axis in the
    /// canvas's y-down coordinate space.
    pub fn stroke_arc(
        &mut self,
        center: (f32, f32),
        radius: f32,
        start_deg: f32,
        sweep_deg: f32,
        width: f32,
        colour: Colour,
    ) {
        let Some(path) = arc_path(center, radius, start_deg, sweep_deg) else {
            return;
        };
        let paint = solid_paint(colour);
        let stroke = Stroke {
            width,
            line_cap: LineCap::Round,
            ..Stroke::default()
        };
        self.pixmap
            .stroke_path(&path, &paint, &stroke, Transform::identity(), None);
    }

    /// Convert to a straight-alpha RGBA image.
    pub fn into_image(self) -> RgbaImage {
        let width = self.pixmap.width();
        let mut image = RgbaImage::new(width, self.pixmap.height());
        for (i, premultiplied) in self.pixmap.pixels().iter().enumerate() {
            let c = premultiplied.demultiply();
            let x = i as u32 % width;
            let y = i as u32 / width;
            image.put_pixel(x, y, Rgba([c.red(), c.green(), c.blue(), c.alpha()]));
        }
        image
    }

    fn fill(&mut self, path: &Path, paint: &Paint) {
        self.pixmap
            .fill_path(path, paint, FillRule::Winding, Transform::identity(), None);
    }
}

fn to_skia(colour: Colour) -> Color {
    Color::from_rgba8(colour.r, colour.g, colour.b, colour.a)
}

fn solid_paint(colour: Colour) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color(to_skia(colour));
    paint.anti_alias = true;
    paint
}

/// Build a rounded-rectangle path, corners approximated with cubic Beziers.
/// The radius is clamped to half the shorter side.
fn round_rect_path(rect: Rect, radius: f32) -> Option<Path> {
    if rect.w <= 0.0 || rect.h <= 0.0 {
        return None;
    }
    let r = radius.clamp(0.0, rect.w.min(rect.h) / 2.0);
    let k = r * KAPPA;
    let (left, top) = (rect.x, rect.y);
    let (right, bottom) = (rect.right(), rect.bottom());

    let mut pb = PathBuilder::new();
    pb.move_to(left + r, top);
    pb.line_to(right - r, top);
    pb.cubic_to(right - r + k, top, right, top + r - k, right, top + r);
    pb.line_to(right, bottom - r);
    pb.cubic_to(right, bottom - r + k, right - r + k, bottom, right - r, bottom);
    pb.line_to(left + r, bottom);
    pb.cubic_to(left + r - k, bottom, left, bottom - r + k, left, bottom - r);
    pb.line_to(left, top + r);
    pb.cubic_to(left, top + r - k, left + r - k, top, left + r, top);
    pb.close();
    pb.finish()
}

/// Build an open arc path, split into cubic segments of at most 90 degrees.
fn arc_path(center: (f32, f32), radius: f32, start_deg: f32, sweep_deg: f32) -> Option<Path> {
    if radius <= 0.0 || sweep_deg == 0.0 {
        return None;
    }
    let (cx, cy) = center;
    let segments = (sweep_deg.abs() / 90.0).ceil().max(1.0) as u32;
    let step = sweep_deg.to_radians() / segments as f32;
    let mut angle = start_deg.to_radians();

    let mut pb = PathBuilder::new();
    pb.move_to(cx + radius * angle.cos(), cy + radius * angle.sin());

    for _ in 0..segments {
        let next = angle + step;
        // Control-point distance for a cubic approximation of this sweep.
        let k = 4.0 / 3.0 * (step / 4.0).tan() * radius;

        let (sin0, cos0) = angle.sin_cos();
        let (sin1, cos1) = next.sin_cos();

        let p1 = (cx + radius * cos0 - k * sin0, cy + radius * sin0 + k * cos0);
        let p2 = (cx + radius * cos1 + k * sin1, cy + radius * sin1 - k * cos1);
        let p3 = (cx + radius * cos1, cy + radius * sin1);
        pb.cubic_to(p1.0, p1.1, p2.0, p2.1, p3.0, p3.1);

        angle = next;
    }
    pb.finish()
}
