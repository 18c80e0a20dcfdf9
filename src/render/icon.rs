//! Icon composition.
//!
//! `IconLayout` resolves every proportional measurement for a given edge
//! length, so geometry is testable without inspecting raster output.
//! `render_icon` then paints the layout back-to-front: background, signal
//! arcs, calculator body, screen, buttons, embossed brand initial, badge.

use image::RgbaImage;

use super::canvas::{Canvas, Rect};
use super::glyph;
use crate::types::IconPalette;

/// The embossed brand initial.
const BRAND_INITIAL: &str = "S";

/// The badge label.
const BADGE_LABEL: &str = "CALC";

/// Arc opacities, outer to inner.
const ARC_ALPHAS: [u8; 3] = [102, 179, 255];

/// Pixel offset of the glyph shadow, fixed at every edge length.
const SHADOW_OFFSET: (f32, f32) = (2.0, -2.0);

/// All measurements for one edge length. Every field scales linearly with
/// `edge`, so icons are self-similar at every resolution.
#[derive(Debug, Clone)]
pub struct IconLayout {
    pub edge: f32,
    /// Background rounded-square corner radius.
    pub corner_radius: f32,
    /// Signal arc center, offset from canvas center.
    pub arc_center: (f32, f32),
    /// Arc radii, outer to inner.
    pub arc_radii: [f32; 3],
    pub arc_stroke: f32,
    /// Calculator body.
    pub body: Rect,
    pub body_radius: f32,
    /// Display screen inside the body.
    pub screen: Rect,
    /// 3x3 button grid, row-major.
    pub buttons: [Rect; 9],
    pub button_radius: f32,
    /// Brand initial cap height and top-left position.
    pub glyph_size: f32,
    pub glyph_origin: (f32, f32),
    /// Badge box, its corner radius, and the label inside it.
    pub badge: Rect,
    pub badge_radius: f32,
    pub badge_label_size: f32,
    pub badge_label_origin: (f32, f32),
}

impl IconLayout {
    pub fn for_edge(edge: u32) -> Self {
        let e = edge as f32;

        let body = Rect::new(0.22 * e, 0.22 * e, 0.22 * e, 0.30 * e);
        let screen = Rect::new(
            body.x + 0.10 * body.w,
            body.y + 0.70 * body.h,
            0.80 * body.w,
            0.20 * body.h,
        );

        // Button cells are sized off the body width; the grid starts at
        // 15%/10% inside the body.
        let cell_w = 0.20 * body.w;
        let cell_h = 0.14 * body.w;
        let gap = 0.08 * body.w;
        let grid_x = body.x + 0.15 * body.w;
        let grid_y = body.y + 0.10 * body.h;
        let buttons = std::array::from_fn(|i| {
            let (row, col) = (i / 3, i % 3);
            Rect::new(
                grid_x + col as f32 * (cell_w + gap),
                grid_y + row as f32 * (cell_h + gap),
                cell_w,
                cell_h,
            )
        });

        let glyph_size = 0.28 * e;
        let (glyph_w, glyph_h) = glyph::measure_label(BRAND_INITIAL, glyph_size);
        let glyph_origin = (
            body.x + (body.w - glyph_w) / 2.0,
            body.y + (body.h - glyph_h) / 2.0,
        );

        let badge_label_size = 0.07 * e;
        let (label_w, label_h) = glyph::measure_label(BADGE_LABEL, badge_label_size);
        let pad_x = 0.03 * e;
        let pad_y = 0.015 * e;
        let badge = Rect::new(
            0.12 * e,
            0.72 * e,
            label_w + 2.0 * pad_x,
            label_h + 2.0 * pad_y,
        );

        Self {
            edge: e,
            corner_radius: 0.22 * e,
            arc_center: (0.5 * e + 0.15 * e, 0.5 * e + 0.12 * e),
            arc_radii: [0.35 * e, 0.25 * e, 0.15 * e],
            arc_stroke: 0.02 * e,
            body,
            body_radius: 0.02 * e,
            screen,
            buttons,
            button_radius: cell_h / 3.0,
            glyph_size,
            glyph_origin,
            badge,
            badge_radius: 0.025 * e,
            badge_label_size,
            badge_label_origin: (badge.x + pad_x, badge.y + pad_y),
        }
    }
}

/// Render one icon. Pure function of `edge` and the palette; for
/// `edge == 0` the result is an empty image, which the exporter rejects at
/// encode time.
pub fn render_icon(edge: u32, palette: &IconPalette) -> RgbaImage {
    let Some(mut canvas) = Canvas::new(edge) else {
        return RgbaImage::new(0, 0);
    };
    let layout = IconLayout::for_edge(edge);
    let white = crate::types::Colour::WHITE;

    // Background: rounded square with the brand gradient along the diagonal.
    canvas.fill_round_rect_gradient(
        Rect::new(0.0, 0.0, layout.edge, layout.edge),
        layout.corner_radius,
        palette.gradient_start,
        palette.gradient_end,
        (0.0, 0.0),
        (layout.edge, layout.edge),
    );

    // Signal arcs sweep the upper-left quadrant, fading outward.
    for (radius, alpha) in layout.arc_radii.iter().zip(ARC_ALPHAS) {
        canvas.stroke_arc(
            layout.arc_center,
            *radius,
            180.0,
            90.0,
            layout.arc_stroke,
            white.with_alpha(alpha),
        );
    }

    // Calculator body, screen, buttons.
    canvas.fill_round_rect(layout.body, layout.body_radius, white);
    canvas.fill_round_rect(layout.screen, 0.0, palette.gradient_end);
    for button in &layout.buttons {
        canvas.fill_round_rect(*button, layout.button_radius, palette.button);
    }

    // Embossed brand initial: shadow pass, then the true glyph.
    let (gx, gy) = layout.glyph_origin;
    glyph::draw_label(
        &mut canvas,
        BRAND_INITIAL,
        gx + SHADOW_OFFSET.0,
        gy + SHADOW_OFFSET.1,
        layout.glyph_size,
        palette.shadow,
    );
    glyph::draw_label(&mut canvas, BRAND_INITIAL, gx, gy, layout.glyph_size, white);

    // Badge.
    canvas.fill_round_rect(layout.badge, layout.badge_radius, palette.accent);
    let (bx, by) = layout.badge_label_origin;
    glyph::draw_label(
        &mut canvas,
        BADGE_LABEL,
        bx,
        by,
        layout.badge_label_size,
        white,
    );

    canvas.into_image()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Colour, ICON_SIZES};

    fn pixel(image: &RgbaImage, x: f32, y: f32) -> [u8; 4] {
        image.get_pixel(x as u32, y as u32).0
    }

    #[test]
    fn test_corner_radius_scales_linearly() {
        assert!((IconLayout::for_edge(1024).corner_radius - 225.28).abs() < 1e-3);
        assert!((IconLayout::for_edge(29).corner_radius - 6.38).abs() < 1e-4);
    }

    #[test]
    fn test_layout_is_self_similar() {
        let small = IconLayout::for_edge(64);
        let large = IconLayout::for_edge(512);
        let scale = 512.0 / 64.0;

        assert!((large.body.x - small.body.x * scale).abs() < 1e-3);
        assert!((large.body.w - small.body.w * scale).abs() < 1e-3);
        assert!((large.arc_radii[0] - small.arc_radii[0] * scale).abs() < 1e-3);
        assert!((large.badge.w - small.badge.w * scale).abs() < 1e-2);
    }

    #[test]
    fn test_arc_center_offset_from_canvas_center() {
        let layout = IconLayout::for_edge(100);
        assert!((layout.arc_center.0 - 65.0).abs() < 1e-4);
        assert!((layout.arc_center.1 - 62.0).abs() < 1e-4);
    }

    #[test]
    fn test_buttons_disjoint_and_inside_body() {
        for spec in &ICON_SIZES {
            let layout = IconLayout::for_edge(spec.edge);
            for (i, a) in layout.buttons.iter().enumerate() {
                assert!(
                    layout.body.contains_rect(a),
                    "edge {}: button {} escapes the body",
                    spec.edge,
                    i
                );
                for b in &layout.buttons[i + 1..] {
                    assert!(
                        !a.intersects(b),
                        "edge {}: buttons overlap: {:?} / {:?}",
                        spec.edge,
                        a,
                        b
                    );
                }
            }
        }
    }

    #[test]
    fn test_badge_contains_label_plus_padding() {
        for spec in &ICON_SIZES {
            let layout = IconLayout::for_edge(spec.edge);
            let (w, h) = glyph::measure_label(BADGE_LABEL, layout.badge_label_size);
            let label = Rect::new(
                layout.badge_label_origin.0,
                layout.badge_label_origin.1,
                w,
                h,
            );
            assert!(layout.badge.contains_rect(&label), "edge {}", spec.edge);

            let e = spec.edge as f32;
            assert!((label.x - layout.badge.x - 0.03 * e).abs() < 1e-3);
            assert!((label.y - layout.badge.y - 0.015 * e).abs() < 1e-3);
        }
    }

    #[test]
    fn test_render_is_deterministic() {
        let palette = IconPalette::signal_calc();
        let a = render_icon(120, &palette);
        let b = render_icon(120, &palette);
        assert_eq!(a.as_raw(), b.as_raw());
    }

    #[test]
    fn test_render_zero_edge_is_empty() {
        let image = render_icon(0, &IconPalette::signal_calc());
        assert_eq!((image.width(), image.height()), (0, 0));
    }

    #[test]
    fn test_render_pixel_probes() {
        let palette = IconPalette::signal_calc();
        let image = render_icon(256, &palette);
        let layout = IconLayout::for_edge(256);

        // Rounded corners are transparent; the interior is opaque.
        assert_eq!(pixel(&image, 0.0, 0.0)[3], 0);
        assert_eq!(pixel(&image, 255.0, 0.0)[3], 0);
        assert_eq!(pixel(&image, 128.0, 128.0)[3], 255);

        // The middle button cell shows the button colour.
        let (bx, by) = layout.buttons[4].center();
        assert_eq!(pixel(&image, bx, by), palette.button.to_rgba());

        // The screen interior shows the gradient end colour. The probe sits
        // in the screen's upper-left, clear of the glyph shadow above it.
        let sx = layout.screen.x + 0.3 * layout.screen.w;
        let sy = layout.screen.y + 0.2 * layout.screen.h;
        assert_eq!(pixel(&image, sx, sy), palette.gradient_end.to_rgba());

        // The badge's left padding strip shows the accent colour.
        let probe_x = layout.badge.x + 0.015 * layout.edge;
        let (_, probe_y) = layout.badge.center();
        assert_eq!(pixel(&image, probe_x, probe_y), palette.accent.to_rgba());

        // The brand initial's middle bar is solid white at the body center.
        let (cx, cy) = layout.body.center();
        assert_eq!(pixel(&image, cx, cy), Colour::WHITE.to_rgba());
    }

    #[test]
    fn test_render_dimensions_match_edge() {
        for edge in [20, 29, 87, 180] {
            let image = render_icon(edge, &IconPalette::signal_calc());
            assert_eq!((image.width(), image.height()), (edge, edge));
        }
    }
}
