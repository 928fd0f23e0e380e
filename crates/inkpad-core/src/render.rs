//! Rendering contracts: themes, display substitution, and document walks.
//!
//! The engine owns *what* gets drawn and in which order; backends own the
//! pixels. Everything here talks to an abstract [`RenderTarget`], keeping the
//! core free of platform rendering APIs.

use crate::camera::Camera;
use crate::color::Color;
use crate::doc::SketchDocument;
use kurbo::Point;

/// Active display theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Background fill for the committed layer.
    pub fn background(self) -> peniko::Color {
        match self {
            Theme::Light => peniko::Color::from_rgba8(255, 255, 255, 255),
            Theme::Dark => peniko::Color::from_rgba8(30, 30, 30, 255),
        }
    }
}

/// Presentation color for a stored element color under `theme`.
///
/// Pure black displays as white on the dark theme so ink stays visible; every
/// other color passes through. Display-only: the substitution never reaches
/// the document or the export path.
pub fn display_color(color: Color, theme: Theme) -> peniko::Color {
    if theme == Theme::Dark && color.is_black() {
        peniko::Color::WHITE
    } else {
        color.into()
    }
}

/// Drawing primitives a render backend must provide.
///
/// Coordinates arrive in physical pixels. Polylines use round caps and
/// joins; text is anchored at its top-left corner.
pub trait RenderTarget {
    fn clear(&mut self, color: peniko::Color);
    fn stroke_polyline(&mut self, points: &[Point], width: f64, color: peniko::Color);
    fn fill_text(&mut self, text: &str, origin: Point, font_size: f64, color: peniko::Color);
}

/// World point to physical pixels: pan offset, then device pixel ratio.
fn to_physical(p: Point, camera: &Camera) -> Point {
    Point::new(
        (p.x + camera.offset.x) * camera.scale_factor,
        (p.y + camera.offset.y) * camera.scale_factor,
    )
}

/// Full redraw of the committed document onto `target`.
///
/// Clears to the theme background, then draws every stroke and every text
/// element in insertion order with pan offset and device pixel ratio applied.
pub fn draw_document<T: RenderTarget + ?Sized>(
    target: &mut T,
    doc: &SketchDocument,
    camera: &Camera,
    theme: Theme,
) {
    target.clear(theme.background());
    let scale = camera.scale_factor;
    for stroke in &doc.strokes {
        let points: Vec<Point> = stroke.points.iter().map(|p| to_physical(*p, camera)).collect();
        target.stroke_polyline(&points, stroke.width * scale, display_color(stroke.color, theme));
    }
    for text in &doc.text_elements {
        target.fill_text(
            &text.text,
            to_physical(text.position, camera),
            text.font_size * scale,
            display_color(text.color, theme),
        );
    }
}

/// Redraw the transient overlay: the in-progress pen stroke only.
pub fn draw_pending_stroke<T: RenderTarget + ?Sized>(
    target: &mut T,
    points: &[Point],
    color: Color,
    width: f64,
    camera: &Camera,
    theme: Theme,
) {
    target.clear(peniko::Color::TRANSPARENT);
    let physical: Vec<Point> = points.iter().map(|p| to_physical(*p, camera)).collect();
    target.stroke_polyline(
        &physical,
        width * camera.scale_factor,
        display_color(color, theme),
    );
}

/// Draw the document for export: 1:1 world-to-pixel, no pan, stored colors
/// verbatim. The caller supplies a surface already filled with the fixed
/// white export background.
pub fn draw_export<T: RenderTarget + ?Sized>(target: &mut T, doc: &SketchDocument) {
    for stroke in &doc.strokes {
        target.stroke_polyline(&stroke.points, stroke.width, stroke.color.into());
    }
    for text in &doc.text_elements {
        target.fill_text(
            &text.text,
            text.position,
            text.font_size,
            text.color.into(),
        );
    }
}
