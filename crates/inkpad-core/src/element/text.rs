//! Placed text elements.

use super::ElementId;
use crate::color::Color;
use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Font size of newly placed text, in world units.
pub const DEFAULT_FONT_SIZE: f64 = 16.0;

/// Advance width of one glyph cell as a fraction of the font size.
///
/// Hit-testing and the raster backend share this metric, so the measured
/// bounding box always matches what committed rendering produces.
pub const GLYPH_ADVANCE: f64 = 0.6;

/// Measured width of a single-line string at `font_size`.
pub fn measure_text(text: &str, font_size: f64) -> f64 {
    text.chars().count() as f64 * font_size * GLYPH_ADVANCE
}

/// A committed single-line text element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextElement {
    pub id: ElementId,
    /// Non-empty once committed.
    pub text: String,
    /// Top-left anchor in world coordinates.
    pub position: Point,
    pub color: Color,
    /// Font size in world units; also the height of the bounding box.
    pub font_size: f64,
}

impl TextElement {
    pub fn new(position: Point, text: String, color: Color, font_size: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            text,
            position,
            color,
            font_size,
        }
    }

    /// Axis-aligned bounding box: measured width by font size, anchored
    /// at the top-left position.
    pub fn bounds(&self) -> Rect {
        Rect::new(
            self.position.x,
            self.position.y,
            self.position.x + measure_text(&self.text, self.font_size),
            self.position.y + self.font_size,
        )
    }

    /// Whether the point falls inside the bounding box.
    pub fn hit_test(&self, point: Point) -> bool {
        self.bounds().contains(point)
    }
}
