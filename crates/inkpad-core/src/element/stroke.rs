//! Freehand pen strokes.

use super::ElementId;
use crate::color::Color;
use kurbo::Point;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Width of newly committed pen strokes, in world units.
pub const DEFAULT_STROKE_WIDTH: f64 = 2.0;

/// A committed freehand stroke (series of sampled pointer positions).
///
/// Immutable once committed, except for deletion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stroke {
    pub id: ElementId,
    /// Sampled positions in world coordinates, in draw order.
    pub points: Vec<Point>,
    /// Stored color; display-time theme substitution never touches this.
    pub color: Color,
    /// Line width in world units.
    pub width: f64,
}

impl Stroke {
    /// Create a stroke from a finalized point buffer.
    pub fn from_points(points: Vec<Point>, color: Color, width: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            points,
            color,
            width,
        }
    }

    /// Whether any sampled point lies within `radius` of `point`.
    pub fn hit_test(&self, point: Point, radius: f64) -> bool {
        self.points.iter().any(|p| {
            let dx = point.x - p.x;
            let dy = point.y - p.y;
            (dx * dx + dy * dy).sqrt() <= radius
        })
    }
}
