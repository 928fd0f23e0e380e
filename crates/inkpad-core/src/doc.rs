//! Sketch document: the committed, undo-tracked element state.

use crate::element::{ElementId, Stroke, TextElement};
use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Minimum canvas width in world units; resizes clamp here.
pub const MIN_CANVAS_WIDTH: f64 = 200.0;
/// Minimum canvas height in world units.
pub const MIN_CANVAS_HEIGHT: f64 = 150.0;
/// Canvas size for brand-new documents.
pub const DEFAULT_CANVAS_WIDTH: f64 = 800.0;
pub const DEFAULT_CANVAS_HEIGHT: f64 = 600.0;

/// Hit radius for stroke proximity tests, in world units.
pub const PROXIMITY_RADIUS: f64 = 10.0;

/// A sketch document containing all committed elements.
///
/// Insertion order doubles as z-order: later elements are topmost. In-flight
/// input (an open pen buffer or text editor) is never part of the document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SketchDocument {
    pub strokes: Vec<Stroke>,
    pub text_elements: Vec<TextElement>,
    pub canvas_width: f64,
    pub canvas_height: f64,
}

impl Default for SketchDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl SketchDocument {
    /// Create an empty document at the default canvas size.
    pub fn new() -> Self {
        Self::with_canvas_size(DEFAULT_CANVAS_WIDTH, DEFAULT_CANVAS_HEIGHT)
    }

    /// Create an empty document with the given canvas size (clamped).
    pub fn with_canvas_size(width: f64, height: f64) -> Self {
        let mut doc = Self {
            strokes: Vec::new(),
            text_elements: Vec::new(),
            canvas_width: DEFAULT_CANVAS_WIDTH,
            canvas_height: DEFAULT_CANVAS_HEIGHT,
        };
        doc.set_canvas_size(width, height);
        doc
    }

    /// Append a committed stroke (becomes topmost).
    pub fn add_stroke(&mut self, stroke: Stroke) {
        self.strokes.push(stroke);
    }

    /// Remove a stroke by id.
    pub fn remove_stroke(&mut self, id: ElementId) -> Option<Stroke> {
        let index = self.strokes.iter().position(|s| s.id == id)?;
        Some(self.strokes.remove(index))
    }

    /// Append a committed text element (becomes topmost).
    pub fn add_text(&mut self, element: TextElement) {
        self.text_elements.push(element);
    }

    /// Remove a text element by id.
    pub fn remove_text(&mut self, id: ElementId) -> Option<TextElement> {
        let index = self.text_elements.iter().position(|t| t.id == id)?;
        Some(self.text_elements.remove(index))
    }

    /// Get a mutable text element by id (for live drag updates).
    pub fn text_mut(&mut self, id: ElementId) -> Option<&mut TextElement> {
        self.text_elements.iter_mut().find(|t| t.id == id)
    }

    /// Topmost stroke with a sampled point within the proximity radius.
    ///
    /// Candidates are tested newest-to-oldest; the first match wins.
    pub fn stroke_at(&self, point: Point) -> Option<ElementId> {
        self.strokes
            .iter()
            .rev()
            .find(|s| s.hit_test(point, PROXIMITY_RADIUS))
            .map(|s| s.id)
    }

    /// Topmost text element whose bounding box contains the point.
    pub fn text_at(&self, point: Point) -> Option<ElementId> {
        self.text_elements
            .iter()
            .rev()
            .find(|t| t.hit_test(point))
            .map(|t| t.id)
    }

    /// Set the canvas size, clamped to the configured minimums.
    pub fn set_canvas_size(&mut self, width: f64, height: f64) {
        self.canvas_width = width.max(MIN_CANVAS_WIDTH);
        self.canvas_height = height.max(MIN_CANVAS_HEIGHT);
    }

    /// Remove every element.
    pub fn clear(&mut self) {
        self.strokes.clear();
        self.text_elements.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty() && self.text_elements.is_empty()
    }
}
