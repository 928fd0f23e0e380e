//! Tool identifiers and transient interaction state.

use crate::element::ElementId;
use kurbo::{Point, Vec2};
use serde::{Deserialize, Serialize};

/// Selectable tools. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ToolKind {
    #[default]
    Pen,
    Eraser,
    Text,
    Move,
    Pan,
}

/// In-flight pointer interaction.
///
/// None of this is part of the document or the history; at most one
/// interaction is active at a time.
#[derive(Debug, Clone, Default)]
pub enum Interaction {
    #[default]
    Idle,
    /// Pen buffer accumulating world points until finalize.
    Drawing { points: Vec<Point> },
    /// Continuous-erase drag; re-tests strokes only.
    Erasing,
    /// Text element drag, with the element-to-pointer offset taken at grab.
    MovingText { id: ElementId, grab: Vec2 },
    /// Canvas pan, re-anchored to the last screen sample.
    Panning { anchor: Point },
}

/// Uncommitted inline text editor.
///
/// Opened by the Text tool, committed or discarded on close; never part of
/// the document or the history while open.
#[derive(Debug, Clone)]
pub struct TextEditor {
    /// World-space anchor the element will be placed at.
    pub origin: Point,
    /// Editor contents, mirrored from the host's input field.
    pub buffer: String,
}

impl TextEditor {
    pub fn new(origin: Point) -> Self {
        Self {
            origin,
            buffer: String::new(),
        }
    }
}
