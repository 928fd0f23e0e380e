//! Document element definitions.

mod stroke;
mod text;

pub use stroke::{DEFAULT_STROKE_WIDTH, Stroke};
pub use text::{DEFAULT_FONT_SIZE, GLYPH_ADVANCE, TextElement, measure_text};

use uuid::Uuid;

/// Unique identifier for document elements.
pub type ElementId = Uuid;
