//! Inkpad software raster backend.
//!
//! CPU implementation of the core render-target contract: an RGBA pixmap
//! with anti-aliased capsule stroking and embedded glyph bitmaps, the
//! double-buffered screen surfaces, and the theme-fixed PNG export handed to
//! the persistence side.

mod draw;
pub mod export;
pub mod pixmap;
pub mod surface;

pub use export::{AutosavePayload, ExportError, autosave_payload, export_png};
pub use pixmap::Pixmap;
pub use surface::{DrawingSurface, InputOverlay, SketchView};
