//! Theme-fixed raster export and the persistence payload.

use crate::pixmap::Pixmap;
use inkpad_core::doc::SketchDocument;
use inkpad_core::{render, serialize};
use thiserror::Error;

/// Export errors.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("PNG encoding failed: {0}")]
    Encode(#[from] png::EncodingError),
    #[error("document serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Render the document to a PNG for thumbnails and document export.
///
/// Fresh surface of exactly canvas size at 1:1 world-to-pixel scale, fixed
/// white background regardless of the active theme, no pan offset, stored
/// colors verbatim.
pub fn export_png(doc: &SketchDocument) -> Result<Vec<u8>, ExportError> {
    let mut pixmap = Pixmap::new(
        doc.canvas_width.round() as u32,
        doc.canvas_height.round() as u32,
    );
    pixmap.fill(peniko::Color::WHITE);
    render::draw_export(&mut pixmap, doc);
    Ok(pixmap.encode_png()?)
}

/// What the autosave collaborator receives on every committed mutation.
#[derive(Debug, Clone)]
pub struct AutosavePayload {
    /// Canonical serialized document.
    pub document: String,
    /// PNG export of the same state.
    pub thumbnail: Vec<u8>,
}

/// Assemble the `(serialized, raster)` pair for the persistence boundary.
pub fn autosave_payload(doc: &SketchDocument) -> Result<AutosavePayload, ExportError> {
    Ok(AutosavePayload {
        document: serialize::to_json(doc)?,
        thumbnail: export_png(doc)?,
    })
}
