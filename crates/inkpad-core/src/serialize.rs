//! Canonical JSON round trip for sketch documents.

use crate::doc::SketchDocument;

/// Serialize a document to its canonical JSON form.
pub fn to_json(doc: &SketchDocument) -> Result<String, serde_json::Error> {
    serde_json::to_string(doc)
}

/// Parse a persisted document.
///
/// Any parse or shape failure degrades to a default empty document; callers
/// never see the error.
pub fn from_json(json: &str) -> SketchDocument {
    match serde_json::from_str::<SketchDocument>(json) {
        Ok(mut doc) => {
            // Stored sizes may predate the current minimums.
            doc.set_canvas_size(doc.canvas_width, doc.canvas_height);
            doc
        }
        Err(e) => {
            log::warn!("failed to parse persisted sketch, starting empty: {e}");
            SketchDocument::new()
        }
    }
}

/// Resolve the payload handed over when a note is opened.
///
/// `None` means a brand-new sketch at the default canvas size.
pub fn load(json: Option<&str>) -> SketchDocument {
    match json {
        Some(s) => from_json(s),
        None => SketchDocument::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color;
    use crate::element::{DEFAULT_FONT_SIZE, DEFAULT_STROKE_WIDTH, Stroke, TextElement};
    use kurbo::Point;

    fn sample_doc() -> SketchDocument {
        let mut doc = SketchDocument::with_canvas_size(640.0, 480.0);
        doc.add_stroke(Stroke::from_points(
            vec![Point::new(0.0, 0.0), Point::new(10.0, 0.0), Point::new(10.0, 10.0)],
            color::BLUE,
            DEFAULT_STROKE_WIDTH,
        ));
        doc.add_text(TextElement::new(
            Point::new(5.0, 5.0),
            "Hi".to_string(),
            color::BLACK,
            DEFAULT_FONT_SIZE,
        ));
        doc
    }

    #[test]
    fn test_roundtrip_is_structural_identity() {
        let doc = sample_doc();
        let json = to_json(&doc).unwrap();
        assert_eq!(from_json(&json), doc);
    }

    #[test]
    fn test_camel_case_field_names() {
        let json = to_json(&sample_doc()).unwrap();
        assert!(json.contains("\"textElements\""));
        assert!(json.contains("\"canvasWidth\""));
        assert!(json.contains("\"fontSize\""));
        // Colors persist as hex strings.
        assert!(json.contains("\"#0000ff\""));
    }

    #[test]
    fn test_malformed_json_degrades_to_default() {
        assert_eq!(from_json("not json at all"), SketchDocument::new());
        assert_eq!(from_json("{\"strokes\": 17}"), SketchDocument::new());
        assert_eq!(from_json(""), SketchDocument::new());
    }

    #[test]
    fn test_load_none_is_new_document() {
        assert_eq!(load(None), SketchDocument::new());
    }

    #[test]
    fn test_undersized_canvas_clamped_on_load() {
        let mut doc = sample_doc();
        doc.canvas_width = 10.0;
        doc.canvas_height = 10.0;
        let loaded = from_json(&to_json(&doc).unwrap());
        assert!((loaded.canvas_width - crate::doc::MIN_CANVAS_WIDTH).abs() < f64::EPSILON);
        assert!((loaded.canvas_height - crate::doc::MIN_CANVAS_HEIGHT).abs() < f64::EPSILON);
    }
}
