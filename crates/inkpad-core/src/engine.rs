//! The sketch engine: pointer dispatch, commits, and host effects.
//!
//! Pointer events come in carrying raw screen coordinates; the engine
//! resolves them through the camera, runs the active tool, mutates the
//! document, and records history on commit. Side effects (repainting,
//! focusing the inline text input, handing the autosave payload onward) are
//! returned as [`Effect`] values for the host to carry out in order, never
//! performed here.

use crate::camera::Camera;
use crate::color::{self, Color};
use crate::doc::SketchDocument;
use crate::element::{DEFAULT_FONT_SIZE, DEFAULT_STROKE_WIDTH, Stroke, TextElement};
use crate::history::HistoryLog;
use crate::render::Theme;
use crate::serialize;
use crate::tools::{Interaction, TextEditor, ToolKind};
use kurbo::Point;

/// Pointer input in raw screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Down { position: Point },
    Move { position: Point },
    Up { position: Point },
    /// Platform-level cancellation; handled as a best-effort `Up` so no
    /// stroke or drag is left dangling.
    Cancel { position: Point },
}

/// Side effects for the host, in execution order.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// The committed layer must be fully redrawn.
    RedrawSurface,
    /// The in-progress stroke changed; redraw the overlay.
    RedrawOverlay,
    /// Drop whatever the overlay shows.
    ClearOverlay,
    /// Focus an inline text input anchored at this world point.
    OpenTextEditor { origin: Point },
    CloseTextEditor,
    /// The document changed; hand this serialized form (plus a raster
    /// export) to the autosave collaborator.
    Autosave { document: String },
}

/// Stateful interpreter of pointer input over one sketch document.
pub struct SketchEngine {
    doc: SketchDocument,
    history: HistoryLog,
    camera: Camera,
    theme: Theme,
    tool: ToolKind,
    interaction: Interaction,
    editor: Option<TextEditor>,
    active_color: Color,
}

impl Default for SketchEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl SketchEngine {
    /// Create an engine over a new empty document.
    pub fn new() -> Self {
        let doc = SketchDocument::new();
        let history = HistoryLog::new(&doc);
        Self {
            doc,
            history,
            camera: Camera::new(),
            theme: Theme::default(),
            tool: ToolKind::default(),
            interaction: Interaction::Idle,
            editor: None,
            active_color: color::BLACK,
        }
    }

    /// Replace the current document with a freshly loaded one.
    ///
    /// Force-commits any open text editor into the outgoing document first,
    /// then resets pan and history for the new one. `None` starts a new
    /// empty sketch; malformed data degrades to the same.
    pub fn load_document(&mut self, json: Option<&str>) -> Vec<Effect> {
        let mut effects = self.force_commit_editor();
        if !matches!(self.interaction, Interaction::Idle) {
            self.interaction = Interaction::Idle;
            effects.push(Effect::ClearOverlay);
        }
        self.doc = serialize::load(json);
        self.camera.reset();
        self.history = HistoryLog::new(&self.doc);
        effects.push(Effect::RedrawSurface);
        effects
    }

    /// Dispatch one pointer event through the active tool.
    pub fn handle_pointer(&mut self, event: PointerEvent) -> Vec<Effect> {
        match event {
            PointerEvent::Down { position } => self.pointer_down(position),
            PointerEvent::Move { position } => self.pointer_move(position),
            PointerEvent::Up { position } | PointerEvent::Cancel { position } => {
                self.pointer_up(position)
            }
        }
    }

    fn pointer_down(&mut self, screen: Point) -> Vec<Effect> {
        let world = self.camera.screen_to_world(screen);
        let mut effects = Vec::new();
        match self.tool {
            ToolKind::Pen => {
                self.interaction = Interaction::Drawing {
                    points: vec![world],
                };
                effects.push(Effect::RedrawOverlay);
            }
            ToolKind::Eraser => {
                // Strokes take precedence over text on a stationary click.
                if let Some(id) = self.doc.stroke_at(world) {
                    self.doc.remove_stroke(id);
                    self.commit(&mut effects);
                } else if let Some(id) = self.doc.text_at(world) {
                    self.doc.remove_text(id);
                    self.commit(&mut effects);
                } else {
                    self.interaction = Interaction::Erasing;
                }
            }
            ToolKind::Text => {
                effects.extend(self.force_commit_editor());
                self.editor = Some(TextEditor::new(world));
                effects.push(Effect::OpenTextEditor { origin: world });
            }
            ToolKind::Move => {
                if let Some(id) = self.doc.text_at(world) {
                    if let Some(elem) = self.doc.text_mut(id) {
                        let grab = elem.position - world;
                        self.interaction = Interaction::MovingText { id, grab };
                    }
                }
            }
            ToolKind::Pan => {
                self.interaction = Interaction::Panning { anchor: screen };
            }
        }
        effects
    }

    fn pointer_move(&mut self, screen: Point) -> Vec<Effect> {
        let world = self.camera.screen_to_world(screen);
        let mut effects = Vec::new();

        if let Interaction::Drawing { points } = &mut self.interaction {
            points.push(world);
            effects.push(Effect::RedrawOverlay);
            return effects;
        }

        if let Interaction::Panning { anchor } = &mut self.interaction {
            let delta = screen - *anchor;
            *anchor = screen;
            self.camera.pan(delta);
            effects.push(Effect::RedrawSurface);
            return effects;
        }

        if matches!(self.interaction, Interaction::Erasing) {
            // Drag erase re-tests strokes only; text survives until clicked.
            if let Some(id) = self.doc.stroke_at(world) {
                self.doc.remove_stroke(id);
                self.commit(&mut effects);
            }
            return effects;
        }

        let moving = match &self.interaction {
            Interaction::MovingText { id, grab } => Some((*id, *grab)),
            _ => None,
        };
        if let Some((id, grab)) = moving {
            if let Some(elem) = self.doc.text_mut(id) {
                // Live update; the single push happens on release.
                elem.position = world + grab;
                effects.push(Effect::RedrawSurface);
            }
        }
        effects
    }

    fn pointer_up(&mut self, _screen: Point) -> Vec<Effect> {
        let mut effects = Vec::new();
        match std::mem::take(&mut self.interaction) {
            Interaction::Idle | Interaction::Erasing | Interaction::Panning { .. } => {}
            Interaction::Drawing { points } => {
                if points.len() >= 2 {
                    self.doc.add_stroke(Stroke::from_points(
                        points,
                        self.active_color,
                        DEFAULT_STROKE_WIDTH,
                    ));
                    self.commit(&mut effects);
                } else {
                    log::debug!("discarding {}-point stroke", points.len());
                }
                effects.push(Effect::ClearOverlay);
            }
            Interaction::MovingText { .. } => {
                self.commit(&mut effects);
            }
        }
        effects
    }

    /// Switch the active tool, force-committing any open text editor and
    /// dropping any in-flight interaction.
    pub fn set_tool(&mut self, tool: ToolKind) -> Vec<Effect> {
        let mut effects = self.force_commit_editor();
        if matches!(self.interaction, Interaction::Drawing { .. }) {
            effects.push(Effect::ClearOverlay);
        }
        self.interaction = Interaction::Idle;
        self.tool = tool;
        effects
    }

    pub fn tool(&self) -> ToolKind {
        self.tool
    }

    /// Change the display theme; the committed layer re-renders with it.
    pub fn set_theme(&mut self, theme: Theme) -> Vec<Effect> {
        self.theme = theme;
        vec![Effect::RedrawSurface]
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn set_active_color(&mut self, color: Color) {
        self.active_color = color;
    }

    pub fn active_color(&self) -> Color {
        self.active_color
    }

    /// Mirror the host input field into the open editor, if any.
    pub fn text_input(&mut self, text: &str) {
        if let Some(editor) = &mut self.editor {
            editor.buffer = text.to_string();
        }
    }

    /// Commit the open text editor (Enter or blur).
    ///
    /// Trimmed non-empty text becomes a new element and one history push;
    /// empty or whitespace-only input discards silently.
    pub fn commit_text_editor(&mut self) -> Vec<Effect> {
        let Some(editor) = self.editor.take() else {
            return Vec::new();
        };
        let mut effects = vec![Effect::CloseTextEditor];
        let text = editor.buffer.trim();
        if !text.is_empty() {
            self.doc.add_text(TextElement::new(
                editor.origin,
                text.to_string(),
                self.active_color,
                DEFAULT_FONT_SIZE,
            ));
            self.commit(&mut effects);
        }
        effects
    }

    /// Cancel the open text editor unconditionally (Escape).
    pub fn cancel_text_editor(&mut self) -> Vec<Effect> {
        if self.editor.take().is_some() {
            vec![Effect::CloseTextEditor]
        } else {
            Vec::new()
        }
    }

    pub fn editor(&self) -> Option<&TextEditor> {
        self.editor.as_ref()
    }

    /// Step back one committed state; a no-op at the oldest entry.
    pub fn undo(&mut self) -> Vec<Effect> {
        let Some(doc) = self.history.undo() else {
            return Vec::new();
        };
        self.doc = doc;
        let mut effects = vec![Effect::RedrawSurface];
        self.push_autosave(&mut effects);
        effects
    }

    /// Step forward one committed state; a no-op at the newest entry.
    pub fn redo(&mut self) -> Vec<Effect> {
        let Some(doc) = self.history.redo() else {
            return Vec::new();
        };
        self.doc = doc;
        let mut effects = vec![Effect::RedrawSurface];
        self.push_autosave(&mut effects);
        effects
    }

    /// Remove every element; one committed mutation.
    ///
    /// An open text editor is discarded, not committed, since the clear
    /// would wipe the new element in the same action.
    pub fn clear_canvas(&mut self) -> Vec<Effect> {
        let mut effects = self.cancel_text_editor();
        self.doc.clear();
        self.commit(&mut effects);
        effects
    }

    /// Live canvas resize during a drag; clamped, no history push.
    pub fn resize_canvas(&mut self, width: f64, height: f64) -> Vec<Effect> {
        self.doc.set_canvas_size(width, height);
        vec![Effect::RedrawSurface]
    }

    /// Finish a resize drag with its single history push.
    pub fn commit_resize(&mut self) -> Vec<Effect> {
        let mut effects = Vec::new();
        self.commit(&mut effects);
        effects
    }

    pub fn document(&self) -> &SketchDocument {
        &self.doc
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Mutable camera access for the platform adapter (origin, pixel ratio).
    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    pub fn history(&self) -> &HistoryLog {
        &self.history
    }

    /// The in-progress pen stroke for the overlay, if one is being drawn.
    pub fn pending_stroke(&self) -> Option<(&[Point], Color, f64)> {
        match &self.interaction {
            Interaction::Drawing { points } => {
                Some((points.as_slice(), self.active_color, DEFAULT_STROKE_WIDTH))
            }
            _ => None,
        }
    }

    /// Record one committed mutation: history push, repaint, autosave.
    fn commit(&mut self, effects: &mut Vec<Effect>) {
        self.history.push(&self.doc);
        effects.push(Effect::RedrawSurface);
        self.push_autosave(effects);
    }

    fn push_autosave(&mut self, effects: &mut Vec<Effect>) {
        match serialize::to_json(&self.doc) {
            Ok(document) => effects.push(Effect::Autosave { document }),
            Err(e) => log::error!("autosave serialization failed: {e}"),
        }
    }

    fn force_commit_editor(&mut self) -> Vec<Effect> {
        if self.editor.is_some() {
            self.commit_text_editor()
        } else {
            Vec::new()
        }
    }
}
