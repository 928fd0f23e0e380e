//! Double-buffered screen surfaces.
//!
//! The committed document renders onto a persistent [`DrawingSurface`]; the
//! in-progress pen stroke lives on a transient [`InputOverlay`] so a move
//! sample never forces a full document redraw. [`SketchView`] owns both and
//! applies engine effects to them.

use crate::pixmap::Pixmap;
use inkpad_core::engine::{Effect, SketchEngine};
use inkpad_core::render;

fn physical(logical: f64, scale_factor: f64) -> u32 {
    (logical * scale_factor).round().max(1.0) as u32
}

/// Persistent layer holding the committed document.
#[derive(Debug)]
pub struct DrawingSurface {
    pixmap: Pixmap,
}

impl DrawingSurface {
    /// Allocate a surface of `width` x `height` logical pixels at the given
    /// device pixel ratio.
    pub fn new(width: f64, height: f64, scale_factor: f64) -> Self {
        Self {
            pixmap: Pixmap::new(
                physical(width, scale_factor),
                physical(height, scale_factor),
            ),
        }
    }

    /// Full redraw: theme background, then every committed element.
    pub fn redraw(&mut self, engine: &SketchEngine) {
        render::draw_document(
            &mut self.pixmap,
            engine.document(),
            engine.camera(),
            engine.theme(),
        );
    }

    pub fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }
}

/// Transient layer holding only the in-progress pen stroke.
#[derive(Debug)]
pub struct InputOverlay {
    pixmap: Pixmap,
}

impl InputOverlay {
    pub fn new(width: f64, height: f64, scale_factor: f64) -> Self {
        Self {
            pixmap: Pixmap::new(
                physical(width, scale_factor),
                physical(height, scale_factor),
            ),
        }
    }

    /// Redraw the pending stroke, if the engine has one.
    pub fn redraw(&mut self, engine: &SketchEngine) {
        match engine.pending_stroke() {
            Some((points, color, width)) => render::draw_pending_stroke(
                &mut self.pixmap,
                points,
                color,
                width,
                engine.camera(),
                engine.theme(),
            ),
            None => self.clear(),
        }
    }

    /// Drop everything the overlay shows.
    pub fn clear(&mut self) {
        self.pixmap.fill(peniko::Color::TRANSPARENT);
    }

    pub fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }
}

/// Both screen layers plus the effect plumbing between them and the engine.
#[derive(Debug)]
pub struct SketchView {
    pub surface: DrawingSurface,
    pub overlay: InputOverlay,
}

impl SketchView {
    pub fn new(width: f64, height: f64, scale_factor: f64) -> Self {
        Self {
            surface: DrawingSurface::new(width, height, scale_factor),
            overlay: InputOverlay::new(width, height, scale_factor),
        }
    }

    /// Apply the repaint effects of one engine turn.
    ///
    /// Editor and autosave effects are the host's business and pass through
    /// untouched.
    pub fn apply(&mut self, engine: &SketchEngine, effects: &[Effect]) {
        for effect in effects {
            match effect {
                Effect::RedrawSurface => self.surface.redraw(engine),
                Effect::RedrawOverlay => self.overlay.redraw(engine),
                Effect::ClearOverlay => self.overlay.clear(),
                Effect::OpenTextEditor { .. }
                | Effect::CloseTextEditor
                | Effect::Autosave { .. } => {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use inkpad_core::engine::PointerEvent;
    use inkpad_core::render::Theme;
    use kurbo::Point;

    fn pointer(engine: &mut SketchEngine, view: &mut SketchView, event: PointerEvent) {
        let effects = engine.handle_pointer(event);
        view.apply(engine, &effects);
    }

    #[test]
    fn test_surface_sized_by_scale_factor() {
        let surface = DrawingSurface::new(100.0, 50.0, 2.0);
        assert_eq!(surface.pixmap().width(), 200);
        assert_eq!(surface.pixmap().height(), 100);
    }

    #[test]
    fn test_redraw_fills_theme_background() {
        let mut engine = SketchEngine::new();
        let mut surface = DrawingSurface::new(64.0, 64.0, 1.0);
        engine.set_theme(Theme::Dark);
        surface.redraw(&engine);
        assert_eq!(surface.pixmap().pixel(10, 10), Some([30, 30, 30, 255]));
    }

    #[test]
    fn test_overlay_tracks_pending_stroke() {
        let mut engine = SketchEngine::new();
        let mut view = SketchView::new(64.0, 64.0, 1.0);

        pointer(
            &mut engine,
            &mut view,
            PointerEvent::Down {
                position: Point::new(10.0, 32.0),
            },
        );
        pointer(
            &mut engine,
            &mut view,
            PointerEvent::Move {
                position: Point::new(50.0, 32.0),
            },
        );
        // Mid-drag: ink on the overlay, none on the committed surface.
        assert!(view.overlay.pixmap().pixel(30, 32).unwrap()[3] > 0);
        assert_eq!(view.surface.pixmap().pixel(30, 32), Some([0, 0, 0, 0]));

        pointer(
            &mut engine,
            &mut view,
            PointerEvent::Up {
                position: Point::new(50.0, 32.0),
            },
        );
        // Finalize moves the ink to the surface and empties the overlay.
        assert_eq!(view.overlay.pixmap().pixel(30, 32), Some([0, 0, 0, 0]));
        let committed = view.surface.pixmap().pixel(30, 32).unwrap();
        assert!(committed[0] < 128 && committed[3] == 255);
    }

    #[test]
    fn test_black_ink_displays_white_on_dark_surface() {
        let mut engine = SketchEngine::new();
        let mut view = SketchView::new(64.0, 64.0, 1.0);
        engine.set_theme(Theme::Dark);
        pointer(
            &mut engine,
            &mut view,
            PointerEvent::Down {
                position: Point::new(10.0, 32.0),
            },
        );
        pointer(
            &mut engine,
            &mut view,
            PointerEvent::Move {
                position: Point::new(50.0, 32.0),
            },
        );
        let effects = engine.handle_pointer(PointerEvent::Up {
            position: Point::new(50.0, 32.0),
        });
        view.apply(&engine, &effects);
        assert_eq!(view.surface.pixmap().pixel(30, 32), Some([255, 255, 255, 255]));
    }
}
