//! View transform between screen and world coordinates.

use kurbo::{Point, Vec2};

/// Pan-only view transform for the sketch surface.
///
/// The pan offset and canvas origin live in screen space and are never
/// persisted; the device pixel ratio is read here but applied only inside
/// rendering, never to stored coordinates.
#[derive(Debug, Clone)]
pub struct Camera {
    /// Current pan offset (screen-space vector).
    pub offset: Vec2,
    /// Canvas origin within the host window, supplied by the platform adapter.
    pub origin: Point,
    /// Device pixel ratio for render-time scaling.
    pub scale_factor: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            offset: Vec2::ZERO,
            origin: Point::ZERO,
            scale_factor: 1.0,
        }
    }
}

impl Camera {
    pub fn new() -> Self {
        Self::default()
    }

    /// Convert a raw screen point to world coordinates.
    pub fn screen_to_world(&self, screen: Point) -> Point {
        Point::new(
            screen.x - self.origin.x - self.offset.x,
            screen.y - self.origin.y - self.offset.y,
        )
    }

    /// Convert a world point to canvas-local screen coordinates.
    pub fn world_to_screen(&self, world: Point) -> Point {
        world + self.offset
    }

    /// Accumulate a screen-space pan delta.
    pub fn pan(&mut self, delta: Vec2) {
        self.offset += delta;
    }

    /// Update the canvas origin reported by the platform adapter.
    pub fn set_origin(&mut self, origin: Point) {
        self.origin = origin;
    }

    /// Update the device pixel ratio.
    pub fn set_scale_factor(&mut self, scale_factor: f64) {
        self.scale_factor = scale_factor;
    }

    /// Reset the pan offset; called whenever a document is loaded.
    pub fn reset(&mut self) {
        self.offset = Vec2::ZERO;
    }
}
