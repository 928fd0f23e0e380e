//! Software implementation of the core render-target contract.
//!
//! Polyline segments are stroked as anti-aliased capsules, which gives the
//! required round caps and joins for free. Text is blitted from the embedded
//! 8x8 glyph bitmaps, scaled into the same advance cells the core's text
//! metrics define.

use crate::pixmap::Pixmap;
use font8x8::legacy::BASIC_LEGACY;
use inkpad_core::element::GLYPH_ADVANCE;
use inkpad_core::render::RenderTarget;
use kurbo::Point;

impl RenderTarget for Pixmap {
    fn clear(&mut self, color: peniko::Color) {
        self.fill(color);
    }

    fn stroke_polyline(&mut self, points: &[Point], width: f64, color: peniko::Color) {
        let radius = (width / 2.0).max(0.5);
        match points {
            [] => {}
            [p] => self.fill_capsule(*p, *p, radius, color),
            _ => {
                for pair in points.windows(2) {
                    self.fill_capsule(pair[0], pair[1], radius, color);
                }
            }
        }
    }

    fn fill_text(&mut self, text: &str, origin: Point, font_size: f64, color: peniko::Color) {
        let advance = font_size * GLYPH_ADVANCE;
        let mut left = origin.x;
        for ch in text.chars() {
            self.blit_glyph(ch, left, origin.y, advance, font_size, color);
            left += advance;
        }
    }
}

impl Pixmap {
    /// Stroke one segment as a filled capsule with a one-pixel AA fringe.
    fn fill_capsule(&mut self, a: Point, b: Point, radius: f64, color: peniko::Color) {
        let pad = radius + 1.0;
        let x0 = ((a.x.min(b.x) - pad).floor() as i64).max(0);
        let x1 = ((a.x.max(b.x) + pad).ceil() as i64).min(self.width() as i64 - 1);
        let y0 = ((a.y.min(b.y) - pad).floor() as i64).max(0);
        let y1 = ((a.y.max(b.y) + pad).ceil() as i64).min(self.height() as i64 - 1);

        for y in y0..=y1 {
            for x in x0..=x1 {
                let center = Point::new(x as f64 + 0.5, y as f64 + 0.5);
                let dist = segment_distance(center, a, b);
                let coverage = (radius + 0.5 - dist).clamp(0.0, 1.0);
                if coverage > 0.0 {
                    self.blend_pixel(x, y, color, coverage);
                }
            }
        }
    }

    /// Blit one glyph scaled into a `cell_w` x `cell_h` cell at (`left`, `top`).
    fn blit_glyph(
        &mut self,
        ch: char,
        left: f64,
        top: f64,
        cell_w: f64,
        cell_h: f64,
        color: peniko::Color,
    ) {
        if cell_w <= 0.0 || cell_h <= 0.0 {
            return;
        }
        let Some(glyph) = usize::try_from(ch as u32)
            .ok()
            .filter(|&i| i < BASIC_LEGACY.len())
            .map(|i| BASIC_LEGACY[i])
        else {
            log::trace!("no glyph bitmap for {ch:?}, leaving cell blank");
            return;
        };

        let x0 = (left.floor() as i64).max(0);
        let x1 = ((left + cell_w).ceil() as i64).min(self.width() as i64);
        let y0 = (top.floor() as i64).max(0);
        let y1 = ((top + cell_h).ceil() as i64).min(self.height() as i64);
        for y in y0..y1 {
            for x in x0..x1 {
                let u = (x as f64 + 0.5 - left) / cell_w;
                let v = (y as f64 + 0.5 - top) / cell_h;
                if !(0.0..1.0).contains(&u) || !(0.0..1.0).contains(&v) {
                    continue;
                }
                let gx = ((u * 8.0) as usize).min(7);
                let gy = ((v * 8.0) as usize).min(7);
                if glyph[gy] & (1 << gx) != 0 {
                    self.blend_pixel(x, y, color, 1.0);
                }
            }
        }
    }
}

/// Distance from a point to the segment a->b.
fn segment_distance(point: Point, a: Point, b: Point) -> f64 {
    let seg = b - a;
    let pv = point - a;
    let len_sq = seg.hypot2();
    if len_sq < f64::EPSILON {
        return pv.hypot();
    }
    let t = (pv.dot(seg) / len_sq).clamp(0.0, 1.0);
    let proj = Point::new(a.x + t * seg.x, a.y + t * seg.y);
    (point - proj).hypot()
}
