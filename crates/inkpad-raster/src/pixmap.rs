//! Owned RGBA8 pixel buffer.

use png::{BitDepth, ColorType, Encoder};

/// A row-major RGBA8 raster surface.
#[derive(Debug, Clone)]
pub struct Pixmap {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl Pixmap {
    /// Create a transparent pixmap; degenerate sizes round up to one pixel.
    pub fn new(width: u32, height: u32) -> Self {
        let width = width.max(1);
        let height = height.max(1);
        Self {
            width,
            height,
            data: vec![0; (width * height * 4) as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw RGBA bytes, row-major.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Overwrite every pixel with `color`.
    pub fn fill(&mut self, color: peniko::Color) {
        let rgba = color.to_rgba8();
        let px = [rgba.r, rgba.g, rgba.b, rgba.a];
        for chunk in self.data.chunks_exact_mut(4) {
            chunk.copy_from_slice(&px);
        }
    }

    /// Source-over blend of `color` at fractional `coverage` into one pixel.
    ///
    /// Out-of-bounds coordinates are ignored.
    pub fn blend_pixel(&mut self, x: i64, y: i64, color: peniko::Color, coverage: f64) {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return;
        }
        let rgba = color.to_rgba8();
        let sa = (rgba.a as f64 / 255.0) * coverage.clamp(0.0, 1.0);
        if sa <= 0.0 {
            return;
        }

        let i = ((y as u32 * self.width + x as u32) * 4) as usize;
        let da = self.data[i + 3] as f64 / 255.0;
        let oa = sa + da * (1.0 - sa);
        let src = [rgba.r as f64, rgba.g as f64, rgba.b as f64];
        for c in 0..3 {
            let dc = self.data[i + c] as f64;
            self.data[i + c] = ((src[c] * sa + dc * da * (1.0 - sa)) / oa).round() as u8;
        }
        self.data[i + 3] = (oa * 255.0).round() as u8;
    }

    /// Read one pixel as `[r, g, b, a]`; `None` when out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y * self.width + x) * 4) as usize;
        Some([
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ])
    }

    /// Encode as a PNG byte stream.
    pub fn encode_png(&self) -> Result<Vec<u8>, png::EncodingError> {
        let mut bytes = Vec::new();
        {
            let mut encoder = Encoder::new(&mut bytes, self.width, self.height);
            encoder.set_color(ColorType::Rgba);
            encoder.set_depth(BitDepth::Eight);
            let mut writer = encoder.write_header()?;
            writer.write_image_data(&self.data)?;
        }
        Ok(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_transparent() {
        let pixmap = Pixmap::new(4, 4);
        assert_eq!(pixmap.pixel(0, 0), Some([0, 0, 0, 0]));
    }

    #[test]
    fn test_degenerate_size_rounds_up() {
        let pixmap = Pixmap::new(0, 0);
        assert_eq!(pixmap.width(), 1);
        assert_eq!(pixmap.height(), 1);
    }

    #[test]
    fn test_fill() {
        let mut pixmap = Pixmap::new(2, 2);
        pixmap.fill(peniko::Color::from_rgba8(10, 20, 30, 255));
        assert_eq!(pixmap.pixel(1, 1), Some([10, 20, 30, 255]));
    }

    #[test]
    fn test_blend_full_coverage_replaces() {
        let mut pixmap = Pixmap::new(2, 2);
        pixmap.fill(peniko::Color::from_rgba8(255, 255, 255, 255));
        pixmap.blend_pixel(0, 0, peniko::Color::from_rgba8(0, 0, 0, 255), 1.0);
        assert_eq!(pixmap.pixel(0, 0), Some([0, 0, 0, 255]));
    }

    #[test]
    fn test_blend_half_coverage_mixes() {
        let mut pixmap = Pixmap::new(1, 1);
        pixmap.fill(peniko::Color::from_rgba8(255, 255, 255, 255));
        pixmap.blend_pixel(0, 0, peniko::Color::from_rgba8(0, 0, 0, 255), 0.5);
        let [r, g, b, a] = pixmap.pixel(0, 0).unwrap();
        assert_eq!(a, 255);
        assert!(r > 100 && r < 155, "expected a mid grey, got {r}");
        assert_eq!(r, g);
        assert_eq!(g, b);
    }

    #[test]
    fn test_blend_out_of_bounds_ignored() {
        let mut pixmap = Pixmap::new(2, 2);
        pixmap.blend_pixel(-1, 0, peniko::Color::from_rgba8(255, 0, 0, 255), 1.0);
        pixmap.blend_pixel(2, 0, peniko::Color::from_rgba8(255, 0, 0, 255), 1.0);
        assert_eq!(pixmap.pixel(0, 0), Some([0, 0, 0, 0]));
    }

    #[test]
    fn test_encode_png_signature() {
        let pixmap = Pixmap::new(3, 3);
        let bytes = pixmap.encode_png().unwrap();
        assert_eq!(&bytes[..8], &[0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1a, b'\n']);
    }
}
