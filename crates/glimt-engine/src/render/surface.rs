/// Palette entry of an [`IndexedSurface`].
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb8 {
    pub const BLACK: Rgb8 = Rgb8 { r: 0, g: 0, b: 0 };
}

/// CPU-side palette-indexed image, as handed over by the font and
/// image decoding collaborators. Consumed once to build a GPU texture.
pub struct IndexedSurface {
    width: u32,
    height: u32,
    pitch: usize,
    bits_per_pixel: u8,
    pixels: Vec<u8>,
    palette: Vec<Rgb8>,
}

impl IndexedSurface {
    /// Wraps an already-decoded surface. `pixels` holds `height` rows
    /// of `width` palette indices each.
    pub fn from_parts(
        width: u32,
        height: u32,
        bits_per_pixel: u8,
        pixels: Vec<u8>,
        palette: Vec<Rgb8>,
    ) -> IndexedSurface {
        assert!(
            pixels.len() >= (width as usize) * (height as usize),
            "surface pixel data shorter than width * height"
        );
        IndexedSurface {
            width,
            height,
            pitch: width as usize,
            bits_per_pixel,
            pixels,
            palette,
        }
    }

    /// 8-bit surface whose palette maps every index to its own gray
    /// level. Used for glyph coverage bitmaps and grayscale images.
    pub fn grayscale(width: u32, height: u32, pixels: Vec<u8>) -> IndexedSurface {
        let palette = (0..=255u8).map(|v| Rgb8 { r: v, g: v, b: v }).collect();
        IndexedSurface::from_parts(width, height, 8, pixels, palette)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn bits_per_pixel(&self) -> u8 {
        self.bits_per_pixel
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Resolves every index through the palette into an RGBA buffer of
    /// exactly width * height * 4 bytes, inverting the vertical scan
    /// order: source row 0 comes out last.
    pub(crate) fn to_rgba_flipped(&self) -> Vec<u8> {
        let width = self.width as usize;
        let height = self.height as usize;
        let mut out = Vec::with_capacity(width * height * 4);
        for row in (0..height).rev() {
            let start = row * self.pitch;
            for col in 0..width {
                let index = self.pixels[start + col] as usize;
                let color = self.palette.get(index).copied().unwrap_or(Rgb8::BLACK);
                out.extend_from_slice(&[color.r, color.g, color.b, 255]);
            }
        }
        out
    }
}
