use std::error::Error;
use std::fmt;
use std::rc::Rc;

use crate::gl::GlApi;
use crate::render::{IndexedSurface, Texture};

const FIRST_CHAR: u8 = 32;
const LAST_CHAR: u8 = 126;

/// Error returned by [`Font::load`].
#[derive(Debug, Clone)]
pub struct FontError(String);

impl fmt::Display for FontError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "font load error: {}", self.0)
    }
}

impl Error for FontError {}

/// One rasterized glyph. Glyphs with no coverage (space) carry an
/// advance only.
pub(crate) struct Glyph {
    pub texture: Option<Texture>,
    pub advance: f32,
    pub xmin: i32,
    pub ymin: i32,
}

/// Fixed ASCII glyph atlas: one texture per printable character,
/// rasterized once at a single pixel size and immutable afterwards.
/// No kerning, no shaping, no multi-size support.
pub struct Font {
    glyphs: Vec<Option<Glyph>>,
    line_height: f32,
}

impl Font {
    /// Parses `bytes` as a TrueType/OpenType font and rasterizes the
    /// printable ASCII range at `px` pixels. Coverage maps go through
    /// a grayscale palette surface, so the glyph textures obey the
    /// same 8-bit contract as every other texture source.
    pub fn load(gl: Rc<dyn GlApi>, bytes: &[u8], px: f32) -> Result<Font, FontError> {
        let font = fontdue::Font::from_bytes(bytes, fontdue::FontSettings::default())
            .map_err(|e| FontError(e.to_string()))?;

        let mut glyphs: Vec<Option<Glyph>> = Vec::new();
        glyphs.resize_with(128, || None);
        for code in FIRST_CHAR..=LAST_CHAR {
            let c = code as char;
            let (metrics, coverage) = font.rasterize(c, px);
            let texture = if metrics.width == 0 || metrics.height == 0 {
                None
            } else {
                let surface = IndexedSurface::grayscale(
                    metrics.width as u32,
                    metrics.height as u32,
                    coverage,
                );
                Some(
                    Texture::from_surface(gl.clone(), &surface)
                        .map_err(|e| FontError(e.to_string()))?,
                )
            };
            glyphs[code as usize] = Some(Glyph {
                texture,
                advance: metrics.advance_width,
                xmin: metrics.xmin,
                ymin: metrics.ymin,
            });
        }

        log::debug!("rasterized {} glyphs at {px}px", (LAST_CHAR - FIRST_CHAR) + 1);
        Ok(Font {
            glyphs,
            line_height: px,
        })
    }

    /// Builds an atlas from prebuilt glyphs, bypassing rasterization.
    /// `glyphs` is indexed by character code, 128 entries.
    #[cfg(test)]
    pub(crate) fn from_glyphs(glyphs: Vec<Option<Glyph>>, line_height: f32) -> Font {
        assert_eq!(glyphs.len(), 128);
        Font { glyphs, line_height }
    }

    pub(crate) fn glyph(&self, c: char) -> Option<&Glyph> {
        self.glyphs.get(c as usize).and_then(|g| g.as_ref())
    }

    pub fn line_height(&self) -> f32 {
        self.line_height
    }

    /// Width of `text` when laid out by summing glyph advances.
    /// Characters outside the atlas contribute nothing.
    pub fn measure(&self, text: &str) -> f32 {
        text.chars()
            .filter_map(|c| self.glyph(c))
            .map(|g| g.advance)
            .sum()
    }
}
