use std::rc::Rc;

use crate::coords::Mat4;
use crate::gl::{AttributeSlot, GlApi};
use crate::render::{Geometry, RenderError, TextureProgram};

use super::Font;

// Any pair in 0..=15 works; the two slots just have to be disjoint.
const POSITION_SLOT: AttributeSlot = AttributeSlot::new(12);
const TEXCOORD_SLOT: AttributeSlot = AttributeSlot::new(7);

/// Draws a line of text by laying glyph quads left to right, advancing
/// the pen by each glyph's advance width. One quad and one draw call
/// per visible glyph.
pub struct TextWriter {
    gl: Rc<dyn GlApi>,
    program: TextureProgram,
}

impl TextWriter {
    pub fn new(gl: Rc<dyn GlApi>) -> Result<TextWriter, RenderError> {
        let program = TextureProgram::create(gl.clone(), POSITION_SLOT, TEXCOORD_SLOT)?;
        Ok(TextWriter { gl, program })
    }

    /// Writes `text` with its baseline starting at (x, y) in pixel
    /// coordinates, origin at the bottom-left of a viewport of the
    /// given size.
    pub fn write(
        &self,
        font: &Font,
        text: &str,
        x: f32,
        y: f32,
        viewport: (u32, u32),
    ) -> Result<(), RenderError> {
        let mvp = Mat4::ortho_pixels(viewport.0 as f32, viewport.1 as f32);
        let mut pen_x = x;
        for c in text.chars() {
            let Some(glyph) = font.glyph(c) else { continue };
            if let Some(texture) = &glyph.texture {
                let gx = pen_x + glyph.xmin as f32;
                let gy = y + glyph.ymin as f32;
                let w = texture.width() as f32;
                let h = texture.height() as f32;
                let mut quad = Geometry::with_positions(
                    self.gl.clone(),
                    &[
                        gx, gy, 0.0, //
                        gx + w, gy, 0.0, //
                        gx + w, gy + h, 0.0, //
                        gx, gy + h, 0.0,
                    ],
                )?;
                quad.set_texcoords(&[0.0, 0.0, 1.0, 0.0, 1.0, 1.0, 0.0, 1.0])?;
                self.program.draw(&quad, texture, &mvp)?;
            }
            pen_x += glyph.advance;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gl::Primitive;
    use crate::gl::recording::RecordingDriver;
    use crate::render::{IndexedSurface, Texture};
    use crate::text::font::Glyph;

    // Byte-wise read; the recorded upload buffers carry no alignment
    // guarantee.
    fn floats(bytes: &[u8]) -> Vec<f32> {
        bytes
            .chunks_exact(4)
            .map(|b| f32::from_ne_bytes(b.try_into().unwrap()))
            .collect()
    }

    fn glyph_texture(gl: &Rc<dyn GlApi>, width: u32, height: u32) -> Texture {
        let surface =
            IndexedSurface::grayscale(width, height, vec![0; (width * height) as usize]);
        Texture::from_surface(gl.clone(), &surface).unwrap()
    }

    // 'a' 4x6 advance 5 xmin 1, 'b' 3x6 advance 6 ymin -1, space
    // advance 2 with no texture.
    fn test_font(gl: &Rc<dyn GlApi>) -> Font {
        let mut glyphs: Vec<Option<Glyph>> = Vec::new();
        glyphs.resize_with(128, || None);
        glyphs[b' ' as usize] = Some(Glyph {
            texture: None,
            advance: 2.0,
            xmin: 0,
            ymin: 0,
        });
        glyphs[b'a' as usize] = Some(Glyph {
            texture: Some(glyph_texture(gl, 4, 6)),
            advance: 5.0,
            xmin: 1,
            ymin: 0,
        });
        glyphs[b'b' as usize] = Some(Glyph {
            texture: Some(glyph_texture(gl, 3, 6)),
            advance: 6.0,
            xmin: 0,
            ymin: -1,
        });
        Font::from_glyphs(glyphs, 8.0)
    }

    #[test]
    fn one_quad_per_visible_glyph() {
        let rec = Rc::new(RecordingDriver::new());
        let gl: Rc<dyn GlApi> = rec.clone();
        let writer = TextWriter::new(gl.clone()).unwrap();
        let font = test_font(&gl);

        writer.write(&font, "a bé", 10.0, 20.0, (800, 600)).unwrap();

        // 'a' and 'b' draw; the space advances without drawing; 'é' is
        // outside the atlas and is skipped.
        let calls = rec.draw_calls();
        assert_eq!(calls.len(), 2);
        assert!(
            calls
                .iter()
                .all(|c| c.primitive == Primitive::TriangleFan && c.count == 4)
        );
    }

    #[test]
    fn pen_advances_by_summed_glyph_advances() {
        let rec = Rc::new(RecordingDriver::new());
        let gl: Rc<dyn GlApi> = rec.clone();
        let writer = TextWriter::new(gl.clone()).unwrap();
        let font = test_font(&gl);

        writer.write(&font, "a b", 10.0, 20.0, (800, 600)).unwrap();

        // Positions then texcoords per drawn glyph.
        let uploads = rec.array_buffer_uploads();
        assert_eq!(uploads.len(), 4);

        // 'a' starts at the pen plus its own left bearing.
        let a_pos = floats(&uploads[0]);
        assert_eq!((a_pos[0], a_pos[1]), (11.0, 20.0));

        // 'b' starts after the advances of 'a' and the space, dropped
        // by its ymin.
        let b_pos = floats(&uploads[2]);
        assert_eq!((b_pos[0], b_pos[1]), (17.0, 19.0));
    }
}
