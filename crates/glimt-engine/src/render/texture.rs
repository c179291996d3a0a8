use std::rc::Rc;

use crate::gl::{GlApi, TextureId};

use super::{IndexedSurface, RenderError};

/// A 2D GPU texture built from a palette-indexed surface.
///
/// Linear filtering, repeat wrapping. The handle is released on drop.
pub struct Texture {
    gl: Rc<dyn GlApi>,
    id: TextureId,
    width: u32,
    height: u32,
}

impl Texture {
    /// Consumes `surface` into a GPU texture.
    ///
    /// Contract: the surface must carry exactly 8 bits per pixel.
    /// Anything else is a caller bug and aborts with a diagnostic
    /// before any palette lookup is attempted.
    pub fn from_surface(gl: Rc<dyn GlApi>, surface: &IndexedSurface) -> Result<Texture, RenderError> {
        assert_eq!(
            surface.bits_per_pixel(),
            8,
            "texture source must be an 8-bit palette-indexed surface, got {} bpp",
            surface.bits_per_pixel()
        );

        let rgba = surface.to_rgba_flipped();

        let id = gl.create_texture()?;
        gl.bind_texture_2d(Some(id));
        gl.tex_parameters_linear_repeat();
        gl.tex_image_2d_rgba(surface.width() as i32, surface.height() as i32, &rgba);
        gl.bind_texture_2d(None);

        Ok(Texture {
            gl,
            id,
            width: surface.width(),
            height: surface.height(),
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub(crate) fn id(&self) -> TextureId {
        self.id
    }
}

impl Drop for Texture {
    fn drop(&mut self) {
        self.gl.delete_texture(self.id);
    }
}
