use std::rc::Rc;

use crate::gl::{BufferId, GlApi};

use super::RenderError;

const POSITION_COMPONENTS: usize = 3;
const TEXCOORD_COMPONENTS: usize = 2;

/// One logical piece of geometry: a position buffer and, optionally, a
/// texture-coordinate buffer.
///
/// Buffers are write-once: data is uploaded as static storage at set
/// time and never mutated or resized afterwards. The drawable vertex
/// count is derived from the uploaded position data.
pub struct Geometry {
    gl: Rc<dyn GlApi>,
    positions: Option<BufferId>,
    texcoords: Option<BufferId>,
    vertex_count: i32,
}

impl Geometry {
    pub fn new(gl: Rc<dyn GlApi>) -> Geometry {
        Geometry {
            gl,
            positions: None,
            texcoords: None,
            vertex_count: 0,
        }
    }

    /// Creates geometry with its position buffer already uploaded.
    pub fn with_positions(gl: Rc<dyn GlApi>, positions: &[f32]) -> Result<Geometry, RenderError> {
        let mut geometry = Geometry::new(gl);
        geometry.set_positions(positions)?;
        Ok(geometry)
    }

    /// Uploads vertex positions (3 f32 per vertex, tightly packed).
    ///
    /// Write-once: calling this on geometry that already has positions
    /// is a contract violation.
    pub fn set_positions(&mut self, positions: &[f32]) -> Result<(), RenderError> {
        assert!(self.positions.is_none(), "geometry positions are write-once");
        debug_assert!(positions.len() % POSITION_COMPONENTS == 0);

        self.positions = Some(self.upload(positions)?);
        self.vertex_count = (positions.len() / POSITION_COMPONENTS) as i32;
        Ok(())
    }

    /// Attaches texture coordinates (2 f32 per vertex, tightly packed)
    /// to this geometry. Write-once, like positions.
    pub fn set_texcoords(&mut self, texcoords: &[f32]) -> Result<(), RenderError> {
        assert!(self.texcoords.is_none(), "geometry texcoords are write-once");
        debug_assert!(texcoords.len() % TEXCOORD_COMPONENTS == 0);

        self.texcoords = Some(self.upload(texcoords)?);
        Ok(())
    }

    fn upload(&self, data: &[f32]) -> Result<BufferId, RenderError> {
        let buffer = self.gl.create_buffer()?;
        self.gl.bind_array_buffer(Some(buffer));
        self.gl.array_buffer_data_static(bytemuck::cast_slice(data));
        self.gl.bind_array_buffer(None);
        Ok(buffer)
    }

    /// Number of vertices in the position buffer.
    pub fn vertex_count(&self) -> i32 {
        self.vertex_count
    }

    pub(crate) fn positions(&self) -> Option<BufferId> {
        self.positions
    }

    pub(crate) fn texcoords(&self) -> Option<BufferId> {
        self.texcoords
    }
}

impl Drop for Geometry {
    fn drop(&mut self) {
        if let Some(buffer) = self.positions.take() {
            self.gl.delete_buffer(buffer);
        }
        if let Some(buffer) = self.texcoords.take() {
            self.gl.delete_buffer(buffer);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gl::recording::RecordingDriver;

    #[test]
    fn vertex_count_derives_from_uploaded_length() {
        let rec = Rc::new(RecordingDriver::new());
        let gl: Rc<dyn GlApi> = rec.clone();
        let geometry = Geometry::with_positions(gl, &[0.0; 12]).unwrap();
        assert_eq!(geometry.vertex_count(), 4);
        // 12 f32 = 48 bytes of tightly packed position data.
        assert_eq!(rec.buffer_size(geometry.positions().unwrap()), Some(48));
    }

    #[test]
    #[should_panic(expected = "write-once")]
    fn positions_cannot_be_uploaded_twice() {
        let gl: Rc<dyn GlApi> = Rc::new(RecordingDriver::new());
        let mut geometry = Geometry::with_positions(gl, &[0.0; 3]).unwrap();
        let _ = geometry.set_positions(&[1.0; 3]);
    }

    #[test]
    fn dropping_geometry_releases_both_buffers() {
        let rec = Rc::new(RecordingDriver::new());
        let gl: Rc<dyn GlApi> = rec.clone();
        let mut geometry = Geometry::with_positions(gl, &[0.0; 12]).unwrap();
        geometry.set_texcoords(&[0.0; 8]).unwrap();
        drop(geometry);
        assert_eq!(rec.live_handles(), 0);
    }
}
