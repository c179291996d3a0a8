use std::rc::Rc;

use crate::coords::Mat4;
use crate::gl::{AttributeSlot, GlApi, Primitive, UniformId};

use super::{Geometry, Program, RenderError};

const VERT_SRC: &str = include_str!("shaders/monochrome.vert");
const FRAG_SRC: &str = include_str!("shaders/monochrome.frag");

/// Flat-color line renderer.
///
/// Sets a transform and a color uniform and draws line segments over
/// every vertex of the bound geometry.
pub struct MonochromeProgram {
    gl: Rc<dyn GlApi>,
    program: Program,
    position_slot: AttributeSlot,
    u_mvp: Option<UniformId>,
    u_color: Option<UniformId>,
}

impl MonochromeProgram {
    /// Builds the renderer from the built-in shader pair, with the
    /// position attribute on `position_slot`.
    pub fn create(
        gl: Rc<dyn GlApi>,
        position_slot: AttributeSlot,
    ) -> Result<MonochromeProgram, RenderError> {
        Self::with_sources(gl, VERT_SRC, FRAG_SRC, position_slot, "a_pos")
    }

    /// Like [`MonochromeProgram::create`] but with caller-supplied
    /// shader sources; `position_name` is bound to `position_slot`
    /// before the program is linked.
    pub fn with_sources(
        gl: Rc<dyn GlApi>,
        vertex_source: &str,
        fragment_source: &str,
        position_slot: AttributeSlot,
        position_name: &str,
    ) -> Result<MonochromeProgram, RenderError> {
        let program = Program::link(
            gl.clone(),
            vertex_source,
            fragment_source,
            &[(position_slot, position_name)],
        )?;
        let u_mvp = program.uniform("u_mvp");
        let u_color = program.uniform("u_color");
        Ok(MonochromeProgram {
            gl,
            program,
            position_slot,
            u_mvp,
            u_color,
        })
    }

    /// Issues exactly one Lines draw call over the geometry's vertex
    /// count. Geometry without positions draws nothing.
    pub fn draw(&self, geometry: &Geometry, mvp: &Mat4, color: [f32; 4]) {
        let Some(positions) = geometry.positions() else {
            return;
        };

        self.program.bind();
        if let Some(u) = self.u_mvp {
            self.gl.set_uniform_mat4(u, &mvp.m);
        }
        if let Some(u) = self.u_color {
            self.gl.set_uniform_vec4(u, color);
        }

        self.gl.enable_vertex_attrib_array(self.position_slot);
        self.gl.bind_array_buffer(Some(positions));
        self.gl.vertex_attrib_pointer_f32(self.position_slot, 3);
        self.gl.draw_arrays(Primitive::Lines, 0, geometry.vertex_count());
        self.gl.disable_vertex_attrib_array(self.position_slot);
        self.gl.bind_array_buffer(None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gl::recording::RecordingDriver;

    #[test]
    fn one_render_iteration_issues_one_lines_draw_over_four_vertices() {
        let rec = Rc::new(RecordingDriver::new());
        let gl: Rc<dyn GlApi> = rec.clone();

        let slot = AttributeSlot::new(0);
        let program = MonochromeProgram::create(gl.clone(), slot).unwrap();

        // Cross pattern: one horizontal and one vertical segment.
        let (width, height) = (800.0f32, 600.0f32);
        let cross = [
            0.0,
            height / 2.0,
            0.0,
            width,
            height / 2.0,
            0.0,
            width / 2.0,
            0.0,
            0.0,
            width / 2.0,
            height,
            0.0,
        ];
        let geometry = Geometry::with_positions(gl, &cross).unwrap();

        let mvp = Mat4::ortho_pixels(width, height);
        program.draw(&geometry, &mvp, [1.0, 1.0, 0.0, 0.7]);

        let calls = rec.draw_calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].primitive, Primitive::Lines);
        assert_eq!(calls[0].first, 0);
        assert_eq!(calls[0].count, 4);
    }

    #[test]
    fn empty_geometry_draws_nothing() {
        let rec = Rc::new(RecordingDriver::new());
        let gl: Rc<dyn GlApi> = rec.clone();

        let slot = AttributeSlot::new(0);
        let program = MonochromeProgram::create(gl.clone(), slot).unwrap();
        let geometry = Geometry::new(gl);
        program.draw(&geometry, &Mat4::IDENTITY, [1.0; 4]);

        assert!(rec.draw_calls().is_empty());
    }
}
