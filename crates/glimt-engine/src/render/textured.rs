use std::rc::Rc;

use crate::coords::Mat4;
use crate::gl::{AttributeSlot, GlApi, Primitive, UniformId};

use super::{Geometry, Program, RenderError, Texture};

const VERT_SRC: &str = include_str!("shaders/texture.vert");
const FRAG_SRC: &str = include_str!("shaders/texture.frag");

/// Textured quad renderer.
///
/// Sets a transform and a texture-unit uniform and draws the
/// geometry's four corners as a triangle fan (the core-profile quad).
pub struct TextureProgram {
    gl: Rc<dyn GlApi>,
    program: Program,
    position_slot: AttributeSlot,
    texcoord_slot: AttributeSlot,
    u_mvp: Option<UniformId>,
    u_sampler: Option<UniformId>,
}

impl TextureProgram {
    /// Builds the renderer from the built-in shader pair. The two
    /// slots must be disjoint.
    pub fn create(
        gl: Rc<dyn GlApi>,
        position_slot: AttributeSlot,
        texcoord_slot: AttributeSlot,
    ) -> Result<TextureProgram, RenderError> {
        let program = Program::link(
            gl.clone(),
            VERT_SRC,
            FRAG_SRC,
            &[(position_slot, "a_pos"), (texcoord_slot, "a_tc")],
        )?;
        let u_mvp = program.uniform("u_mvp");
        let u_sampler = program.uniform("u_sampler");
        Ok(TextureProgram {
            gl,
            program,
            position_slot,
            texcoord_slot,
            u_mvp,
            u_sampler,
        })
    }

    /// Issues exactly one TriangleFan draw call over the geometry's
    /// vertex count with `texture` bound on unit 0.
    pub fn draw(
        &self,
        geometry: &Geometry,
        texture: &Texture,
        mvp: &Mat4,
    ) -> Result<(), RenderError> {
        let (Some(positions), Some(texcoords)) = (geometry.positions(), geometry.texcoords())
        else {
            return Err(RenderError::IncompleteGeometry);
        };

        self.program.bind();
        self.gl.active_texture_unit(0);
        self.gl.bind_texture_2d(Some(texture.id()));
        if let Some(u) = self.u_mvp {
            self.gl.set_uniform_mat4(u, &mvp.m);
        }
        if let Some(u) = self.u_sampler {
            // The value is the texture unit, not the texture name.
            self.gl.set_uniform_i32(u, 0);
        }

        self.gl.enable_vertex_attrib_array(self.position_slot);
        self.gl.bind_array_buffer(Some(positions));
        self.gl.vertex_attrib_pointer_f32(self.position_slot, 3);

        self.gl.enable_vertex_attrib_array(self.texcoord_slot);
        self.gl.bind_array_buffer(Some(texcoords));
        self.gl.vertex_attrib_pointer_f32(self.texcoord_slot, 2);

        self.gl
            .draw_arrays(Primitive::TriangleFan, 0, geometry.vertex_count());

        self.gl.disable_vertex_attrib_array(self.position_slot);
        self.gl.disable_vertex_attrib_array(self.texcoord_slot);
        self.gl.bind_array_buffer(None);
        Ok(())
    }
}
