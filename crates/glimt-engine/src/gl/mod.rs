//! Driver seam between the resource wrappers and OpenGL.
//!
//! Every GL call the engine issues goes through [`GlApi`] so the
//! wrappers can be exercised against a recording driver in tests. The
//! real implementation is [`GlowDriver`].

mod driver;
#[cfg(test)]
pub(crate) mod recording;

pub use driver::GlowDriver;

use std::fmt;
use std::num::NonZeroU32;

/// GL object name for a compiled shader stage.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct ShaderId(pub(crate) NonZeroU32);

/// GL object name for a linked program.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct ProgramId(pub(crate) NonZeroU32);

/// GL object name for a buffer.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct BufferId(pub(crate) NonZeroU32);

/// GL object name for a 2D texture.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct TextureId(pub(crate) NonZeroU32);

/// GL object name for a vertex array object.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct VertexArrayId(pub(crate) NonZeroU32);

/// Uniform location within a linked program. Zero is a valid location.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct UniformId(pub(crate) u32);

/// Shader stage kind.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl ShaderStage {
    pub fn name(self) -> &'static str {
        match self {
            ShaderStage::Vertex => "vertex",
            ShaderStage::Fragment => "fragment",
        }
    }
}

/// Primitive kind for draw calls.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Primitive {
    /// Independent line segments (pairs of endpoints).
    Lines,
    /// Quad drawn as a fan over four corner vertices.
    TriangleFan,
}

/// Per-vertex attribute slot index, restricted to the GL-guaranteed
/// range 0..=15.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct AttributeSlot(u8);

impl AttributeSlot {
    /// `index` must be in 0..=15, the range GL guarantees; anything
    /// else is a caller bug.
    pub const fn new(index: u8) -> Self {
        assert!(index < 16, "attribute slot out of range 0..=15");
        Self(index)
    }

    pub const fn index(self) -> u32 {
        self.0 as u32
    }
}

/// Error returned when the driver fails to allocate an object.
#[derive(Debug, Clone)]
pub struct GlError {
    pub kind: &'static str,
    pub reason: String,
}

impl GlError {
    pub(crate) fn new(kind: &'static str, reason: String) -> Self {
        Self { kind, reason }
    }
}

impl fmt::Display for GlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to create GL {}: {}", self.kind, self.reason)
    }
}

impl std::error::Error for GlError {}

/// The subset of OpenGL the engine uses.
///
/// Mirrors the GL call shapes closely enough that the real
/// implementation is a thin translation, while staying small enough to
/// mock. All methods take `&self`; the engine is single-threaded and
/// the driver serializes internally where it must.
pub trait GlApi {
    fn create_shader(&self, stage: ShaderStage) -> Result<ShaderId, GlError>;
    fn shader_source(&self, shader: ShaderId, source: &str);
    fn compile_shader(&self, shader: ShaderId);
    fn shader_compile_status(&self, shader: ShaderId) -> bool;
    fn shader_info_log(&self, shader: ShaderId) -> String;
    fn delete_shader(&self, shader: ShaderId);

    fn create_program(&self) -> Result<ProgramId, GlError>;
    fn attach_shader(&self, program: ProgramId, shader: ShaderId);
    /// Associates an attribute name with a slot. Only effective if it
    /// happens before [`GlApi::link_program`].
    fn bind_attribute_slot(&self, program: ProgramId, slot: AttributeSlot, name: &str);
    fn link_program(&self, program: ProgramId);
    fn program_link_status(&self, program: ProgramId) -> bool;
    fn program_info_log(&self, program: ProgramId) -> String;
    fn delete_program(&self, program: ProgramId);
    fn use_program(&self, program: Option<ProgramId>);
    fn attribute_location(&self, program: ProgramId, name: &str) -> Option<u32>;
    fn uniform_location(&self, program: ProgramId, name: &str) -> Option<UniformId>;
    fn set_uniform_mat4(&self, location: UniformId, matrix: &[f32; 16]);
    fn set_uniform_vec4(&self, location: UniformId, value: [f32; 4]);
    fn set_uniform_i32(&self, location: UniformId, value: i32);

    fn create_buffer(&self) -> Result<BufferId, GlError>;
    fn bind_array_buffer(&self, buffer: Option<BufferId>);
    /// Uploads `data` into the bound array buffer as upload-once,
    /// draw-many storage.
    fn array_buffer_data_static(&self, data: &[u8]);
    fn delete_buffer(&self, buffer: BufferId);
    fn vertex_attrib_pointer_f32(&self, slot: AttributeSlot, components: i32);
    fn enable_vertex_attrib_array(&self, slot: AttributeSlot);
    fn disable_vertex_attrib_array(&self, slot: AttributeSlot);

    fn create_vertex_array(&self) -> Result<VertexArrayId, GlError>;
    fn bind_vertex_array(&self, vao: Option<VertexArrayId>);
    fn delete_vertex_array(&self, vao: VertexArrayId);

    fn create_texture(&self) -> Result<TextureId, GlError>;
    fn bind_texture_2d(&self, texture: Option<TextureId>);
    fn active_texture_unit(&self, unit: u32);
    /// Sets linear min/mag filtering and repeat wrapping on the bound
    /// 2D texture.
    fn tex_parameters_linear_repeat(&self);
    fn tex_image_2d_rgba(&self, width: i32, height: i32, pixels: &[u8]);
    fn delete_texture(&self, texture: TextureId);

    fn viewport(&self, x: i32, y: i32, width: i32, height: i32);
    fn clear_color(&self, r: f32, g: f32, b: f32, a: f32);
    fn clear(&self);
    fn draw_arrays(&self, primitive: Primitive, first: i32, count: i32);
}
