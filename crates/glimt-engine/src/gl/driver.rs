//! Real driver: translates [`GlApi`] calls onto a `glow::Context`.

#![allow(unsafe_code)]

use glow::HasContext;

use super::{
    AttributeSlot, BufferId, GlApi, GlError, Primitive, ProgramId, ShaderId, ShaderStage,
    TextureId, UniformId, VertexArrayId,
};

/// `glow`-backed [`GlApi`] implementation.
///
/// One driver exists per GL context; the context it wraps must be
/// current on the calling thread when any method runs.
pub struct GlowDriver {
    gl: glow::Context,
}

impl GlowDriver {
    pub fn new(gl: glow::Context) -> Self {
        Self { gl }
    }
}

fn stage_kind(stage: ShaderStage) -> u32 {
    match stage {
        ShaderStage::Vertex => glow::VERTEX_SHADER,
        ShaderStage::Fragment => glow::FRAGMENT_SHADER,
    }
}

fn primitive_kind(primitive: Primitive) -> u32 {
    match primitive {
        Primitive::Lines => glow::LINES,
        Primitive::TriangleFan => glow::TRIANGLE_FAN,
    }
}

impl GlApi for GlowDriver {
    fn create_shader(&self, stage: ShaderStage) -> Result<ShaderId, GlError> {
        unsafe {
            self.gl
                .create_shader(stage_kind(stage))
                .map(|s| ShaderId(s.0))
                .map_err(|e| GlError::new("shader", e))
        }
    }

    fn shader_source(&self, shader: ShaderId, source: &str) {
        unsafe { self.gl.shader_source(glow::NativeShader(shader.0), source) }
    }

    fn compile_shader(&self, shader: ShaderId) {
        unsafe { self.gl.compile_shader(glow::NativeShader(shader.0)) }
    }

    fn shader_compile_status(&self, shader: ShaderId) -> bool {
        unsafe { self.gl.get_shader_compile_status(glow::NativeShader(shader.0)) }
    }

    fn shader_info_log(&self, shader: ShaderId) -> String {
        unsafe { self.gl.get_shader_info_log(glow::NativeShader(shader.0)) }
    }

    fn delete_shader(&self, shader: ShaderId) {
        unsafe { self.gl.delete_shader(glow::NativeShader(shader.0)) }
    }

    fn create_program(&self) -> Result<ProgramId, GlError> {
        unsafe {
            self.gl
                .create_program()
                .map(|p| ProgramId(p.0))
                .map_err(|e| GlError::new("program", e))
        }
    }

    fn attach_shader(&self, program: ProgramId, shader: ShaderId) {
        unsafe {
            self.gl
                .attach_shader(glow::NativeProgram(program.0), glow::NativeShader(shader.0))
        }
    }

    fn bind_attribute_slot(&self, program: ProgramId, slot: AttributeSlot, name: &str) {
        unsafe {
            self.gl
                .bind_attrib_location(glow::NativeProgram(program.0), slot.index(), name)
        }
    }

    fn link_program(&self, program: ProgramId) {
        unsafe { self.gl.link_program(glow::NativeProgram(program.0)) }
    }

    fn program_link_status(&self, program: ProgramId) -> bool {
        unsafe { self.gl.get_program_link_status(glow::NativeProgram(program.0)) }
    }

    fn program_info_log(&self, program: ProgramId) -> String {
        unsafe { self.gl.get_program_info_log(glow::NativeProgram(program.0)) }
    }

    fn delete_program(&self, program: ProgramId) {
        unsafe { self.gl.delete_program(glow::NativeProgram(program.0)) }
    }

    fn use_program(&self, program: Option<ProgramId>) {
        unsafe { self.gl.use_program(program.map(|p| glow::NativeProgram(p.0))) }
    }

    fn attribute_location(&self, program: ProgramId, name: &str) -> Option<u32> {
        unsafe { self.gl.get_attrib_location(glow::NativeProgram(program.0), name) }
    }

    fn uniform_location(&self, program: ProgramId, name: &str) -> Option<UniformId> {
        unsafe {
            self.gl
                .get_uniform_location(glow::NativeProgram(program.0), name)
                .map(|l| UniformId(l.0))
        }
    }

    fn set_uniform_mat4(&self, location: UniformId, matrix: &[f32; 16]) {
        unsafe {
            self.gl.uniform_matrix_4_f32_slice(
                Some(&glow::NativeUniformLocation(location.0)),
                false,
                matrix,
            )
        }
    }

    fn set_uniform_vec4(&self, location: UniformId, value: [f32; 4]) {
        unsafe {
            self.gl.uniform_4_f32(
                Some(&glow::NativeUniformLocation(location.0)),
                value[0],
                value[1],
                value[2],
                value[3],
            )
        }
    }

    fn set_uniform_i32(&self, location: UniformId, value: i32) {
        unsafe {
            self.gl
                .uniform_1_i32(Some(&glow::NativeUniformLocation(location.0)), value)
        }
    }

    fn create_buffer(&self) -> Result<BufferId, GlError> {
        unsafe {
            self.gl
                .create_buffer()
                .map(|b| BufferId(b.0))
                .map_err(|e| GlError::new("buffer", e))
        }
    }

    fn bind_array_buffer(&self, buffer: Option<BufferId>) {
        unsafe {
            self.gl
                .bind_buffer(glow::ARRAY_BUFFER, buffer.map(|b| glow::NativeBuffer(b.0)))
        }
    }

    fn array_buffer_data_static(&self, data: &[u8]) {
        unsafe {
            self.gl
                .buffer_data_u8_slice(glow::ARRAY_BUFFER, data, glow::STATIC_DRAW)
        }
    }

    fn delete_buffer(&self, buffer: BufferId) {
        unsafe { self.gl.delete_buffer(glow::NativeBuffer(buffer.0)) }
    }

    fn vertex_attrib_pointer_f32(&self, slot: AttributeSlot, components: i32) {
        // Tightly packed: stride 0, offset 0.
        unsafe {
            self.gl
                .vertex_attrib_pointer_f32(slot.index(), components, glow::FLOAT, false, 0, 0)
        }
    }

    fn enable_vertex_attrib_array(&self, slot: AttributeSlot) {
        unsafe { self.gl.enable_vertex_attrib_array(slot.index()) }
    }

    fn disable_vertex_attrib_array(&self, slot: AttributeSlot) {
        unsafe { self.gl.disable_vertex_attrib_array(slot.index()) }
    }

    fn create_vertex_array(&self) -> Result<VertexArrayId, GlError> {
        unsafe {
            self.gl
                .create_vertex_array()
                .map(|v| VertexArrayId(v.0))
                .map_err(|e| GlError::new("vertex array", e))
        }
    }

    fn bind_vertex_array(&self, vao: Option<VertexArrayId>) {
        unsafe {
            self.gl
                .bind_vertex_array(vao.map(|v| glow::NativeVertexArray(v.0)))
        }
    }

    fn delete_vertex_array(&self, vao: VertexArrayId) {
        unsafe { self.gl.delete_vertex_array(glow::NativeVertexArray(vao.0)) }
    }

    fn create_texture(&self) -> Result<TextureId, GlError> {
        unsafe {
            self.gl
                .create_texture()
                .map(|t| TextureId(t.0))
                .map_err(|e| GlError::new("texture", e))
        }
    }

    fn bind_texture_2d(&self, texture: Option<TextureId>) {
        unsafe {
            self.gl
                .bind_texture(glow::TEXTURE_2D, texture.map(|t| glow::NativeTexture(t.0)))
        }
    }

    fn active_texture_unit(&self, unit: u32) {
        unsafe { self.gl.active_texture(glow::TEXTURE0 + unit) }
    }

    fn tex_parameters_linear_repeat(&self) {
        unsafe {
            self.gl
                .tex_parameter_i32(glow::TEXTURE_2D, glow::TEXTURE_WRAP_S, glow::REPEAT as i32);
            self.gl
                .tex_parameter_i32(glow::TEXTURE_2D, glow::TEXTURE_WRAP_T, glow::REPEAT as i32);
            self.gl.tex_parameter_i32(
                glow::TEXTURE_2D,
                glow::TEXTURE_MAG_FILTER,
                glow::LINEAR as i32,
            );
            self.gl.tex_parameter_i32(
                glow::TEXTURE_2D,
                glow::TEXTURE_MIN_FILTER,
                glow::LINEAR as i32,
            );
        }
    }

    fn tex_image_2d_rgba(&self, width: i32, height: i32, pixels: &[u8]) {
        unsafe {
            self.gl.tex_image_2d(
                glow::TEXTURE_2D,
                0,
                glow::RGBA as i32,
                width,
                height,
                0,
                glow::RGBA,
                glow::UNSIGNED_BYTE,
                glow::PixelUnpackData::Slice(Some(pixels)),
            )
        }
    }

    fn delete_texture(&self, texture: TextureId) {
        unsafe { self.gl.delete_texture(glow::NativeTexture(texture.0)) }
    }

    fn viewport(&self, x: i32, y: i32, width: i32, height: i32) {
        unsafe { self.gl.viewport(x, y, width, height) }
    }

    fn clear_color(&self, r: f32, g: f32, b: f32, a: f32) {
        unsafe { self.gl.clear_color(r, g, b, a) }
    }

    fn clear(&self) {
        unsafe { self.gl.clear(glow::COLOR_BUFFER_BIT) }
    }

    fn draw_arrays(&self, primitive: Primitive, first: i32, count: i32) {
        unsafe { self.gl.draw_arrays(primitive_kind(primitive), first, count) }
    }
}
