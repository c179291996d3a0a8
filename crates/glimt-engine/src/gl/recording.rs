//! Recording driver used by the wrapper tests.
//!
//! Tracks object lifetimes, attribute-binding order relative to
//! linking, buffer upload sizes, texture uploads and draw calls.

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::num::NonZeroU32;

use super::{
    AttributeSlot, BufferId, GlApi, GlError, Primitive, ProgramId, ShaderId, ShaderStage,
    TextureId, UniformId, VertexArrayId,
};

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct DrawCall {
    pub primitive: Primitive,
    pub first: i32,
    pub count: i32,
}

#[derive(Debug, Clone)]
pub(crate) struct TextureUpload {
    pub width: i32,
    pub height: i32,
    pub pixels: Vec<u8>,
}

#[derive(Default)]
struct State {
    next_id: u32,
    live_shaders: HashSet<u32>,
    live_programs: HashSet<u32>,
    live_buffers: HashSet<u32>,
    live_textures: HashSet<u32>,
    live_vertex_arrays: HashSet<u32>,

    shader_sources: HashMap<u32, String>,
    compiled: HashSet<u32>,
    force_compile_failure: Option<String>,
    force_link_failure: Option<String>,

    /// Bindings requested so far; moved to `linked_attributes` at link
    /// time. Bindings made after linking stay here and never resolve.
    staged_attributes: HashMap<(u32, String), u32>,
    linked_attributes: HashMap<(u32, String), u32>,
    linked: HashSet<u32>,

    uniforms: HashMap<(u32, String), u32>,
    next_uniform: u32,

    bound_array_buffer: Option<u32>,
    buffer_sizes: HashMap<u32, usize>,
    array_buffer_uploads: Vec<Vec<u8>>,
    enabled_slots: HashSet<u32>,
    used_program: Option<u32>,

    texture_uploads: Vec<TextureUpload>,
    draw_calls: Vec<DrawCall>,
}

pub(crate) struct RecordingDriver {
    state: RefCell<State>,
}

impl RecordingDriver {
    pub fn new() -> Self {
        Self {
            state: RefCell::new(State::default()),
        }
    }

    pub fn failing_compiles(log: &str) -> Self {
        let driver = Self::new();
        driver.state.borrow_mut().force_compile_failure = Some(log.to_string());
        driver
    }

    pub fn failing_links(log: &str) -> Self {
        let driver = Self::new();
        driver.state.borrow_mut().force_link_failure = Some(log.to_string());
        driver
    }

    fn alloc(&self) -> NonZeroU32 {
        let mut state = self.state.borrow_mut();
        state.next_id += 1;
        NonZeroU32::new(state.next_id).unwrap()
    }

    pub fn live_handles(&self) -> usize {
        let state = self.state.borrow();
        state.live_shaders.len()
            + state.live_programs.len()
            + state.live_buffers.len()
            + state.live_textures.len()
            + state.live_vertex_arrays.len()
    }

    pub fn draw_calls(&self) -> Vec<DrawCall> {
        self.state.borrow().draw_calls.clone()
    }

    pub fn texture_uploads(&self) -> Vec<TextureUpload> {
        self.state.borrow().texture_uploads.clone()
    }

    pub fn buffer_size(&self, buffer: BufferId) -> Option<usize> {
        self.state.borrow().buffer_sizes.get(&buffer.0.get()).copied()
    }

    /// Every array-buffer upload in issue order, surviving buffer
    /// deletion.
    pub fn array_buffer_uploads(&self) -> Vec<Vec<u8>> {
        self.state.borrow().array_buffer_uploads.clone()
    }
}

impl GlApi for RecordingDriver {
    fn create_shader(&self, _stage: ShaderStage) -> Result<ShaderId, GlError> {
        let id = self.alloc();
        self.state.borrow_mut().live_shaders.insert(id.get());
        Ok(ShaderId(id))
    }

    fn shader_source(&self, shader: ShaderId, source: &str) {
        self.state
            .borrow_mut()
            .shader_sources
            .insert(shader.0.get(), source.to_string());
    }

    fn compile_shader(&self, shader: ShaderId) {
        let mut state = self.state.borrow_mut();
        if state.force_compile_failure.is_none() {
            state.compiled.insert(shader.0.get());
        }
    }

    fn shader_compile_status(&self, shader: ShaderId) -> bool {
        self.state.borrow().compiled.contains(&shader.0.get())
    }

    fn shader_info_log(&self, _shader: ShaderId) -> String {
        self.state
            .borrow()
            .force_compile_failure
            .clone()
            .unwrap_or_default()
    }

    fn delete_shader(&self, shader: ShaderId) {
        self.state.borrow_mut().live_shaders.remove(&shader.0.get());
    }

    fn create_program(&self) -> Result<ProgramId, GlError> {
        let id = self.alloc();
        self.state.borrow_mut().live_programs.insert(id.get());
        Ok(ProgramId(id))
    }

    fn attach_shader(&self, _program: ProgramId, _shader: ShaderId) {}

    fn bind_attribute_slot(&self, program: ProgramId, slot: AttributeSlot, name: &str) {
        self.state
            .borrow_mut()
            .staged_attributes
            .insert((program.0.get(), name.to_string()), slot.index());
    }

    fn link_program(&self, program: ProgramId) {
        let mut state = self.state.borrow_mut();
        if state.force_link_failure.is_some() {
            return;
        }
        let id = program.0.get();
        let staged: Vec<_> = state
            .staged_attributes
            .iter()
            .filter(|((p, _), _)| *p == id)
            .map(|((_, name), slot)| (name.clone(), *slot))
            .collect();
        for (name, slot) in staged {
            state.staged_attributes.remove(&(id, name.clone()));
            state.linked_attributes.insert((id, name), slot);
        }
        state.linked.insert(id);
    }

    fn program_link_status(&self, program: ProgramId) -> bool {
        self.state.borrow().linked.contains(&program.0.get())
    }

    fn program_info_log(&self, _program: ProgramId) -> String {
        self.state
            .borrow()
            .force_link_failure
            .clone()
            .unwrap_or_default()
    }

    fn delete_program(&self, program: ProgramId) {
        self.state.borrow_mut().live_programs.remove(&program.0.get());
    }

    fn use_program(&self, program: Option<ProgramId>) {
        self.state.borrow_mut().used_program = program.map(|p| p.0.get());
    }

    fn attribute_location(&self, program: ProgramId, name: &str) -> Option<u32> {
        self.state
            .borrow()
            .linked_attributes
            .get(&(program.0.get(), name.to_string()))
            .copied()
    }

    fn uniform_location(&self, program: ProgramId, name: &str) -> Option<UniformId> {
        let mut state = self.state.borrow_mut();
        let key = (program.0.get(), name.to_string());
        if let Some(&loc) = state.uniforms.get(&key) {
            return Some(UniformId(loc));
        }
        let loc = state.next_uniform;
        state.next_uniform += 1;
        state.uniforms.insert(key, loc);
        Some(UniformId(loc))
    }

    fn set_uniform_mat4(&self, _location: UniformId, _matrix: &[f32; 16]) {}

    fn set_uniform_vec4(&self, _location: UniformId, _value: [f32; 4]) {}

    fn set_uniform_i32(&self, _location: UniformId, _value: i32) {}

    fn create_buffer(&self) -> Result<BufferId, GlError> {
        let id = self.alloc();
        self.state.borrow_mut().live_buffers.insert(id.get());
        Ok(BufferId(id))
    }

    fn bind_array_buffer(&self, buffer: Option<BufferId>) {
        self.state.borrow_mut().bound_array_buffer = buffer.map(|b| b.0.get());
    }

    fn array_buffer_data_static(&self, data: &[u8]) {
        let mut state = self.state.borrow_mut();
        if let Some(bound) = state.bound_array_buffer {
            state.buffer_sizes.insert(bound, data.len());
        }
        state.array_buffer_uploads.push(data.to_vec());
    }

    fn delete_buffer(&self, buffer: BufferId) {
        self.state.borrow_mut().live_buffers.remove(&buffer.0.get());
    }

    fn vertex_attrib_pointer_f32(&self, _slot: AttributeSlot, _components: i32) {}

    fn enable_vertex_attrib_array(&self, slot: AttributeSlot) {
        self.state.borrow_mut().enabled_slots.insert(slot.index());
    }

    fn disable_vertex_attrib_array(&self, slot: AttributeSlot) {
        self.state.borrow_mut().enabled_slots.remove(&slot.index());
    }

    fn create_vertex_array(&self) -> Result<VertexArrayId, GlError> {
        let id = self.alloc();
        self.state.borrow_mut().live_vertex_arrays.insert(id.get());
        Ok(VertexArrayId(id))
    }

    fn bind_vertex_array(&self, _vao: Option<VertexArrayId>) {}

    fn delete_vertex_array(&self, vao: VertexArrayId) {
        self.state
            .borrow_mut()
            .live_vertex_arrays
            .remove(&vao.0.get());
    }

    fn create_texture(&self) -> Result<TextureId, GlError> {
        let id = self.alloc();
        self.state.borrow_mut().live_textures.insert(id.get());
        Ok(TextureId(id))
    }

    fn bind_texture_2d(&self, _texture: Option<TextureId>) {}

    fn active_texture_unit(&self, _unit: u32) {}

    fn tex_parameters_linear_repeat(&self) {}

    fn tex_image_2d_rgba(&self, width: i32, height: i32, pixels: &[u8]) {
        self.state.borrow_mut().texture_uploads.push(TextureUpload {
            width,
            height,
            pixels: pixels.to_vec(),
        });
    }

    fn delete_texture(&self, texture: TextureId) {
        self.state.borrow_mut().live_textures.remove(&texture.0.get());
    }

    fn viewport(&self, _x: i32, _y: i32, _width: i32, _height: i32) {}

    fn clear_color(&self, _r: f32, _g: f32, _b: f32, _a: f32) {}

    fn clear(&self) {}

    fn draw_arrays(&self, primitive: Primitive, first: i32, count: i32) {
        self.state.borrow_mut().draw_calls.push(DrawCall {
            primitive,
            first,
            count,
        });
    }
}
