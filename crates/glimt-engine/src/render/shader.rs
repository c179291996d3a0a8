use std::rc::Rc;

use crate::gl::{AttributeSlot, GlApi, ProgramId, ShaderId, ShaderStage, UniformId};

use super::RenderError;

/// A compiled shader stage.
///
/// Move-only: a driver handle must never be duplicated. The handle is
/// released on drop.
pub struct Shader {
    gl: Rc<dyn GlApi>,
    id: ShaderId,
    stage: ShaderStage,
}

impl std::fmt::Debug for Shader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Shader")
            .field("id", &self.id)
            .field("stage", &self.stage)
            .finish_non_exhaustive()
    }
}

impl Shader {
    /// Compiles `source` for `stage`. On failure the driver's info log
    /// is retrieved and returned in the error rather than silently
    /// continuing.
    pub fn compile(
        gl: Rc<dyn GlApi>,
        stage: ShaderStage,
        source: &str,
    ) -> Result<Shader, RenderError> {
        let id = gl.create_shader(stage)?;
        gl.shader_source(id, source);
        gl.compile_shader(id);
        if !gl.shader_compile_status(id) {
            let log = gl.shader_info_log(id);
            gl.delete_shader(id);
            return Err(RenderError::ShaderCompile { stage, log });
        }
        Ok(Shader { gl, id, stage })
    }

    pub fn id(&self) -> ShaderId {
        self.id
    }

    pub fn stage(&self) -> ShaderStage {
        self.stage
    }
}

impl Drop for Shader {
    fn drop(&mut self) {
        self.gl.delete_shader(self.id);
    }
}

/// A linked shader program.
///
/// Immutable once linked; move-only; releases its handle on drop.
pub struct Program {
    gl: Rc<dyn GlApi>,
    id: ProgramId,
}

impl std::fmt::Debug for Program {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Program")
            .field("id", &self.id)
            .finish_non_exhaustive()
    }
}

impl Program {
    /// Compiles both stages and links them with the given
    /// (slot, attribute name) bindings.
    ///
    /// Binding happens strictly before linking; attribute names bound
    /// afterwards would never resolve. Slots must be disjoint.
    pub fn link(
        gl: Rc<dyn GlApi>,
        vertex_source: &str,
        fragment_source: &str,
        attributes: &[(AttributeSlot, &str)],
    ) -> Result<Program, RenderError> {
        for (i, (slot, _)) in attributes.iter().enumerate() {
            if attributes[i + 1..].iter().any(|(s, _)| s.index() == slot.index()) {
                return Err(RenderError::DuplicateAttributeSlot { slot: slot.index() });
            }
        }

        let vertex = Shader::compile(gl.clone(), ShaderStage::Vertex, vertex_source)?;
        let fragment = Shader::compile(gl.clone(), ShaderStage::Fragment, fragment_source)?;

        let id = gl.create_program()?;
        gl.attach_shader(id, vertex.id());
        gl.attach_shader(id, fragment.id());
        for (slot, name) in attributes {
            gl.bind_attribute_slot(id, *slot, name);
        }
        gl.link_program(id);
        if !gl.program_link_status(id) {
            let log = gl.program_info_log(id);
            gl.delete_program(id);
            return Err(RenderError::ProgramLink { log });
        }

        // The stage objects are dropped here; the driver keeps the
        // linked program valid.
        Ok(Program { gl, id })
    }

    pub fn id(&self) -> ProgramId {
        self.id
    }

    /// Makes this program current for subsequent draw calls.
    pub fn bind(&self) {
        self.gl.use_program(Some(self.id));
    }

    pub fn uniform(&self, name: &str) -> Option<UniformId> {
        self.gl.uniform_location(self.id, name)
    }
}

impl Drop for Program {
    fn drop(&mut self) {
        self.gl.delete_program(self.id);
    }
}
