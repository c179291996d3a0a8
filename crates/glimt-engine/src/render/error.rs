use std::fmt;

use crate::gl::{GlError, ShaderStage};

/// Error raised while building or using a rendering resource.
#[derive(Debug)]
pub enum RenderError {
    /// Shader compilation failed; carries the driver's info log.
    ShaderCompile { stage: ShaderStage, log: String },
    /// Program linking failed; carries the driver's info log.
    ProgramLink { log: String },
    /// Two attributes were bound to the same slot.
    DuplicateAttributeSlot { slot: u32 },
    /// A textured draw was issued against geometry without both a
    /// position and a texture-coordinate buffer.
    IncompleteGeometry,
    /// The driver failed to allocate an object.
    Driver(GlError),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::ShaderCompile { stage, log } => {
                write!(f, "{} shader compilation failed: {}", stage.name(), log.trim())
            }
            RenderError::ProgramLink { log } => {
                write!(f, "program link failed: {}", log.trim())
            }
            RenderError::DuplicateAttributeSlot { slot } => {
                write!(f, "attribute slot {slot} bound more than once")
            }
            RenderError::IncompleteGeometry => {
                write!(f, "geometry is missing a position or texture-coordinate buffer")
            }
            RenderError::Driver(e) => e.fmt(f),
        }
    }
}

impl std::error::Error for RenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RenderError::Driver(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GlError> for RenderError {
    fn from(e: GlError) -> Self {
        RenderError::Driver(e)
    }
}
