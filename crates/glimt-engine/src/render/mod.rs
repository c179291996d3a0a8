//! GPU resource wrappers: shaders, programs, geometry and textures.
//!
//! Every wrapper owns its driver handles and releases them exactly
//! once on drop. The rendering variants are a closed set
//! ([`MonochromeProgram`], [`TextureProgram`]); they differ only in
//! which uniforms they set and which primitive they draw.

mod error;
mod geometry;
mod monochrome;
mod shader;
mod surface;
mod texture;
mod textured;

pub use error::RenderError;
pub use geometry::Geometry;
pub use monochrome::MonochromeProgram;
pub use shader::{Program, Shader};
pub use surface::{IndexedSurface, Rgb8};
pub use texture::Texture;
pub use textured::TextureProgram;
