//! Small math helpers shared by the demos.

mod mat4;

pub use mat4::Mat4;
