//! Glimt engine crate.
//!
//! Thin owning wrappers around the SDL2 + OpenGL plumbing shared by the
//! demo binaries: lifecycle, window/context, shader programs, geometry,
//! textures and a small glyph-atlas text writer.

pub mod app;
pub mod coords;
pub mod gl;
pub mod input;
pub mod logging;
pub mod render;
pub mod text;
pub mod time;
pub mod window;
