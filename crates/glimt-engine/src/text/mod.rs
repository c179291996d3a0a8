//! Glyph atlas and line writer.

mod font;
mod writer;

pub use font::{Font, FontError};
pub use writer::TextWriter;
