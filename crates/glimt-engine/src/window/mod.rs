//! Window and GL context ownership.

mod win;

pub use win::Window;
