use std::rc::Rc;

use anyhow::{Context as _, Result, ensure};
use sdl2::video::FullscreenType;

use crate::app::SdlRuntime;
use crate::gl::{GlApi, GlError, GlowDriver, VertexArrayId};

/// GL-side state owned by a window: the driver handle and the one
/// vertex array the core profile requires for attribute setup.
///
/// The vertex array is deleted on drop, while the owning window's
/// context is still alive and current.
pub(crate) struct ContextState {
    gl: Rc<dyn GlApi>,
    vao: VertexArrayId,
}

impl ContextState {
    pub(crate) fn new(gl: Rc<dyn GlApi>, width: u32, height: u32) -> Result<ContextState, GlError> {
        let vao = gl.create_vertex_array()?;
        gl.bind_vertex_array(Some(vao));
        gl.viewport(0, 0, width as i32, height as i32);
        Ok(ContextState { gl, vao })
    }

    pub(crate) fn gl(&self) -> Rc<dyn GlApi> {
        self.gl.clone()
    }
}

impl Drop for ContextState {
    fn drop(&mut self) {
        self.gl.bind_vertex_array(None);
        self.gl.delete_vertex_array(self.vao);
    }
}

/// A platform window with its own GL context and driver.
///
/// The one hard ordering constraint lives here: GL function pointers
/// are resolved strictly after the context exists and is current.
/// Field order gives the reverse on drop: driver state, then context,
/// then window.
pub struct Window {
    state: ContextState,
    context: sdl2::video::GLContext,
    window: sdl2::video::Window,
    width: u32,
    height: u32,
}

impl Window {
    /// Creates a hidden window and a GL context for it, makes the
    /// context current and loads the GL entry points through it.
    pub fn new(runtime: &SdlRuntime, title: &str, width: u32, height: u32) -> Result<Window> {
        ensure!(width > 0 && height > 0, "window dimensions must be positive");

        let video = runtime.video();
        let window = video
            .window(title, width, height)
            .opengl()
            .position_centered()
            .hidden()
            .build()
            .with_context(|| format!("failed to create window '{title}'"))?;

        let context = window
            .gl_create_context()
            .map_err(anyhow::Error::msg)
            .context("failed to create GL context")?;
        window
            .gl_make_current(&context)
            .map_err(anyhow::Error::msg)?;

        // Entry points may only be resolved once a context is current.
        let glow_ctx = unsafe {
            glow::Context::from_loader_function(|name| {
                video.gl_get_proc_address(name) as *const _
            })
        };
        let gl: Rc<dyn GlApi> = Rc::new(GlowDriver::new(glow_ctx));
        let state = ContextState::new(gl, width, height)?;

        log::debug!("window '{title}' created at {width}x{height}");
        Ok(Window {
            state,
            context,
            window,
            width,
            height,
        })
    }

    /// Driver handle for this window's context. Wrappers built from it
    /// must be used while this context is current.
    pub fn gl(&self) -> Rc<dyn GlApi> {
        self.state.gl()
    }

    pub fn show(&mut self) {
        self.window.show();
    }

    /// Binds this window's context to the calling thread. Required
    /// before drawing whenever more than one window exists.
    pub fn make_current(&self) -> Result<()> {
        self.window
            .gl_make_current(&self.context)
            .map_err(anyhow::Error::msg)
            .context("failed to make GL context current")
    }

    pub fn swap(&self) {
        self.window.gl_swap_window();
    }

    pub fn size(&self) -> (u32, u32) {
        self.window.size()
    }

    /// Desktop-fullscreen toggle. Entering recomputes the viewport for
    /// the new drawable size; leaving restores the creation size.
    pub fn set_fullscreen(&mut self, fullscreen: bool) -> Result<()> {
        if fullscreen {
            self.window
                .set_fullscreen(FullscreenType::Desktop)
                .map_err(anyhow::Error::msg)?;
            let (w, h) = self.window.size();
            self.state.gl().viewport(0, 0, w as i32, h as i32);
            log::debug!("entered fullscreen at {w}x{h}");
        } else {
            self.window
                .set_fullscreen(FullscreenType::Off)
                .map_err(anyhow::Error::msg)?;
            self.window
                .set_size(self.width, self.height)
                .context("failed to restore windowed size")?;
            self.state
                .gl()
                .viewport(0, 0, self.width as i32, self.height as i32);
            log::debug!("left fullscreen, restored {}x{}", self.width, self.height);
        }
        Ok(())
    }
}

impl Drop for Window {
    fn drop(&mut self) {
        // The vertex array can only be deleted while this window's
        // context is current; the fields drop right after this body.
        let _ = self.make_current();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gl::recording::RecordingDriver;

    #[test]
    fn context_state_owns_exactly_one_vertex_array() {
        let rec = Rc::new(RecordingDriver::new());
        let gl: Rc<dyn GlApi> = rec.clone();
        let _state = ContextState::new(gl, 800, 600).unwrap();
        assert_eq!(rec.live_handles(), 1);
    }

    #[test]
    fn dropping_context_state_releases_the_vertex_array() {
        let rec = Rc::new(RecordingDriver::new());
        let gl: Rc<dyn GlApi> = rec.clone();
        let state = ContextState::new(gl, 800, 600).unwrap();
        drop(state);
        assert_eq!(rec.live_handles(), 0);
    }
}
