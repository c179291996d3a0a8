//! SDL lifecycle ownership.

use anyhow::{Context as _, Result};
use sdl2::video::GLProfile;

/// Owns SDL initialization for the lifetime of a demo.
///
/// Construction brings up the video subsystem and fixes the GL
/// attributes every window shares: core profile 3.3, a debug context,
/// double buffering. Attributes must be set before any window is
/// created, so this is the only place they are touched.
pub struct SdlRuntime {
    sdl: sdl2::Sdl,
    video: sdl2::VideoSubsystem,
}

impl SdlRuntime {
    pub fn init() -> Result<SdlRuntime> {
        let sdl = sdl2::init()
            .map_err(anyhow::Error::msg)
            .context("SDL initialization failed")?;
        let video = sdl
            .video()
            .map_err(anyhow::Error::msg)
            .context("SDL video subsystem unavailable")?;

        let gl_attr = video.gl_attr();
        gl_attr.set_context_profile(GLProfile::Core);
        gl_attr.set_context_version(3, 3);
        gl_attr.set_context_flags().debug().set();
        gl_attr.set_double_buffer(true);

        log::debug!("SDL runtime initialized, requesting core 3.3 contexts");
        Ok(SdlRuntime { sdl, video })
    }

    pub(crate) fn sdl(&self) -> &sdl2::Sdl {
        &self.sdl
    }

    pub(crate) fn video(&self) -> &sdl2::VideoSubsystem {
        &self.video
    }
}
