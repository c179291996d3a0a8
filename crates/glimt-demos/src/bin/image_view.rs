//! JPEG viewer: decodes an image to grayscale and stretches it over a
//! window-filling quad.
//!
//! The image path is relative to the working directory; run from
//! `crates/glimt-demos` with `assets/beach.jpg` in place.

use anyhow::{Context as _, Result};
use glimt_engine::app::SdlRuntime;
use glimt_engine::coords::Mat4;
use glimt_engine::gl::AttributeSlot;
use glimt_engine::input::{Events, LoopControl};
use glimt_engine::logging;
use glimt_engine::render::{Geometry, IndexedSurface, Texture, TextureProgram};
use glimt_engine::window::Window;

const WIDTH: u32 = 1024;
const HEIGHT: u32 = 768;
const IMAGE_PATH: &str = "assets/beach.jpg";

fn load_grayscale(path: &str) -> Result<IndexedSurface> {
    let image = image::open(path)
        .with_context(|| format!("failed to open {path}"))?
        .to_luma8();
    let (width, height) = image.dimensions();
    log::debug!("decoded {path} at {width}x{height}");
    Ok(IndexedSurface::grayscale(width, height, image.into_raw()))
}

fn main() -> Result<()> {
    logging::init(None);

    let runtime = SdlRuntime::init()?;
    let mut window = Window::new(&runtime, "Image Test", WIDTH, HEIGHT)?;
    let gl = window.gl();

    let program = TextureProgram::create(gl.clone(), AttributeSlot::new(0), AttributeSlot::new(1))?;
    let texture = Texture::from_surface(gl.clone(), &load_grayscale(IMAGE_PATH)?)?;

    let (w, h) = (WIDTH as f32, HEIGHT as f32);
    let mvp = Mat4::ortho_pixels(w, h);
    let mut quad = Geometry::with_positions(
        gl.clone(),
        &[
            0.0, 0.0, 0.0, //
            w, 0.0, 0.0, //
            w, h, 0.0, //
            0.0, h, 0.0,
        ],
    )?;
    quad.set_texcoords(&[0.0, 0.0, 1.0, 0.0, 1.0, 1.0, 0.0, 1.0])?;

    window.show();
    let mut events = Events::new(&runtime)?;

    loop {
        if events.poll().control == LoopControl::Exit {
            break;
        }
        gl.clear();
        program.draw(&quad, &texture, &mvp)?;
        window.swap();
    }

    Ok(())
}
