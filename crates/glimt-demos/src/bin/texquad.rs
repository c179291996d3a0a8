//! Textured quad: a 2x2 palette checker stretched over a triangle fan.

use anyhow::Result;
use glimt_engine::app::SdlRuntime;
use glimt_engine::coords::Mat4;
use glimt_engine::gl::AttributeSlot;
use glimt_engine::input::{Events, LoopControl};
use glimt_engine::logging;
use glimt_engine::render::{Geometry, IndexedSurface, Rgb8, Texture, TextureProgram};
use glimt_engine::window::Window;

const WIDTH: u32 = 800;
const HEIGHT: u32 = 600;

fn checker() -> IndexedSurface {
    let palette = vec![
        Rgb8 { r: 255, g: 255, b: 255 },
        Rgb8 { r: 255, g: 0, b: 0 },
        Rgb8 { r: 0, g: 255, b: 0 },
        Rgb8 { r: 0, g: 0, b: 255 },
    ];
    IndexedSurface::from_parts(2, 2, 8, vec![0, 1, 2, 3], palette)
}

fn main() -> Result<()> {
    logging::init(None);

    let runtime = SdlRuntime::init()?;
    let mut window = Window::new(&runtime, "Texture Test", WIDTH, HEIGHT)?;
    let gl = window.gl();

    let program = TextureProgram::create(gl.clone(), AttributeSlot::new(0), AttributeSlot::new(1))?;
    let texture = Texture::from_surface(gl.clone(), &checker())?;

    let mut quad = Geometry::with_positions(
        gl.clone(),
        &[
            -1.0, -1.0, 0.0, //
            0.5, -1.0, 0.0, //
            0.5, 0.5, 0.0, //
            -1.0, 0.5, 0.0,
        ],
    )?;
    quad.set_texcoords(&[0.0, 0.0, 1.0, 0.0, 1.0, 1.0, 0.0, 1.0])?;

    let aspect = WIDTH as f32 / HEIGHT as f32;
    let mvp = Mat4::ortho(-1.5, 1.5, -1.5 / aspect, 1.5 / aspect, 1.0, -1.0);

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
