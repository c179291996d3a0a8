//! Fullscreen toggle on the F key over the corner-marker scene.

use anyhow::Result;
use glimt_engine::app::SdlRuntime;
use glimt_engine::coords::Mat4;
use glimt_engine::gl::AttributeSlot;
use glimt_engine::input::{Events, LoopControl};
use glimt_engine::logging;
use glimt_engine::render::{Geometry, MonochromeProgram};
use glimt_engine::window::Window;
use sdl2::keyboard::Keycode;

const WIDTH: u32 = 800;
const HEIGHT: u32 = 600;

// Two short segments per corner; they shift with the viewport when
// the drawable size changes, making the toggle visible.
const MARKERS: [f32; 48] = [
    -1.0, -1.0, 0.0, -1.0, -0.8, 0.0, //
    -1.0, -1.0, 0.0, -0.8, -1.0, 0.0, //
    1.0, -1.0, 0.0, 1.0, -0.8, 0.0, //
    1.0, -1.0, 0.0, 0.8, -1.0, 0.0, //
    1.0, 1.0, 0.0, 1.0, 0.8, 0.0, //
    1.0, 1.0, 0.0, 0.8, 1.0, 0.0, //
    -1.0, 1.0, 0.0, -1.0, 0.8, 0.0, //
    -1.0, 1.0, 0.0, -0.8, 1.0, 0.0,
];

fn view_for(size: (u32, u32)) -> Mat4 {
    let aspect = size.0 as f32 / size.1 as f32;
    Mat4::ortho(-1.5, 1.5, -1.5 / aspect, 1.5 / aspect, 1.0, -1.0)
}

fn main() -> Result<()> {
    logging::init(None);

    let runtime = SdlRuntime::init()?;
    let mut window = Window::new(&runtime, "Fullscreen Test", WIDTH, HEIGHT)?;
    let gl = window.gl();

    let program = MonochromeProgram::create(gl.clone(), AttributeSlot::new(0))?;
    let markers = Geometry::with_positions(gl.clone(), &MARKERS)?;

    window.show();
    let mut events = Events::new(&runtime)?;
    let mut fullscreen = false;

    loop {
        let input = events.poll();
        if input.control == LoopControl::Exit {
            break;
        }
        if input.keys.iter().any(|&key| key == Keycode::F) {
            fullscreen = !fullscreen;
            window.set_fullscreen(fullscreen)?;
        }

        gl.clear();
        program.draw(&markers, &view_for(window.size()), [1.0, 1.0, 0.0, 0.7]);
        window.swap();
    }

    Ok(())
}
