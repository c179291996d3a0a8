//! Minimal line drawing: corner markers rendered with inline shader
//! sources and an aspect-corrected orthographic view.

use anyhow::Result;
use glimt_engine::app::SdlRuntime;
use glimt_engine::coords::Mat4;
use glimt_engine::gl::AttributeSlot;
use glimt_engine::input::{Events, LoopControl};
use glimt_engine::logging;
use glimt_engine::render::{Geometry, MonochromeProgram};
use glimt_engine::window::Window;

const WIDTH: u32 = 800;
const HEIGHT: u32 = 600;

const VERT_SRC: &str = r#"#version 330 core
uniform mat4 u_mvp;
uniform vec4 u_color;
in vec3 a_pos;
out vec4 v_color;
void main() {
    gl_Position = u_mvp * vec4(a_pos, 1.0);
    v_color = u_color;
}
"#;

const FRAG_SRC: &str = r#"#version 330 core
in vec4 v_color;
out vec4 frag_color;
void main() {
    frag_color = v_color;
}
"#;

// Two short segments per corner of the unit square.
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

fn main() -> Result<()> {
    logging::init(None);

    let runtime = SdlRuntime::init()?;
    let mut window = Window::new(&runtime, "Lines Test", WIDTH, HEIGHT)?;
    let gl = window.gl();

    let program =
        MonochromeProgram::with_sources(gl.clone(), VERT_SRC, FRAG_SRC, AttributeSlot::new(0), "a_pos")?;
    let markers = Geometry::with_positions(gl.clone(), &MARKERS)?;

    let aspect = WIDTH as f32 / HEIGHT as f32;
    let mvp = Mat4::ortho(-1.5, 1.5, -1.5 / aspect, 1.5 / aspect, 1.0, -1.0);

    window.show();
    let mut events = Events::new(&runtime)?;

    loop {
        if events.poll().control == LoopControl::Exit {
            break;
        }
        gl.clear();
        program.draw(&markers, &mvp, [1.0, 1.0, 0.0, 0.7]);
        window.swap();
    }

    Ok(())
}
