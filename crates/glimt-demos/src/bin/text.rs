//! One line of text rendered from a system font.

use anyhow::Result;
use glimt_demos::find_system_font;
use glimt_engine::app::SdlRuntime;
use glimt_engine::input::{Events, LoopControl};
use glimt_engine::logging;
use glimt_engine::text::{Font, TextWriter};
use glimt_engine::window::Window;

const WIDTH: u32 = 1000;
const HEIGHT: u32 = 600;
const FONT_PX: f32 = 64.0;
const MESSAGE: &str = "Hello SDL!";

fn main() -> Result<()> {
    logging::init(None);

    let runtime = SdlRuntime::init()?;
    let mut window = Window::new(&runtime, "Font Test", WIDTH, HEIGHT)?;
    let gl = window.gl();

    let font = Font::load(gl.clone(), &find_system_font()?, FONT_PX)?;
    let writer = TextWriter::new(gl.clone())?;

    let x = (WIDTH as f32 - font.measure(MESSAGE)) / 2.0;
    let y = (HEIGHT as f32 - font.line_height()) / 2.0;

    window.show();
    let mut events = Events::new(&runtime)?;

    loop {
        if events.poll().control == LoopControl::Exit {
            break;
        }
        gl.clear();
        writer.write(&font, MESSAGE, x, y, window.size())?;
        window.swap();
    }

    Ok(())
}
