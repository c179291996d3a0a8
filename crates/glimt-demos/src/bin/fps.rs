//! Frame-rate readout over a centered line cross, with the line
//! shaders loaded from disk instead of the built-in pair.
//!
//! Asset paths are relative to the working directory; run from
//! `crates/glimt-demos` so `assets/shaders/` resolves.

use anyhow::{Context as _, Result};
use glimt_demos::find_system_font;
use glimt_engine::app::SdlRuntime;
use glimt_engine::coords::Mat4;
use glimt_engine::gl::AttributeSlot;
use glimt_engine::input::{Events, LoopControl};
use glimt_engine::logging;
use glimt_engine::render::{Geometry, MonochromeProgram};
use glimt_engine::text::{Font, TextWriter};
use glimt_engine::time::FrameStats;
use glimt_engine::window::Window;

const WIDTH: u32 = 1024;
const HEIGHT: u32 = 768;
const FONT_PX: f32 = 20.0;

fn main() -> Result<()> {
    logging::init(None);

    let runtime = SdlRuntime::init()?;
    let mut window = Window::new(&runtime, "FPS Test", WIDTH, HEIGHT)?;
    let gl = window.gl();

    let font = Font::load(gl.clone(), &find_system_font()?, FONT_PX)?;
    let writer = TextWriter::new(gl.clone())?;
    let lines = MonochromeProgram::with_sources(
        gl.clone(),
        &read_source("assets/shaders/monochrome.vert")?,
        &read_source("assets/shaders/monochrome.frag")?,
        AttributeSlot::new(12),
        "a_pos",
    )?;

    let (w, h) = (WIDTH as f32, HEIGHT as f32);
    let mvp = Mat4::ortho_pixels(w, h);
    let cross = Geometry::with_positions(
        gl.clone(),
        &[
            0.0, h / 2.0, 0.0, //
            w, h / 2.0, 0.0, //
            w / 2.0, 0.0, 0.0, //
            w / 2.0, h, 0.0,
        ],
    )?;

    window.show();
    let mut events = Events::new(&runtime)?;
    let mut stats = FrameStats::new();

    loop {
        if events.poll().control == LoopControl::Exit {
            break;
        }
        stats.tick();

        gl.clear();
        lines.draw(&cross, &mvp, [1.0, 1.0, 0.0, 0.7]);
        let fps_line = match stats.fps() {
            Some(fps) => format!("{fps} FPS"),
            None => "-- FPS".to_string(),
        };
        writer.write(&font, &fps_line, 10.0, 10.0, window.size())?;
        writer.write(&font, "Hello again, SDL!", 10.0, h - 30.0, window.size())?;
        window.swap();
    }

    Ok(())
}

/// Shader files are read whole as bytes; text mode would mangle line
/// endings on some platforms.
fn read_source(path: &str) -> Result<String> {
    let bytes = std::fs::read(path).with_context(|| format!("failed to read {path}"))?;
    String::from_utf8(bytes).with_context(|| format!("{path} is not valid UTF-8"))
}
