//! Two windows, two GL contexts, alternating current context per
//! frame. Each clears to its own color.

use anyhow::Result;
use glimt_engine::app::SdlRuntime;
use glimt_engine::input::{Events, LoopControl};
use glimt_engine::logging;
use glimt_engine::window::Window;

fn main() -> Result<()> {
    logging::init(None);

    let runtime = SdlRuntime::init()?;
    let mut red = Window::new(&runtime, "Double Context 1", 640, 480)?;
    let mut green = Window::new(&runtime, "Double Context 2", 800, 600)?;
    red.show();
    green.show();

    let mut events = Events::new(&runtime)?;

    loop {
        if events.poll().control == LoopControl::Exit {
            break;
        }

        red.make_current()?;
        red.gl().clear_color(1.0, 0.0, 0.0, 1.0);
        red.gl().clear();

        green.make_current()?;
        green.gl().clear_color(0.0, 1.0, 0.0, 1.0);
        green.gl().clear();

        red.swap();
        green.swap();
    }

    Ok(())
}
