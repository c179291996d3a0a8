//! Event pump wrapper and the per-frame loop signal.

use anyhow::Result;
use sdl2::event::Event;
use sdl2::keyboard::Keycode;

use crate::app::SdlRuntime;

/// Control directive a demo loop acts on once per frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Exit,
}

/// Everything one frame needs from the event queue: the quit signal
/// and any key presses. All other events are drained and discarded.
#[derive(Debug)]
pub struct FrameInput {
    pub control: LoopControl,
    pub keys: Vec<Keycode>,
}

impl Default for FrameInput {
    fn default() -> Self {
        FrameInput {
            control: LoopControl::Continue,
            keys: Vec::new(),
        }
    }
}

/// Owns the SDL event pump. SDL hands out exactly one per process, so
/// a demo creates this once and polls it every frame.
pub struct Events {
    pump: sdl2::EventPump,
}

impl Events {
    pub fn new(runtime: &SdlRuntime) -> Result<Events> {
        let pump = runtime.sdl().event_pump().map_err(anyhow::Error::msg)?;
        Ok(Events { pump })
    }

    /// Drains all pending events into one [`FrameInput`].
    pub fn poll(&mut self) -> FrameInput {
        let mut input = FrameInput::default();
        for event in self.pump.poll_iter() {
            match event {
                Event::Quit { .. } => input.control = LoopControl::Exit,
                Event::KeyDown {
                    keycode: Some(key), ..
                } => input.keys.push(key),
                _ => {}
            }
        }
        input
    }
}
