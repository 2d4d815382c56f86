use std::convert::Infallible;
use std::error::Error;

use crate::controllers::ControllerAction;
use crate::gfx::{Frame, Palette, PixelEncoding, SCREEN_WIDTH, SCREEN_HEIGHT};

#[derive(Clone, Debug, thiserror::Error)]
pub enum HostError<E> {
    #[error("this emulator doesn't support persistent state")]
    StateNotSupported,
    #[error("this chat frontend doesn't support image replies")]
    ImageRepliesNotSupported,
    #[error("{0}")]
    Specific(E),
}

/// One running emulator instance, treated as a black box.  The driver
/// only ever advances it one frame at a time, feeding it at most one
/// controller action before each tick.
pub trait Emulator {
    type Error: Error;

    /// Advance the emulation by exactly one frame.
    fn tick(&mut self) -> Result<(), Self::Error>;

    /// Apply a controller state change, taking effect on the next tick.
    fn send_input(&mut self, action: ControllerAction) -> Result<(), Self::Error>;

    /// The most recently rendered screen contents.
    fn frame(&self, encoding: PixelEncoding) -> Frame;

    fn save_state(&mut self) -> Result<(), HostError<Self::Error>> {
        Err(HostError::StateNotSupported)
    }

    fn load_state(&mut self) -> Result<(), HostError<Self::Error>> {
        Err(HostError::StateNotSupported)
    }
}

/// The chat side of the bot.  The platform connection delivers raw
/// command text elsewhere; this is only the reply path.
pub trait Chat {
    type Error: Error;

    fn reply_text(&mut self, text: &str) -> Result<(), HostError<Self::Error>>;

    fn reply_image(&mut self, _image: &Frame) -> Result<(), HostError<Self::Error>> {
        Err(HostError::ImageRepliesNotSupported)
    }
}

/// A stand-in emulator for frontends and tests that don't have a real
/// engine attached.  It renders a flat screen in the instance's palette,
/// darkening one shade while any button is held.
pub struct DummyEmulator {
    palette: Palette,
    ticks: u64,
    held: u8,
    saved: Option<(u64, u8)>,
}

impl DummyEmulator {
    pub fn new(palette: Palette) -> Self {
        Self {
            palette,
            ticks: 0,
            held: 0,
            saved: None,
        }
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}

impl Emulator for DummyEmulator {
    type Error = Infallible;

    fn tick(&mut self) -> Result<(), Self::Error> {
        self.ticks += 1;
        Ok(())
    }

    fn send_input(&mut self, action: ControllerAction) -> Result<(), Self::Error> {
        let bit = 1u8 << action.button as u8;
        if action.pressed {
            self.held |= bit;
        } else {
            self.held &= !bit;
        }
        Ok(())
    }

    fn frame(&self, encoding: PixelEncoding) -> Frame {
        let shade = if self.held != 0 { 1 } else { 0 };
        let mut frame = Frame::new(SCREEN_WIDTH, SCREEN_HEIGHT, encoding);
        frame.clear(self.palette.shade(shade));
        frame
    }

    fn save_state(&mut self) -> Result<(), HostError<Self::Error>> {
        self.saved = Some((self.ticks, self.held));
        Ok(())
    }

    fn load_state(&mut self) -> Result<(), HostError<Self::Error>> {
        match self.saved {
            Some((ticks, held)) => {
                self.ticks = ticks;
                self.held = held;
                Ok(())
            },
            None => Err(HostError::StateNotSupported),
        }
    }
}
