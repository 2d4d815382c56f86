mod controllers;
mod gfx;
mod input;
mod traits;

pub use crate::controllers::{Button, ControllerAction, FrameEvent};
pub use crate::gfx::{Pixel, PixelEncoding, Frame, Palette, SCREEN_WIDTH, SCREEN_HEIGHT};
pub use crate::input::{EventSender, EventReceiver, event_queue};
pub use crate::traits::{Emulator, Chat, HostError, DummyEmulator};
