use chatpad_common::{DriverOptions, Lockstep};
use chatpad_console::ConsoleFrontend;
use chatpad_host::{DummyEmulator, Palette};

// the six game variants the bot runs side by side, each with its own tint
#[rustfmt::skip]
const GAMES: &[(&str, Palette)] = &[
    ("Pokemon Red",    Palette([0xf8e8f8, 0x50a0f8, 0x3050d0, 0x101018])),
    ("Pokemon Green",  Palette([0xf8e8f8, 0x80d0a0, 0x58a048, 0x101018])),
    ("Pokemon Blue",   Palette([0xf8e8f8, 0xd8a090, 0xb87858, 0x101018])),
    ("Pokemon Yellow", Palette([0xf8e8f8, 0x70e0f8, 0x00a0d0, 0x101018])),
    ("Pokemon Gold",   Palette([0xf8f8f8, 0x50b8a0, 0x285858, 0x181818])),
    ("Pokemon Silver", Palette([0xf8e8f8, 0xaaaaaa, 0x777777, 0x181010])),
];

fn main() {
    let matches = ConsoleFrontend::args("chatpad-demo").get_matches();

    let mut driver = Lockstep::new(DriverOptions::default());
    for (title, palette) in GAMES {
        driver.add_instance(*title, DummyEmulator::new(*palette));
    }

    ConsoleFrontend::default().start(matches, driver);
}
