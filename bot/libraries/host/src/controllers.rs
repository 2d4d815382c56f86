/// One of the eight buttons on a Game Boy, the closed set a chat command
/// can refer to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Button {
    Up,
    Down,
    Left,
    Right,
    A,
    B,
    Select,
    Start,
}

impl Button {
    pub const ALL: [Button; 8] = [
        Button::Up,
        Button::Down,
        Button::Left,
        Button::Right,
        Button::A,
        Button::B,
        Button::Select,
        Button::Start,
    ];

    /// Map a single-character command mnemonic to its button.  Start is
    /// reached via 'p' for "pause", matching the chat help text.
    pub fn from_mnemonic(ch: char) -> Option<Button> {
        match ch {
            'u' => Some(Button::Up),
            'd' => Some(Button::Down),
            'l' => Some(Button::Left),
            'r' => Some(Button::Right),
            'a' => Some(Button::A),
            'b' => Some(Button::B),
            's' => Some(Button::Select),
            'p' => Some(Button::Start),
            _ => None,
        }
    }

    pub fn mnemonic(self) -> char {
        match self {
            Button::Up => 'u',
            Button::Down => 'd',
            Button::Left => 'l',
            Button::Right => 'r',
            Button::A => 'a',
            Button::B => 'b',
            Button::Select => 's',
            Button::Start => 'p',
        }
    }

    /// A and B are mashed with repeated discrete presses; every other
    /// button is held for longer instead.
    pub fn is_mashable(self) -> bool {
        matches!(self, Button::A | Button::B)
    }

    pub fn press(self) -> ControllerAction {
        ControllerAction {
            button: self,
            pressed: true,
        }
    }

    pub fn release(self) -> ControllerAction {
        ControllerAction {
            button: self,
            pressed: false,
        }
    }
}

/// A single device-level controller state change.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ControllerAction {
    pub button: Button,
    pub pressed: bool,
}

/// One tick's worth of the generated input timeline.  The driver applies
/// exactly one of these per emulator frame.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum FrameEvent {
    #[default]
    Idle,
    Input(ControllerAction),
}

impl FrameEvent {
    pub fn is_idle(self) -> bool {
        self == FrameEvent::Idle
    }
}
