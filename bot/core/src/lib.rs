mod command;
mod timeline;

pub use crate::command::{RawToken, CommandError, parse_command, COMMAND_SEP};
pub use crate::timeline::{expand_tokens, compile_command, FRAMES_PER_ACTION, MAX_REPEAT};
