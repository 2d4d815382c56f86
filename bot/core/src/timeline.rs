use log::debug;

use chatpad_host::{Button, FrameEvent};

use crate::command::{parse_command, CommandError, RawToken};

/// Idle frames inserted after a press and again after a release.
pub const FRAMES_PER_ACTION: usize = 8;

/// Highest repeat count a single token will honour; anything above is
/// clamped down, anything below 1 is clamped up.
pub const MAX_REPEAT: u32 = 10;

/// Expand parsed tokens into a concrete frame-event timeline.
///
/// Each token becomes a press/release pair padded with idle frames.  A
/// counted token's clamped count is doubled, then either repeated as
/// discrete taps (A and B) or stretched into one sustained hold (all
/// other buttons).  Any unknown mnemonic rejects the whole command; a
/// timeline is all-or-nothing.
pub fn expand_tokens(tokens: &[RawToken]) -> Result<Vec<FrameEvent>, CommandError> {
    let mut timeline = Vec::new();
    for token in tokens {
        let button = Button::from_mnemonic(token.mnemonic)
            .ok_or(CommandError::UnknownButton(token.mnemonic))?;

        match token.count {
            None => tap(&mut timeline, button, FRAMES_PER_ACTION),
            Some(count) => {
                // counted repeats deliberately last twice as long per
                // unit as the nominal count
                let count = count.clamp(1, MAX_REPEAT) as usize * 2;
                if button.is_mashable() {
                    for _ in 0..count {
                        tap(&mut timeline, button, FRAMES_PER_ACTION * 2);
                    }
                } else {
                    hold(&mut timeline, button, count);
                }
            },
        }
    }

    debug!("expanded {} tokens into {} frames", tokens.len(), timeline.len());
    Ok(timeline)
}

/// Parse and expand a raw chat message in one step.
pub fn compile_command(raw: &str) -> Result<Vec<FrameEvent>, CommandError> {
    expand_tokens(&parse_command(raw)?)
}

/// press, wait, release, then `trailing` idle frames
fn tap(timeline: &mut Vec<FrameEvent>, button: Button, trailing: usize) {
    timeline.push(FrameEvent::Input(button.press()));
    idle(timeline, FRAMES_PER_ACTION);
    timeline.push(FrameEvent::Input(button.release()));
    idle(timeline, trailing);
}

/// one sustained hold proportional to the count
fn hold(timeline: &mut Vec<FrameEvent>, button: Button, count: usize) {
    timeline.push(FrameEvent::Input(button.press()));
    idle(timeline, FRAMES_PER_ACTION * count);
    timeline.push(FrameEvent::Input(button.release()));
    idle(timeline, FRAMES_PER_ACTION);
}

fn idle(timeline: &mut Vec<FrameEvent>, frames: usize) {
    for _ in 0..frames {
        timeline.push(FrameEvent::Idle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn events(raw: &str) -> Vec<FrameEvent> {
        compile_command(raw).unwrap()
    }

    #[test]
    fn bare_token_shape() {
        for button in Button::ALL {
            let timeline = events(&format!(",{}", button.mnemonic()));
            assert_eq!(timeline.len(), 2 * FRAMES_PER_ACTION + 2);
            assert_eq!(timeline[0], FrameEvent::Input(button.press()));
            assert!(timeline[1..=FRAMES_PER_ACTION].iter().all(|e| e.is_idle()));
            assert_eq!(
                timeline[FRAMES_PER_ACTION + 1],
                FrameEvent::Input(button.release()),
            );
            assert!(timeline[FRAMES_PER_ACTION + 2..].iter().all(|e| e.is_idle()));
        }
    }

    #[test]
    fn counted_hold_is_one_long_press() {
        // clamp(5) * 2 = 10 -> press, 80 idle, release, 8 idle
        let timeline = events(",u5");
        assert_eq!(timeline.len(), 90);
        assert_eq!(timeline[0], FrameEvent::Input(Button::Up.press()));
        assert!(timeline[1..=80].iter().all(|e| e.is_idle()));
        assert_eq!(timeline[81], FrameEvent::Input(Button::Up.release()));
        assert!(timeline[82..].iter().all(|e| e.is_idle()));
    }

    #[test]
    fn counted_mash_is_repeated_taps() {
        // clamp(3) * 2 = 6 cycles of press, 8 idle, release, 16 idle
        let timeline = events(",a3");
        assert_eq!(timeline.len(), 6 * 26);
        for cycle in timeline.chunks(26) {
            assert_eq!(cycle[0], FrameEvent::Input(Button::A.press()));
            assert!(cycle[1..=8].iter().all(|e| e.is_idle()));
            assert_eq!(cycle[9], FrameEvent::Input(Button::A.release()));
            assert!(cycle[10..].iter().all(|e| e.is_idle()));
        }
    }

    #[test]
    fn counts_clamp_at_both_ends() {
        assert_eq!(events(",u0"), events(",u1"));
        assert_eq!(events(",u99"), events(",u10"));
        assert_eq!(events(",b0"), events(",b1"));
        assert_eq!(events(",b4294967295"), events(",b10"));
    }

    #[test]
    fn unknown_mnemonic_rejects_whole_command() {
        assert_eq!(
            compile_command(",u,z,a"),
            Err(CommandError::UnknownButton('z')),
        );
    }

    #[test]
    fn select_and_start_are_holdable() {
        // select via 's', start via 'p'
        assert_eq!(events(",s2").len(), 2 + FRAMES_PER_ACTION * 4 + FRAMES_PER_ACTION);
        assert_eq!(events(",p2").len(), 2 + FRAMES_PER_ACTION * 4 + FRAMES_PER_ACTION);
        assert_eq!(events(",p")[0], FrameEvent::Input(Button::Start.press()));
    }

    #[test]
    fn expansion_is_stateless() {
        let first = compile_command(",u,r2,a4");
        let second = compile_command(",u,r2,a4");
        assert_eq!(first, second);
    }
}
