use femtos::{Duration, Frequency, Instant};
use log::{info, warn};

use chatpad_host::{Emulator, Frame, FrameEvent, HostError, PixelEncoding};

/// Idle frames run after every command so in-game animation finishes
/// before the reply screenshot is taken.
pub const SETTLE_FRAMES: usize = 300;

/// Upper bound on a user-requested wait, in frames.
pub const MAX_WAIT: usize = 600;

pub struct DriverOptions {
    /// Vertical refresh used for the driver's clock bookkeeping.
    pub frame_rate: Frequency,
    pub settle_frames: usize,
    pub max_wait: usize,
}

impl Default for DriverOptions {
    fn default() -> Self {
        Self {
            frame_rate: Frequency::from_hz(60),
            settle_frames: SETTLE_FRAMES,
            max_wait: MAX_WAIT,
        }
    }
}

struct Instance<E> {
    label: String,
    emulator: E,
}

/// Replays frame-event timelines against every registered emulator
/// instance in lockstep: each event is applied to all instances, then
/// all instances advance by one tick, so the game variants stay
/// visually synchronized.
///
/// Commands are serialized by the caller; the driver itself only ever
/// runs one timeline at a time.
pub struct Lockstep<E> {
    instances: Vec<Instance<E>>,
    clock: Instant,
    frame_period: Duration,
    settle_frames: usize,
    max_wait: usize,
}

impl<E: Emulator> Lockstep<E> {
    pub fn new(options: DriverOptions) -> Self {
        Self {
            instances: Vec::new(),
            clock: Instant::START,
            frame_period: options.frame_rate.period_duration(),
            settle_frames: options.settle_frames,
            max_wait: options.max_wait,
        }
    }

    pub fn add_instance<S>(&mut self, label: S, emulator: E)
    where
        S: Into<String>,
    {
        let label = label.into();
        info!("driver: registered instance {:?}", label);
        self.instances.push(Instance {
            label,
            emulator,
        });
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    pub fn clock(&self) -> Instant {
        self.clock
    }

    /// Apply a timeline frame by frame.  For each event, every instance
    /// receives the controller action (if any) before any instance is
    /// ticked, keeping the same frame index aligned across instances.
    pub fn run_timeline(&mut self, timeline: &[FrameEvent]) -> Result<(), E::Error> {
        for event in timeline {
            if let FrameEvent::Input(action) = event {
                for instance in &mut self.instances {
                    instance.emulator.send_input(*action)?;
                }
            }
            self.tick_all()?;
        }
        info!("driver: ran {} frames across {} instances", timeline.len(), self.instances.len());
        Ok(())
    }

    /// Run the post-command idle frames.
    pub fn settle(&mut self) -> Result<(), E::Error> {
        for _ in 0..self.settle_frames {
            self.tick_all()?;
        }
        Ok(())
    }

    /// Run a user-requested number of idle frames, clamped to the
    /// configured maximum.  Returns the number actually run.
    pub fn wait(&mut self, frames: usize) -> Result<usize, E::Error> {
        let frames = frames.min(self.max_wait);
        for _ in 0..frames {
            self.tick_all()?;
        }
        Ok(frames)
    }

    pub fn save_all(&mut self) -> Result<(), HostError<E::Error>> {
        for instance in &mut self.instances {
            instance.emulator.save_state()?;
        }
        Ok(())
    }

    /// Restore every instance that has a saved state.  Instances without
    /// one are skipped rather than failing the whole restore.
    pub fn load_all(&mut self) -> Result<(), HostError<E::Error>> {
        for instance in &mut self.instances {
            match instance.emulator.load_state() {
                Ok(()) => {},
                Err(HostError::StateNotSupported) => {
                    warn!("driver: no saved state for {:?}, skipping", instance.label);
                },
                Err(err) => return Err(err),
            }
        }
        Ok(())
    }

    /// Current screen of every instance, with its label.
    pub fn screens(&self, encoding: PixelEncoding) -> Vec<(String, Frame)> {
        self.instances
            .iter()
            .map(|instance| (instance.label.clone(), instance.emulator.frame(encoding)))
            .collect()
    }

    fn tick_all(&mut self) -> Result<(), E::Error> {
        for instance in &mut self.instances {
            instance.emulator.tick()?;
        }
        self.clock += self.frame_period;
        Ok(())
    }
}
