use std::io::{self, BufRead};
use std::thread;
use std::time::Duration;

use clap::{Arg, ArgMatches, Command};
use log::{debug, error, warn};

use chatpad_common::{compose, GridOptions, Lockstep};
use chatpad_core::compile_command;
use chatpad_host::{event_queue, Chat, Emulator, Frame, FrameEvent, HostError};

/// Marker character a chat line must start with to be treated as a
/// command.  It doubles as the input separator, so `,u,r,a4` reads as
/// one string.
pub const COMMAND_PREFIX: char = ',';

pub const HELP_MESSAGE: &str = "\
Start your command with ',' and separate each input with ',':
    Example: ,u,r,a - move up, press right, press A
Use numbers to hold a button longer; A and B spam presses instead of holding:
    Example: ,u4,r3,a6 - move up 4, right 3, spam A 6 times
Buttons: (u)p | (d)own | (l)eft | (r)ight | (a) | (b) | (s)elect | (p)ause";

/// What a single chat line asks the bot to do.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Request {
    /// A validated input command, ready to replay.
    Timeline(Vec<FrameEvent>),
    /// Idle the games for a number of frames; `None` when the frame
    /// count was missing or unreadable.
    Wait(Option<usize>),
    Help,
    /// Not a recognized command; ignored without any emulator action.
    Rejected,
}

/// Route one prefixed chat line to a request.  Named commands win over
/// the input mini-language; everything else goes through the command
/// compiler, and anything it rejects is dropped whole.
pub fn dispatch(line: &str) -> Request {
    let Some(body) = line.strip_prefix(COMMAND_PREFIX) else {
        return Request::Rejected;
    };
    let mut words = body.split_whitespace();
    match words.next() {
        Some("wait") => Request::Wait(words.next().and_then(|arg| arg.parse().ok())),
        Some("inputs") | Some("help") => Request::Help,
        _ => match compile_command(line) {
            Ok(timeline) => Request::Timeline(timeline),
            Err(err) => {
                debug!("console: rejected command {:?}: {}", line, err);
                Request::Rejected
            },
        },
    }
}

#[derive(Default)]
pub struct ConsoleFrontend;

impl Chat for ConsoleFrontend {
    type Error = io::Error;

    fn reply_text(&mut self, text: &str) -> Result<(), HostError<Self::Error>> {
        println!("{}", text);
        Ok(())
    }

    fn reply_image(&mut self, image: &Frame) -> Result<(), HostError<Self::Error>> {
        // the console can't display images; report what would be sent
        println!(
            "console: image replies are not supported from the console; composed a {}x{} grid",
            image.width, image.height
        );
        Ok(())
    }
}

impl ConsoleFrontend {
    pub fn args(application_name: &'static str) -> Command {
        Command::new(application_name)
            .arg(
                Arg::new("log-level")
                    .short('l')
                    .long("log-level")
                    .help("Set the type of log messages to print"),
            )
            .arg(
                Arg::new("scale")
                    .short('s')
                    .long("scale")
                    .help("Scale the composed screenshot grid"),
            )
    }

    pub fn start<E: Emulator>(mut self, matches: ArgMatches, mut driver: Lockstep<E>) {
        let log_level = match matches.get_one("log-level").map(|s: &String| s.as_str()) {
            Some("trace") => log::Level::Trace,
            Some("debug") => log::Level::Debug,
            Some("info") => log::Level::Info,
            Some("warn") => log::Level::Warn,
            Some("error") => log::Level::Error,
            _ => log::Level::Info,
        };

        // Start the logger
        simple_logger::SimpleLogger::new()
            .with_level(log_level.to_level_filter())
            .without_timestamps()
            .init()
            .unwrap();

        let grid = GridOptions {
            scale: matches
                .get_one("scale")
                .and_then(|s: &String| s.parse().ok())
                .unwrap_or(2),
            ..Default::default()
        };

        // pick up wherever the games last left off
        if let Err(err) = driver.load_all() {
            warn!("console: couldn't restore saved state: {}", err);
        }

        // Stand-in for the chat platform connection: a thread that feeds
        // incoming lines to the driver loop, `None` marking the end.
        let (sender, receiver) = event_queue();
        let reader = thread::spawn(move || {
            for line in io::stdin().lock().lines() {
                match line {
                    Ok(line) => sender.send(Some(line)),
                    Err(_) => break,
                }
            }
            sender.send(None);
        });

        // Run the main loop
        'main: loop {
            while let Some(event) = receiver.receive() {
                let Some(line) = event else {
                    break 'main;
                };
                let line = line.trim();
                if !line.starts_with(COMMAND_PREFIX) {
                    continue;
                }

                if let Err(err) = self.handle_line(line, &mut driver, &grid) {
                    error!("console: emulator error, stopping: {}", err);
                    break 'main;
                }
            }
            thread::sleep(Duration::from_millis(10));
        }
        let _ = reader.join();
    }

    fn handle_line<E: Emulator>(
        &mut self,
        line: &str,
        driver: &mut Lockstep<E>,
        grid: &GridOptions,
    ) -> Result<(), E::Error> {
        match dispatch(line) {
            Request::Help => {
                self.reply_or_log(HELP_MESSAGE);
            },
            Request::Wait(None) => {
                self.reply_or_log("you must specify a number of frames to wait (60 frames per second)");
            },
            Request::Wait(Some(frames)) => {
                let ran = driver.wait(frames)?;
                debug!("console: waited {} frames", ran);
                self.finish_command(driver, grid);
            },
            Request::Timeline(timeline) => {
                driver.run_timeline(&timeline)?;
                driver.settle()?;
                self.finish_command(driver, grid);
            },
            Request::Rejected => {},
        }
        Ok(())
    }

    /// Persist the instances and send the composed grid back to chat.
    fn finish_command<E: Emulator>(&mut self, driver: &mut Lockstep<E>, grid: &GridOptions) {
        if let Err(err) = driver.save_all() {
            warn!("console: couldn't save state: {}", err);
        }
        let image = compose(&driver.screens(grid.encoding), grid);
        if let Err(err) = self.reply_image(&image) {
            warn!("console: couldn't send reply: {}", err);
        }
    }

    fn reply_or_log(&mut self, text: &str) {
        if let Err(err) = self.reply_text(text) {
            warn!("console: couldn't send reply: {}", err);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_commands_win_over_the_mini_language() {
        assert_eq!(dispatch(",wait 120"), Request::Wait(Some(120)));
        assert_eq!(dispatch(",wait"), Request::Wait(None));
        assert_eq!(dispatch(",wait lots"), Request::Wait(None));
        assert_eq!(dispatch(",inputs"), Request::Help);
        assert_eq!(dispatch(",help"), Request::Help);
    }

    #[test]
    fn input_strings_compile_to_timelines() {
        match dispatch(",u,r,a4") {
            Request::Timeline(timeline) => assert!(!timeline.is_empty()),
            other => panic!("expected a timeline, got {:?}", other),
        }
    }

    #[test]
    fn bad_commands_are_rejected_whole() {
        assert_eq!(dispatch(",u,z,a"), Request::Rejected);
        assert_eq!(dispatch(",uX"), Request::Rejected);
    }

    #[test]
    fn prefix_alone_is_an_empty_timeline() {
        assert_eq!(dispatch(","), Request::Timeline(vec![]));
    }
}
