use anyhow::Context;
use std::io::{BufRead, Write};

use arena_api::lineio::LineIO;

use crate::error::{Error, Rejection};
use crate::protocol::{Command, Inbound};
use crate::setup::{Building, Progress, SetupParser};
use crate::strategy::Strategy;

#[derive(Debug)]
enum Phase {
    AwaitingSetup(SetupParser),
    Ready(Building),
    Stopped,
}

/// One elevator-control session with the engine. Each inbound line drives
/// exactly one transition and yields the commands to send back.
pub struct Session<S> {
    phase: Phase,
    strategy: S,
    timer_ms: u64,
}

impl<S: Strategy> Session<S> {
    pub fn new(strategy: S, timer_ms: u64) -> Self {
        Self {
            phase: Phase::AwaitingSetup(SetupParser::default()),
            strategy,
            timer_ms,
        }
    }

    pub fn is_stopped(&self) -> bool {
        matches!(self.phase, Phase::Stopped)
    }

    pub fn is_ready(&self) -> bool {
        matches!(self.phase, Phase::Ready(_))
    }

    pub fn handle_line(&mut self, line: &str) -> Result<Vec<Command>, Error> {
        let building = match &mut self.phase {
            Phase::AwaitingSetup(parser) => {
                return Ok(match parser.handle_line(line) {
                    Ok(Progress::Pending) => vec![],
                    Ok(Progress::Complete) => self.finish_setup(),
                    Err(rejection) => self.reject(rejection),
                });
            }
            Phase::Ready(building) => building,
            Phase::Stopped => return Ok(vec![]),
        };
        let commands = match Inbound::parse(line)? {
            Inbound::Stop => {
                log::info!("Stopping on engine request");
                self.phase = Phase::Stopped;
                vec![]
            }
            Inbound::TickStart => {
                // The tick start line is also an event in its own right.
                let mut commands = self.strategy.tick_start(building)?;
                commands.push(Command::SetTimer(self.timer_ms));
                commands.extend(self.strategy.other_event(building, line));
                commands
            }
            Inbound::Done => {
                self.strategy.tick_done();
                vec![Command::Done]
            }
            Inbound::Closed { elevator, floor } => {
                self.strategy.doors_closed(building, elevator, floor)?
            }
            Inbound::Other => self.strategy.other_event(building, line),
        };
        Ok(commands)
    }

    pub fn handle_end_of_input(&mut self) -> Vec<Command> {
        match self.phase {
            Phase::AwaitingSetup(_) => {
                log::warn!("Input ended during setup");
                self.finish_setup()
            }
            Phase::Ready(_) => {
                log::warn!("Input ended without stop");
                self.phase = Phase::Stopped;
                vec![]
            }
            Phase::Stopped => vec![],
        }
    }

    // Runs until `stop`, a rejection, or the end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, io: &mut LineIO<R, W>) -> anyhow::Result<()> {
        while !self.is_stopped() {
            let commands = match io.read_line().context("Failed to read from the engine")? {
                Some(line) => self
                    .handle_line(&line)
                    .with_context(|| format!("Failed to handle line {line:?}"))?,
                None => self.handle_end_of_input(),
            };
            for command in commands {
                io.write_line(&command.to_string())
                    .context("Failed to write to the engine")?;
            }
        }
        Ok(())
    }

    fn finish_setup(&mut self) -> Vec<Command> {
        let Phase::AwaitingSetup(parser) = std::mem::replace(&mut self.phase, Phase::Stopped)
        else {
            return vec![];
        };
        match parser.finish() {
            Ok(building) => {
                log::info!(
                    "Ready with {} elevators over floors {:?}",
                    building.num_elevators,
                    building.floors
                );
                self.phase = Phase::Ready(building);
                vec![Command::Ready]
            }
            Err(rejection) => self.reject(rejection),
        }
    }

    fn reject(&mut self, rejection: Rejection) -> Vec<Command> {
        log::warn!("Rejecting setup: {rejection}");
        self.phase = Phase::Stopped;
        vec![Command::Reject(rejection)]
    }
}
