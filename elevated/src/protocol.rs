use derive_more::Display;

use crate::error::{Error, Rejection};
use crate::Floor;

/// A line from the engine once the bot is ready.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Inbound {
    Stop,
    // `events 0 ...`, the start of a tick.
    TickStart,
    Done,
    Closed { elevator: usize, floor: Floor },
    Other,
}

impl Inbound {
    pub fn parse(line: &str) -> Result<Self, Error> {
        match line {
            "stop" => return Ok(Self::Stop),
            "done" => return Ok(Self::Done),
            _ => {}
        }
        let parts = line.split(' ').collect::<Vec<_>>();
        match parts[..] {
            // The event count is matched as a whole token: `events 05` is
            // not a tick start.
            ["events", "0", ..] => Ok(Self::TickStart),
            ["closed", elevator, _, floor, ..] => {
                let malformed = || Error::Malformed(line.to_owned());
                Ok(Self::Closed {
                    elevator: elevator.parse().map_err(|_| malformed())?,
                    floor: floor.parse().map_err(|_| malformed())?,
                })
            }
            ["closed", ..] => Err(Error::Malformed(line.to_owned())),
            _ => Ok(Self::Other),
        }
    }
}

#[derive(Clone, Debug, Display, PartialEq, Eq)]
pub enum Command {
    #[display(fmt = "reject {}", _0)]
    Reject(Rejection),
    #[display(fmt = "ready")]
    Ready,
    #[display(fmt = "move {} {}", elevator, floor)]
    Move { elevator: usize, floor: Floor },
    #[display(fmt = "set-timer {}", _0)]
    SetTimer(u64),
    #[display(fmt = "done")]
    Done,
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn classifies_lines() {
        assert_eq!(Inbound::parse("stop"), Ok(Inbound::Stop));
        assert_eq!(Inbound::parse("done"), Ok(Inbound::Done));
        assert_eq!(Inbound::parse("events 0"), Ok(Inbound::TickStart));
        assert_eq!(Inbound::parse("events 0 12 4"), Ok(Inbound::TickStart));
        assert_eq!(Inbound::parse("events 3"), Ok(Inbound::Other));
        assert_eq!(Inbound::parse("events 05"), Ok(Inbound::Other));
        assert_eq!(
            Inbound::parse("closed 1 500 7"),
            Ok(Inbound::Closed {
                elevator: 1,
                floor: 7
            })
        );
        assert_eq!(Inbound::parse("request 3 5"), Ok(Inbound::Other));
        assert_eq!(Inbound::parse(""), Ok(Inbound::Other));
        assert_eq!(Inbound::parse("stopping"), Ok(Inbound::Other));
    }

    #[test]
    fn malformed_closed_is_an_error() {
        for line in ["closed 1 500", "closed x 500 7", "closed 1 500 seven"] {
            assert_eq!(Inbound::parse(line), Err(Error::Malformed(line.to_owned())));
        }
    }

    #[test]
    fn renders_wire_text() {
        assert_eq!(Command::Ready.to_string(), "ready");
        assert_eq!(Command::Done.to_string(), "done");
        assert_eq!(
            Command::Move {
                elevator: 1,
                floor: -3
            }
            .to_string(),
            "move 1 -3"
        );
        assert_eq!(Command::SetTimer(100).to_string(), "set-timer 100");
        assert_eq!(
            Command::Reject(Rejection::MultipleGroups).to_string(),
            "reject only work for single groups"
        );
    }
}
