use derive_more::Display;

use crate::Floor;

// Setup problems. The engine gets these as a `reject <reason>` line and the
// bot exits without further output.
#[derive(Clone, Debug, Display, Eq, PartialEq)]
pub enum Rejection {
    #[display(fmt = "only work for single groups")]
    MultipleGroups,
    #[display(fmt = "unexpected building line {}", _0)]
    UnexpectedBuilding(String),
    #[display(fmt = "unexpected group line {}", _0)]
    UnexpectedGroup(String),
    #[display(fmt = "empty group? []")]
    EmptyGroup,
    #[display(fmt = "duplicate floor {} in group", _0)]
    DuplicateFloor(Floor),
}

impl std::error::Error for Rejection {}

// Fatal errors once the bot has reported ready.
#[derive(Clone, Debug, Display, Eq, PartialEq)]
pub enum Error {
    #[display(fmt = "malformed line: {}", _0)]
    Malformed(String),
    #[display(fmt = "floor {} is not served by the group", _0)]
    UnknownFloor(Floor),
}

impl std::error::Error for Error {}
