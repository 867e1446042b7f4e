use derive_more::Display;

#[derive(Clone, Debug, Display, Eq, PartialEq)]
pub enum Error {
    #[display(fmt = "unknown start signal {:?}", _0)]
    Handshake(String),
    #[display(fmt = "unknown command {:?}", _0)]
    UnexpectedLine(String),
    #[display(fmt = "malformed turn line {:?}", _0)]
    MalformedTurn(String),
    #[display(fmt = "malformed hand {:?}", _0)]
    MalformedHand(String),
    #[display(fmt = "turn state ended after {} of {} lines", _0, _1)]
    Truncated(usize, usize),
    #[display(fmt = "no cards to play")]
    EmptyHand,
}

impl std::error::Error for Error {}
