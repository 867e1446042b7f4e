use anyhow::Context;
use std::io::{BufRead, Write};

use arena_api::lineio::LineIO;

use crate::cards::Card;
use crate::error::Error;
use crate::strategy::Picker;
use crate::turn::{Turn, TurnHeader};

pub const START_SIGNAL: &str = "game 0 vijf";

/// Plays one game: answers the start signal, then one `play <card>` per
/// turn until the engine reports that we died.
pub struct Player {
    picker: Picker,
}

enum Next {
    Play(Card),
    Over,
}

impl Player {
    pub fn new(picker: Picker) -> Self {
        Self { picker }
    }

    pub fn run<R: BufRead, W: Write>(&mut self, io: &mut LineIO<R, W>) -> anyhow::Result<()> {
        let start = read(io)?.unwrap_or_default();
        if start != START_SIGNAL {
            io.write_line("fail")?;
            return Err(Error::Handshake(start).into());
        }
        io.write_line("ready")?;
        loop {
            match self.next_turn(io) {
                Ok(Next::Play(card)) => io.write_line(&format!("play {card}"))?,
                Ok(Next::Over) => return Ok(()),
                Err(e) => {
                    io.write_line("fail")?;
                    return Err(e);
                }
            }
        }
    }

    fn next_turn<R: BufRead, W: Write>(&mut self, io: &mut LineIO<R, W>) -> anyhow::Result<Next> {
        let Some(line) = read(io)? else {
            log::warn!("Input ended before the game was over");
            return Ok(Next::Over);
        };
        if line.starts_with("died") {
            log::info!("Game over for us");
            return Ok(Next::Over);
        }
        if !line.starts_with("turn ") {
            return Err(Error::UnexpectedLine(line).into());
        }
        let header = TurnHeader::parse(&line)?;
        let mut state = vec![];
        while state.len() < header.lines {
            match read(io)? {
                Some(l) => state.push(l),
                None => break,
            }
        }
        let turn = Turn::parse(header, &state)?;
        log::debug!(
            "Round {} with {} alive, holding {:?}",
            header.round,
            header.players_alive,
            turn.own_hand().cards()
        );
        Ok(Next::Play(self.picker.pick(turn.own_hand())?))
    }
}

fn read<R: BufRead, W: Write>(io: &mut LineIO<R, W>) -> anyhow::Result<Option<String>> {
    io.read_line().context("Failed to read from the engine")
}
