use crate::cards::CardStack;
use crate::error::Error;

// Far more state lines than a table of players ever needs.
pub const MAX_STATE_LINES: usize = 1024;

/// `turn <lines> <position> <alive> <round>`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TurnHeader {
    // State lines that follow: one hand per player, the discard pile, the deck.
    pub lines: usize,
    pub position: usize,
    pub players_alive: usize,
    pub round: usize,
}

impl TurnHeader {
    pub fn parse(line: &str) -> Result<Self, Error> {
        let malformed = || Error::MalformedTurn(line.to_owned());
        let mut it = line.split(' ');
        if it.next() != Some("turn") {
            return Err(malformed());
        }
        let mut num = || -> Result<usize, Error> {
            it.next()
                .and_then(|x| x.parse().ok())
                .ok_or_else(malformed)
        };
        let header = Self {
            lines: num()?,
            position: num()?,
            players_alive: num()?,
            round: num()?,
        };
        if !(3..=MAX_STATE_LINES).contains(&header.lines)
            || header.position >= header.lines - 2
        {
            return Err(malformed());
        }
        Ok(header)
    }
}

#[derive(Clone, Debug)]
pub struct Turn {
    pub header: TurnHeader,
    pub hands: Vec<CardStack>,
    pub discarded: CardStack,
    pub deck: CardStack,
}

impl Turn {
    pub fn parse(header: TurnHeader, lines: &[String]) -> Result<Self, Error> {
        if lines.len() != header.lines {
            return Err(Error::Truncated(lines.len(), header.lines));
        }
        let mut stacks = lines
            .iter()
            .map(|l| CardStack::parse(l))
            .collect::<Result<Vec<_>, _>>()?;
        let deck = stacks.pop().unwrap_or_default();
        let discarded = stacks.pop().unwrap_or_default();
        Ok(Self {
            header,
            hands: stacks,
            discarded,
            deck,
        })
    }

    pub fn own_hand(&self) -> &CardStack {
        &self.hands[self.header.position]
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::cards::Card;

    fn state(lines: &[&str]) -> Vec<String> {
        lines.iter().map(|l| l.to_string()).collect()
    }

    #[test]
    fn parses_header() {
        assert_eq!(
            TurnHeader::parse("turn 7 2 4 13"),
            Ok(TurnHeader {
                lines: 7,
                position: 2,
                players_alive: 4,
                round: 13,
            })
        );
    }

    #[test]
    fn rejects_bad_headers() {
        for line in [
            "turn 7 2 4",
            "turn 7 5 4 1",
            "turn 2 0 1 1",
            "turn 100000000000000 0 1 1",
            "turn 1025 0 1 1",
            "turn seven 2 4 1",
            "play 7 2 4 1",
        ] {
            assert_eq!(
                TurnHeader::parse(line),
                Err(Error::MalformedTurn(line.to_owned()))
            );
        }
    }

    #[test]
    fn splits_hands_from_piles() {
        let header = TurnHeader::parse("turn 5 1 3 2").unwrap();
        let turn = Turn::parse(
            header,
            &state(&["2 AK", "3 +5T", "0 ", "1 2", "4 3399"]),
        )
        .unwrap();
        assert_eq!(turn.hands.len(), 3);
        assert_eq!(turn.own_hand().cards(), &[Card::RuleCard, Card::Five, Card::Ten]);
        assert_eq!(turn.discarded.cards(), &[Card::Two]);
        assert_eq!(turn.deck.cards().len(), 4);
    }

    #[test]
    fn state_must_be_complete() {
        let header = TurnHeader::parse("turn 5 1 3 2").unwrap();
        assert_eq!(
            Turn::parse(header, &state(&["2 AK", "3 +5T"])).unwrap_err(),
            Error::Truncated(2, 5)
        );
    }
}
