use derive_more::Display;

use arena_api::textapi;

use crate::error::Error;

// Declaration order is the game's low-to-high order.
#[derive(Clone, Copy, Debug, Display, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Card {
    #[display(fmt = "+")]
    RuleCard,
    #[display(fmt = "*")]
    Joker,
    #[display(fmt = "A")]
    Ace,
    #[display(fmt = "2")]
    Two,
    #[display(fmt = "3")]
    Three,
    #[display(fmt = "4")]
    Four,
    #[display(fmt = "5")]
    Five,
    #[display(fmt = "6")]
    Six,
    #[display(fmt = "7")]
    Seven,
    #[display(fmt = "8")]
    Eight,
    #[display(fmt = "9")]
    Nine,
    #[display(fmt = "T")]
    Ten,
    #[display(fmt = "J")]
    Jack,
    #[display(fmt = "Q")]
    Queen,
    #[display(fmt = "K")]
    King,
}

impl Card {
    pub fn from_char(c: char) -> Option<Self> {
        Some(match c {
            '+' => Self::RuleCard,
            '*' => Self::Joker,
            'A' => Self::Ace,
            '2' => Self::Two,
            '3' => Self::Three,
            '4' => Self::Four,
            '5' => Self::Five,
            '6' => Self::Six,
            '7' => Self::Seven,
            '8' => Self::Eight,
            '9' => Self::Nine,
            'T' => Self::Ten,
            'J' => Self::Jack,
            'Q' => Self::Queen,
            'K' => Self::King,
            _ => return None,
        })
    }
}

/// A pile of cards as the engine sends it: `<count> <cards>`, e.g. `3 25K`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CardStack {
    cards: Vec<Card>,
}

impl CardStack {
    pub fn parse(line: &str) -> Result<Self, Error> {
        let malformed = || Error::MalformedHand(line.to_owned());
        let [count, cards] = textapi::split::<2>(line);
        let count = count.parse::<usize>().map_err(|_| malformed())?;
        let cards = cards
            .trim_end()
            .chars()
            .map(Card::from_char)
            .collect::<Option<Vec<_>>>()
            .ok_or_else(malformed)?;
        if cards.len() != count {
            return Err(malformed());
        }
        Ok(Self { cards })
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
