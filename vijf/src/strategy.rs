use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::cards::{Card, CardStack};
use crate::error::Error;

#[derive(Clone, Copy, Debug, Default, Deserialize, Serialize, PartialEq, Eq, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum StrategyKind {
    #[default]
    Random,
    Lowest,
    Highest,
}

pub struct Picker {
    kind: StrategyKind,
    rng: StdRng,
}

impl Picker {
    pub fn new(kind: StrategyKind, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { kind, rng }
    }

    pub fn pick(&mut self, hand: &CardStack) -> Result<Card, Error> {
        let cards = hand.cards();
        let card = match self.kind {
            // Every held card is equally likely, so doubles weigh twice.
            StrategyKind::Random if !cards.is_empty() => {
                Some(cards[self.rng.gen_range(0..cards.len())])
            }
            StrategyKind::Random => None,
            StrategyKind::Lowest => cards.iter().min().copied(),
            StrategyKind::Highest => cards.iter().max().copied(),
        };
        card.ok_or(Error::EmptyHand)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn hand(line: &str) -> CardStack {
        CardStack::parse(line).unwrap()
    }

    #[test]
    fn lowest_and_highest() {
        let h = hand("5 *27TK");
        assert_eq!(
            Picker::new(StrategyKind::Lowest, None).pick(&h),
            Ok(Card::Joker)
        );
        assert_eq!(
            Picker::new(StrategyKind::Highest, None).pick(&h),
            Ok(Card::King)
        );
        assert_eq!(
            Picker::new(StrategyKind::Lowest, None).pick(&hand("2 +A")),
            Ok(Card::RuleCard)
        );
    }

    #[test]
    fn random_plays_held_cards() {
        let h = hand("4 39QQ");
        let mut p = Picker::new(StrategyKind::Random, Some(11));
        for _ in 0..100 {
            let card = p.pick(&h).unwrap();
            assert!(h.cards().contains(&card));
        }
    }

    #[test]
    fn empty_hand_is_an_error() {
        for kind in [StrategyKind::Random, StrategyKind::Lowest, StrategyKind::Highest] {
            assert_eq!(
                Picker::new(kind, Some(0)).pick(&CardStack::default()),
                Err(Error::EmptyHand)
            );
        }
    }
}
