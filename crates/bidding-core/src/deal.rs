use crate::board::Position;
use crate::card::Card;
use crate::hand::Hand;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Four hands, one per seat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Deal {
    hands: [Hand; 4],
}

impl Deal {
    /// Hands in N, E, S, W order.
    pub fn new(hands: [Hand; 4]) -> Self {
        Self { hands }
    }

    pub fn hand(&self, pos: Position) -> &Hand {
        &self.hands[pos.idx()]
    }

    pub fn hands(&self) -> impl Iterator<Item = (Position, &Hand)> {
        Position::ALL.into_iter().zip(self.hands.iter())
    }
}

/// Source of fresh deals for each new board.
pub trait DealGenerator {
    fn deal(&mut self) -> Deal;
}

impl<F> DealGenerator for F
where
    F: FnMut() -> Deal,
{
    fn deal(&mut self) -> Deal {
        self()
    }
}

/// Shuffles a full deck and deals thirteen cards to each seat.
#[derive(Debug, Clone)]
pub struct RandomDealer<R> {
    rng: R,
}

impl<R: Rng> RandomDealer<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> DealGenerator for RandomDealer<R> {
    fn deal(&mut self) -> Deal {
        let mut deck = Card::deck();
        deck.shuffle(&mut self.rng);

        let mut hands: [Hand; 4] = Default::default();
        for (hand, chunk) in hands.iter_mut().zip(deck.chunks(13)) {
            let mut h = Hand::new(chunk.to_vec());
            h.sort();
            *hand = h;
        }
        Deal { hands }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn test_random_deal_is_complete() {
        let mut dealer = RandomDealer::new(StdRng::seed_from_u64(7));
        let deal = dealer.deal();

        let mut seen = HashSet::new();
        for (_, hand) in deal.hands() {
            assert_eq!(hand.cards.len(), 13);
            for card in &hand.cards {
                assert!(seen.insert(*card), "{card} dealt twice");
            }
        }
        assert_eq!(seen.len(), 52);
        let total_hcp: u8 = deal.hands().map(|(_, h)| h.hcp()).sum();
        assert_eq!(total_hcp, 40);
    }

    #[test]
    fn test_seeded_dealer_is_reproducible() {
        let a = RandomDealer::new(StdRng::seed_from_u64(42)).deal();
        let b = RandomDealer::new(StdRng::seed_from_u64(42)).deal();
        assert_eq!(a, b);
    }
}
