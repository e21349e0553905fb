use crate::card::Card;
use crate::rank::Rank;
use crate::suit::Suit;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Shape {
    /// No singletons, no voids, max one doubleton (4-3-3-3, 4-4-3-2, 5-3-3-2)
    Balanced,
    /// One singleton OR two doubletons, no voids (5-4-2-2, 6-3-2-2)
    SemiBalanced,
    Unbalanced,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Hand {
    pub cards: Vec<Card>,
}

impl Hand {
    pub fn new(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }

    pub fn holding(&self, suit: Suit) -> impl Iterator<Item = Rank> + '_ {
        self.cards
            .iter()
            .filter(move |c| c.suit == suit)
            .map(|c| c.rank)
    }

    pub fn hcp(&self) -> u8 {
        self.cards.iter().map(|c| c.rank.hcp()).sum()
    }

    pub fn length(&self, suit: Suit) -> u8 {
        self.holding(suit).count() as u8
    }

    /// Suit lengths in S, H, D, C order.
    pub fn distribution(&self) -> [u8; 4] {
        [
            self.length(Suit::Spades),
            self.length(Suit::Hearts),
            self.length(Suit::Diamonds),
            self.length(Suit::Clubs),
        ]
    }

    /// Aces and kings weighted 2 and 1.
    pub fn controls(&self) -> u8 {
        self.cards.iter().map(|c| c.rank.controls()).sum()
    }

    /// Number of A, K and Q held, in one suit or across the hand.
    pub fn top_honors(&self, suit: Option<Suit>) -> u8 {
        self.cards
            .iter()
            .filter(|c| suit.map_or(true, |s| c.suit == s))
            .filter(|c| c.rank.is_top_honor())
            .count() as u8
    }

    pub fn aces(&self) -> u8 {
        self.cards.iter().filter(|c| c.rank == Rank::Ace).count() as u8
    }

    /// Roman keycards for `trump`: the four aces and the trump king, and
    /// whether the trump queen is held.
    pub fn keycards(&self, trump: Suit) -> (u8, bool) {
        let king = self.contains(Card::new(trump, Rank::King));
        let queen = self.contains(Card::new(trump, Rank::Queen));
        (self.aces() + u8::from(king), queen)
    }

    /// Playing tricks in one suit or across the hand. An ace, king or queen
    /// is a trick when the suit holds at least one, two or three cards, and
    /// every card past the third is a trick.
    pub fn playing_tricks(&self, suit: Option<Suit>) -> u8 {
        match suit {
            Some(suit) => self.suit_tricks(suit),
            None => Suit::ALL.iter().map(|&s| self.suit_tricks(s)).sum(),
        }
    }

    fn suit_tricks(&self, suit: Suit) -> u8 {
        let length = self.length(suit);
        let honors = [(Rank::Ace, 1), (Rank::King, 2), (Rank::Queen, 3)]
            .into_iter()
            .filter(|&(rank, guard)| length >= guard && self.contains(Card::new(suit, rank)))
            .count() as u8;
        honors + length.saturating_sub(3)
    }

    /// HCP plus one point for every card beyond four in a suit.
    pub fn points(&self) -> u8 {
        let length_pts: u8 = Suit::ALL
            .iter()
            .map(|&s| self.length(s).saturating_sub(4))
            .sum();
        self.hcp() + length_pts
    }

    pub fn sort(&mut self) {
        self.cards.sort_by(|a, b| {
            // S, H, D, C then descending rank
            b.suit.cmp(&a.suit).then(b.rank.cmp(&a.rank))
        });
    }

    pub fn shape(&self) -> Shape {
        let mut lengths = self.distribution();
        lengths.sort_by(|a, b| b.cmp(a));

        let longest = lengths[0];
        let doubletons = lengths.iter().filter(|&&l| l == 2).count();
        let singletons = lengths.iter().filter(|&&l| l == 1).count();
        let voids = lengths.iter().filter(|&&l| l == 0).count();

        if singletons == 0 && voids == 0 && doubletons <= 1 {
            Shape::Balanced
        } else if longest <= 6 && voids == 0 && (singletons == 1 || doubletons == 2) {
            Shape::SemiBalanced
        } else {
            Shape::Unbalanced
        }
    }

    pub fn is_balanced(&self) -> bool {
        matches!(self.shape(), Shape::Balanced)
    }
}

impl fmt::Display for Hand {
    /// `S:AK5 H:QJ3 D:T92 C:8743`, with `-` for voids.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut sorted = self.clone();
        sorted.sort();
        let mut first = true;
        for suit in [Suit::Spades, Suit::Hearts, Suit::Diamonds, Suit::Clubs] {
            let ranks: String = sorted.holding(suit).map(|r| r.to_char()).collect();
            if !first {
                write!(f, " ")?;
            }
            first = false;
            write!(f, "{}:{}", suit, if ranks.is_empty() { "-" } else { ranks.as_str() })?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::hand_parser::parse_hand;

    #[test]
    fn test_hcp_calculation() {
        let hand = Hand::new(vec![
            Card::new(Suit::Spades, Rank::Ace),
            Card::new(Suit::Hearts, Rank::King),
            Card::new(Suit::Diamonds, Rank::Queen),
            Card::new(Suit::Clubs, Rank::Jack),
            Card::new(Suit::Spades, Rank::Two),
        ]);
        assert_eq!(hand.hcp(), 10);
        assert_eq!(hand.controls(), 3);
        assert_eq!(hand.top_honors(None), 3);
        assert_eq!(hand.top_honors(Some(Suit::Spades)), 1);
    }

    #[test]
    fn test_distribution_and_points() {
        // C.D.H.S
        let hand = parse_hand("32.4.AKQ765.AK32").unwrap();
        assert_eq!(hand.distribution(), [4, 6, 1, 2]);
        assert_eq!(hand.hcp(), 16);
        assert_eq!(hand.points(), 18);
        assert_eq!(hand.shape(), Shape::SemiBalanced);
    }

    #[test]
    fn test_playing_tricks() {
        let hand = parse_hand("32.4.AKQ765.AK32").unwrap();
        assert_eq!(hand.playing_tricks(Some(Suit::Hearts)), 6);
        assert_eq!(hand.playing_tricks(Some(Suit::Spades)), 3);
        assert_eq!(hand.playing_tricks(Some(Suit::Diamonds)), 0);
        assert_eq!(hand.playing_tricks(None), 9);

        // Unguarded honours take no trick.
        let hand = parse_hand("K2.Q2.QJ32.A5432").unwrap();
        assert_eq!(hand.playing_tricks(Some(Suit::Clubs)), 1);
        assert_eq!(hand.playing_tricks(Some(Suit::Diamonds)), 0);
        assert_eq!(hand.playing_tricks(Some(Suit::Hearts)), 2);
        assert_eq!(hand.playing_tricks(None), 6);
    }

    #[test]
    fn test_aces_and_keycards() {
        let hand = parse_hand("32.4.AKQ765.AK32").unwrap();
        assert_eq!(hand.aces(), 2);
        assert_eq!(hand.keycards(Suit::Hearts), (3, true));
        assert_eq!(hand.keycards(Suit::Spades), (3, false));
        assert_eq!(hand.keycards(Suit::Clubs), (2, false));
        assert_eq!(parse_hand("K2.Q2.QJ32.5432").unwrap().aces(), 0);
    }

    #[test]
    fn test_shapes() {
        assert!(parse_hand("AKQ.AKQ.AKQ.AKQJ").unwrap().is_balanced());
        assert!(parse_hand("32.AKQ.AKQJ.AKQJ").unwrap().is_balanced());
        assert_eq!(
            parse_hand("32.AKQ.AKQJ2.AKQ").unwrap().shape(),
            Shape::Balanced
        );
        assert_eq!(
            parse_hand("32.54.AKQJ.AKQJ2").unwrap().shape(),
            Shape::SemiBalanced
        );
    }

    #[test]
    fn test_display_sorted() {
        let hand = parse_hand("8743.T92.QJ3.AK5").unwrap();
        assert_eq!(hand.to_string(), "S:AK5 H:QJ3 D:T92 C:8743");
        let void = parse_hand(".T92.QJ3.AK5").unwrap();
        assert_eq!(void.to_string(), "S:AK5 H:QJ3 D:T92 C:-");
    }
}
