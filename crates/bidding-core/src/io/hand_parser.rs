use crate::card::Card;
use crate::hand::Hand;
use crate::rank::Rank;
use crate::suit::Suit;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HandParseError {
    #[error("expected 4 suits separated by '.', found {0}")]
    SuitCount(usize),
    #[error("unknown rank '{0}'")]
    Rank(char),
    #[error("duplicate card {0}")]
    Duplicate(Card),
}

/// Parses a hand string in the format "Clubs.Diamonds.Hearts.Spades".
///
/// Suits are listed in ascending order (C, D, H, S), the order used by
/// the bid-system test fixtures. Empty segments are voids.
pub fn parse_hand(s: &str) -> Result<Hand, HandParseError> {
    let suits: Vec<&str> = s.trim().split('.').collect();
    if suits.len() != 4 {
        return Err(HandParseError::SuitCount(suits.len()));
    }
    let mut cards: Vec<Card> = Vec::new();
    for (suit, holding) in Suit::ALL.into_iter().zip(suits) {
        for c in holding.chars() {
            let rank = Rank::from_char(c).ok_or(HandParseError::Rank(c))?;
            let card = Card::new(suit, rank);
            if cards.contains(&card) {
                return Err(HandParseError::Duplicate(card));
            }
            cards.push(card);
        }
    }
    Ok(Hand { cards })
}
