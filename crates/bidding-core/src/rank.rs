use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    Two = 2,
    Three = 3,
    Four = 4,
    Five = 5,
    Six = 6,
    Seven = 7,
    Eight = 8,
    Nine = 9,
    Ten = 10,
    Jack = 11,
    Queen = 12,
    King = 13,
    Ace = 14,
}

const RANK_CHARS: &[u8; 13] = b"23456789TJQKA";

impl Rank {
    /// Lowest first.
    pub const ALL: [Rank; 13] = [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    /// Milton Work count: A=4, K=3, Q=2, J=1.
    pub fn hcp(self) -> u8 {
        match self {
            Rank::Ace => 4,
            Rank::King => 3,
            Rank::Queen => 2,
            Rank::Jack => 1,
            _ => 0,
        }
    }

    /// A=2, K=1.
    pub fn controls(self) -> u8 {
        match self {
            Rank::Ace => 2,
            Rank::King => 1,
            _ => 0,
        }
    }

    pub fn is_top_honor(self) -> bool {
        matches!(self, Rank::Ace | Rank::King | Rank::Queen)
    }

    pub fn to_char(self) -> char {
        char::from(RANK_CHARS[self as usize - 2])
    }

    /// Case-insensitive. `0` is accepted for the ten.
    pub fn from_char(c: char) -> Option<Self> {
        let c = match c.to_ascii_uppercase() {
            '0' => 'T',
            c => c,
        };
        Rank::ALL.into_iter().find(|r| r.to_char() == c)
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_parsing() {
        assert_eq!(Rank::from_char('A'), Some(Rank::Ace));
        assert_eq!(Rank::from_char('t'), Some(Rank::Ten));
        assert_eq!(Rank::from_char('0'), Some(Rank::Ten));
        assert_eq!(Rank::from_char('Z'), None);
        assert_eq!(Rank::Ten.to_char(), 'T');
        assert_eq!(Rank::Two.to_string(), "2");
    }

    #[test]
    fn test_honor_counts_per_suit() {
        let total: u8 = Rank::ALL.iter().map(|r| r.hcp()).sum();
        assert_eq!(total, 10);
        let controls: u8 = Rank::ALL.iter().map(|r| r.controls()).sum();
        assert_eq!(controls, 3);
    }
}
