use serde::{Deserialize, Serialize};
use std::fmt;

/// A bidding denomination: one of the four suits or no-trump.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Strain {
    Clubs,
    Diamonds,
    Hearts,
    Spades,
    NoTrump,
}

const STRAIN_CHARS: [(Strain, char); 5] = [
    (Strain::Clubs, 'C'),
    (Strain::Diamonds, 'D'),
    (Strain::Hearts, 'H'),
    (Strain::Spades, 'S'),
    (Strain::NoTrump, 'N'),
];

impl Strain {
    pub fn to_char(self) -> char {
        STRAIN_CHARS[self as usize].1
    }

    /// Case-insensitive; `N` is no-trump.
    pub fn from_char(c: char) -> Option<Self> {
        let c = c.to_ascii_uppercase();
        STRAIN_CHARS
            .iter()
            .find(|&&(_, letter)| letter == c)
            .map(|&(strain, _)| strain)
    }

    /// Score for each contracted trick beyond book. No-trump's first
    /// trick is worth 10 more, see [`crate::Contract::trick_score`].
    pub fn trick_value(self) -> i32 {
        match self {
            Strain::Clubs | Strain::Diamonds => 20,
            Strain::Hearts | Strain::Spades | Strain::NoTrump => 30,
        }
    }
}

impl fmt::Display for Strain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}
