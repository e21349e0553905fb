use crate::strain::Strain;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A level and strain, the display value of a constructive call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Bid {
    pub level: u8,
    pub strain: Strain,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("'{0}' is not a bid (expected a level 1-7 followed by C, D, H, S or N)")]
pub struct BidParseError(pub String);

impl Bid {
    pub fn new(level: u8, strain: Strain) -> Self {
        Self { level, strain }
    }

    pub fn render(self) -> String {
        format!("{}{}", self.level, self.strain)
    }

    pub fn is_game(self) -> bool {
        match self.strain {
            Strain::NoTrump => self.level >= 3,
            Strain::Hearts | Strain::Spades => self.level >= 4,
            Strain::Clubs | Strain::Diamonds => self.level >= 5,
        }
    }

    pub fn is_slam(self) -> bool {
        self.level >= 6
    }
}

impl FromStr for Bid {
    type Err = BidParseError;

    /// Accepts `4H`, `4h`, `3N` and `3NT`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || BidParseError(s.to_string());
        let upper = s.trim().to_ascii_uppercase();
        let mut chars = upper.chars();
        let level = chars
            .next()
            .and_then(|c| c.to_digit(10))
            .map(|d| d as u8)
            .filter(|l| (1..=7).contains(l))
            .ok_or_else(err)?;
        let strain = chars.next().and_then(Strain::from_char).ok_or_else(err)?;
        match (strain, chars.as_str()) {
            (_, "") | (Strain::NoTrump, "T") => Ok(Bid { level, strain }),
            _ => Err(err()),
        }
    }
}

impl fmt::Display for Bid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render())
    }
}
