use crate::bid::Bid;
use crate::board::{Partnership, Position};
use crate::strain::Strain;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors from parsing a three-character contract string such as `4HS`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContractParseError {
    #[error("{0:?} not a valid contract: expected 3 characters")]
    Length(String),
    #[error("{0:?} not a valid contract: level must be 1-7")]
    Level(String),
    #[error("{0:?} not a valid contract: strain must be one of C, D, H, S, N")]
    Strain(String),
    #[error("{0:?} not a valid contract: declarer must be one of N, E, S, W")]
    Declarer(String),
}

/// An undoubled final contract and its declarer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Contract {
    pub level: u8,
    pub strain: Strain,
    pub declarer: Position,
}

impl Contract {
    pub fn new(bid: Bid, declarer: Position) -> Self {
        Self {
            level: bid.level,
            strain: bid.strain,
            declarer,
        }
    }

    pub fn bid(&self) -> Bid {
        Bid::new(self.level, self.strain)
    }

    pub fn partnership(&self) -> Partnership {
        self.declarer.partnership()
    }

    /// Tricks declarer must take.
    pub fn target(&self) -> u8 {
        self.level + 6
    }

    /// Score below the line for the contracted tricks.
    pub fn trick_score(&self) -> i32 {
        let per_trick = self.strain.trick_value();
        let first_bonus = if self.strain == Strain::NoTrump { 10 } else { 0 };
        per_trick * i32::from(self.level) + first_bonus
    }

    /// Duplicate score from declarer's side for taking `tricks` tricks.
    pub fn score(&self, tricks: u8, vulnerable: bool) -> i32 {
        let target = self.target();
        if tricks < target {
            let undertricks = i32::from(target - tricks);
            let per = if vulnerable { 100 } else { 50 };
            return -per * undertricks;
        }

        let bid = self.bid();
        let mut score = self.trick_score();
        score += match (bid.is_game(), vulnerable) {
            (true, true) => 500,
            (true, false) => 300,
            (false, _) => 50,
        };
        if bid.is_slam() {
            score += match (self.level == 7, vulnerable) {
                (true, true) => 1500,
                (true, false) => 1000,
                (false, true) => 750,
                (false, false) => 500,
            };
        }
        let overtricks = i32::from(tricks - target);
        score + overtricks * self.strain.trick_value()
    }
}

impl FromStr for Contract {
    type Err = ContractParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.chars().collect();
        let &[level, strain, declarer] = chars.as_slice() else {
            return Err(ContractParseError::Length(s.to_string()));
        };
        let level = level
            .to_digit(10)
            .map(|d| d as u8)
            .filter(|l| (1..=7).contains(l))
            .ok_or_else(|| ContractParseError::Level(s.to_string()))?;
        // Upper case only: contract strings are produced in canonical form.
        let strain = Some(strain)
            .filter(char::is_ascii_uppercase)
            .and_then(Strain::from_char)
            .ok_or_else(|| ContractParseError::Strain(s.to_string()))?;
        let declarer = Some(declarer)
            .filter(char::is_ascii_uppercase)
            .and_then(Position::from_char)
            .ok_or_else(|| ContractParseError::Declarer(s.to_string()))?;
        Ok(Contract {
            level,
            strain,
            declarer,
        })
    }
}

impl fmt::Display for Contract {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.level, self.strain, self.declarer)
    }
}
