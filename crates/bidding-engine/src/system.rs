//! YAML descriptions of bid trees.

use crate::bid_tree::{BidTree, HandPredicate, NewBid, NodeId};
use bidding_core::bid::BidParseError;
use bidding_core::{Bid, Hand, Strain, Suit};
use serde::{Deserialize, Serialize};
use thiserror::Error;

const STANDARD: &str = include_str!("systems/standard.yaml");

#[derive(Debug, Error)]
pub enum SystemError {
    #[error("failed to parse bid system: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("bid {path}: {source}")]
    InvalidCall {
        path: String,
        #[source]
        source: BidParseError,
    },
    #[error("bid {path}: token already used by a sibling")]
    DuplicateToken { path: String },
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq, Default)]
pub struct System {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub bids: Vec<BidRule>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct BidRule {
    pub call: String,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub strain: Option<Strain>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub constraints: Vec<Constraint>,
    #[serde(default)]
    pub responses: Vec<BidRule>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(tag = "type")]
pub enum Constraint {
    MinHCP { min: u8 },
    MaxHCP { max: u8 },
    MinLength { suit: Suit, count: u8 },
    MaxLength { suit: Suit, count: u8 },
    IsBalanced { balanced: bool },
    MinPoints { min: u8 },
    MaxPoints { max: u8 },
    MinTopHonors { suit: Option<Suit>, count: u8 },
    MinControls { count: u8 },
    MinPlayingTricks { suit: Option<Suit>, count: u8 },
    /// Exact ace count, as in answers to Gerber.
    Aces { count: u8 },
    MinAces { count: u8 },
    MaxAces { count: u8 },
    /// Exact keycard count for `suit`, optionally fixing the trump queen.
    Keycards {
        suit: Suit,
        count: u8,
        queen: Option<bool>,
    },
}

impl Constraint {
    pub fn check(&self, hand: &Hand) -> bool {
        match *self {
            Constraint::MinHCP { min } => hand.hcp() >= min,
            Constraint::MaxHCP { max } => hand.hcp() <= max,
            Constraint::MinLength { suit, count } => hand.length(suit) >= count,
            Constraint::MaxLength { suit, count } => hand.length(suit) <= count,
            Constraint::IsBalanced { balanced } => hand.is_balanced() == balanced,
            Constraint::MinPoints { min } => hand.points() >= min,
            Constraint::MaxPoints { max } => hand.points() <= max,
            Constraint::MinTopHonors { suit, count } => hand.top_honors(suit) >= count,
            Constraint::MinControls { count } => hand.controls() >= count,
            Constraint::MinPlayingTricks { suit, count } => hand.playing_tricks(suit) >= count,
            Constraint::Aces { count } => hand.aces() == count,
            Constraint::MinAces { count } => hand.aces() >= count,
            Constraint::MaxAces { count } => hand.aces() <= count,
            Constraint::Keycards { suit, count, queen } => {
                let (keycards, has_queen) = hand.keycards(suit);
                keycards == count && queen.map_or(true, |q| q == has_queen)
            }
        }
    }
}

/// All constraints must hold. An empty list accepts every hand.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Constraints(pub Vec<Constraint>);

impl HandPredicate for Constraints {
    fn accepts(&self, hand: &Hand) -> bool {
        self.0.iter().all(|c| c.check(hand))
    }
}

impl System {
    pub fn from_yaml(yaml: &str) -> Result<Self, SystemError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// The bundled practice system.
    pub fn standard() -> Result<Self, SystemError> {
        Self::from_yaml(STANDARD)
    }

    pub fn build(&self) -> Result<BidTree, SystemError> {
        let mut tree = BidTree::new();
        for rule in &self.bids {
            add_rule(&mut tree, None, rule, "")?;
        }
        Ok(tree)
    }
}

fn add_rule(
    tree: &mut BidTree,
    parent: Option<NodeId>,
    rule: &BidRule,
    prefix: &str,
) -> Result<(), SystemError> {
    let path = if prefix.is_empty() {
        rule.call.clone()
    } else {
        format!("{} {}", prefix, rule.call)
    };
    let value: Bid = rule
        .call
        .parse()
        .map_err(|source| SystemError::InvalidCall {
            path: path.clone(),
            source,
        })?;

    let mut bid = NewBid::natural(
        value,
        &rule.description,
        Constraints(rule.constraints.clone()),
    );
    if let Some(token) = &rule.token {
        bid = bid.with_token(token);
    }
    if let Some(strain) = rule.strain {
        bid = bid.with_strain(strain);
    }

    let id = tree
        .insert(parent, bid)
        .ok_or_else(|| SystemError::DuplicateToken { path: path.clone() })?;
    for response in &rule.responses {
        add_rule(tree, Some(id), response, &path)?;
    }
    Ok(())
}
