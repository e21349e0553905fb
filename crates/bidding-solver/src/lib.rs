use bidding_core::{Contract, Deal, Position, Rank, Strain, Suit};
use bidding_engine::{DoubleDummyOracle, OracleError};
use dds_bridge::contract::Strain as DdsStrain;
use dds_bridge::deal::{Deal as DdsDeal, Seat, SmallSet, Suit as DdsSuit};
use dds_bridge::solver::{self, StrainFlags};
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct DoubleDummySolution {
    pub north: Vec<u32>, // indexed by Strain: Clubs, Diamonds, Hearts, Spades, Notrump
    pub south: Vec<u32>,
    pub east: Vec<u32>,
    pub west: Vec<u32>,
}

impl DoubleDummySolution {
    pub fn tricks(&self, declarer: Position, strain: Strain) -> u32 {
        let row = match declarer {
            Position::North => &self.north,
            Position::East => &self.east,
            Position::South => &self.south,
            Position::West => &self.west,
        };
        let column = match strain {
            Strain::Clubs => 0,
            Strain::Diamonds => 1,
            Strain::Hearts => 2,
            Strain::Spades => 3,
            Strain::NoTrump => 4,
        };
        row[column]
    }
}

fn seat(position: Position) -> Seat {
    match position {
        Position::North => Seat::North,
        Position::East => Seat::East,
        Position::South => Seat::South,
        Position::West => Seat::West,
    }
}

fn to_dds(deal: &Deal) -> DdsDeal {
    let mut dds = DdsDeal::default();
    for (position, hand) in deal.hands() {
        for card in &hand.cards {
            let suit = match card.suit {
                Suit::Clubs => DdsSuit::Clubs,
                Suit::Diamonds => DdsSuit::Diamonds,
                Suit::Hearts => DdsSuit::Hearts,
                Suit::Spades => DdsSuit::Spades,
            };
            let rank = match card.rank {
                Rank::Two => 2,
                Rank::Three => 3,
                Rank::Four => 4,
                Rank::Five => 5,
                Rank::Six => 6,
                Rank::Seven => 7,
                Rank::Eight => 8,
                Rank::Nine => 9,
                Rank::Ten => 10,
                Rank::Jack => 11,
                Rank::Queen => 12,
                Rank::King => 13,
                Rank::Ace => 14,
            };
            dds[seat(position)][suit].insert(rank);
        }
    }
    dds
}

/// Full double-dummy table of a deal: tricks for every declarer and strain.
pub fn solve(deal: &Deal) -> Result<DoubleDummySolution, OracleError> {
    let results = solver::solve_deals(&[to_dds(deal)], StrainFlags::all())
        .map_err(|e| OracleError(format!("{e:?}")))?;
    let table = results[0];

    let get_tricks = |seat: Seat| {
        vec![
            u32::from(table[DdsStrain::Clubs].get(seat)),
            u32::from(table[DdsStrain::Diamonds].get(seat)),
            u32::from(table[DdsStrain::Hearts].get(seat)),
            u32::from(table[DdsStrain::Spades].get(seat)),
            u32::from(table[DdsStrain::Notrump].get(seat)),
        ]
    };

    Ok(DoubleDummySolution {
        north: get_tricks(Seat::North),
        south: get_tricks(Seat::South),
        east: get_tricks(Seat::East),
        west: get_tricks(Seat::West),
    })
}

/// [`DoubleDummyOracle`] backed by the DDS solver.
#[derive(Debug, Clone, Copy, Default)]
pub struct DdsOracle;

impl DoubleDummyOracle for DdsOracle {
    fn tricks(&self, deal: &Deal, contract: &Contract) -> Result<u8, OracleError> {
        let tricks = solve(deal)?.tricks(contract.declarer, contract.strain);
        debug!(contract = %contract, tricks, "double-dummy result");
        u8::try_from(tricks).map_err(|_| OracleError(format!("{tricks} tricks out of range")))
    }
}
