use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Position {
    North,
    East,
    South,
    West,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Partnership {
    NS,
    EW,
}

impl Partnership {
    pub fn contains(self, pos: Position) -> bool {
        pos.partnership() == self
    }
}

impl Position {
    pub const ALL: [Position; 4] = [
        Position::North,
        Position::East,
        Position::South,
        Position::West,
    ];

    /// The seat the practising user always occupies.
    pub const USER: Position = Position::South;

    pub fn partnership(self) -> Partnership {
        match self {
            Position::North | Position::South => Partnership::NS,
            Position::East | Position::West => Partnership::EW,
        }
    }

    pub fn next(self) -> Self {
        Position::ALL[(self.idx() + 1) % 4]
    }

    pub fn idx(self) -> usize {
        match self {
            Position::North => 0,
            Position::East => 1,
            Position::South => 2,
            Position::West => 3,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Position::North => 'N',
            Position::East => 'E',
            Position::South => 'S',
            Position::West => 'W',
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'N' => Some(Position::North),
            'E' => Some(Position::East),
            'S' => Some(Position::South),
            'W' => Some(Position::West),
            _ => None,
        }
    }

    /// Dealer of a board: residue 1 deals North, 2 East, 3 South, 0 West.
    pub fn dealer(board_number: u32) -> Self {
        Self::bidder_at(board_number, 0)
    }

    /// The seat holding turn `offset` of a board's auction.
    pub fn bidder_at(board_number: u32, offset: usize) -> Self {
        let residue = (board_number % 4) as usize + offset % 4;
        // residue 1 is North, so shift back by one seat
        Position::ALL[(residue + 3) % 4]
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// Vulnerability as seen from the user's (North-South) side of the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Vulnerability {
    #[default]
    None,
    /// Only East-West vulnerable.
    Favourable,
    /// Only North-South vulnerable.
    Unfavourable,
    All,
}

impl Vulnerability {
    pub fn from_board_number(board_number: u32) -> Self {
        // http://www.jazclass.aust.com/bridge/scoring/score11.htm
        match board_number % 16 {
            1 | 8 | 11 | 14 => Vulnerability::None,
            2 | 5 | 12 | 15 => Vulnerability::Unfavourable,
            3 | 6 | 9 | 0 => Vulnerability::Favourable,
            4 | 7 | 10 | 13 => Vulnerability::All,
            _ => unreachable!(),
        }
    }

    pub fn is_vulnerable(self, pos: Position) -> bool {
        match self {
            Vulnerability::None => false,
            Vulnerability::Unfavourable => pos.partnership() == Partnership::NS,
            Vulnerability::Favourable => pos.partnership() == Partnership::EW,
            Vulnerability::All => true,
        }
    }
}

impl fmt::Display for Vulnerability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Vulnerability::None => "None",
            Vulnerability::Favourable => "Favourable",
            Vulnerability::Unfavourable => "Unfavourable",
            Vulnerability::All => "All",
        };
        f.write_str(text)
    }
}
