use bidding_core::{Position, Vulnerability};
use bidding_engine::{DoubleDummyResult, Session};
use rand::Rng;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeatHand {
    pub seat: Position,
    pub hand: String,
}

/// Summary of one finished board, printed as a JSON line with `--json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoardReport {
    pub board: u32,
    pub dealer: Position,
    pub vulnerability: Vulnerability,
    pub hands: Vec<SeatHand>,
    pub auction: String,
    /// `P` when passed out, otherwise e.g. `4HS`.
    pub contract: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<DoubleDummyResult>,
}

impl BoardReport {
    pub fn new<R: Rng>(session: &Session<R>, contract: String, result: Option<DoubleDummyResult>) -> Self {
        let hands = Position::ALL
            .into_iter()
            .map(|seat| SeatHand {
                seat,
                hand: session.hand(seat).to_string(),
            })
            .collect();
        Self {
            board: session.board_number(),
            dealer: session.dealer(),
            vulnerability: session.vulnerability(),
            hands,
            auction: session.auction().render(session.tree()),
            contract,
            result,
        }
    }
}

/// Header lines shown when a board starts.
pub fn board_header(board: u32, dealer: Position, vulnerability: Vulnerability) -> String {
    format!("Board {board}  Dealer: {dealer}  Vulnerability: {vulnerability}")
}

pub fn format_result(result: &DoubleDummyResult) -> String {
    format!("Double dummy: {} tricks, score {}", result.tricks, result.score)
}
