//! Final contract inference from a finished auction.

use crate::auction::{Auction, Call};
use crate::bid_tree::BidTree;
use crate::error::{EngineError, Result};
use bidding_core::{Contract, Position};
use std::fmt;

/// How a finished auction ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContractOutcome {
    /// Four passes; the board is thrown in.
    PassedOut,
    Contract(Contract),
}

impl ContractOutcome {
    pub fn contract(&self) -> Option<Contract> {
        match self {
            ContractOutcome::PassedOut => None,
            ContractOutcome::Contract(c) => Some(*c),
        }
    }
}

impl fmt::Display for ContractOutcome {
    /// `P`, or the contract with declarer such as `4HS`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContractOutcome::PassedOut => f.write_str("P"),
            ContractOutcome::Contract(c) => write!(f, "{}", c),
        }
    }
}

/// Resolve the contract of a passed-out auction on `board_number`.
///
/// The last bid sets level and strain. Declarer is whichever member of
/// that partnership first named the strain in the unbroken run of the
/// partnership's bids leading up to it.
pub fn resolve_contract(auction: &Auction, tree: &BidTree, board_number: u32) -> Result<ContractOutcome> {
    if !auction.is_passed_out() {
        return Err(EngineError::AuctionNotFinished);
    }
    let calls = auction.calls();
    let index = calls.len() - 4;
    let Call::Bid(last) = calls[index] else {
        return Ok(ContractOutcome::PassedOut);
    };
    let last = tree.node(last);

    let mut declarer_index = index;
    let mut i = index;
    // Step two turns at a time so only this partnership's calls are read.
    while let Some(prev) = i.checked_sub(2) {
        i = prev;
        match calls[i] {
            Call::Pass => break,
            Call::Bid(id) => {
                if tree.node(id).strain == last.strain {
                    declarer_index = i;
                }
            }
        }
    }

    let declarer = Position::bidder_at(board_number, declarer_index);
    let contract = Contract::new(last.value, declarer);
    Ok(ContractOutcome::Contract(contract))
}
