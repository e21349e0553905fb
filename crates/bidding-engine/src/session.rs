//! The practice session: one board at a time, one call per step.

use crate::auction::{Auction, Call};
use crate::bid_tree::{BidTree, Bids};
use crate::contract::{resolve_contract, ContractOutcome};
use crate::error::{EngineError, Result};
use crate::legal::{is_pass_token, legal_bids};
use crate::prompt::{BidOption, CallInput, CallRequest};
use crate::result::{lookup_result, DoubleDummyOracle, DoubleDummyResult};
use crate::selector::select_bid;
use crate::settings::{Mode, Settings};
use bidding_core::{Deal, DealGenerator, Hand, Partnership, Position, Vulnerability};
use rand::Rng;
use tracing::{debug, info};

/// Whose call it is, if anyone's.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnState {
    AwaitingCall(Position),
    PassedOut,
}

/// A call appended to the auction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallRecord {
    pub seat: Position,
    pub call: Call,
}

/// Board state plus the collaborators that drive it.
///
/// North-South bid from the tree; East-West always pass. South is the
/// user in [`Mode::Interactive`].
pub struct Session<R> {
    board_number: u32,
    auction: Auction,
    deal: Deal,
    tree: BidTree,
    settings: Settings,
    deals: Box<dyn DealGenerator>,
    rng: R,
}

impl<R: Rng> Session<R> {
    /// Start a session and deal board 1.
    pub fn new(tree: BidTree, mut deals: Box<dyn DealGenerator>, rng: R) -> Self {
        let deal = deals.deal();
        info!(board = 1, "new board");
        Self {
            board_number: 1,
            auction: Auction::new(),
            deal,
            tree,
            settings: Settings::default(),
            deals,
            rng,
        }
    }

    pub fn with_settings(mut self, settings: Settings) -> Self {
        self.settings = settings;
        self
    }

    pub fn board_number(&self) -> u32 {
        self.board_number
    }

    pub fn auction(&self) -> &Auction {
        &self.auction
    }

    pub fn deal(&self) -> &Deal {
        &self.deal
    }

    pub fn hand(&self, seat: Position) -> &Hand {
        self.deal.hand(seat)
    }

    pub fn tree(&self) -> &BidTree {
        &self.tree
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn settings_mut(&mut self) -> &mut Settings {
        &mut self.settings
    }

    pub fn dealer(&self) -> Position {
        Position::dealer(self.board_number)
    }

    pub fn vulnerability(&self) -> Vulnerability {
        Vulnerability::from_board_number(self.board_number)
    }

    /// Replace the bid tree. Calls already made refer to the old tree, so
    /// the current board's auction restarts.
    pub fn set_bid_tree(&mut self, tree: BidTree) {
        self.tree = tree;
        self.auction = Auction::new();
    }

    /// Deal the next board: new hands, empty auction, board number + 1.
    pub fn new_board(&mut self) {
        let deal = self.deals.deal();
        self.deal = deal;
        self.auction = Auction::new();
        self.board_number += 1;
        info!(board = self.board_number, "new board");
    }

    pub fn is_terminal(&self) -> bool {
        self.auction.is_passed_out()
    }

    pub fn current_bidder(&self) -> Position {
        Position::bidder_at(self.board_number, self.auction.len())
    }

    pub fn state(&self) -> TurnState {
        if self.is_terminal() {
            TurnState::PassedOut
        } else {
            TurnState::AwaitingCall(self.current_bidder())
        }
    }

    /// Bids open to the player on turn.
    pub fn legal_bids(&self) -> &Bids {
        legal_bids(&self.auction, &self.tree)
    }

    /// Make the next call of the auction.
    ///
    /// East and West pass, South asks `input` while interactive, and every
    /// other seat bids automatically. Returns `None` once the auction is
    /// over. An input error leaves the auction untouched.
    pub fn bid(&mut self, input: &mut dyn CallInput) -> Result<Option<CallRecord>> {
        self.ensure_configured()?;
        let TurnState::AwaitingCall(seat) = self.state() else {
            return Ok(None);
        };

        let call = if Partnership::EW.contains(seat) {
            Call::Pass
        } else if seat == Position::USER && self.settings.mode == Mode::Interactive {
            let token = input.request_call(&self.call_request())?;
            self.resolve_token(&token)?
        } else {
            self.automatic_call(seat)
        };
        Ok(Some(self.append(seat, call)))
    }

    /// Make the next call on the host's behalf.
    ///
    /// `None` bids automatically for whoever is on turn. `Some(token)` is
    /// the user's call and must be a legal token or a pass.
    pub fn submit_call(&mut self, token: Option<&str>) -> Result<Option<CallRecord>> {
        self.ensure_configured()?;
        let TurnState::AwaitingCall(seat) = self.state() else {
            return Ok(None);
        };

        let call = match token {
            Some(token) if seat != Position::USER => {
                debug!(token, seat = %seat, "call submitted out of turn");
                return Err(EngineError::NotUsersTurn(seat));
            }
            Some(token) => self.resolve_token(token)?,
            None if Partnership::EW.contains(seat) => Call::Pass,
            None => self.automatic_call(seat),
        };
        Ok(Some(self.append(seat, call)))
    }

    pub fn resolve_contract(&self) -> Result<ContractOutcome> {
        let outcome = resolve_contract(&self.auction, &self.tree, self.board_number)?;
        info!(board = self.board_number, contract = %outcome, "auction finished");
        Ok(outcome)
    }

    /// Double-dummy tricks and score for `contract` on the current deal.
    pub fn lookup_result(&self, contract: &str, oracle: &dyn DoubleDummyOracle) -> Result<DoubleDummyResult> {
        lookup_result(contract, &self.deal, self.vulnerability(), oracle)
    }

    fn ensure_configured(&self) -> Result<()> {
        if self.tree.is_empty() {
            return Err(EngineError::EmptyBidTree);
        }
        Ok(())
    }

    /// The legal bids offered to whoever is on turn.
    pub fn call_request(&self) -> CallRequest<'_> {
        let options = self
            .legal_bids()
            .values()
            .map(|&id| {
                let node = self.tree.node(id);
                BidOption {
                    token: &node.token,
                    value: node.value,
                    description: &node.description,
                }
            })
            .collect();
        CallRequest {
            seat: self.current_bidder(),
            options,
            show_meanings: self.settings.display_meaning_of_possible_bids,
        }
    }

    fn resolve_token(&self, token: &str) -> Result<Call> {
        if is_pass_token(token) {
            return Ok(Call::Pass);
        }
        self.legal_bids()
            .get(&token.trim().to_ascii_lowercase())
            .map(|&id| Call::Bid(id))
            .ok_or_else(|| EngineError::IllegalCall {
                token: token.to_string(),
            })
    }

    fn automatic_call(&mut self, seat: Position) -> Call {
        let legal = legal_bids(&self.auction, &self.tree);
        select_bid(legal, &self.tree, self.deal.hand(seat), &mut self.rng)
    }

    fn append(&mut self, seat: Position, call: Call) -> CallRecord {
        let rendered = call.render(&self.tree);
        debug!(board = self.board_number, seat = %seat, call = %rendered, "call");
        self.auction.add_call(call);
        CallRecord { seat, call }
    }
}
