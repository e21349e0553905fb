use crate::bid_tree::{BidTree, NodeId};

/// A call made on one turn: Pass, or a bid from the active bid tree.
///
/// Bids compare by node, and within one tree a node is identified by its
/// token path, so equal calls always carry the same token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Call {
    Pass,
    Bid(NodeId),
}

impl Call {
    pub fn is_pass(self) -> bool {
        matches!(self, Call::Pass)
    }

    pub fn node(self) -> Option<NodeId> {
        match self {
            Call::Pass => None,
            Call::Bid(id) => Some(id),
        }
    }

    /// `P` for a pass, otherwise the bid's upper-case display value.
    pub fn render(self, tree: &BidTree) -> String {
        match self {
            Call::Pass => "P".to_string(),
            Call::Bid(id) => tree.node(id).value.render(),
        }
    }
}

/// The calls of the current board, in turn order from the dealer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Auction {
    calls: Vec<Call>,
}

impl Auction {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> &[Call] {
        &self.calls
    }

    pub fn len(&self) -> usize {
        self.calls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.calls.is_empty()
    }

    pub fn add_call(&mut self, call: Call) {
        self.calls.push(call);
    }

    /// At least four calls and the last three are passes.
    pub fn is_passed_out(&self) -> bool {
        is_passed_out(&self.calls)
    }

    /// The call two turns ago, made by the current bidder's partner.
    pub fn partner_call(&self) -> Option<Call> {
        self.calls.len().checked_sub(2).map(|i| self.calls[i])
    }

    pub fn render(&self, tree: &BidTree) -> String {
        self.calls
            .iter()
            .map(|c| c.render(tree))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

pub fn is_passed_out(calls: &[Call]) -> bool {
    calls.len() >= 4 && calls[calls.len() - 3..].iter().all(|c| c.is_pass())
}
