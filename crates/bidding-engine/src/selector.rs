//! Automatic bid selection.

use crate::auction::Call;
use crate::bid_tree::{BidTree, Bids, NodeId};
use bidding_core::Hand;
use rand::seq::SliceRandom;
use rand::Rng;

/// Pick uniformly among the legal bids whose predicate accepts `hand`,
/// or pass when none does.
pub fn select_bid<R: Rng + ?Sized>(legal: &Bids, tree: &BidTree, hand: &Hand, rng: &mut R) -> Call {
    let candidates: Vec<NodeId> = acceptable_bids(legal, tree, hand).collect();
    match candidates.choose(rng) {
        Some(&id) => Call::Bid(id),
        None => Call::Pass,
    }
}

pub fn acceptable_bids<'a>(
    legal: &'a Bids,
    tree: &'a BidTree,
    hand: &'a Hand,
) -> impl Iterator<Item = NodeId> + 'a {
    legal
        .values()
        .copied()
        .filter(move |&id| tree.node(id).accepts(hand))
}
