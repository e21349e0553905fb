//! Which bids the player on turn may choose from.

use crate::auction::{Auction, Call};
use crate::bid_tree::{BidTree, Bids};

/// The root mapping until the partnership has made a constructive call,
/// otherwise the follow-ups to partner's last call. An empty mapping means
/// only Pass is available.
pub fn legal_bids<'a>(auction: &Auction, tree: &'a BidTree) -> &'a Bids {
    match auction.partner_call() {
        None | Some(Call::Pass) => tree.roots(),
        Some(Call::Bid(id)) => &tree.node(id).children,
    }
}

/// Whether `token` names Pass.
pub fn is_pass_token(token: &str) -> bool {
    let token = token.trim();
    token.eq_ignore_ascii_case("p") || token.eq_ignore_ascii_case("pass")
}
