//! Conditional bid trees.
//!
//! A bid tree is an arena of [`BidNode`]s. The opening bids form the root
//! mapping; every node maps the tokens of its follow-up bids to child
//! nodes. Maps are `BTreeMap`s so iteration is ordered by token.

use bidding_core::{Bid, Hand, Strain};
use std::collections::BTreeMap;
use std::fmt;

/// Acceptance test run against the hand of the player considering a bid.
pub trait HandPredicate: Send + Sync {
    fn accepts(&self, hand: &Hand) -> bool;
}

impl<F> HandPredicate for F
where
    F: Fn(&Hand) -> bool + Send + Sync,
{
    fn accepts(&self, hand: &Hand) -> bool {
        self(hand)
    }
}

/// Index of a node inside its [`BidTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(usize);

/// Token-ordered mapping from bid token to node.
pub type Bids = BTreeMap<String, NodeId>;

pub struct BidNode {
    pub token: String,
    pub value: Bid,
    pub description: String,
    /// Denomination used for declarer inference. Usually `value.strain`,
    /// but artificial bids may name a different one.
    pub strain: Strain,
    pub children: Bids,
    predicate: Box<dyn HandPredicate>,
}

impl BidNode {
    pub fn accepts(&self, hand: &Hand) -> bool {
        self.predicate.accepts(hand)
    }
}

impl fmt::Debug for BidNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BidNode")
            .field("token", &self.token)
            .field("value", &self.value)
            .field("description", &self.description)
            .field("strain", &self.strain)
            .field("children", &self.children)
            .finish_non_exhaustive()
    }
}

/// Description of a node to insert with [`BidTree::insert`].
pub struct NewBid {
    pub token: String,
    pub value: Bid,
    pub description: String,
    pub strain: Strain,
    pub predicate: Box<dyn HandPredicate>,
}

impl NewBid {
    /// A bid whose token is the lower-cased display value and whose
    /// denomination is the display value's strain.
    pub fn natural(value: Bid, description: &str, predicate: impl HandPredicate + 'static) -> Self {
        Self {
            token: value.render().to_ascii_lowercase(),
            value,
            description: description.to_string(),
            strain: value.strain,
            predicate: Box::new(predicate),
        }
    }

    pub fn with_token(mut self, token: &str) -> Self {
        self.token = token.to_ascii_lowercase();
        self
    }

    pub fn with_strain(mut self, strain: Strain) -> Self {
        self.strain = strain;
        self
    }
}

#[derive(Debug, Default)]
pub struct BidTree {
    nodes: Vec<BidNode>,
    roots: Bids,
}

impl BidTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// The opening bids.
    pub fn roots(&self) -> &Bids {
        &self.roots
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    pub fn node(&self, id: NodeId) -> &BidNode {
        &self.nodes[id.0]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Insert `bid` under `parent`, or as an opening bid when `parent` is
    /// `None`. Returns `None` if a sibling already uses the token.
    pub fn insert(&mut self, parent: Option<NodeId>, bid: NewBid) -> Option<NodeId> {
        let id = NodeId(self.nodes.len());
        let siblings = match parent {
            Some(p) => &mut self.nodes[p.0].children,
            None => &mut self.roots,
        };
        if siblings.contains_key(&bid.token) {
            return None;
        }
        siblings.insert(bid.token.clone(), id);
        self.nodes.push(BidNode {
            token: bid.token,
            value: bid.value,
            description: bid.description,
            strain: bid.strain,
            children: Bids::new(),
            predicate: bid.predicate,
        });
        Some(id)
    }

    /// Follow a path of tokens from the roots.
    pub fn find_path(&self, tokens: &[&str]) -> Option<NodeId> {
        let (first, rest) = tokens.split_first()?;
        let mut id = *self.roots.get(*first)?;
        for token in rest {
            id = *self.node(id).children.get(*token)?;
        }
        Some(id)
    }
}
