pub mod auction;
pub mod bid_tree;
pub mod contract;
pub mod error;
pub mod legal;
pub mod prompt;
pub mod result;
pub mod selector;
pub mod session;
pub mod settings;
pub mod system;

pub use auction::{Auction, Call};
pub use bid_tree::{BidNode, BidTree, Bids, HandPredicate, NewBid, NodeId};
pub use contract::{resolve_contract, ContractOutcome};
pub use error::{EngineError, InputError, OracleError, Result};
pub use legal::legal_bids;
pub use prompt::{CallInput, CallRequest, LineReader, PromptInput, ScriptedLines};
pub use result::{lookup_result, DoubleDummyOracle, DoubleDummyResult};
pub use selector::select_bid;
pub use session::{CallRecord, Session, TurnState};
pub use settings::{Mode, Settings};
pub use system::{Constraint, System, SystemError};
