pub mod suit;
pub mod rank;
pub mod strain;
pub mod card;
pub mod hand;
pub mod board;
pub mod bid;
pub mod contract;
pub mod deal;
pub mod io;

pub use suit::Suit;
pub use rank::Rank;
pub use strain::Strain;
pub use card::Card;
pub use hand::Hand;
pub use board::{Partnership, Position, Vulnerability};
pub use bid::Bid;
pub use contract::Contract;
pub use deal::{Deal, DealGenerator, RandomDealer};
