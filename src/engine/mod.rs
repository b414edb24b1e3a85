//! Game-flow layer on top of the board.
//!
//! [`Game`] owns turn order and the move commitment path with its
//! callbacks; [`SearchWorker`] runs a search off-thread so a caller's
//! loop never blocks on the engine thinking.

mod controller;
mod game;

pub use controller::SearchWorker;
pub use game::{Game, MoveCallback, PromotionCallback};
