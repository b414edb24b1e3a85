pub mod board;
pub mod engine;

pub use board::{
    search, Board, CastlingRights, Color, LayoutError, Move, MoveList, Piece, SearchConfig,
    SearchInfoCallback, SearchIterationInfo, SearchOutcome, Square, SquareParseError,
};
pub use engine::{Game, SearchWorker};
