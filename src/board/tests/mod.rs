//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `perft.rs` - Node counts for move generation correctness
//! - `legality.rs` - The legality filter: self-check, castling, en passant
//! - `make_unmake.rs` - Make/unmake round trips
//! - `edge_cases.rs` - Special positions and endings
//! - `eval.rs` - Static evaluation terms
//! - `search.rs` - Search behavior and time control
//! - `proptests.rs` - Property-based tests

mod legality;
mod perft;
mod search;
