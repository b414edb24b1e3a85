//! Error types for board operations.

use std::fmt;

/// Error type for layout parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// Character that is neither a piece letter nor a digit 1-8
    UnknownSymbol { symbol: char },
    /// A rank whose pieces and empty runs do not add up to 8 files
    BadRankWidth { rank: usize, files: usize },
    /// Layout with a rank count other than 8
    BadRankCount { found: usize },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutError::UnknownSymbol { symbol } => {
                write!(f, "Unknown symbol '{symbol}' in layout")
            }
            LayoutError::BadRankWidth { rank, files } => {
                write!(f, "Rank {rank} describes {files} files, expected 8")
            }
            LayoutError::BadRankCount { found } => {
                write!(f, "Layout must describe 8 ranks, found {found}")
            }
        }
    }
}

impl std::error::Error for LayoutError {}

/// Error type for square parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareParseError {
    /// Rank out of bounds (must be 0-7)
    RankOutOfBounds { rank: usize },
    /// File out of bounds (must be 0-7)
    FileOutOfBounds { file: usize },
    /// Invalid algebraic notation
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareParseError::RankOutOfBounds { rank } => {
                write!(f, "Rank {rank} out of bounds (must be 0-7)")
            }
            SquareParseError::FileOutOfBounds { file } => {
                write!(f, "File {file} out of bounds (must be 0-7)")
            }
            SquareParseError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareParseError {}
