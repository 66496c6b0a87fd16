use thiserror::Error;

use crate::types::Itemset;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum EclatError {
    #[error("transaction database is empty")]
    EmptyDatabase,
    #[error("min_support must be at least 1, got {0}")]
    InvalidThreshold(usize),
    #[error("itemset {0:?} was enumerated twice")]
    KeyCollision(Itemset),
    #[error("row {row} has {got} columns, expected {expected}")]
    ShapeMismatch {
        row: usize,
        got: usize,
        expected: usize,
    },
}

pub type Result<T> = std::result::Result<T, EclatError>;
