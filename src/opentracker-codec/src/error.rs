use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{self:?}")]
pub enum TrackerError {
    InvalidFieldCount { expected: usize, got: usize },
    Unimplemented,
}
