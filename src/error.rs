use thiserror::Error;

pub type Result<T> = std::result::Result<T, ListError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ListError {
    #[error("list is empty")]
    EmptyList,
    #[error("position {position} is out of range for a list of {len} nodes")]
    PositionOutOfRange { position: usize, len: usize },
    #[error("element count must not be negative, got {0}")]
    InvalidCount(i64),
    #[error("expected {expected} values but only {found} were supplied")]
    MissingValues { expected: usize, found: usize },
    #[error("unknown position policy `{0}`")]
    UnknownPolicy(String),
}
