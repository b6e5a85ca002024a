use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("invalid batch size: {0} (expected 1 to 100000)")]
    InvalidBatchSize(i64),
}
