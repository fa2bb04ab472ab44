use operations::OperationError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum HistoryError {
    /// Transparent so the core's contract messages ("Division by zero is not
    /// allowed", "Unknown operation: ...") surface verbatim to callers.
    #[error(transparent)]
    Operation(#[from] OperationError),

    /// A persisted row could not be turned back into a calculation.
    #[error("Invalid calculation data: {0}")]
    InvalidRecord(String),

    #[error("Failed to access history file: {0}")]
    Io(#[from] std::io::Error),

    #[error("History file serialization failed: {0}")]
    Csv(#[from] csv::Error),
}
