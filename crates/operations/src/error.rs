use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OperationError {
    /// The operands violate a variant's precondition. The message is part of
    /// the public contract and is matched on verbatim by callers.
    #[error("{0}")]
    Validation(String),

    /// The registry has no mapping for the requested key. Recoverable: the
    /// caller should surface the available keys or prompt for a correction.
    #[error("Unknown operation: {0}")]
    UnknownOperation(String),

    /// The mathematically correct result does not fit in a `Decimal`. The
    /// operands were valid; the result simply cannot be produced, and no
    /// substitute value ever is.
    #[error("Result of {0} is out of range for a decimal")]
    Overflow(&'static str),
}
