use thiserror::Error;

/// Errors raised while turning statement text into transactions.
///
/// An unrecognised statement is not an error: extraction simply yields no
/// records. These variants cover bad input handed to the library.
#[derive(Error, Debug)]
pub enum StatementParseError {
    /// Input violates a precondition (e.g. raw PDF bytes instead of its text layer)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Input is bigger than the configured bound
    #[error("Input too large: {len} bytes (max {max})")]
    InputTooLarge { len: usize, max: usize },

    /// Summing amounts went past what `Decimal` can hold
    #[error("Amount total overflowed")]
    AmountOverflow,

    /// Statement format could not be detected
    #[error("Unsupported file format")]
    UnsupportedFormat,

    #[error("Failed to read file content: {0}")]
    ReadContentFailed(#[from] std::io::Error),

    /// The builder was used without content or a file path
    #[error("Content or filepath is required")]
    MissingContentAndFilepath,

    // ── Format specific ────────────────────────────────────────────────────────

    /// Date header such as "Jan 02, 2026" names a day that does not exist
    #[error("Invalid PhonePe date format")]
    DateInvalidFormat,
}

impl From<std::convert::Infallible> for StatementParseError {
    fn from(never: std::convert::Infallible) -> Self {
        match never {}
    }
}

pub type StatementResult<T> = Result<T, StatementParseError>;
