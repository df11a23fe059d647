use thiserror::Error;

/// Convenient result alias for the lambda-events codec helpers.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type.
///
/// Both variants are transparent: the message is exactly the one produced by
/// the underlying decoder, including the offending value and its position.
#[derive(Debug, Error)]
pub enum Error {
    /// Malformed JSON, an unknown enum token, or a field with the wrong shape.
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// A destination timestamp did not match `yyyy-MM-dd'T'HH:mm:ss.SSSX`.
    #[error(transparent)]
    Timestamp(#[from] TimestampError),
}

/// Raised when a destination record timestamp cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimestampError {
    /// The date/time body did not match `yyyy-MM-ddTHH:mm:ss.SSS`.
    #[error("invalid destination timestamp {value:?}: {reason}")]
    Malformed { value: String, reason: String },

    /// The zone designator was neither `Z` nor `+HH` / `+HHMM`.
    #[error("invalid zone designator {zone:?} in destination timestamp {value:?}")]
    Zone { value: String, zone: String },
}
