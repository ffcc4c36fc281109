//! # Error Types

use crate::types::TokenId;

/// Errors from sentchar operations.
#[derive(Debug, thiserror::Error)]
pub enum SentcharError {
    /// A token id has no entry in the vocabulary.
    #[error("invalid token id {token} at position {position}")]
    InvalidTokenId {
        /// The offending token id.
        token: TokenId,

        /// The index of the token in the decoded sequence.
        position: usize,
    },

    /// A model configuration failed validation.
    #[error("invalid model config: {0}")]
    InvalidConfig(String),

    /// A padded batch is longer than the model accepts.
    #[error("sequence length ({length}) exceeds max_sequence_length ({max})")]
    SequenceTooLong {
        /// The padded sequence length.
        length: usize,

        /// The configured maximum.
        max: usize,
    },

    /// A model produced output of an unexpected shape.
    #[error("model output shape {actual:?} does not match expected {expected:?}")]
    ShapeMismatch {
        /// The `[batch, sequence, vocab]` dims required by the input.
        expected: [usize; 3],

        /// The dims the model returned.
        actual: [usize; 3],
    },

    /// I/O error.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Parse error (integer, json, etc.)
    #[error("parse error: {0}")]
    Parse(String),

    /// Error from an external component.
    #[error("{0}")]
    External(String),
}

/// Result type for sentchar operations.
pub type SCResult<T> = core::result::Result<T, SentcharError>;
