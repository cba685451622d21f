//! Error types for coref-chains.

use thiserror::Error;

/// Result type for coref-chains operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for coref-chains operations.
///
/// Every variant is a construction-time failure: once a [`Mention`],
/// [`Chain`], or [`ChainCollection`] has been built, all reads on it are
/// infallible. A token with no antecedent is *not* an error — `resolve`
/// reports it as `None`.
///
/// [`Mention`]: crate::Mention
/// [`Chain`]: crate::Chain
/// [`ChainCollection`]: crate::ChainCollection
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Malformed mention input (empty or non-ascending token positions).
    #[error("Invalid mention: {0}")]
    InvalidMention(String),

    /// Malformed chain input (too few mentions, or score list mismatch).
    #[error("Invalid chain: {0}")]
    InvalidChain(String),
}

impl Error {
    /// Create an invalid mention error.
    #[must_use]
    pub fn invalid_mention(msg: impl Into<String>) -> Self {
        Self::InvalidMention(msg.into())
    }

    /// Create an invalid chain error.
    #[must_use]
    pub fn invalid_chain(msg: impl Into<String>) -> Self {
        Self::InvalidChain(msg.into())
    }
}
