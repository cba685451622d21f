//! The narrow interface onto the host document model.
//!
//! The chain data model stores token *positions* only; it never owns tokens.
//! Anything that can map a stable position back to display text — a full
//! document model, or a plain slice of strings in tests — can back the rich
//! representations.

/// Read-only view of a document's tokens by stable position.
///
/// Positions handed to this trait always come from mentions the caller
/// built over the same document, so a position without a token is a caller
/// contract violation; implementations may panic on it the way slice
/// indexing does.
pub trait TokenView {
    /// Display text of the token at `position`.
    fn token_text(&self, position: usize) -> &str;
}

impl<'a> TokenView for [&'a str] {
    fn token_text(&self, position: usize) -> &str {
        self[position]
    }
}

impl TokenView for [String] {
    fn token_text(&self, position: usize) -> &str {
        &self[position]
    }
}

impl TokenView for Vec<String> {
    fn token_text(&self, position: usize) -> &str {
        &self[position]
    }
}

impl<T: TokenView + ?Sized> TokenView for &T {
    fn token_text(&self, position: usize) -> &str {
        (**self).token_text(position)
    }
}
