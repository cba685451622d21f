//! Mention spans: the leaf of the coreference data model.

use crate::error::{Error, Result};
use crate::token::TokenView;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Index;

/// An immutable span descriptor: the token positions a mention occupies.
///
/// A mention normally holds a single head token position. Coordinated
/// mentions ("Richard and Peter") hold one position per head and set
/// `is_coordinated`, which tells the resolver that each head may resolve
/// independently.
///
/// Positions are strictly ascending and unique; construction enforces this.
///
/// # Example
///
/// ```rust
/// use coref_chains::Mention;
///
/// let m = Mention::new(vec![0, 2], true).unwrap();
/// assert_eq!(m.to_string(), "[0, 2]");
/// assert_eq!(m.pretty(&["Richard", "and", "Peter"][..]), "[Richard(0); Peter(2)]");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Mention {
    token_positions: Vec<usize>,
    is_coordinated: bool,
}

impl Mention {
    /// Create a mention from its token positions.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidMention`] if `token_positions` is empty or
    /// not strictly ascending. Malformed input here is a chain-builder bug,
    /// never silently repaired.
    pub fn new(token_positions: Vec<usize>, is_coordinated: bool) -> Result<Self> {
        if token_positions.is_empty() {
            return Err(Error::invalid_mention("no token positions"));
        }
        if token_positions.windows(2).any(|w| w[0] >= w[1]) {
            return Err(Error::invalid_mention(format!(
                "token positions not strictly ascending: {:?}",
                token_positions
            )));
        }
        Ok(Self {
            token_positions,
            is_coordinated,
        })
    }

    /// Convenience constructor for the common single-head case.
    ///
    /// Single-position mentions are always valid, so this cannot fail.
    #[must_use]
    pub fn single(token_position: usize) -> Self {
        Self {
            token_positions: vec![token_position],
            is_coordinated: false,
        }
    }

    /// The token positions this mention occupies, strictly ascending.
    #[must_use]
    pub fn token_positions(&self) -> &[usize] {
        &self.token_positions
    }

    /// Whether this mention coordinates multiple independent heads.
    #[must_use]
    pub const fn is_coordinated(&self) -> bool {
        self.is_coordinated
    }

    /// Number of token positions (≥ 1).
    #[must_use]
    pub fn len(&self) -> usize {
        self.token_positions.len()
    }

    /// Always false; mentions hold at least one position.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.token_positions.is_empty()
    }

    /// The earliest token position.
    #[must_use]
    pub fn first(&self) -> usize {
        self.token_positions[0]
    }

    /// Whether this mention holds `position`.
    #[must_use]
    pub fn contains(&self, position: usize) -> bool {
        // Positions are sorted, so binary search suffices.
        self.token_positions.binary_search(&position).is_ok()
    }

    /// Rich representation: `text(pos)` per position, `"; "`-joined and
    /// bracketed when there is more than one position.
    ///
    /// `[Richard(0); Peter(2)]` for a coordinated pair, `they(4)` for a
    /// single-head mention.
    #[must_use]
    pub fn pretty(&self, view: &(impl TokenView + ?Sized)) -> String {
        let parts: Vec<String> = self
            .token_positions
            .iter()
            .map(|&p| format!("{}({})", view.token_text(p), p))
            .collect();
        if parts.len() == 1 {
            parts.into_iter().next().unwrap_or_default()
        } else {
            format!("[{}]", parts.join("; "))
        }
    }
}

/// Mentions are equal iff their token positions match element-for-element.
/// The coordination flag is construction metadata and does not participate.
impl PartialEq for Mention {
    fn eq(&self, other: &Self) -> bool {
        self.token_positions == other.token_positions
    }
}

impl Eq for Mention {}

impl std::hash::Hash for Mention {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.token_positions.hash(state);
    }
}

/// Compact representation: the literal position list, e.g. `[0, 2]`.
impl fmt::Display for Mention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.token_positions)
    }
}

/// Positional access to token positions. Panics when out of range, like a
/// slice; use [`Mention::token_positions`] for checked iteration.
impl Index<usize> for Mention {
    type Output = usize;

    fn index(&self, index: usize) -> &usize {
        &self.token_positions[index]
    }
}
