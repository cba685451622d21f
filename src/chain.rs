//! Coreference chains: ordered mentions of a single entity.

use crate::error::{Error, Result};
use crate::mention::Mention;
use crate::token::TokenView;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Index;

/// An ordered sequence of [`Mention`]s believed to refer to the same entity.
///
/// Mentions appear in source order, earliest first, and there are always at
/// least two of them — a one-mention chain says nothing about coreference
/// and cannot be constructed.
///
/// Each chain records which of its mentions is the *most specific* one: the
/// mention judged most informative about the entity (typically a proper name
/// over a definite noun over a pronoun). The ranking criterion itself is
/// linguistic and lives in the chain builder; this type only takes a score
/// per mention and keeps the argmax, breaking ties toward the earliest
/// mention.
///
/// A chain's `id` is assigned by the [`ChainCollection`] that adopts it,
/// in creation order starting at 0.
///
/// [`ChainCollection`]: crate::ChainCollection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chain {
    pub(crate) id: usize,
    mentions: Vec<Mention>,
    most_specific_index: usize,
}

impl Chain {
    /// Build a chain from mentions in source order plus one specificity
    /// score per mention.
    ///
    /// The most specific mention is the argmax of `scores`; on ties the
    /// earliest mention wins. The id is provisional until the chain joins
    /// a collection.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidChain`] if there are fewer than two mentions
    /// or `scores` does not match `mentions` in length.
    pub fn new(mentions: Vec<Mention>, scores: &[f64]) -> Result<Self> {
        if mentions.len() < 2 {
            return Err(Error::invalid_chain(format!(
                "a chain needs at least two mentions, got {}",
                mentions.len()
            )));
        }
        if scores.len() != mentions.len() {
            return Err(Error::invalid_chain(format!(
                "{} mentions but {} specificity scores",
                mentions.len(),
                scores.len()
            )));
        }
        let mut most_specific_index = 0;
        for (i, &score) in scores.iter().enumerate() {
            // Strict comparison keeps the earliest mention on ties.
            if score > scores[most_specific_index] {
                most_specific_index = i;
            }
        }
        Ok(Self {
            id: 0,
            mentions,
            most_specific_index,
        })
    }

    /// The chain's id within its collection (position order, from 0).
    #[must_use]
    pub const fn id(&self) -> usize {
        self.id
    }

    /// The mentions in source order, earliest first.
    #[must_use]
    pub fn mentions(&self) -> &[Mention] {
        &self.mentions
    }

    /// Index of the most specific mention. Always in range.
    #[must_use]
    pub const fn most_specific_index(&self) -> usize {
        self.most_specific_index
    }

    /// The most specific mention itself.
    #[must_use]
    pub fn most_specific_mention(&self) -> &Mention {
        &self.mentions[self.most_specific_index]
    }

    /// Number of mentions (≥ 2).
    #[must_use]
    pub fn len(&self) -> usize {
        self.mentions.len()
    }

    /// Always false; chains hold at least two mentions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.mentions.is_empty()
    }

    /// Checked positional access to a mention.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Mention> {
        self.mentions.get(index)
    }

    /// Iterate over mentions in source order.
    pub fn iter(&self) -> impl Iterator<Item = &Mention> {
        self.mentions.iter()
    }

    /// Whether any mention in this chain holds `position`.
    #[must_use]
    pub fn contains_token(&self, position: usize) -> bool {
        self.mentions.iter().any(|m| m.contains(position))
    }

    /// Whether `position` sits in a mention other than the most specific
    /// one — i.e. the position needs resolving within this chain.
    #[must_use]
    pub(crate) fn is_anaphoric(&self, position: usize) -> bool {
        self.mentions
            .iter()
            .enumerate()
            .any(|(i, m)| i != self.most_specific_index && m.contains(position))
    }

    /// Rich representation, e.g. `0: [Richard(0); Peter(2)], they(4)`.
    #[must_use]
    pub fn pretty(&self, view: &(impl TokenView + ?Sized)) -> String {
        let mentions: Vec<String> = self.mentions.iter().map(|m| m.pretty(view)).collect();
        format!("{}: {}", self.id, mentions.join(", "))
    }
}

/// Compact representation, e.g. `0: [0, 2], [4]`.
impl fmt::Display for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: ", self.id)?;
        for (i, mention) in self.mentions.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", mention)?;
        }
        Ok(())
    }
}

/// Positional access to mentions. Panics when out of range, like a slice;
/// use [`Chain::get`] for checked access.
impl Index<usize> for Chain {
    type Output = Mention;

    fn index(&self, index: usize) -> &Mention {
        &self.mentions[index]
    }
}

impl<'a> IntoIterator for &'a Chain {
    type Item = &'a Mention;
    type IntoIter = std::slice::Iter<'a, Mention>;

    fn into_iter(self) -> Self::IntoIter {
        self.mentions.iter()
    }
}
