//! A minimal host document carrying its coreference chains.
//!
//! The chain data model deliberately knows nothing about documents; real
//! hosts plug in through [`TokenView`]. `Document` is the smallest such
//! host: tokenized display text plus the [`ChainCollection`] the chain
//! builder attached to it, as an explicit field rather than ambient state.

use crate::collection::ChainCollection;
use crate::token::TokenView;
use serde::{Deserialize, Serialize};

/// Tokenized text with its attached coreference chains.
///
/// # Example
///
/// ```rust
/// use coref_chains::{Chain, ChainCollection, Document, Mention};
///
/// let chain = Chain::new(
///     vec![Mention::new(vec![0, 2], true).unwrap(), Mention::single(4)],
///     &[2.0, 1.0],
/// ).unwrap();
/// let doc = Document::new(
///     ["Richard", "and", "Peter", "said", "they", "had", "finished"]
///         .map(String::from)
///         .to_vec(),
///     ChainCollection::new(vec![chain]),
/// );
///
/// assert_eq!(doc.coref_chains().to_string(), "[0: [0, 2], [4]]");
/// assert_eq!(doc.pretty_chains(), "0: [Richard(0); Peter(2)], they(4)");
/// assert_eq!(doc.resolve(4), Some(vec![0, 2]));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    tokens: Vec<String>,
    coref_chains: ChainCollection,
}

impl Document {
    /// Attach `coref_chains` to the tokenized text `tokens`.
    #[must_use]
    pub fn new(tokens: Vec<String>, coref_chains: ChainCollection) -> Self {
        Self {
            tokens,
            coref_chains,
        }
    }

    /// Number of tokens.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Whether the document has no tokens.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// The document's chains.
    #[must_use]
    pub fn coref_chains(&self) -> &ChainCollection {
        &self.coref_chains
    }

    /// The chains touching the token at `position` — the token-scoped view
    /// of [`ChainCollection::filtered_by_token`].
    #[must_use]
    pub fn token_chains(&self, position: usize) -> ChainCollection {
        self.coref_chains.filtered_by_token(position)
    }

    /// Resolve the token at `position` to its antecedent positions.
    #[must_use]
    pub fn resolve(&self, position: usize) -> Option<Vec<usize>> {
        self.coref_chains.resolve(position)
    }

    /// Rich representation of all chains against this document's tokens.
    #[must_use]
    pub fn pretty_chains(&self) -> String {
        self.coref_chains.pretty(&self.tokens)
    }
}

impl TokenView for Document {
    fn token_text(&self, position: usize) -> &str {
        &self.tokens[position]
    }
}
