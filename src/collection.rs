//! The document-level set of coreference chains.

use crate::chain::Chain;
use crate::resolver;
use crate::token::TokenView;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Index;
use std::sync::Arc;

/// All coreference chains of one document, ordered by id.
///
/// Built once by the chain builder and attached to the host document;
/// immutable afterwards. Chains are held behind `Arc` so token-filtered
/// views share them instead of copying, and so reads can run concurrently
/// without synchronization.
///
/// # Example
///
/// ```rust
/// use coref_chains::{Chain, ChainCollection, Mention};
///
/// // "Richard and Peter said they had finished"
/// let chain = Chain::new(
///     vec![Mention::new(vec![0, 2], true).unwrap(), Mention::single(4)],
///     &[2.0, 1.0],
/// ).unwrap();
/// let chains = ChainCollection::new(vec![chain]);
///
/// assert_eq!(chains.to_string(), "[0: [0, 2], [4]]");
/// assert_eq!(chains.resolve(4), Some(vec![0, 2]));
/// assert_eq!(chains.resolve(0), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChainCollection {
    chains: Vec<Arc<Chain>>,
}

impl ChainCollection {
    /// Adopt `chains`, assigning each its id from its list position.
    #[must_use]
    pub fn new(chains: Vec<Chain>) -> Self {
        Self {
            chains: chains
                .into_iter()
                .enumerate()
                .map(|(id, mut chain)| {
                    chain.id = id;
                    Arc::new(chain)
                })
                .collect(),
        }
    }

    /// Number of chains.
    #[must_use]
    pub fn len(&self) -> usize {
        self.chains.len()
    }

    /// Whether the collection holds no chains.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chains.is_empty()
    }

    /// Checked positional access to a chain.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Chain> {
        self.chains.get(index).map(Arc::as_ref)
    }

    /// Iterate over chains in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = &Chain> {
        self.chains.iter().map(Arc::as_ref)
    }

    /// The chains containing `position` in at least one mention, in
    /// ascending id order.
    ///
    /// Each returned chain keeps its full mention list and original id;
    /// only the collection is filtered. The view shares the underlying
    /// chains with `self` and is cheap to produce. An empty collection
    /// comes back when no chain touches the token.
    #[must_use]
    pub fn filtered_by_token(&self, position: usize) -> ChainCollection {
        ChainCollection {
            chains: self
                .chains
                .iter()
                .filter(|c| c.contains_token(position))
                .cloned()
                .collect(),
        }
    }

    /// Resolve `position` to its antecedent token positions.
    ///
    /// Returns the ascending, duplicate-free positions that together make
    /// up the best-available antecedent, or `None` when the token is not
    /// anaphoric in any chain — either absent from all chains, or sitting
    /// in the most specific mention everywhere it appears.
    ///
    /// See [`crate::resolver`] for the algorithm.
    #[must_use]
    pub fn resolve(&self, position: usize) -> Option<Vec<usize>> {
        resolver::resolve(self, position)
    }

    /// Rich representation: semicolon-joined chain pretty forms, e.g.
    /// `0: Peter(2), he(6); 1: [Richard(4); he(6)], They(10)`.
    #[must_use]
    pub fn pretty(&self, view: &(impl TokenView + ?Sized)) -> String {
        let chains: Vec<String> = self.chains.iter().map(|c| c.pretty(view)).collect();
        chains.join("; ")
    }
}

/// Compact representation: bracketed, comma-joined chains, e.g.
/// `[0: [0, 2], [4]]`.
impl fmt::Display for ChainCollection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, chain) in self.chains.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", chain)?;
        }
        write!(f, "]")
    }
}

/// Positional access to chains. Panics when out of range, like a slice;
/// use [`ChainCollection::get`] for checked access.
impl Index<usize> for ChainCollection {
    type Output = Chain;

    fn index(&self, index: usize) -> &Chain {
        &self.chains[index]
    }
}

impl<'a> IntoIterator for &'a ChainCollection {
    type Item = &'a Chain;
    type IntoIter = CollectionIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        CollectionIter {
            inner: self.chains.iter(),
        }
    }
}

/// Iterator over a collection's chains in id order.
pub struct CollectionIter<'a> {
    inner: std::slice::Iter<'a, Arc<Chain>>,
}

impl<'a> Iterator for CollectionIter<'a> {
    type Item = &'a Chain;

    fn next(&mut self) -> Option<&'a Chain> {
        self.inner.next().map(Arc::as_ref)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for CollectionIter<'_> {}
