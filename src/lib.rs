//! # coref-chains
//!
//! Coreference chain data model and recursive antecedent resolution.
//!
//! This crate is the core data structure behind a coreference-resolution
//! component: once an external rule engine has decided which token spans
//! are mentions and which mentions co-refer, this crate represents that
//! grouping and answers the question a consumer actually asks — *given
//! this pronoun, which earlier tokens does it stand for?*
//!
//! - **[`Mention`]**: an immutable span of token positions, possibly
//!   coordinated ("Richard and Peter").
//! - **[`Chain`]**: mentions of one entity in source order, with the most
//!   specific mention (the best description of the entity) precomputed
//!   from caller-supplied specificity scores.
//! - **[`ChainCollection`]**: all chains of a document, indexable,
//!   iterable, filterable per token, and the entry point for resolution.
//! - **[`resolver`]**: the recursive, cross-chain, cycle-safe algorithm
//!   mapping an anaphoric token to its antecedent positions.
//!
//! What this crate does *not* do: detect mentions in raw text, decide
//! chain membership, score mention specificity, or link entities to
//! knowledge bases. Those belong to the linguistic pipeline in front of it.
//!
//! ## Quick start
//!
//! ```rust
//! use coref_chains::{Chain, ChainCollection, Mention};
//!
//! // "Richard and Peter said they had finished"
//! // The chain builder found one chain: [Richard, Peter] <- they.
//! let chain = Chain::new(
//!     vec![
//!         Mention::new(vec![0, 2], true).unwrap(), // coordinated heads
//!         Mention::single(4),                      // "they"
//!     ],
//!     &[2.0, 1.0], // specificity: proper names outrank the pronoun
//! )
//! .unwrap();
//! let chains = ChainCollection::new(vec![chain]);
//!
//! assert_eq!(chains.to_string(), "[0: [0, 2], [4]]");
//! assert_eq!(chains.resolve(4), Some(vec![0, 2])); // "they" -> Richard, Peter
//! assert_eq!(chains.resolve(0), None);             // "Richard" denotes itself
//! ```
//!
//! ## Concurrency
//!
//! Everything is built once and immutable afterwards. All reads —
//! representations, filtered views, resolution — are pure and safe to run
//! from any number of threads without synchronization.

#![warn(missing_docs)]

pub mod chain;
pub mod collection;
pub mod document;
pub mod error;
pub mod mention;
pub mod resolver;
pub mod token;

// Re-exports for convenience
pub use chain::Chain;
pub use collection::{ChainCollection, CollectionIter};
pub use document::Document;
pub use error::{Error, Result};
pub use mention::Mention;
pub use token::TokenView;
