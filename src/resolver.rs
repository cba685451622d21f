//! Recursive antecedent resolution over a chain collection.
//!
//! A token position is *anaphoric* in a chain when some mention other than
//! the chain's most specific one holds it, and *canonical* when the most
//! specific mention holds it. Resolution walks from an anaphoric position
//! to the positions that denote the entity directly:
//!
//! - Every chain in which the position is anaphoric contributes its most
//!   specific mention. Chains in which the position is canonical contribute
//!   nothing — there the token already *is* the referent.
//! - A contributed position that is itself anaphoric elsewhere (a head of a
//!   coordinated mention like "Richard and he", say) is expanded further,
//!   chain by chain, until only self-denoting positions remain.
//! - A visited set guards the recursion: well-formed chain graphs never
//!   cycle, but a cyclic input must terminate rather than diverge, so a
//!   revisited position is treated as terminal.
//!
//! The result is the flattened union across all contributing chains,
//! ascending and duplicate-free.

use crate::chain::Chain;
use crate::collection::ChainCollection;
use std::collections::{BTreeSet, HashSet};

/// Resolve `position` against `chains`.
///
/// `None` means the token is not anaphoric in any chain; callers must only
/// pass positions that exist in the underlying document.
#[must_use]
pub fn resolve(chains: &ChainCollection, position: usize) -> Option<Vec<usize>> {
    let anaphoric: Vec<&Chain> = chains.iter().filter(|c| c.is_anaphoric(position)).collect();
    if anaphoric.is_empty() {
        return None;
    }

    let mut resolved = BTreeSet::new();
    for chain in anaphoric {
        for &head in chain.most_specific_mention().token_positions() {
            let mut visited = HashSet::from([position]);
            resolve_terminal(chains, head, &mut visited, &mut resolved);
        }
    }

    if resolved.is_empty() {
        None
    } else {
        Some(resolved.into_iter().collect())
    }
}

/// Expand `position` down to self-denoting positions, accumulating into
/// `resolved`.
///
/// Recursion depth is bounded by the visited set: each level inserts a new
/// position, and there are finitely many.
fn resolve_terminal(
    chains: &ChainCollection,
    position: usize,
    visited: &mut HashSet<usize>,
    resolved: &mut BTreeSet<usize>,
) {
    if !visited.insert(position) {
        log::warn!("resolution cycle at token {position}; treating it as terminal");
        resolved.insert(position);
        return;
    }

    let anaphoric: Vec<&Chain> = chains.iter().filter(|c| c.is_anaphoric(position)).collect();
    if anaphoric.is_empty() {
        // Canonical in every chain that holds it, or in no chain at all:
        // the position denotes itself.
        resolved.insert(position);
        return;
    }

    for chain in anaphoric {
        log::trace!(
            "expanding token {position} through chain {} most specific mention {}",
            chain.id(),
            chain.most_specific_mention()
        );
        for &head in chain.most_specific_mention().token_positions() {
            resolve_terminal(chains, head, visited, resolved);
        }
    }
}
