//! Node trackers: the test-and-mark predicate a traversal consults before
//! visiting a node.
//!
//! A [`Tracker`] answers "should this node be visited?" and records the answer
//! in the same call. Returning `false` skips the node. The traversal engine
//! trusts the tracker completely, so the choice of tracker decides the
//! traversal's notion of node identity and its memory cost:
//!
//! - [`Untracked`]: never skips anything (trees, or callers bounding the walk).
//! - `HashSet<N>` / `BTreeSet<N>`: exact tracking by `Eq + Hash` or `Ord`.
//! - any `FnMut(&N) -> bool` closure: custom equivalence or bookkeeping.
//! - [`ConcurrentTracker`]: a visited set shared by walks in several threads.
//! - [`DenseTracker`]: an atomic bitset for integer node ids.
//! - [`BloomTracker`]: bounded memory, may skip a fraction of nodes.

use core::hash::{BuildHasher, Hash};
use std::collections::{BTreeSet, HashSet};

pub mod bloom;
pub mod concurrent;
pub mod dense;

pub use bloom::{BloomConfig, BloomTracker};
pub use concurrent::ConcurrentTracker;
pub use dense::DenseTracker;

/// Tracks nodes visited during a traversal.
///
/// `track` is called once each time the traversal is about to visit `node`.
/// It must return `true` and remember `node` if the node has not been seen,
/// or return `false` (without re-recording it) if the node should be skipped.
///
/// A tracker that panics aborts the pull that called it; the session it
/// belongs to must then be discarded.
pub trait Tracker<N: ?Sized> {
    /// Returns `true` iff `node` should be visited, marking it as seen.
    fn track(&mut self, node: &N) -> bool;
}

/// A tracker that admits every node, used for tree traversal.
///
/// Walking a cyclic structure with this tracker never terminates.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Untracked;

impl<N: ?Sized> Tracker<N> for Untracked {
    #[inline(always)]
    fn track(&mut self, _node: &N) -> bool {
        true
    }
}

impl<N, S> Tracker<N> for HashSet<N, S>
where
    N: Eq + Hash + Clone,
    S: BuildHasher,
{
    #[inline]
    fn track(&mut self, node: &N) -> bool {
        // Lookup first so revisits don't clone.
        !self.contains(node) && self.insert(node.clone())
    }
}

impl<N> Tracker<N> for BTreeSet<N>
where
    N: Ord + Clone,
{
    #[inline]
    fn track(&mut self, node: &N) -> bool {
        !self.contains(node) && self.insert(node.clone())
    }
}

impl<N, F> Tracker<N> for F
where
    N: ?Sized,
    F: FnMut(&N) -> bool,
{
    #[inline(always)]
    fn track(&mut self, node: &N) -> bool {
        self(node)
    }
}
