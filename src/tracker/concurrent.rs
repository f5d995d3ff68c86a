//! A visited set shared between traversals running on different threads.

use core::hash::{BuildHasher, Hash};
use std::collections::hash_map::RandomState;
use std::sync::Arc;

use dashmap::DashSet;

use crate::tracker::Tracker;

/// A thread-safe tracker whose clones share one visited set.
///
/// Hand a clone to every walk that should cooperate: a node visited by any
/// of them is skipped by all the others.
///
/// ```
/// use graph_walker::{tracker::ConcurrentTracker, Walker};
///
/// let shared = ConcurrentTracker::new();
/// let walker = Walker::in_graph_with(|n: &u32| vec![(n + 1) % 10], {
///     let shared = shared.clone();
///     move || shared.clone()
/// });
///
/// std::thread::scope(|s| {
///     s.spawn(|| walker.pre_order_from([0]).count());
///     s.spawn(|| walker.breadth_first_from([5]).count());
/// });
/// assert_eq!(shared.len(), 10);
/// ```
#[derive(Debug)]
pub struct ConcurrentTracker<N, S = RandomState>
where
    N: Eq + Hash,
    S: BuildHasher + Clone,
{
    seen: Arc<DashSet<N, S>>,
}

impl<N: Eq + Hash> ConcurrentTracker<N> {
    /// Creates an empty shared tracker.
    pub fn new() -> Self {
        Self {
            seen: Arc::new(DashSet::new()),
        }
    }
}

impl<N: Eq + Hash> Default for ConcurrentTracker<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N, S> ConcurrentTracker<N, S>
where
    N: Eq + Hash,
    S: BuildHasher + Clone,
{
    /// Creates an empty shared tracker that hashes with `hasher`.
    pub fn with_hasher(hasher: S) -> Self {
        Self {
            seen: Arc::new(DashSet::with_hasher(hasher)),
        }
    }

    /// Number of distinct nodes tracked so far, across all clones.
    pub fn len(&self) -> usize {
        self.seen.len()
    }

    /// Returns `true` if no node has been tracked.
    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }

    /// Returns `true` if `node` has been tracked by any clone.
    pub fn contains(&self, node: &N) -> bool {
        self.seen.contains(node)
    }

    /// Forgets every tracked node, for all clones.
    pub fn clear(&self) {
        self.seen.clear();
    }
}

impl<N, S> Clone for ConcurrentTracker<N, S>
where
    N: Eq + Hash,
    S: BuildHasher + Clone,
{
    fn clone(&self) -> Self {
        Self {
            seen: Arc::clone(&self.seen),
        }
    }
}

impl<N, S> Tracker<N> for ConcurrentTracker<N, S>
where
    N: Eq + Hash + Clone,
    S: BuildHasher + Clone,
{
    #[inline]
    fn track(&mut self, node: &N) -> bool {
        !self.seen.contains(node) && self.seen.insert(node.clone())
    }
}
