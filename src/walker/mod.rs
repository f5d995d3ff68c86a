//! Generic, lazily evaluated graph and tree traversal.
//!
//! A [`Walker`] binds a successor function to a tracking strategy. It holds no
//! traversal state of its own: every `*_from` call starts a fresh session
//! that owns its frontier and tracker, so one walker can drive any number of
//! independent traversals, including from several threads at once.
//!
//! Sessions are pull-based iterators. Nothing is expanded until `next` is
//! called, which makes graphs of infinite depth or breadth walkable as long
//! as the consumer stops pulling:
//!
//! ```
//! use graph_walker::Walker;
//!
//! let naturals = Walker::in_tree(|n: &u64| [n + 1]);
//! let first: Vec<u64> = naturals.pre_order_from([0]).take(5).collect();
//! assert_eq!(first, [0, 1, 2, 3, 4]);
//! ```

use core::hash::Hash;
use std::collections::HashSet;

use crate::tracker::{Tracker, Untracked};

pub mod iter;
pub mod order;
pub(crate) mod traversal;


pub use iter::{BreadthFirst, PostOrder, PreOrder, Walk};
pub use order::TraversalOrder;

use traversal::Traversal;

/// An immutable, reusable traversal configuration.
///
/// `F` finds the successors of a node; `K` creates the tracker each session
/// uses to skip nodes it should not visit.
///
/// None of the iterators a walker returns may be shared between threads
/// while being advanced; each session is single-threaded. Distinct sessions
/// share nothing unless `K` hands out trackers with shared state.
#[derive(Clone)]
pub struct Walker<F, K> {
    find_successors: F,
    new_tracker: K,
}

impl<F> Walker<F, fn() -> Untracked> {
    /// Returns a walker for the tree (no cycles) observed through
    /// `find_children`.
    ///
    /// No node is ever skipped. If `find_children` turns out to describe a
    /// cyclic structure (any undirected graph, for instance), the walk goes
    /// around the cycle forever.
    ///
    /// `find_children` returns an empty iterator for a leaf.
    pub fn in_tree<N, I>(find_children: F) -> Self
    where
        F: Fn(&N) -> I,
        I: IntoIterator<Item = N>,
    {
        Self {
            find_successors: find_children,
            new_tracker: || Untracked,
        }
    }
}

impl<N, F> Walker<F, fn() -> HashSet<N>> {
    /// Returns a walker for the graph (possibly cyclic) observed through
    /// `find_successors`.
    ///
    /// Each session remembers the nodes it has visited in its own `HashSet`,
    /// so memory grows linearly with the number of distinct nodes visited.
    pub fn in_graph<I>(find_successors: F) -> Self
    where
        F: Fn(&N) -> I,
        I: IntoIterator<Item = N>,
        N: Eq + Hash + Clone,
    {
        Self {
            find_successors,
            new_tracker: HashSet::new,
        }
    }
}

impl<F, K> Walker<F, K> {
    /// Returns a graph walker that asks a custom tracker which nodes to visit.
    ///
    /// `new_tracker` is called once per session. Returning a fresh tracker
    /// each time gives every session its own notion of "visited", for
    /// example under a custom equivalence. Returning clones of one shared
    /// tracker, such as a [`ConcurrentTracker`](crate::tracker::ConcurrentTracker),
    /// makes sessions cooperate: a node visited by one is skipped by all.
    ///
    /// Probabilistic trackers ([`BloomTracker`](crate::tracker::BloomTracker))
    /// bound memory at the price of skipping some nodes; since they have no
    /// false negatives, a finite cyclic graph is still walked in finite time.
    pub fn in_graph_with<N, I, T>(find_successors: F, new_tracker: K) -> Self
    where
        F: Fn(&N) -> I,
        I: IntoIterator<Item = N>,
        K: Fn() -> T,
        T: Tracker<N>,
    {
        Self {
            find_successors,
            new_tracker,
        }
    }

    /// The successor function this walker expands nodes with.
    pub fn successors(&self) -> &F {
        &self.find_successors
    }

    fn session<N, I, T, R>(&self) -> Traversal<N, &F, I, T, R>
    where
        F: Fn(&N) -> I,
        I: IntoIterator<Item = N>,
        K: Fn() -> T,
        T: Tracker<N>,
        R: Iterator<Item = N>,
    {
        Traversal::new(&self.find_successors, (self.new_tracker)())
    }

    /// Starts from `start_nodes` and walks depth first in pre-order.
    ///
    /// Start nodes are pulled one at a time, only when the walk reaches
    /// them, so `start_nodes` may itself be infinite.
    ///
    /// The iterator may be infinite if the graph has infinite depth or
    /// breadth; it can still be cut short to consume a bounded number of
    /// nodes.
    pub fn pre_order_from<N, I, T, S>(&self, start_nodes: S) -> PreOrder<N, &F, I, T, S::IntoIter>
    where
        F: Fn(&N) -> I,
        I: IntoIterator<Item = N>,
        K: Fn() -> T,
        T: Tracker<N>,
        S: IntoIterator<Item = N>,
    {
        self.session().pre_order(start_nodes.into_iter())
    }

    /// Starts from `start_nodes` and walks depth first in post-order.
    ///
    /// The iterator may be infinite if the graph has infinite breadth. It
    /// loops forever, without emitting, on reaching a node of infinite depth.
    pub fn post_order_from<N, I, T, S>(&self, start_nodes: S) -> PostOrder<N, &F, I, T, S::IntoIter>
    where
        F: Fn(&N) -> I,
        I: IntoIterator<Item = N>,
        K: Fn() -> T,
        T: Tracker<N>,
        S: IntoIterator<Item = N>,
    {
        self.session().post_order(start_nodes.into_iter())
    }

    /// Starts from `start_nodes` and walks in breadth-first order.
    ///
    /// The iterator may be infinite if the graph has infinite depth or
    /// breadth; it can still be cut short to consume a bounded number of
    /// nodes.
    pub fn breadth_first_from<N, I, T, S>(&self, start_nodes: S) -> BreadthFirst<N, &F, I, T, S::IntoIter>
    where
        F: Fn(&N) -> I,
        I: IntoIterator<Item = N>,
        K: Fn() -> T,
        T: Tracker<N>,
        S: IntoIterator<Item = N>,
    {
        self.session().breadth_first(start_nodes.into_iter())
    }

    /// Starts from `start_nodes` and walks in `order`.
    pub fn walk_from<N, I, T, S>(&self, order: TraversalOrder, start_nodes: S) -> Walk<N, &F, I, T, S::IntoIter>
    where
        F: Fn(&N) -> I,
        I: IntoIterator<Item = N>,
        K: Fn() -> T,
        T: Tracker<N>,
        S: IntoIterator<Item = N>,
    {
        match order {
            TraversalOrder::PreOrder => Walk::PreOrder(self.pre_order_from(start_nodes)),
            TraversalOrder::PostOrder => Walk::PostOrder(self.post_order_from(start_nodes)),
            TraversalOrder::BreadthFirst => Walk::BreadthFirst(self.breadth_first_from(start_nodes)),
        }
    }
}
