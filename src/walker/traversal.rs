//! The traversal session: a frontier of lazily expanded layers.
//!
//! Every traversal order is driven by the same primitive, [`Traversal::visit_next`],
//! which draws the next admitted node from the front layer. Pre-order and
//! breadth-first differ only in where a freshly expanded layer is inserted;
//! post-order additionally keeps a stack of ancestors whose emission is
//! deferred until their layer of successors runs dry.

use core::marker::PhantomData;
use std::collections::VecDeque;

use crate::tracker::Tracker;
use crate::walker::iter::{BreadthFirst, PostOrder, PreOrder};
use crate::walker::order::{InsertionOrder, TraversalOrder};

/// One group of not-yet-visited nodes on the frontier.
pub(crate) enum Layer<R, J> {
    /// The start nodes of the session, pulled one at a time.
    Roots(R),
    /// The successors of one visited node.
    Successors(J),
}

impl<N, R, J> Iterator for Layer<R, J>
where
    R: Iterator<Item = N>,
    J: Iterator<Item = N>,
{
    type Item = N;

    #[inline]
    fn next(&mut self) -> Option<N> {
        match self {
            Layer::Roots(roots) => roots.next(),
            Layer::Successors(successors) => successors.next(),
        }
    }
}

/// A single-use, single-threaded traversal session.
///
/// `R` iterates the start nodes; `I` is what the successor function returns.
pub(crate) struct Traversal<N, F, I, T, R>
where
    I: IntoIterator<Item = N>,
{
    find_successors: F,
    tracker: T,
    horizon: VecDeque<Layer<R, I::IntoIter>>,
    _node: PhantomData<fn() -> N>,
}

impl<N, F, I, T, R> Traversal<N, F, I, T, R>
where
    F: Fn(&N) -> I,
    I: IntoIterator<Item = N>,
    T: Tracker<N>,
    R: Iterator<Item = N>,
{
    pub(crate) fn new(find_successors: F, tracker: T) -> Self {
        Self {
            find_successors,
            tracker,
            horizon: VecDeque::new(),
            _node: PhantomData,
        }
    }

    pub(crate) fn pre_order(mut self, start_nodes: R) -> PreOrder<N, F, I, T, R> {
        self.seed(start_nodes, TraversalOrder::PreOrder);
        PreOrder::new(self)
    }

    pub(crate) fn breadth_first(mut self, start_nodes: R) -> BreadthFirst<N, F, I, T, R> {
        self.seed(start_nodes, TraversalOrder::BreadthFirst);
        BreadthFirst::new(self)
    }

    pub(crate) fn post_order(mut self, start_nodes: R) -> PostOrder<N, F, I, T, R> {
        self.seed(start_nodes, TraversalOrder::PostOrder);
        PostOrder::new(self)
    }

    /// Queues the start nodes without pulling any of them.
    fn seed(
        &mut self,
        start_nodes: R,
        #[cfg_attr(not(feature = "tracing"), allow(unused_variables))] order: TraversalOrder,
    ) {
        #[cfg(feature = "tracing")]
        tracing::debug!(%order, "starting traversal");

        self.horizon.push_back(Layer::Roots(start_nodes));
    }

    #[inline]
    pub(crate) fn is_exhausted(&self) -> bool {
        self.horizon.is_empty()
    }

    /// Draws the next node admitted by the tracker from the front layer.
    ///
    /// Returns `None` after discarding the front layer once it has no
    /// admissible node left, or if the frontier is empty.
    fn visit_next(&mut self) -> Option<N> {
        let top = self.horizon.front_mut()?;
        for node in top.by_ref() {
            if self.tracker.track(&node) {
                return Some(node);
            }
        }
        self.horizon.pop_front();
        None
    }

    fn expand(&self, node: &N) -> Layer<R, I::IntoIter> {
        #[cfg(feature = "tracing")]
        tracing::trace!(depth = self.horizon.len(), "expanding node");

        Layer::Successors((self.find_successors)(node).into_iter())
    }

    /// Emits the next node top-down: a node is yielded as soon as it is drawn,
    /// after its successors have been queued according to `order`.
    pub(crate) fn next_top_down(&mut self, order: InsertionOrder) -> Option<N> {
        while !self.horizon.is_empty() {
            if let Some(node) = self.visit_next() {
                let successors = self.expand(&node);
                order.insert_into(&mut self.horizon, successors);
                return Some(node);
            }
        }
        None
    }

    /// Emits the next node bottom-up: descends until a layer runs dry, then
    /// yields the ancestor whose successors that layer held.
    pub(crate) fn next_bottom_up(&mut self, ancestors: &mut Vec<N>) -> Option<N> {
        while !self.horizon.is_empty() {
            while let Some(node) = self.visit_next() {
                let successors = self.expand(&node);
                self.horizon.push_front(successors);
                ancestors.push(node);
            }
            if let Some(node) = ancestors.pop() {
                return Some(node);
            }
        }
        None
    }
}
