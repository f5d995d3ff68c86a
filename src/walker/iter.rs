//! Lazy iterators over a traversal session.
//!
//! Each call to `next` performs only the work needed to produce one node:
//! at most one successor expansion for pre-order and breadth-first, and one
//! descent for post-order. Dropping an iterator early abandons the rest of
//! the graph at no cost.
//!
//! The `R` parameter of each iterator is the iterator over its start nodes.
//! A start node is pulled from it only when the walk is ready to visit it.

use core::iter::FusedIterator;

use crate::tracker::Tracker;
use crate::walker::order::{InsertionOrder, TraversalOrder};
use crate::walker::traversal::Traversal;

/// Depth-first, pre-order iterator.
///
/// May be infinite if the graph has infinite depth or breadth.
pub struct PreOrder<N, F, I, T, R>
where
    I: IntoIterator<Item = N>,
{
    traversal: Traversal<N, F, I, T, R>,
}

impl<N, F, I, T, R> PreOrder<N, F, I, T, R>
where
    I: IntoIterator<Item = N>,
{
    pub(crate) fn new(traversal: Traversal<N, F, I, T, R>) -> Self {
        Self { traversal }
    }
}

impl<N, F, I, T, R> Iterator for PreOrder<N, F, I, T, R>
where
    F: Fn(&N) -> I,
    I: IntoIterator<Item = N>,
    T: Tracker<N>,
    R: Iterator<Item = N>,
{
    type Item = N;

    #[inline]
    fn next(&mut self) -> Option<N> {
        self.traversal.next_top_down(InsertionOrder::Stack)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.traversal.is_exhausted() {
            (0, Some(0))
        } else {
            (0, None)
        }
    }
}

impl<N, F, I, T, R> FusedIterator for PreOrder<N, F, I, T, R>
where
    F: Fn(&N) -> I,
    I: IntoIterator<Item = N>,
    T: Tracker<N>,
    R: Iterator<Item = N>,
{
}

/// Breadth-first (level order) iterator.
///
/// May be infinite if the graph has infinite depth or breadth.
pub struct BreadthFirst<N, F, I, T, R>
where
    I: IntoIterator<Item = N>,
{
    traversal: Traversal<N, F, I, T, R>,
}

impl<N, F, I, T, R> BreadthFirst<N, F, I, T, R>
where
    I: IntoIterator<Item = N>,
{
    pub(crate) fn new(traversal: Traversal<N, F, I, T, R>) -> Self {
        Self { traversal }
    }
}

impl<N, F, I, T, R> Iterator for BreadthFirst<N, F, I, T, R>
where
    F: Fn(&N) -> I,
    I: IntoIterator<Item = N>,
    T: Tracker<N>,
    R: Iterator<Item = N>,
{
    type Item = N;

    #[inline]
    fn next(&mut self) -> Option<N> {
        self.traversal.next_top_down(InsertionOrder::Queue)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.traversal.is_exhausted() {
            (0, Some(0))
        } else {
            (0, None)
        }
    }
}

impl<N, F, I, T, R> FusedIterator for BreadthFirst<N, F, I, T, R>
where
    F: Fn(&N) -> I,
    I: IntoIterator<Item = N>,
    T: Tracker<N>,
    R: Iterator<Item = N>,
{
}

/// Depth-first, post-order iterator.
///
/// May be infinite if the graph has infinite breadth. A node whose subtree
/// has infinite depth is never emitted, and neither is anything after it:
/// `next` loops forever trying to reach the bottom.
pub struct PostOrder<N, F, I, T, R>
where
    I: IntoIterator<Item = N>,
{
    traversal: Traversal<N, F, I, T, R>,
    /// Visited nodes waiting for their successors to be emitted.
    ancestors: Vec<N>,
}

impl<N, F, I, T, R> PostOrder<N, F, I, T, R>
where
    I: IntoIterator<Item = N>,
{
    pub(crate) fn new(traversal: Traversal<N, F, I, T, R>) -> Self {
        Self {
            traversal,
            ancestors: Vec::new(),
        }
    }
}

impl<N, F, I, T, R> Iterator for PostOrder<N, F, I, T, R>
where
    F: Fn(&N) -> I,
    I: IntoIterator<Item = N>,
    T: Tracker<N>,
    R: Iterator<Item = N>,
{
    type Item = N;

    #[inline]
    fn next(&mut self) -> Option<N> {
        self.traversal.next_bottom_up(&mut self.ancestors)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.traversal.is_exhausted() {
            (0, Some(0))
        } else {
            (self.ancestors.len(), None)
        }
    }
}

impl<N, F, I, T, R> FusedIterator for PostOrder<N, F, I, T, R>
where
    F: Fn(&N) -> I,
    I: IntoIterator<Item = N>,
    T: Tracker<N>,
    R: Iterator<Item = N>,
{
}

/// A traversal whose order is chosen at runtime.
pub enum Walk<N, F, I, T, R>
where
    I: IntoIterator<Item = N>,
{
    /// See [`PreOrder`].
    PreOrder(PreOrder<N, F, I, T, R>),
    /// See [`PostOrder`].
    PostOrder(PostOrder<N, F, I, T, R>),
    /// See [`BreadthFirst`].
    BreadthFirst(BreadthFirst<N, F, I, T, R>),
}

impl<N, F, I, T, R> Walk<N, F, I, T, R>
where
    I: IntoIterator<Item = N>,
{
    /// The order this walk emits nodes in.
    pub fn order(&self) -> TraversalOrder {
        match self {
            Walk::PreOrder(_) => TraversalOrder::PreOrder,
            Walk::PostOrder(_) => TraversalOrder::PostOrder,
            Walk::BreadthFirst(_) => TraversalOrder::BreadthFirst,
        }
    }
}

impl<N, F, I, T, R> Iterator for Walk<N, F, I, T, R>
where
    F: Fn(&N) -> I,
    I: IntoIterator<Item = N>,
    T: Tracker<N>,
    R: Iterator<Item = N>,
{
    type Item = N;

    #[inline]
    fn next(&mut self) -> Option<N> {
        match self {
            Walk::PreOrder(it) => it.next(),
            Walk::PostOrder(it) => it.next(),
            Walk::BreadthFirst(it) => it.next(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            Walk::PreOrder(it) => it.size_hint(),
            Walk::PostOrder(it) => it.size_hint(),
            Walk::BreadthFirst(it) => it.size_hint(),
        }
    }
}

impl<N, F, I, T, R> FusedIterator for Walk<N, F, I, T, R>
where
    F: Fn(&N) -> I,
    I: IntoIterator<Item = N>,
    T: Tracker<N>,
    R: Iterator<Item = N>,
{
}
