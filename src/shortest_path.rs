//! Unweighted shortest paths over an implicit graph.
//!
//! Paths are found by a breadth-first [`Walker`](crate::Walker) session whose
//! nodes are the paths themselves: expanding a path appends each successor of
//! its end node, and the tracker admits a path only if its end node has not
//! been reached before. Breadth-first order then guarantees that the first
//! path to reach a node is a shortest one.

use core::fmt;
use core::hash::Hash;
use core::iter;
use std::collections::HashSet;
use std::rc::Rc;

use crate::tracker::Tracker;
use crate::walker::traversal::Traversal;

struct Step<N> {
    node: N,
    predecessor: Option<ShortestPath<N>>,
    distance: usize,
}

impl<N> Drop for Step<N> {
    // Unlink iteratively so long paths don't overflow the stack.
    fn drop(&mut self) {
        let mut next = self.predecessor.take();
        while let Some(path) = next {
            next = match Rc::try_unwrap(path.0) {
                Ok(mut step) => step.predecessor.take(),
                Err(_) => None,
            };
        }
    }
}

/// A path from a start node, sharing its prefix with the path it extends.
///
/// Cloning is O(1).
pub struct ShortestPath<N>(Rc<Step<N>>);

impl<N> Clone for ShortestPath<N> {
    fn clone(&self) -> Self {
        Self(Rc::clone(&self.0))
    }
}

impl<N> ShortestPath<N> {
    /// The zero-length path at `node`.
    pub fn start(node: N) -> Self {
        Self(Rc::new(Step {
            node,
            predecessor: None,
            distance: 0,
        }))
    }

    /// This path followed by one more edge to `node`.
    pub fn extend(&self, node: N) -> Self {
        Self(Rc::new(Step {
            node,
            predecessor: Some(self.clone()),
            distance: self.distance() + 1,
        }))
    }

    /// The node the path ends at.
    pub fn to(&self) -> &N {
        &self.0.node
    }

    /// The node the path starts from.
    pub fn from(&self) -> &N {
        let mut step = &self.0;
        while let Some(predecessor) = &step.predecessor {
            step = &predecessor.0;
        }
        &step.node
    }

    /// Number of edges on the path.
    pub fn distance(&self) -> usize {
        self.0.distance
    }

    /// Iterates the nodes from the end of the path back to its start.
    pub fn iter_rev(&self) -> impl Iterator<Item = &N> {
        let mut next = Some(&self.0);
        iter::from_fn(move || {
            let step = next?;
            next = step.predecessor.as_ref().map(|p| &p.0);
            Some(&step.node)
        })
    }

    /// The nodes of the path, from start to end.
    pub fn nodes(&self) -> Vec<N>
    where
        N: Clone,
    {
        let mut nodes: Vec<N> = self.iter_rev().cloned().collect();
        nodes.reverse();
        nodes
    }
}

impl<N: fmt::Debug> fmt::Debug for ShortestPath<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut nodes: Vec<&N> = self.iter_rev().collect();
        nodes.reverse();
        f.debug_struct("ShortestPath")
            .field("distance", &self.distance())
            .field("nodes", &nodes)
            .finish()
    }
}

/// Admits a path iff its end node is reached for the first time.
struct EndpointTracker<N> {
    reached: HashSet<N>,
}

impl<N: Eq + Hash + Clone> Tracker<ShortestPath<N>> for EndpointTracker<N> {
    fn track(&mut self, path: &ShortestPath<N>) -> bool {
        let end = path.to();
        !self.reached.contains(end) && self.reached.insert(end.clone())
    }
}

/// Admits every path that closes back on `origin`, otherwise tracks end nodes.
struct CycleTracker<N> {
    origin: N,
    reached: EndpointTracker<N>,
}

impl<N: Eq + Hash + Clone> Tracker<ShortestPath<N>> for CycleTracker<N> {
    fn track(&mut self, path: &ShortestPath<N>) -> bool {
        // The origin is only recorded when a path returns to it.
        path.distance() == 0 || path.to() == &self.origin || self.reached.track(path)
    }
}

/// The one-edge extensions of `path` along the successors of its end node.
fn extensions<N, F, I>(find_successors: &F, path: &ShortestPath<N>) -> impl Iterator<Item = ShortestPath<N>>
where
    F: Fn(&N) -> I,
    I: IntoIterator<Item = N>,
{
    let path = path.clone();
    find_successors(path.to())
        .into_iter()
        .map(move |node| path.extend(node))
}

/// Lazily yields a shortest path from `start` to every node reachable from
/// it, in non-decreasing order of distance. The first item is the empty path
/// at `start`.
///
/// Nodes are identified by `Eq + Hash`. The iterator is infinite if the
/// reachable graph is.
pub fn shortest_paths_from<'a, N, F, I>(
    start: N,
    find_successors: &'a F,
) -> impl Iterator<Item = ShortestPath<N>> + 'a
where
    N: Eq + Hash + Clone + 'a,
    F: Fn(&N) -> I,
    I: IntoIterator<Item = N> + 'a,
{
    let tracker = EndpointTracker {
        reached: HashSet::new(),
    };
    let expand = move |path: &ShortestPath<N>| extensions(find_successors, path);
    Traversal::new(expand, tracker).breadth_first(iter::once(ShortestPath::start(start)))
}

/// Finds a shortest cycle through `node`: a path of at least one edge that
/// starts and ends at `node`. Returns `None` if `node` lies on no cycle.
///
/// # Hazard
/// Does not return if the graph reachable from `node` is infinite and never
/// leads back to `node`.
pub fn shortest_cycle_from<N, F, I>(node: &N, find_successors: &F) -> Option<ShortestPath<N>>
where
    N: Eq + Hash + Clone,
    F: Fn(&N) -> I,
    I: IntoIterator<Item = N>,
{
    let tracker = CycleTracker {
        origin: node.clone(),
        reached: EndpointTracker {
            reached: HashSet::new(),
        },
    };
    let expand = |path: &ShortestPath<N>| extensions(find_successors, path);
    Traversal::new(expand, tracker)
        .breadth_first(iter::once(ShortestPath::start(node.clone())))
        .skip(1)
        .find(|path| path.to() == node)
}
