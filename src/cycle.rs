//! Cycle detection with Floyd's tortoise and hare, built from two tree-mode
//! traversals of the same graph.

use core::hash::Hash;
use std::collections::HashSet;

use crate::shortest_path::shortest_cycle_from;
use crate::walker::Walker;

/// Detects whether the graph observed through `find_successors` has a cycle
/// reachable from `start`, using Floyd's
/// [tortoise and hare](https://en.wikipedia.org/wiki/Cycle_detection#Floyd's_tortoise_and_hare).
///
/// Two independent pre-order walks run from `start` without tracking visited
/// nodes. The hare takes every second node of its walk, so when the walk
/// loops the hare eventually lands on the node the tortoise is at. A shortest
/// cycle through that node (or, failing that, through a node the tortoise
/// passed earlier) is returned as its node sequence, starting and ending at
/// the same node. Returns an empty `Vec` if the walks end without a cycle.
///
/// `find_successors` must be deterministic: both walks rely on seeing the
/// same successors for the same node.
///
/// # Hazard
/// Never returns if the graph is infinite without a cycle, as the walks go on
/// forever (the natural numbers, for instance). Bound such graphs yourself.
///
/// Each candidate is checked with [`shortest_cycle_from`], which never
/// returns if the candidate reaches an infinite acyclic region without
/// leading back to itself. Candidates include nodes the tortoise passed
/// before the meeting, so a finite meeting can still hang: with
/// `s -> [d, a]`, `a -> [d, i]` and `i -> i + 1 -> ...`, the walks meet at
/// `d` with `s` queued, and checking `s` runs forever.
///
/// ```
/// use graph_walker::cycle::detect_cycle_in_graph;
///
/// let ring = |n: &u32| [(n + 1) % 3];
/// assert_eq!(detect_cycle_in_graph(ring, 0), [2, 0, 1, 2]);
///
/// let chain = |n: &u32| (*n < 3).then_some(n + 1);
/// assert!(detect_cycle_in_graph(chain, 0).is_empty());
/// ```
pub fn detect_cycle_in_graph<N, F, I>(find_successors: F, start: N) -> Vec<N>
where
    N: Eq + Hash + Clone,
    F: Fn(&N) -> I,
    I: IntoIterator<Item = N>,
{
    let walker = Walker::in_tree::<N, I>(&find_successors);
    let tortoise = walker.pre_order_from([start.clone()]);
    let hare = walker.pre_order_from([start]).skip(1).step_by(2);

    // Every distinct node the tortoise passes is queued once for a cycle
    // check, run when the hare next lands on the tortoise. The meeting node
    // itself is checked first. A meeting need not sit on a cycle: the tree
    // expansion of a DAG repeats shared descendants, and a looping walk can
    // keep meeting on a leaf hanging off the loop. Checking the queued nodes
    // too guarantees a node on the loop is eventually examined.
    let mut queued = HashSet::new();
    let mut pending = Vec::new();
    for (slow, fast) in tortoise.zip(hare) {
        let fresh = queued.insert(slow.clone());
        if slow != fast {
            if fresh {
                pending.push(slow);
            }
            continue;
        }

        // Move the meeting node to the top, unless it was already checked.
        let before = pending.len();
        pending.retain(|node| node != &slow);
        if fresh || pending.len() < before {
            pending.push(slow);
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(candidates = pending.len(), "tortoise met hare");

        while let Some(candidate) = pending.pop() {
            if let Some(cycle) = shortest_cycle_from(&candidate, &find_successors) {
                #[cfg(feature = "tracing")]
                tracing::debug!(length = cycle.distance(), "cycle detected");
                return cycle.nodes();
            }
        }
    }
    Vec::new()
}
