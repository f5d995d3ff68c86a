//! # `graph_walker` - Lazy Traversal of Implicit Graphs
//!
//! Generic pre-order, post-order and breadth-first traversal over any
//! structure described by a successor function, produced as lazily evaluated
//! iterators. Nothing about the graph is materialized up front, so graphs of
//! infinite depth or breadth can be walked as far as the consumer cares to
//! pull.
//!
//! ## Key Features
//!
//! - **Lazy sessions**: each `next()` expands at most what is needed for one node
//! - **Pluggable tracking**: per-session sets, shared concurrent sets, dense
//!   bitsets, Bloom filters or any closure decide which nodes to skip
//! - **Cycle detection**: Floyd's tortoise and hare composed from two traversals
//! - **Shortest paths**: breadth-first shortest paths and cycles as a by-product
//!
//! ## Architecture
//!
//! 1. **Walker** (`Walker<F, K>`):
//!    - Immutable configuration: successor function `F` plus tracker factory `K`
//!    - Starts any number of independent sessions
//!
//! 2. **Traversal session** (`PreOrder`, `PostOrder`, `BreadthFirst`, `Walk`):
//!    - Owns a frontier of lazily expanded layers and its tracker
//!    - Single-use, single-threaded, fused once exhausted
//!
//! 3. **Tracker** (`Tracker<N>`):
//!    - Test-and-mark predicate consulted before every visit
//!    - The only way sessions share state
//!
//! ## Example
//!
//! ```rust
//! use std::collections::HashMap;
//! use graph_walker::Walker;
//!
//! // A -> B, C ; B -> D
//! let graph = HashMap::from([('A', vec!['B', 'C']), ('B', vec!['D'])]);
//! let walker = Walker::in_graph(|n: &char| graph.get(n).cloned().unwrap_or_default());
//!
//! assert_eq!(walker.pre_order_from(['A']).collect::<String>(), "ABDC");
//! assert_eq!(walker.post_order_from(['A']).collect::<String>(), "DBCA");
//! assert_eq!(walker.breadth_first_from(['A']).collect::<String>(), "ABCD");
//! ```
//!
//! ## Logging
//!
//! With the `tracing` feature enabled, sessions and cycle detection emit
//! `tracing` events. No subscriber is installed by this crate.

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod cycle;
pub mod error;
pub mod shortest_path;
pub mod tracker;
pub mod walker;

pub use cycle::detect_cycle_in_graph;
pub use error::{ParseOrderError, Result, WalkError};
pub use shortest_path::{shortest_cycle_from, shortest_paths_from, ShortestPath};
pub use tracker::{BloomConfig, BloomTracker, ConcurrentTracker, DenseTracker, Tracker, Untracked};
pub use walker::{BreadthFirst, PostOrder, PreOrder, TraversalOrder, Walk, Walker};
