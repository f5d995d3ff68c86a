//! Traversal orders.

use core::fmt;
use core::str::FromStr;
use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::error::ParseOrderError;

/// The order in which a [`Walker`](crate::Walker) emits nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TraversalOrder {
    /// Depth first, each node before its descendants.
    PreOrder,
    /// Depth first, each node after its descendants.
    PostOrder,
    /// Level by level, each node before any node one level deeper.
    BreadthFirst,
}

impl TraversalOrder {
    /// All orders, in declaration order.
    pub const ALL: [TraversalOrder; 3] = [
        TraversalOrder::PreOrder,
        TraversalOrder::PostOrder,
        TraversalOrder::BreadthFirst,
    ];

    /// The snake_case name used by serde and `FromStr`.
    pub fn as_str(self) -> &'static str {
        match self {
            TraversalOrder::PreOrder => "pre_order",
            TraversalOrder::PostOrder => "post_order",
            TraversalOrder::BreadthFirst => "breadth_first",
        }
    }

    /// Whether the order can make progress on a graph of infinite depth.
    pub fn tolerates_infinite_depth(self) -> bool {
        !matches!(self, TraversalOrder::PostOrder)
    }
}

impl fmt::Display for TraversalOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TraversalOrder {
    type Err = ParseOrderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TraversalOrder::ALL
            .into_iter()
            .find(|order| order.as_str() == s)
            .ok_or_else(|| ParseOrderError(s.to_owned()))
    }
}

/// Where a freshly expanded layer goes on the frontier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum InsertionOrder {
    /// Front of the frontier: depth first.
    Stack,
    /// Back of the frontier: breadth first.
    Queue,
}

impl InsertionOrder {
    #[inline]
    pub(crate) fn insert_into<L>(self, horizon: &mut VecDeque<L>, layer: L) {
        match self {
            InsertionOrder::Stack => horizon.push_front(layer),
            InsertionOrder::Queue => horizon.push_back(layer),
        }
    }
}
