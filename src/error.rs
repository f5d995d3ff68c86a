//! Error types for tracker configuration.
//!
//! Traversals themselves are infallible: an exhausted frontier simply ends the
//! iterator. Errors only arise when building a tracker from configuration.

use thiserror::Error;

use crate::tracker::bloom::MAX_BITS;

/// Errors reported while configuring a walk.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum WalkError {
    /// The requested Bloom filter false-positive rate is not in `(0, 1)`.
    #[error("false positive rate must be strictly between 0 and 1, got {rate}")]
    InvalidFalsePositiveRate {
        /// The rejected rate.
        rate: f64,
    },

    /// A Bloom filter was configured to hold zero items.
    #[error("expected item count must be greater than zero")]
    ZeroExpectedItems,

    /// The configured Bloom filter would need more than
    /// [`MAX_BITS`](crate::tracker::bloom::MAX_BITS) bits.
    #[error("bloom filter needs {bits} bits, more than the maximum of {max}", max = MAX_BITS)]
    FilterTooLarge {
        /// Bits the configuration asks for (saturated at `u64::MAX`).
        bits: u64,
    },
}

/// Error returned when parsing an unknown
/// [`TraversalOrder`](crate::walker::TraversalOrder) name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown traversal order `{0}`, expected pre_order, post_order or breadth_first")]
pub struct ParseOrderError(pub(crate) String);

/// Convenience alias used throughout the crate.
pub type Result<T> = core::result::Result<T, WalkError>;
