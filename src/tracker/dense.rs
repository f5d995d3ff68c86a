//! Dense visited tracking for integer node ids.
//!
//! A word-packed atomic bitset is a compact alternative to a hash set when
//! nodes are indexes into `0..capacity`. Clones share the bitset, so the same
//! tracker can coordinate walks running on several threads.

use core::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use num_traits::PrimInt;

use crate::tracker::Tracker;

/// A word-packed atomic bitset.
#[derive(Debug)]
struct AtomicBitset {
    bits: usize,
    words: Box<[AtomicUsize]>,
}

impl AtomicBitset {
    fn new(bits: usize) -> Self {
        let words = (0..bits.div_ceil(usize::BITS as usize))
            .map(|_| AtomicUsize::new(0))
            .collect();
        Self { bits, words }
    }

    fn is_set(&self, bit: usize) -> bool {
        assert!(bit < self.bits, "node {bit} out of range 0..{}", self.bits);
        let (word, mask) = bit_word_mask(bit);
        self.words[word].load(Ordering::Acquire) & mask != 0
    }

    /// Sets `bit` and returns `true` iff this call observed it previously cleared.
    fn test_and_set(&self, bit: usize) -> bool {
        assert!(bit < self.bits, "node {bit} out of range 0..{}", self.bits);
        let (word, mask) = bit_word_mask(bit);
        self.words[word].fetch_or(mask, Ordering::AcqRel) & mask == 0
    }

    fn count_ones(&self) -> usize {
        self.words
            .iter()
            .map(|w| w.load(Ordering::Acquire).count_ones() as usize)
            .sum()
    }

    fn clear_all(&self) {
        for w in &*self.words {
            w.store(0, Ordering::Release);
        }
    }
}

#[inline(always)]
fn bit_word_mask(bit: usize) -> (usize, usize) {
    let word_bits = usize::BITS as usize;
    (bit / word_bits, 1usize << (bit % word_bits))
}

/// Tracks integer nodes in `0..capacity` with one bit each.
///
/// # Panics
/// Tracking a negative node, or one `>= capacity`, panics. The panic surfaces
/// from the `next()` call of the traversal that tracked the node.
#[derive(Debug, Clone)]
pub struct DenseTracker {
    bits: Arc<AtomicBitset>,
}

impl DenseTracker {
    /// Creates a tracker for nodes `0..capacity`, all unvisited.
    pub fn new(capacity: usize) -> Self {
        Self {
            bits: Arc::new(AtomicBitset::new(capacity)),
        }
    }

    /// Number of node ids this tracker can hold.
    pub fn capacity(&self) -> usize {
        self.bits.bits
    }

    /// Number of nodes tracked so far, across all clones.
    pub fn len(&self) -> usize {
        self.bits.count_ones()
    }

    /// Returns `true` if no node has been tracked.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` if `node` has been tracked.
    ///
    /// # Panics
    /// Panics if `node` is outside `0..capacity`.
    pub fn is_visited<N: PrimInt>(&self, node: N) -> bool {
        self.bits.is_set(index_of(node))
    }

    /// Forgets every tracked node, for all clones.
    pub fn clear(&self) {
        self.bits.clear_all();
    }
}

fn index_of<N: PrimInt>(node: N) -> usize {
    let Some(index) = node.to_usize() else {
        panic!("dense tracker nodes must be non-negative and fit in usize");
    };
    index
}

impl<N: PrimInt> Tracker<N> for DenseTracker {
    #[inline]
    fn track(&mut self, node: &N) -> bool {
        self.bits.test_and_set(index_of(*node))
    }
}
