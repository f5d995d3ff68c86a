//! A probabilistic tracker with bounded memory.
//!
//! Uses a word-packed bit array and double hashing to simulate `k` hash
//! functions. False positives make the walk skip some unvisited nodes; there
//! are no false negatives, so a walk over a finite cyclic graph still
//! terminates.

use core::hash::{BuildHasher, Hash};
use std::collections::hash_map::RandomState;

use serde::{Deserialize, Serialize};

use crate::error::{Result, WalkError};
use crate::tracker::Tracker;

/// Sizing parameters for a [`BloomTracker`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BloomConfig {
    /// Number of distinct nodes the walk is expected to track.
    pub expected_items: usize,
    /// Target probability of wrongly skipping an unvisited node.
    pub false_positive_rate: f64,
}

impl Default for BloomConfig {
    fn default() -> Self {
        Self {
            expected_items: 1024,
            false_positive_rate: 0.01,
        }
    }
}

/// Largest bit array a [`BloomTracker`] will allocate (8 GiB).
pub const MAX_BITS: u64 = 1 << 36;

impl BloomConfig {
    /// Checks that the parameters describe a usable filter that fits in
    /// [`MAX_BITS`].
    pub fn validate(&self) -> Result<()> {
        self.dimensions().map(drop)
    }

    /// Returns `(bit_size, num_hashes)` for this configuration.
    fn dimensions(&self) -> Result<(usize, u32)> {
        if self.expected_items == 0 {
            return Err(WalkError::ZeroExpectedItems);
        }
        let rate = self.false_positive_rate;
        if !rate.is_finite() || rate <= 0.0 || rate >= 1.0 {
            return Err(WalkError::InvalidFalsePositiveRate { rate });
        }

        // m = - (n * ln p) / (ln 2)^2
        let n = self.expected_items as f64;
        let ln2 = std::f64::consts::LN_2;
        let m = -(n * rate.ln()) / (ln2 * ln2);
        // Float to int casts saturate, so an overflowing m lands above the cap.
        let bits = m.ceil() as u64;
        if !m.is_finite() || bits > MAX_BITS {
            return Err(WalkError::FilterTooLarge { bits });
        }
        let bit_size = usize::try_from(bits.max(1)).map_err(|_| WalkError::FilterTooLarge { bits })?;

        // k = (m / n) * ln 2
        let k = (m / n) * ln2;
        let num_hashes = (k.ceil() as u32).max(1);
        Ok((bit_size, num_hashes))
    }
}

/// A Bloom filter used as a node tracker.
#[derive(Debug, Clone)]
pub struct BloomTracker<S = RandomState> {
    words: Vec<u64>,
    /// Size of the bit array (m).
    bit_size: usize,
    /// Number of hash functions (k).
    num_hashes: u32,
    hasher: S,
}

impl BloomTracker {
    /// Creates a tracker sized by `config`.
    pub fn new(config: BloomConfig) -> Result<Self> {
        Self::with_hasher(config, RandomState::new())
    }
}

impl<S> BloomTracker<S> {
    /// Creates a tracker sized by `config` that hashes nodes with `hasher`.
    pub fn with_hasher(config: BloomConfig, hasher: S) -> Result<Self> {
        let (bit_size, num_hashes) = config.dimensions()?;
        Ok(Self {
            words: vec![0; bit_size.div_ceil(64)],
            bit_size,
            num_hashes,
            hasher,
        })
    }

    /// Size of the underlying bit array.
    pub fn bit_size(&self) -> usize {
        self.bit_size
    }

    /// Number of simulated hash functions.
    pub fn num_hashes(&self) -> u32 {
        self.num_hashes
    }

    /// Number of bits currently set (approximate load).
    pub fn set_bits_count(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Forgets every tracked node.
    pub fn clear(&mut self) {
        self.words.fill(0);
    }
}

impl<S: BuildHasher> BloomTracker<S> {
    fn hashes<N: Hash + ?Sized>(&self, node: &N) -> (u64, u64) {
        let h1 = self.hasher.hash_one(node);

        // Derive h2 from h1 with MurmurHash3's 64-bit finalizer instead of
        // hashing the node twice.
        let mut h2 = h1;
        h2 = (h2 ^ (h2 >> 33)).wrapping_mul(0xff51_afd7_ed55_8ccd);
        h2 = (h2 ^ (h2 >> 33)).wrapping_mul(0xc4ce_b9fe_1a85_ec53);
        h2 ^= h2 >> 33;

        (h1, h2)
    }

    fn bit_indexes<N: Hash + ?Sized>(&self, node: &N) -> impl Iterator<Item = usize> {
        let (h1, h2) = self.hashes(node);
        let m = self.bit_size as u64;
        (0..u64::from(self.num_hashes)).map(move |i| (h1.wrapping_add(i.wrapping_mul(h2)) % m) as usize)
    }

    /// Returns `true` if `node` may have been tracked before.
    pub fn contains<N: Hash + ?Sized>(&self, node: &N) -> bool {
        self.bit_indexes(node)
            .all(|bit| self.words[bit / 64] & (1u64 << (bit % 64)) != 0)
    }
}

impl<N, S> Tracker<N> for BloomTracker<S>
where
    N: Hash + ?Sized,
    S: BuildHasher,
{
    /// Sets the node's bits; the node is new iff at least one bit was clear.
    fn track(&mut self, node: &N) -> bool {
        let mut fresh = false;
        for bit in self.bit_indexes(node) {
            let word = &mut self.words[bit / 64];
            let mask = 1u64 << (bit % 64);
            fresh |= *word & mask == 0;
            *word |= mask;
        }
        fresh
    }
}
