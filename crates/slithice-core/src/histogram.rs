//! Intensity histogram
//!
//! A fixed 256-bin frequency distribution, indexed by 8-bit sample value.

use std::ops::Index;

/// Number of bins in an 8 bpp histogram.
pub const HISTOGRAM_BINS: usize = 256;

/// 256-bin histogram of 8-bit sample values.
///
/// Invariant: the sum of all bins equals the number of samples counted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Histogram {
    counts: [u32; HISTOGRAM_BINS],
}

impl Default for Histogram {
    fn default() -> Self {
        Self::new()
    }
}

impl Histogram {
    /// Create an empty histogram.
    pub fn new() -> Self {
        Histogram {
            counts: [0; HISTOGRAM_BINS],
        }
    }

    /// Create a histogram from raw counts.
    pub fn from_counts(counts: [u32; HISTOGRAM_BINS]) -> Self {
        Histogram { counts }
    }

    /// Count of samples with value `v`.
    #[inline]
    pub fn get(&self, v: u8) -> u32 {
        self.counts[v as usize]
    }

    /// All bins, indexed by sample value.
    #[inline]
    pub fn counts(&self) -> &[u32; HISTOGRAM_BINS] {
        &self.counts
    }

    /// Record one sample.
    #[inline]
    pub fn increment(&mut self, v: u8) {
        self.counts[v as usize] += 1;
    }

    /// Reset every bin to zero.
    pub fn clear(&mut self) {
        self.counts = [0; HISTOGRAM_BINS];
    }

    /// Sum of all bins.
    pub fn total(&self) -> u64 {
        self.counts.iter().map(|&c| u64::from(c)).sum()
    }

    /// Running sums: `cumulative()[v] = sum(counts[0..=v])`.
    pub fn cumulative(&self) -> [u64; HISTOGRAM_BINS] {
        let mut acc = 0u64;
        let mut out = [0u64; HISTOGRAM_BINS];
        for (slot, &c) in out.iter_mut().zip(self.counts.iter()) {
            acc += u64::from(c);
            *slot = acc;
        }
        out
    }

    /// Number of bins holding at least one sample.
    pub fn occupied_bins(&self) -> usize {
        self.counts.iter().filter(|&&c| c > 0).count()
    }

    /// Merge counts from another histogram (per-row partial reduction).
    pub fn merge(&mut self, other: &Histogram) {
        for (a, b) in self.counts.iter_mut().zip(other.counts.iter()) {
            *a += *b;
        }
    }
}

impl Index<u8> for Histogram {
    type Output = u32;

    fn index(&self, v: u8) -> &u32 {
        &self.counts[v as usize]
    }
}
