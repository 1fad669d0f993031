//! Byte-frequency analysis over a single input buffer

/// Occurrence counts for every byte value in one input.
///
/// Built once per compress call and never mutated afterwards. Only byte
/// values that actually occur are observable through [`iter`](Self::iter)
/// and [`distinct_symbols`](Self::distinct_symbols).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: [u64; 256],
    distinct: usize,
}

impl FrequencyTable {
    /// Count byte occurrences in `data`.
    pub fn build(data: &[u8]) -> Self {
        let mut counts = [0u64; 256];
        for &b in data {
            counts[b as usize] += 1;
        }
        let distinct = counts.iter().filter(|&&c| c > 0).count();
        Self { counts, distinct }
    }

    /// Occurrence count for `byte`, zero if absent.
    pub fn count(&self, byte: u8) -> u64 {
        self.counts[byte as usize]
    }

    /// Number of distinct byte values present.
    pub fn distinct_symbols(&self) -> usize {
        self.distinct
    }

    pub fn is_empty(&self) -> bool {
        self.distinct == 0
    }

    /// Present byte values with their counts, in ascending byte order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, u64)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .filter(|(_, &c)| c > 0)
            .map(|(i, &c)| (i as u8, c))
    }
}
