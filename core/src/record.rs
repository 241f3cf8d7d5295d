//! Fixed-size plain-old-data records used to vary the per-element footprint
//! in cache-effect benchmarks.

use std::cmp::Ordering;

/// A `Copy` record of `WORDS` 32-bit words. Only the first word (the key)
/// takes part in comparisons; the rest is padding that makes the element
/// bigger.
#[derive(Debug, Clone, Copy)]
#[repr(C)]
pub struct Record<const WORDS: usize> {
    words: [u32; WORDS],
}

impl<const WORDS: usize> Record<WORDS> {
    /// In-memory size of one record.
    pub const SIZE_BYTES: usize = std::mem::size_of::<Self>();

    pub fn new(key: u32) -> Self {
        let mut words = [0u32; WORDS];
        if let Some(first) = words.first_mut() {
            *first = key;
        }
        Self { words }
    }

    pub fn key(&self) -> u32 {
        self.words.first().copied().unwrap_or(0)
    }
}

impl<const WORDS: usize> Default for Record<WORDS> {
    fn default() -> Self {
        Self::new(0)
    }
}

impl<const WORDS: usize> From<u32> for Record<WORDS> {
    fn from(key: u32) -> Self {
        Self::new(key)
    }
}

impl<const WORDS: usize> PartialEq for Record<WORDS> {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl<const WORDS: usize> Eq for Record<WORDS> {}

impl<const WORDS: usize> PartialOrd for Record<WORDS> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<const WORDS: usize> Ord for Record<WORDS> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}
