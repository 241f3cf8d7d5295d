//! Synthetic datasets: uniformly distributed random values.
//!
//! Every generator takes the random source explicitly so a run can be replayed
//! from its seed. Use [`SeedSource::Fixed`] for reproducible results and
//! [`SeedSource::Time`] for ad-hoc benchmark runs.

use crate::error::{Result, WorkloadError};
use crate::record::Record;
use rand::distributions::{Distribution, Uniform};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::{SystemTime, UNIX_EPOCH};

/// Seed used when no other seed is configured and wall-clock seeding fails.
pub const DEFAULT_SEED: u64 = 0x5EED_B00C_CAFE_0001;

/// Where the pseudo-random generator gets its seed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedSource {
    Fixed(u64),
    /// Derived from the wall clock; results are not reproducible.
    Time,
}

impl SeedSource {
    pub fn seed(&self) -> u64 {
        match self {
            SeedSource::Fixed(seed) => *seed,
            SeedSource::Time => SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_nanos() as u64)
                .unwrap_or(DEFAULT_SEED),
        }
    }

    pub fn rng(&self) -> StdRng {
        StdRng::seed_from_u64(self.seed())
    }
}

impl Default for SeedSource {
    fn default() -> Self {
        SeedSource::Fixed(DEFAULT_SEED)
    }
}

/// `n` values drawn independently and uniformly from `[low, high]`.
pub fn random_values<R: Rng + ?Sized>(
    rng: &mut R,
    n: usize,
    low: u32,
    high: u32,
) -> Result<Vec<u32>> {
    if low > high {
        return Err(WorkloadError::InvalidArgument { low, high });
    }
    let distribution = Uniform::new_inclusive(low, high);
    Ok((0..n).map(|_| distribution.sample(rng)).collect())
}

/// `n` values drawn from `[0, n - 1]`, the range every benchmark uses.
pub fn random_dataset<R: Rng + ?Sized>(rng: &mut R, n: usize) -> Vec<u32> {
    let Some(last) = n.checked_sub(1) else {
        return Vec::new();
    };
    let high = u32::try_from(last).unwrap_or(u32::MAX);
    let distribution = Uniform::new_inclusive(0, high);
    (0..n).map(|_| distribution.sample(rng)).collect()
}

/// Like [`random_dataset`], but wraps each value in a [`Record`] key.
pub fn random_records<const WORDS: usize, R: Rng + ?Sized>(
    rng: &mut R,
    n: usize,
) -> Vec<Record<WORDS>> {
    random_dataset(rng, n)
        .into_iter()
        .map(Record::from)
        .collect()
}

/// Uniform index into a container of `len` elements, or `None` when there is
/// nothing left to pick from.
pub fn random_index<R: Rng + ?Sized>(rng: &mut R, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    Some(rng.gen_range(0..len))
}
