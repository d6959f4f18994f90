use std::time::Duration;

use criterion::BenchmarkGroup;
use criterion::measurement::Measurement;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SMALL_RUNTIME_SAMPLE_SIZE: usize = 15;
const SMALL_RUNTIME_WARM_UP_MS: u64 = 100;
const SMALL_RUNTIME_MEASURE_MS: u64 = 200;
const MEDIUM_RUNTIME_SAMPLE_SIZE: usize = 15;
const MEDIUM_RUNTIME_WARM_UP_MS: u64 = 500;
const MEDIUM_RUNTIME_MEASURE_MS: u64 = 1000;
const LARGE_RUNTIME_SAMPLE_SIZE: usize = 10;
const LARGE_RUNTIME_WARM_UP_MS: u64 = 800;
const LARGE_RUNTIME_MEASURE_MS: u64 = 1500;
const RNG_SEED: u64 = 0x5EED_2026;

/// Number of distinct keys produced by [`Pattern::FewUnique`].
pub const FEW_UNIQUE_KEYS: u64 = 16;

pub fn apply_small_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.sample_size(SMALL_RUNTIME_SAMPLE_SIZE);
    group.warm_up_time(Duration::from_millis(SMALL_RUNTIME_WARM_UP_MS));
    group.measurement_time(Duration::from_millis(SMALL_RUNTIME_MEASURE_MS));
}

pub fn apply_medium_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.sample_size(MEDIUM_RUNTIME_SAMPLE_SIZE);
    group.warm_up_time(Duration::from_millis(MEDIUM_RUNTIME_WARM_UP_MS));
    group.measurement_time(Duration::from_millis(MEDIUM_RUNTIME_MEASURE_MS));
}

pub fn apply_large_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.sample_size(LARGE_RUNTIME_SAMPLE_SIZE);
    group.warm_up_time(Duration::from_millis(LARGE_RUNTIME_WARM_UP_MS));
    group.measurement_time(Duration::from_millis(LARGE_RUNTIME_MEASURE_MS));
}

/// Input shapes that tend to separate quicksort variants from each other.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Pattern {
    RandomUniform,
    FewUnique,
    Ascending,
    Descending,
    AscendingSaw,
    NearlySorted1pctSwaps,
    AllEqual,
}

pub const ALL_PATTERNS: [Pattern; 7] = [
    Pattern::RandomUniform,
    Pattern::FewUnique,
    Pattern::Ascending,
    Pattern::Descending,
    Pattern::AscendingSaw,
    Pattern::NearlySorted1pctSwaps,
    Pattern::AllEqual,
];

impl Pattern {
    pub fn label(self) -> &'static str {
        match self {
            Self::RandomUniform => "random_uniform",
            Self::FewUnique => "few_unique",
            Self::Ascending => "ascending",
            Self::Descending => "descending",
            Self::AscendingSaw => "ascending_saw",
            Self::NearlySorted1pctSwaps => "nearly_sorted_1pct_swaps",
            Self::AllEqual => "all_equal",
        }
    }

    pub fn generate<R: Rng + ?Sized>(self, size: usize, rng: &mut R) -> Vec<u64> {
        match self {
            Self::RandomUniform => (0..size).map(|_| rng.random::<u64>()).collect(),
            Self::FewUnique => (0..size)
                .map(|_| rng.random_range(0..FEW_UNIQUE_KEYS) * 17)
                .collect(),
            Self::Ascending => (0..size as u64).collect(),
            Self::Descending => (0..size as u64).rev().collect(),
            Self::AscendingSaw => {
                //   .:  .:
                // .:::.:::
                let teeth = 8;
                let tooth = (size / teeth).max(1);
                (0..size).map(|i| (i % tooth) as u64).collect()
            }
            Self::NearlySorted1pctSwaps => {
                let mut data: Vec<u64> = (0..size as u64).collect();
                if size > 0 {
                    let swaps = (size / 100).max(1);
                    for _ in 0..swaps {
                        let a = rng.random_range(0..size);
                        let b = rng.random_range(0..size);
                        data.swap(a, b);
                    }
                }
                data
            }
            Self::AllEqual => vec![66; size],
        }
    }
}

#[inline]
pub fn mix_seed(mut z: u64) -> u64 {
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

/// Deterministic input for `pattern` at `size`, distinct per `salt`.
pub fn dataset(pattern: Pattern, size: usize, salt: u64) -> Vec<u64> {
    let seed = mix_seed(RNG_SEED ^ ((pattern as u64) << 48) ^ (size as u64) ^ salt);
    let mut rng = StdRng::seed_from_u64(seed);
    pattern.generate(size, &mut rng)
}
