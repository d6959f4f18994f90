//! In-place dual-pivot quicksort for totally ordered scalars.
//!
//! Ranges below an insertion threshold are finished with insertion sort.
//! Larger ranges pick two pivots from roughly one third in from each end,
//! split into `< pivot1`, `pivot1..=pivot2` and `> pivot2` in a single scan,
//! and recurse. When the middle part dominates, elements equal to a pivot are
//! pulled out of it first so duplicate-heavy inputs do not recurse on them.
//!
//! The sort is not stable.

mod algorithms;
pub mod observer;

use std::error::Error;
use std::fmt;

use tracing::debug;

use observer::{NoopObserver, SortObserver};

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct SortParams {
    /// Ranges whose span (`right - left`) is below this are insertion sorted.
    pub insertion_threshold: usize,
    /// Initial divisor for the pivot sampling offset `span / divisor`.
    pub initial_divisor: usize,
}

pub const DEFAULT_PARAMS: SortParams = SortParams {
    insertion_threshold: 27,
    initial_divisor: 3,
};

impl Default for SortParams {
    fn default() -> Self {
        DEFAULT_PARAMS
    }
}

impl SortParams {
    pub fn validate(&self) -> Result<(), ParamsError> {
        if self.insertion_threshold == 0 {
            return Err(ParamsError::ZeroInsertionThreshold);
        }
        if self.initial_divisor == 0 {
            return Err(ParamsError::ZeroDivisor);
        }
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ParamsError {
    ZeroInsertionThreshold,
    ZeroDivisor,
}

impl fmt::Display for ParamsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroInsertionThreshold => f.write_str("insertion threshold must be at least 1"),
            Self::ZeroDivisor => f.write_str("initial divisor must be at least 1"),
        }
    }
}

impl Error for ParamsError {}

/// A dual-pivot quicksort with fixed, validated parameters.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Sorter {
    params: SortParams,
}

impl Sorter {
    pub fn new(params: SortParams) -> Result<Self, ParamsError> {
        if let Err(err) = params.validate() {
            debug!(?params, %err, "rejected sort parameters");
            return Err(err);
        }
        Ok(Self { params })
    }

    pub fn params(&self) -> SortParams {
        self.params
    }

    /// Sorts `data` ascending in place.
    pub fn sort<T: Ord + Copy>(&self, data: &mut [T]) {
        self.sort_observed(data, &mut NoopObserver);
    }

    /// Like [`Sorter::sort`], reporting every partition step and every
    /// insertion-sorted leaf to `observer`.
    pub fn sort_observed<T: Ord + Copy, O: SortObserver>(&self, data: &mut [T], observer: &mut O) {
        algorithms::dual_pivot_quick_sort::sort(data, &self.params, observer);
        debug_assert!(data.is_sorted());
    }
}

/// Sorts `data` ascending in place with [`DEFAULT_PARAMS`].
///
/// ```
/// let mut v = [5, 3, 8, 1, 9, 2, 7, 4, 6];
/// dual_pivot_sort::sort(&mut v);
/// assert_eq!(v, [1, 2, 3, 4, 5, 6, 7, 8, 9]);
/// ```
pub fn sort<T: Ord + Copy>(data: &mut [T]) {
    Sorter::default().sort(data);
}
