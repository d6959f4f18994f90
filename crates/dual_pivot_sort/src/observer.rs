//! Hooks for watching how a sort carves up its input.
//!
//! All ranges are half-open and absolute, i.e. they index into the slice that
//! was handed to [`Sorter::sort_observed`](crate::Sorter::sort_observed).

use std::ops::Range;

/// One partition step of the dual-pivot recursion.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PartitionEvent {
    /// The range that was partitioned.
    pub range: Range<usize>,
    /// Final positions of `pivot1` and `pivot2`.
    pub pivot_slots: [usize; 2],
    /// Elements `< pivot1`.
    pub less: Range<usize>,
    /// Elements in `pivot1..=pivot2`.
    pub between: Range<usize>,
    /// Elements `> pivot2`.
    pub greater: Range<usize>,
    /// The part of `between` that is sorted further. `None` when both pivots
    /// are equal; narrower than `between` when equal runs were compacted.
    pub middle: Option<Range<usize>>,
    /// Divisor handed down to the children.
    pub divisor: usize,
    /// Recursion depth of the call that performed the step, starting at 0.
    pub depth: usize,
}

pub trait SortObserver {
    fn partitioned(&mut self, _event: &PartitionEvent) {}

    /// `range` was short enough to be finished by insertion sort.
    fn insertion_sorted(&mut self, _range: Range<usize>, _depth: usize) {}
}

/// Observer that ignores everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopObserver;

impl SortObserver for NoopObserver {}
