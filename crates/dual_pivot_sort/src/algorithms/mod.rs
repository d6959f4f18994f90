pub(crate) mod compact;
pub(crate) mod dual_pivot_quick_sort;
pub(crate) mod insertion_sort;
pub(crate) mod partition;
pub(crate) mod pivot;
