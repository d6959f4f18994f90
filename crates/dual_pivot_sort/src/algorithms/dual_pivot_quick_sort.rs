use tracing::trace;

use crate::SortParams;
use crate::observer::{PartitionEvent, SortObserver};

use super::{compact, insertion_sort, partition, pivot};

/// A between part this short means the pivots landed close together; the
/// divisor grows so that descendants sample closer to the range ends.
const NARROW_BETWEEN_LEN: usize = 13;

/// Equal runs are compacted only when the between part covers all but this
/// many slots of the range span.
const WIDE_BETWEEN_SLACK: usize = 12;

pub fn sort<T: Ord + Copy, O: SortObserver>(data: &mut [T], params: &SortParams, observer: &mut O) {
    if data.len() < 2 {
        return;
    }

    let mut recursion = Recursion {
        limit: params.insertion_threshold,
        observer,
    };
    recursion.sort_range(data, 0, params.initial_divisor, 0);
}

struct Recursion<'o, O> {
    limit: usize,
    observer: &'o mut O,
}

type Child<'a, T> = Option<(usize, &'a mut [T])>;

impl<O: SortObserver> Recursion<'_, O> {
    /// Sorts `data`, which starts at `offset` in the caller's slice.
    ///
    /// Every child but the largest is sorted recursively; the loop continues
    /// with the largest, so each recursive call gets at most half the elements.
    fn sort_range<T: Ord + Copy>(
        &mut self,
        mut data: &mut [T],
        mut offset: usize,
        mut div: usize,
        depth: usize,
    ) {
        loop {
            let len = data.len();
            // `right - left` of the inclusive range.
            let span = len.saturating_sub(1);
            if span < self.limit || len < pivot::MIN_PIVOT_RANGE_LEN {
                self.observer.insertion_sorted(offset..offset + len, depth);
                insertion_sort::insertion_sort(data);
                return;
            }

            trace!(offset, len, div, depth, "partitioning range");

            let (pivot1, pivot2) = pivot::select_pivots(data, div);
            let (lt, gt) = partition::partition(data, pivot1, pivot2);

            let between_len = gt - lt;
            if between_len <= NARROW_BETWEEN_LEN {
                div += 1;
            }

            let right = len - 1;
            data.swap(lt - 1, 0);
            data.swap(gt, right);

            let middle = if pivot1 == pivot2 {
                None
            } else if between_len + WIDE_BETWEEN_SLACK > span {
                let (lo, hi) = compact::compact_equal(&mut data[lt..gt], pivot1, pivot2);
                Some(lt + lo..lt + hi)
            } else {
                Some(lt..gt)
            };

            self.observer.partitioned(&PartitionEvent {
                range: offset..offset + len,
                pivot_slots: [offset + lt - 1, offset + gt],
                less: offset..offset + lt - 1,
                between: offset + lt..offset + gt,
                greater: offset + gt + 1..offset + len,
                middle: middle.as_ref().map(|m| offset + m.start..offset + m.end),
                divisor: div,
                depth,
            });

            // rest = data[lt - 1..=gt], both pivot slots included.
            let (low, rest) = data.split_at_mut(lt - 1);
            let (rest, high) = rest.split_at_mut(gt + 2 - lt);
            let middle = match middle {
                Some(m) => {
                    let base = lt - 1;
                    Some((offset + m.start, &mut rest[m.start - base..m.end - base]))
                }
                None => None,
            };

            let mut children: [Child<'_, T>; 3] =
                [Some((offset, low)), middle, Some((offset + gt + 1, high))];

            let mut largest = 0;
            for i in 1..children.len() {
                if child_len(&children[i]) > child_len(&children[largest]) {
                    largest = i;
                }
            }

            for (i, child) in children.iter_mut().enumerate() {
                if i == largest {
                    continue;
                }
                if let Some((child_offset, child_data)) = child.take() {
                    self.sort_range(child_data, child_offset, div, depth + 1);
                }
            }

            match children[largest].take() {
                Some((child_offset, child_data)) => {
                    data = child_data;
                    offset = child_offset;
                }
                None => return,
            }
        }
    }
}

#[inline]
fn child_len<T>(child: &Child<'_, T>) -> usize {
    child.as_ref().map_or(0, |(_, data)| data.len())
}
