/// Moves elements equal to `pivot1` to the front of `middle` and elements
/// equal to `pivot2` to the back, using the same cursor scheme as the
/// partition scan.
///
/// Returns `(lo, hi)`: `middle[..lo]` all equal `pivot1`, `middle[hi..]` all
/// equal `pivot2`, and `middle[lo..hi]` lies strictly between the pivots
/// whenever every element of `middle` is within `pivot1..=pivot2`.
pub fn compact_equal<T: Ord + Copy>(middle: &mut [T], pivot1: T, pivot2: T) -> (usize, usize) {
    debug_assert!(pivot1 < pivot2);

    let mut less = 0;
    let mut great = middle.len();
    let mut k = 0;

    while k < great {
        let v = middle[k];
        if v == pivot1 {
            middle.swap(k, less);
            less += 1;
        } else if v == pivot2 {
            while k < great - 1 && middle[great - 1] == pivot2 {
                great -= 1;
            }
            great -= 1;
            middle.swap(k, great);
            if middle[k] == pivot1 {
                middle.swap(k, less);
                less += 1;
            }
        }
        k += 1;
    }

    (less, great)
}
