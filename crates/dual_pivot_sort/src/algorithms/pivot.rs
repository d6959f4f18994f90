/// Smallest range the pivot selector accepts: two boundary slots plus two
/// distinct interior candidates.
pub const MIN_PIVOT_RANGE_LEN: usize = 4;

/// Samples two candidates roughly `len / div` in from each end, moves the
/// smaller to `data[0]` and the larger to `data[len - 1]`, and returns
/// `(pivot1, pivot2)` with `pivot1 <= pivot2`.
///
/// This is a tertile approximation, not a median: one comparison buys two
/// pivots that are usually well spread.
pub fn select_pivots<T: Ord + Copy>(data: &mut [T], div: usize) -> (T, T) {
    assert!(
        data.len() >= MIN_PIVOT_RANGE_LEN,
        "pivot selection needs at least {MIN_PIVOT_RANGE_LEN} elements, got {}",
        data.len()
    );
    assert!(div > 0, "pivot divisor must be positive");

    let right = data.len() - 1;
    let (m1, m2) = candidate_slots(right, div);

    if data[m1] < data[m2] {
        data.swap(m1, 0);
        data.swap(m2, right);
    } else {
        data.swap(m1, right);
        data.swap(m2, 0);
    }

    (data[0], data[right])
}

/// Candidate positions for a range `0..=right`. Always `0 < m1 < m2 < right`.
#[inline]
fn candidate_slots(right: usize, div: usize) -> (usize, usize) {
    let third = right / div;
    let m1 = third.max(1);
    let m2 = (right - third).min(right - 1);
    // Only small divisors can make the tertiles meet or cross.
    if m1 < m2 { (m1, m2) } else { (1, right - 1) }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use super::*;

    #[test]
    fn candidates_sit_at_tertiles() {
        assert_eq!(candidate_slots(30, 3), (10, 20));
        assert_eq!(candidate_slots(26, 3), (8, 18));
        assert_eq!(candidate_slots(100, 4), (25, 75));
    }

    #[test]
    fn candidates_are_clamped_inside_boundaries() {
        // Large divisors push the tertiles onto the boundary slots.
        assert_eq!(candidate_slots(30, 1000), (1, 29));
        // Small divisors make them meet or cross.
        assert_eq!(candidate_slots(30, 2), (1, 29));
        assert_eq!(candidate_slots(30, 1), (1, 29));
        assert_eq!(candidate_slots(3, 3), (1, 2));
    }

    #[test]
    fn pivots_land_on_boundaries_in_order() {
        let mut data = [9_u64, 0, 0, 7, 0, 0, 2, 0, 0, 5];
        // right = 9, third = 3: candidates at 3 (=7) and 6 (=2).
        let (p1, p2) = select_pivots(&mut data, 3);
        assert_eq!((p1, p2), (2, 7));
        assert_eq!(data[0], 2);
        assert_eq!(data[9], 7);

        let mut sorted = data;
        sorted.sort_unstable();
        assert_eq!(sorted, [0, 0, 0, 0, 0, 0, 2, 5, 7, 9]);
    }

    #[test]
    fn pivot_order_holds_for_any_divisor() {
        let mut rng = StdRng::seed_from_u64(0x0A17_2026);
        for _ in 0..500 {
            let len = rng.random_range(MIN_PIVOT_RANGE_LEN..64);
            let div = rng.random_range(1..12);
            let original: Vec<u32> = (0..len).map(|_| rng.random_range(0..8)).collect();

            let mut data = original.clone();
            let (p1, p2) = select_pivots(&mut data, div);
            assert!(p1 <= p2, "len={len} div={div}");
            assert_eq!((data[0], data[len - 1]), (p1, p2));

            let mut before = original;
            before.sort_unstable();
            data.sort_unstable();
            assert_eq!(data, before, "selection must only permute");
        }
    }

    #[test]
    #[should_panic(expected = "pivot selection needs at least")]
    fn rejects_tiny_ranges() {
        let mut data = [3_u64, 1, 2];
        select_pivots(&mut data, 3);
    }
}
