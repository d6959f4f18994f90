/// Three-way partition of `data[1..len - 1]` around the pivots parked at
/// `data[0]` and `data[len - 1]`.
///
/// Returns `(lt, gt)` such that after the call
///
/// - `data[1..lt]` holds values `< pivot1`,
/// - `data[lt..gt]` holds values in `pivot1..=pivot2`,
/// - `data[gt..len - 1]` holds values `> pivot2`.
///
/// The boundary slots are not touched; restoring the pivots is the caller's job.
pub fn partition<T: Ord + Copy>(data: &mut [T], pivot1: T, pivot2: T) -> (usize, usize) {
    assert!(data.len() >= 2, "partition needs both pivot slots");
    debug_assert!(pivot1 <= pivot2);

    let mut less = 1;
    let mut great = data.len() - 1;
    let mut k = less;

    // data[k..great] is unexamined.
    while k < great {
        let v = data[k];
        if v < pivot1 {
            data.swap(k, less);
            less += 1;
        } else if v > pivot2 {
            while k < great - 1 && data[great - 1] > pivot2 {
                great -= 1;
            }
            great -= 1;
            data.swap(k, great);
            if data[k] < pivot1 {
                data.swap(k, less);
                less += 1;
            }
        }
        k += 1;
    }

    (less, great)
}
