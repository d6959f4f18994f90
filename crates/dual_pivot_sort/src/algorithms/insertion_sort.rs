/// Sorts `data` ascending by shifting each element left past its larger
/// neighbours. Used as the base case for short ranges.
#[inline]
pub fn insertion_sort<T: Ord + Copy>(data: &mut [T]) {
    for i in 1..data.len() {
        let key = data[i];
        let mut j = i;
        while j > 0 {
            let prev = data[j - 1];
            if prev <= key {
                break;
            }
            data[j] = prev;
            j -= 1;
        }
        data[j] = key;
    }
}
