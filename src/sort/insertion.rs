/// Classic shift-based insertion sort.
///
/// O(n^2) worst and average case, O(n) when the input is already sorted.
pub fn sort(a: &mut [i64]) {
    for i in 1..a.len() {
        let key = a[i];
        let mut j = i;
        while j > 0 && a[j - 1] > key {
            a[j] = a[j - 1];
            j -= 1;
        }
        a[j] = key;
    }
}
