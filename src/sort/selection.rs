/// Selection sort: scan the unsorted suffix for its minimum, one swap per pass.
///
/// Always O(n^2) comparisons, but at most n-1 swaps.
pub fn sort(a: &mut [i64]) {
    let n = a.len();
    for i in 0..n {
        let mut min_i = i;
        for j in i + 1..n {
            if a[j] < a[min_i] {
                min_i = j;
            }
        }
        if min_i != i {
            a.swap(i, min_i);
        }
    }
}
