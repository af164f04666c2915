/// Bubble sort with early termination.
///
/// A pass that performs no swaps proves the prefix is sorted, so already-sorted
/// input finishes in a single O(n) pass.
pub fn sort(a: &mut [i64]) {
    let n = a.len();
    for pass in 0..n {
        let mut swapped = false;
        for j in 1..n - pass {
            if a[j - 1] > a[j] {
                a.swap(j - 1, j);
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
    }
}
