/// In-place heap sort. O(n log n) always, not stable.
///
/// Builds a max-heap bottom-up over indices n/2-1 down to 0, then repeatedly
/// swaps the root with the last unsorted element and re-sifts the shrunk heap.
pub fn sort(a: &mut [i64]) {
    let n = a.len();
    if n <= 1 {
        return;
    }
    for i in (0..n / 2).rev() {
        sift_down(a, n, i);
    }
    for end in (1..n).rev() {
        a.swap(0, end);
        sift_down(a, end, 0);
    }
}

/// Restores the max-heap property for the subtree rooted at `i` within `a[..n]`.
fn sift_down(a: &mut [i64], n: usize, mut i: usize) {
    loop {
        let l = 2 * i + 1;
        let r = l + 1;
        let mut largest = i;
        if l < n && a[l] > a[largest] {
            largest = l;
        }
        if r < n && a[r] > a[largest] {
            largest = r;
        }
        if largest == i {
            return;
        }
        a.swap(i, largest);
        i = largest;
    }
}
