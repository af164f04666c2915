/// Top-down merge sort. O(n log n) always, stable.
///
/// One auxiliary buffer the length of the whole slice is allocated up front and
/// reused by every merge step; nothing is reallocated per call.
pub fn sort(a: &mut [i64]) {
    if a.len() <= 1 {
        return;
    }
    let mut tmp = vec![0i64; a.len()];
    split(a, 0, a.len() - 1, &mut tmp);
}

fn split(a: &mut [i64], l: usize, r: usize, tmp: &mut [i64]) {
    if l >= r {
        return;
    }
    let m = l + (r - l) / 2;
    split(a, l, m, tmp);
    split(a, m + 1, r, tmp);
    merge(a, l, m, r, tmp);
}

/// Merges the sorted halves `a[l..=m]` and `a[m+1..=r]` through `tmp`.
fn merge(a: &mut [i64], l: usize, m: usize, r: usize, tmp: &mut [i64]) {
    let (mut i, mut j, mut k) = (l, m + 1, l);
    while i <= m && j <= r {
        if a[i] <= a[j] {
            tmp[k] = a[i];
            i += 1;
        } else {
            tmp[k] = a[j];
            j += 1;
        }
        k += 1;
    }
    while i <= m {
        tmp[k] = a[i];
        i += 1;
        k += 1;
    }
    while j <= r {
        tmp[k] = a[j];
        j += 1;
        k += 1;
    }
    a[l..=r].copy_from_slice(&tmp[l..=r]);
}
