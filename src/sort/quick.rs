/// Quicksort with Hoare partitioning and middle-index pivot selection.
///
/// After each partition the smaller side is recursed into and the larger side is
/// handled by looping, bounding stack depth to O(log n) even when the comparison
/// count degrades to O(n^2).
pub fn sort(a: &mut [i64]) {
    if a.len() <= 1 {
        return;
    }
    let last = (a.len() - 1) as isize;
    quick(a, 0, last);
}

fn quick(a: &mut [i64], mut l: isize, mut r: isize) {
    while l < r {
        let pivot = a[((l + r) / 2) as usize];
        let mut i = l;
        let mut j = r;
        while i <= j {
            while a[i as usize] < pivot {
                i += 1;
            }
            while a[j as usize] > pivot {
                j -= 1;
            }
            if i <= j {
                a.swap(i as usize, j as usize);
                i += 1;
                j -= 1;
            }
        }
        // Recurse into the smaller partition, loop on the larger one.
        if j - l < r - i {
            if l < j {
                quick(a, l, j);
            }
            l = i;
        } else {
            if i < r {
                quick(a, i, r);
            }
            r = j;
        }
    }
}
