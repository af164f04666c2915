/// True iff every adjacent pair of `a` is non-decreasing. Sequences of length
/// 0 or 1 are trivially sorted.
pub fn is_sorted(a: &[i64]) -> bool {
    a.windows(2).all(|w| w[0] <= w[1])
}
