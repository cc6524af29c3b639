/// Provable ceiling on the minimum window sum of a ring holding `1..=len`.
///
/// Cut the ring so that the remaining run splits into disjoint windows: each
/// of them sums to at least the minimum, and together they sum to the ring
/// total minus whatever was cut out. Removing the largest value (and, when
/// needed, one neighbour of value at least 1) leaves a multiple of three.
/// For `len = 19` this gives `(190 - 19) / 6 = 28`.
pub fn upper_bound(len: usize) -> Option<i32> {
    if len < 3 {
        return None;
    }

    let n = len as i64;
    let total = n * (n + 1) / 2;

    let bound = match len % 3 {
        0 => total / (n / 3),
        1 => (total - n) / ((n - 1) / 3),
        _ => (total - n - 1) / ((n - 2) / 3),
    };

    i32::try_from(bound).ok()
}
