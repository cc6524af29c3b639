use crate::engines::search::ring::Ring;
use crate::types::Sequence;
use rand::seq::SliceRandom;
use rand::Rng;

/// Uniformly shuffled arrangement of `1..=len`.
pub fn random_permutation<R: Rng>(len: usize, rng: &mut R) -> Sequence {
    let mut nums: Sequence = (1..=len as i32).collect();
    nums.shuffle(rng);
    nums
}

/// True if `seq` holds every value of `1..=seq.len()` exactly once.
pub fn is_permutation(seq: &[i32]) -> bool {
    let mut seen = vec![false; seq.len()];

    for &value in seq {
        if value < 1 || value as usize > seq.len() {
            return false;
        }
        let slot = &mut seen[value as usize - 1];
        if *slot {
            return false;
        }
        *slot = true;
    }

    true
}

/// Smallest window sum of a ring, computed from scratch.
pub fn min_window_sum(seq: &[i32]) -> Option<i32> {
    let len = seq.len();
    if len < 3 {
        return None;
    }

    let ring = Ring::new(len);
    (0..len)
        .map(|i| ring.window(i).iter().map(|&e| seq[e]).sum::<i32>())
        .min()
}
