use crate::engines::search::permutation::is_permutation;
use crate::engines::search::ring::Ring;
use crate::error::{Result, RingsumError};
use crate::types::{Sequence, SwapMove};

/// Hill climber that raises the weakest three-element window of a ring.
///
/// The optimizer owns a permutation of `1..=N` and the `N` window sums derived
/// from it. Each step looks only at the current minimum window: one of its
/// three members is exchanged with a larger value from anywhere in the ring,
/// provided no window touched by the exchange ends up at or below the current
/// minimum. Among the admissible exchanges the one with the largest value gap
/// wins; ties keep the first candidate in scan order. The search stops when no
/// admissible exchange is left.
///
/// The input must be a genuine permutation of `1..=N`; window sums are
/// meaningless otherwise. [`Optimizer::try_new`] checks this, [`Optimizer::new`]
/// trusts the caller.
#[derive(Debug, Clone)]
pub struct Optimizer {
    ring: Ring,
    nums: Sequence,
    sums: Vec<i32>,
    min: usize, // index of the smallest sum
    swaps: usize,
}

impl Optimizer {
    pub fn new(sequence: Sequence) -> Self {
        let len = sequence.len();
        let mut optimizer = Self {
            ring: Ring::new(len),
            nums: sequence,
            sums: vec![0; len],
            min: 0,
            swaps: 0,
        };
        optimizer.calculate_sums();
        optimizer
    }

    /// Like [`Optimizer::new`], but rejects anything that is not a permutation
    /// of `1..=N` with at least four positions.
    pub fn try_new(sequence: Sequence) -> Result<Self> {
        if sequence.len() < 4 {
            return Err(RingsumError::InvalidSequence(format!(
                "a ring needs at least 4 positions, got {}",
                sequence.len()
            )));
        }
        if !is_permutation(&sequence) {
            return Err(RingsumError::InvalidSequence(format!(
                "{:?} is not a permutation of 1..={}",
                sequence,
                sequence.len()
            )));
        }
        Ok(Self::new(sequence))
    }

    /// Swap until a local optimum is reached and return its minimum window sum.
    pub fn run_to_local_optimum(&mut self) -> i32 {
        while self.step().is_some() {}
        self.min_window_sum()
    }

    /// Perform the best improving swap, if any, and refresh the window sums.
    pub fn step(&mut self) -> Option<SwapMove> {
        let mv = self.best_swap()?;
        self.make_step(mv);
        self.calculate_sums();
        log::trace!(
            "swap {} <-> {}: min window sum now {} at {}",
            mv.e1,
            mv.e2,
            self.sums[self.min],
            self.min
        );
        Some(mv)
    }

    /// The swap `step` would make, without making it.
    pub fn best_swap(&self) -> Option<SwapMove> {
        let mut best = None;
        let mut fall = 0; // never positive

        for e1 in self.ring.window(self.min) {
            for e2 in 0..self.ring.len() {
                let candidate = self.nums[e1] - self.nums[e2];
                if candidate < fall && self.is_valid_swap(e1, e2) {
                    fall = candidate;
                    best = Some(SwapMove { e1, e2 });
                }
            }
        }

        best
    }

    /// A swap is rejected if any window around either position would drop to
    /// the current minimum or below it.
    pub fn is_valid_swap(&self, e1: usize, e2: usize) -> bool {
        let floor = self.sums[self.min];
        let diff = self.nums[e2] - self.nums[e1];

        let e2_ok = self
            .ring
            .window(e2)
            .into_iter()
            .all(|e| self.window_sum(e) - diff > floor);
        let e1_ok = self
            .ring
            .window(e1)
            .into_iter()
            .all(|e| self.window_sum(e) + diff > floor);

        e2_ok && e1_ok
    }

    /// Sum of the window centred on `index`, read from the current sequence.
    #[inline]
    pub fn window_sum(&self, index: usize) -> i32 {
        let [left, center, right] = self.ring.window(index);
        self.nums[left] + self.nums[center] + self.nums[right]
    }

    pub fn sequence(&self) -> &[i32] {
        &self.nums
    }

    pub fn into_sequence(self) -> Sequence {
        self.nums
    }

    pub fn min_window_sum(&self) -> i32 {
        self.sums[self.min]
    }

    pub fn min_index(&self) -> usize {
        self.min
    }

    pub fn window_sums(&self) -> &[i32] {
        &self.sums
    }

    /// Number of swaps accepted so far.
    pub fn swap_count(&self) -> usize {
        self.swaps
    }

    fn make_step(&mut self, mv: SwapMove) {
        self.nums.swap(mv.e1, mv.e2);
        self.swaps += 1;
    }

    fn calculate_sums(&mut self) {
        for i in 0..self.ring.len() {
            self.sums[i] = self.window_sum(i);
        }

        // First occurrence wins on ties
        let mut min = 0;
        for (i, &sum) in self.sums.iter().enumerate() {
            if sum < self.sums[min] {
                min = i;
            }
        }
        self.min = min;
    }
}
