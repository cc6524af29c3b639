use crate::types::{Arrangement, Sequence};

use std::collections::HashSet;

/// Keeps accepted arrangements, rejecting rotations and mirror images of
/// arrangements already seen.
pub struct HallOfFame {
    arrangements: Vec<Arrangement>,
    max_size: usize, // 0 = unbounded
    seen_signatures: HashSet<Sequence>,
}

impl HallOfFame {
    pub fn new(max_size: usize) -> Self {
        Self {
            arrangements: Vec::new(),
            max_size,
            seen_signatures: HashSet::new(),
        }
    }

    /// Build an arrangement from an optimizer result, filling in its canonical form.
    pub fn arrangement(sequence: Sequence, min_sum: i32) -> Arrangement {
        let canonical = canonical_form(&sequence);
        Arrangement {
            sequence,
            min_sum,
            canonical,
        }
    }

    /// Attempt to add an arrangement to the Hall of Fame
    pub fn try_add(&mut self, arrangement: Arrangement) -> bool {
        if self.is_full() {
            return false;
        }

        // Deduplication check
        if !self.seen_signatures.insert(arrangement.canonical.clone()) {
            return false;
        }

        self.arrangements.push(arrangement);
        true
    }

    pub fn is_full(&self) -> bool {
        self.max_size != 0 && self.arrangements.len() >= self.max_size
    }

    /// Accepted arrangements in insertion order
    pub fn get_all(&self) -> &[Arrangement] {
        &self.arrangements
    }

    pub fn into_vec(self) -> Vec<Arrangement> {
        self.arrangements
    }

    pub fn len(&self) -> usize {
        self.arrangements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arrangements.is_empty()
    }
}

/// Representative of a ring under rotation and reflection.
///
/// The ring is read starting at its largest value, once clockwise and once
/// counter-clockwise; the lexicographically smaller reading is the canonical
/// one. For rings of distinct values this identifies equivalent arrangements
/// exactly.
pub fn canonical_form(seq: &[i32]) -> Sequence {
    let len = seq.len();
    let Some(start) = seq
        .iter()
        .enumerate()
        .max_by_key(|&(_, value)| *value)
        .map(|(i, _)| i)
    else {
        return Vec::new();
    };

    let forward: Sequence = (0..len).map(|k| seq[(start + k) % len]).collect();
    let backward: Sequence = (0..len).map(|k| seq[(start + len - k) % len]).collect();

    forward.min(backward)
}

/// True if `a` and `b` describe the same ring up to rotation and reflection.
pub fn same_ring(a: &[i32], b: &[i32]) -> bool {
    a.len() == b.len() && canonical_form(a) == canonical_form(b)
}
