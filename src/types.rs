use serde::Serialize;

/// Ring length the search is built around.
pub const SEQ_LEN: usize = 19;

/// Best minimum window sum reachable for a ring of 1..19.
pub const TARGET_MIN_SUM: i32 = 28;

/// A cyclic arrangement of 1..N, stored by position.
pub type Sequence = Vec<i32>;

/// Exchange of the values at two positions.
///
/// `e1` always lies inside the current weakest window; `e2` is the position
/// whose value is pulled into it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SwapMove {
    pub e1: usize,
    pub e2: usize,
}

/// An optimizer result accepted by the restart engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Arrangement {
    pub sequence: Sequence,
    pub min_sum: i32,
    #[serde(skip_serializing)]
    pub canonical: Sequence, // For deduplication
}

/// Totals for one restart run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchSummary {
    pub attempts: usize,
    pub hits: usize,   // Trials that reached the target
    pub unique: usize, // Hits left after cyclic deduplication
    pub best_min_sum: Option<i32>,
}
