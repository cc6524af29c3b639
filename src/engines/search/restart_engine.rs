use crate::config::search::SearchConfig;
use crate::engines::search::{
    bounds::upper_bound,
    hall_of_fame::HallOfFame,
    optimizer::Optimizer,
    permutation::random_permutation,
    progress::ProgressCallback,
};
use crate::error::{Result, RingsumError};
use crate::types::{Arrangement, SearchSummary, Sequence};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rayon::prelude::*;

/// Starts drawn and optimized per batch; bounds memory for large attempt counts.
pub const CHUNK_SIZE: usize = 1024;

#[derive(Debug, Clone)]
pub struct RestartConfig {
    pub ring_len: usize,
    pub target: i32,
    pub attempts: usize,
    pub max_results: usize, // 0 = keep every unique hit
    pub parallel: bool,
    pub seed: Option<u64>,
}

impl RestartConfig {
    pub fn validate(&self) -> Result<()> {
        if self.ring_len < 4 {
            return Err(RingsumError::Configuration(format!(
                "Ring length must be at least 4, got {}",
                self.ring_len,
            )));
        }
        if self.attempts == 0 {
            return Err(RingsumError::Configuration(
                "Attempt count must be at least 1".to_string(),
            ));
        }
        if let Some(bound) = upper_bound(self.ring_len) {
            if self.target > bound {
                return Err(RingsumError::Configuration(format!(
                    "Target {} is unreachable for a ring of {}: minimum window sum is at most {}",
                    self.target, self.ring_len, bound,
                )));
            }
        }
        Ok(())
    }
}

impl From<&SearchConfig> for RestartConfig {
    fn from(config: &SearchConfig) -> Self {
        Self {
            ring_len: config.ring_len,
            target: config.target,
            attempts: config.attempts,
            max_results: config.max_results,
            parallel: config.parallel,
            seed: config.seed,
        }
    }
}

/// Everything a restart run produced.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    pub arrangements: Vec<Arrangement>,
    pub summary: SearchSummary,
}

/// Random-restart driver around [`Optimizer`].
///
/// Every attempt starts from a fresh shuffle drawn from the engine's own RNG.
/// Results that reach the target are kept once per ring, whatever their
/// rotation or direction.
pub struct RestartEngine {
    config: RestartConfig,
    rng: StdRng,
}

impl RestartEngine {
    pub fn new(config: RestartConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Self { config, rng }
    }

    /// Run the restart search
    pub fn run<C: ProgressCallback + ?Sized>(&mut self, callback: &mut C) -> Result<SearchOutcome> {
        self.config.validate()?;

        log::info!(
            "Starting {} attempts on a ring of {} (target {}, parallel: {})",
            self.config.attempts,
            self.config.ring_len,
            self.config.target,
            self.config.parallel
        );

        let mut hall_of_fame = HallOfFame::new(self.config.max_results);
        let mut summary = SearchSummary::default();

        while summary.attempts < self.config.attempts {
            let batch = CHUNK_SIZE.min(self.config.attempts - summary.attempts);

            // Starts are drawn in attempt order so a seed reproduces the run with or without rayon
            let starts: Vec<Sequence> = (0..batch)
                .map(|_| random_permutation(self.config.ring_len, &mut self.rng))
                .collect();

            let target = self.config.target;
            let results: Vec<(Option<Sequence>, i32)> = if self.config.parallel {
                starts.into_par_iter().map(|s| optimize(s, target)).collect()
            } else {
                starts.into_iter().map(|s| optimize(s, target)).collect()
            };

            for (hit, min_sum) in results {
                let attempt = summary.attempts;
                summary.attempts += 1;
                callback.on_attempt_complete(attempt, self.config.attempts, min_sum);

                summary.best_min_sum = Some(summary.best_min_sum.map_or(min_sum, |b| b.max(min_sum)));

                let Some(sequence) = hit else { continue };
                summary.hits += 1;

                let arrangement = HallOfFame::arrangement(sequence, min_sum);
                if hall_of_fame.try_add(arrangement) {
                    if let Some(added) = hall_of_fame.get_all().last() {
                        callback.on_arrangement_found(added, hall_of_fame.len());
                    }
                }
            }
        }

        summary.unique = hall_of_fame.len();
        callback.on_search_complete(&summary);

        Ok(SearchOutcome {
            arrangements: hall_of_fame.into_vec(),
            summary,
        })
    }
}

/// Optimize one start; the final ring is kept only when it reaches `target`.
fn optimize(start: Sequence, target: i32) -> (Option<Sequence>, i32) {
    let mut optimizer = Optimizer::new(start);
    let min_sum = optimizer.run_to_local_optimum();
    log::debug!(
        "Local optimum {} after {} swaps",
        min_sum,
        optimizer.swap_count()
    );
    let hit = (min_sum == target).then(|| optimizer.into_sequence());
    (hit, min_sum)
}
