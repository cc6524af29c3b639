use crate::types::{Arrangement, SearchSummary};

pub trait ProgressCallback: Send {
    fn on_attempt_complete(&mut self, attempt: usize, total: usize, min_sum: i32);
    fn on_arrangement_found(&mut self, arrangement: &Arrangement, found: usize);
    fn on_search_complete(&mut self, summary: &SearchSummary);
}

/// Reports through the `log` facade.
pub struct LogProgressCallback;

impl ProgressCallback for LogProgressCallback {
    fn on_attempt_complete(&mut self, attempt: usize, total: usize, min_sum: i32) {
        log::debug!("Attempt {}/{} reached {}", attempt + 1, total, min_sum);
        if (attempt + 1) % 100 == 0 || attempt + 1 == total {
            log::info!("Completed {}/{} attempts", attempt + 1, total);
        }
    }

    fn on_arrangement_found(&mut self, arrangement: &Arrangement, found: usize) {
        log::info!(
            "Arrangement #{} found (min window sum {})",
            found,
            arrangement.min_sum
        );
    }

    fn on_search_complete(&mut self, summary: &SearchSummary) {
        log::info!(
            "Search complete. Attempts: {}, hits: {}, unique: {}, best: {:?}",
            summary.attempts,
            summary.hits,
            summary.unique,
            summary.best_min_sum
        );
    }
}

/// Ignores every event.
pub struct SilentProgressCallback;

impl ProgressCallback for SilentProgressCallback {
    fn on_attempt_complete(&mut self, _attempt: usize, _total: usize, _min_sum: i32) {}

    fn on_arrangement_found(&mut self, _arrangement: &Arrangement, _found: usize) {}

    fn on_search_complete(&mut self, _summary: &SearchSummary) {}
}
