pub mod ring;
pub mod optimizer;
pub mod permutation;
pub mod hall_of_fame;
pub mod bounds;
pub mod progress;
pub mod restart_engine;

pub use ring::Ring;
pub use optimizer::Optimizer;
pub use permutation::{is_permutation, min_window_sum, random_permutation};
pub use hall_of_fame::{canonical_form, same_ring, HallOfFame};
pub use bounds::upper_bound;
pub use progress::{LogProgressCallback, ProgressCallback, SilentProgressCallback};
pub use restart_engine::{RestartConfig, RestartEngine, SearchOutcome};
