pub mod traits;
pub mod search;
pub mod output;
pub mod manager;

pub use manager::{AppConfig, ConfigManager};
pub use search::SearchConfig;
pub use output::OutputConfig;
