pub mod config;
pub mod engines;
pub mod error;
pub mod types;

pub use engines::search::{Optimizer, RestartEngine};
pub use error::{Result, RingsumError};
