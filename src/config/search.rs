use super::traits::ConfigSection;
use crate::engines::search::restart_engine::RestartConfig;
use crate::error::Result;
use crate::types::{SEQ_LEN, TARGET_MIN_SUM};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub ring_len: usize,
    pub target: i32,
    pub attempts: usize,
    pub max_results: usize,
    pub parallel: bool,
    pub seed: Option<u64>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            ring_len: SEQ_LEN,
            target: TARGET_MIN_SUM,
            attempts: 1000,
            max_results: 0,
            parallel: true,
            seed: None,
        }
    }
}

impl ConfigSection for SearchConfig {
    fn section_name() -> &'static str {
        "search"
    }

    fn validate(&self) -> Result<()> {
        RestartConfig::from(self).validate()
    }
}
