use super::traits::ConfigSection;
use crate::engines::report::ReportFormat;
use crate::error::Result;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: ReportFormat,
}

impl ConfigSection for OutputConfig {
    fn section_name() -> &'static str {
        "output"
    }

    fn validate(&self) -> Result<()> {
        Ok(())
    }
}
