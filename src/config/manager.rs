use super::{output::OutputConfig, search::SearchConfig, traits::ConfigSection};
use crate::error::{Result, RingsumError};
use ::config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Prefix for environment overrides, e.g. `RINGSUM_SEARCH__ATTEMPTS=5000`.
pub const ENV_PREFIX: &str = "RINGSUM";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub search: SearchConfig,
    pub output: OutputConfig,
}

impl AppConfig {
    pub fn validate(&self) -> Result<()> {
        validate_section(&self.search)?;
        validate_section(&self.output)?;
        Ok(())
    }
}

fn validate_section<S: ConfigSection>(section: &S) -> Result<()> {
    section.validate().map_err(|e| match e {
        RingsumError::Configuration(msg) => {
            RingsumError::Configuration(format!("[{}] {}", S::section_name(), msg))
        }
        other => other,
    })
}

#[derive(Default)]
pub struct ConfigManager {
    config: AppConfig,
}

impl ConfigManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load_from_file<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| RingsumError::Configuration(format!("Failed to read config: {}", e)))?;

        let config: AppConfig = toml::from_str(&contents)
            .map_err(|e| RingsumError::Configuration(format!("Failed to parse config: {}", e)))?;

        config.validate()?;

        self.config = config;
        Ok(())
    }

    /// Defaults, then the TOML file if given, then `RINGSUM_*` environment variables.
    pub fn load_layered<P: AsRef<Path>>(&mut self, path: Option<P>) -> Result<()> {
        let mut builder = Config::builder();

        if let Some(path) = path {
            let path = path.as_ref().to_string_lossy().into_owned();
            builder = builder.add_source(File::new(&path, FileFormat::Toml).required(true));
        }

        let config: AppConfig = builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .and_then(|c| c.try_deserialize())
            .map_err(|e| RingsumError::Configuration(format!("Failed to load config: {}", e)))?;

        config.validate()?;

        self.config = config;
        Ok(())
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let toml_str = toml::to_string_pretty(&self.config)
            .map_err(|e| RingsumError::Configuration(format!("Failed to serialize: {}", e)))?;

        std::fs::write(path, toml_str)
            .map_err(|e| RingsumError::Configuration(format!("Failed to write config: {}", e)))?;

        Ok(())
    }

    pub fn get(&self) -> AppConfig {
        self.config.clone()
    }

    pub fn update<F>(&mut self, f: F) -> Result<()>
    where
        F: FnOnce(&mut AppConfig),
    {
        let mut candidate = self.config.clone();
        f(&mut candidate);
        candidate.validate()?;
        self.config = candidate;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_rejects_invalid_and_keeps_previous() {
        let mut manager = ConfigManager::new();
        let result = manager.update(|c| c.search.target = 40);

        let err = result.unwrap_err().to_string();
        assert!(err.contains("[search]"), "{err}");
        assert_eq!(manager.get().search.target, 28);
    }

    #[test]
    fn test_update_applies_valid_change() {
        let mut manager = ConfigManager::new();
        manager.update(|c| c.search.attempts = 10).unwrap();
        assert_eq!(manager.get().search.attempts, 10);
    }
}
