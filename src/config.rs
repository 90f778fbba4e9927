use crate::constants::{DEFAULT_OUTPUT_FILE, DEFAULT_SOURCE_CSV, DEFAULT_STORE_FILE};
use crate::error::{EtlError, Result};
use serde::Deserialize;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

/// File layout for a pipeline run.
///
/// Every stage receives this (or a store built from it) explicitly;
/// nothing reads paths from globals or the environment.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EtlConfig {
    pub source_csv: PathBuf,
    pub store_file: PathBuf,
    pub output_file: PathBuf,
}

impl Default for EtlConfig {
    fn default() -> Self {
        Self {
            source_csv: PathBuf::from(DEFAULT_SOURCE_CSV),
            store_file: PathBuf::from(DEFAULT_STORE_FILE),
            output_file: PathBuf::from(DEFAULT_OUTPUT_FILE),
        }
    }
}

impl EtlConfig {
    /// Load path overrides from `etl.toml` in the working directory,
    /// falling back to the default layout when the file is absent.
    pub fn load() -> Result<Self> {
        let config_path = "etl.toml";
        match fs::read_to_string(config_path) {
            Ok(content) => Ok(toml::from_str(&content)?),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(EtlError::Config(format!(
                "Failed to read config file '{config_path}': {e}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_toml_keeps_defaults_for_missing_keys() {
        let config: EtlConfig = toml::from_str("source_csv = \"ids.csv\"").unwrap();
        assert_eq!(config.source_csv, PathBuf::from("ids.csv"));
        assert_eq!(config.store_file, PathBuf::from(DEFAULT_STORE_FILE));
        assert_eq!(config.output_file, PathBuf::from(DEFAULT_OUTPUT_FILE));
    }
}
