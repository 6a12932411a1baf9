//! Configuration loading from pulse.toml
//!
//! Host programs may keep default run parameters in a `pulse.toml` file,
//! discovered by walking up from the current directory. The harness never
//! reads it implicitly; demos and suites load it and pass the values to
//! `run()` themselves.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// File name looked up by [`PulseConfig::discover`].
pub const CONFIG_FILE: &str = "pulse.toml";

/// Harness configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PulseConfig {
    /// Default run parameters.
    #[serde(default)]
    pub run: RunConfig,
}

/// Default run parameters handed to `run()` by host programs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunConfig {
    /// Outer repetition count.
    #[serde(default = "default_samples")]
    pub samples: usize,
    /// Inner invocations per sample.
    #[serde(default = "default_iterations")]
    pub iterations: usize,
    /// Descriptive thread-count label recorded on the run.
    #[serde(default)]
    pub threads: Option<usize>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            samples: default_samples(),
            iterations: default_iterations(),
            threads: None,
        }
    }
}

fn default_samples() -> usize {
    100
}
fn default_iterations() -> usize {
    1
}

impl PulseConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// Try to discover and load configuration by walking up from the
    /// current directory.
    pub fn discover() -> Option<Self> {
        let mut dir = std::env::current_dir().ok()?;
        loop {
            let config_path = dir.join(CONFIG_FILE);
            if config_path.exists() {
                return Self::load(&config_path).ok();
            }
            if !dir.pop() {
                return None;
            }
        }
    }

    /// Discovered configuration, or the documented defaults.
    pub fn discover_or_default() -> Self {
        Self::discover().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_yields_defaults() {
        let config: PulseConfig = toml::from_str("").unwrap();
        assert_eq!(config.run.samples, 100);
        assert_eq!(config.run.iterations, 1);
        assert_eq!(config.run.threads, None);
    }

    #[test]
    fn test_partial_run_section() {
        let config: PulseConfig = toml::from_str(
            r#"
            [run]
            samples = 25
            "#,
        )
        .unwrap();
        assert_eq!(config.run.samples, 25);
        assert_eq!(config.run.iterations, 1);
    }

    #[test]
    fn test_full_run_section() {
        let config: PulseConfig = toml::from_str(
            r#"
            [run]
            samples = 50
            iterations = 10
            threads = 4
            "#,
        )
        .unwrap();
        assert_eq!(config.run.samples, 50);
        assert_eq!(config.run.iterations, 10);
        assert_eq!(config.run.threads, Some(4));
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        assert!(toml::from_str::<PulseConfig>("[run\nsamples = ").is_err());
    }
}
