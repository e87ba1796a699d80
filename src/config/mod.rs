//! Configuration for the report generator.
//!
//! Configuration comes from environment variables (optionally via a `.env`
//! file) and an optional YAML file. When a YAML file is given its values win
//! over environment variables.
//!
//! # Modules
//! - `yaml`: YAML configuration file loading
//! - `env`: Environment variable loading
//! - `merge`: Merging YAML and environment configurations
//! - `validation`: Configuration validation logic
//!
//! # Example
//! ```rust,no_run
//! use speech_locales::config::ReportConfig;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // Load from environment variables only
//! let config = ReportConfig::from_env()?;
//!
//! // Load from YAML file with environment variable fallback
//! let config = ReportConfig::from_file(&PathBuf::from("speech-locales.yaml"))?;
//! println!("Querying region {}", config.region);
//! # Ok(())
//! # }
//! ```

use std::path::PathBuf;

use crate::core::providers::azure::{AzureRegion, EndpointOverrides, SpeechEndpoints};
use crate::errors::ReportResult;

mod env;
mod merge;
mod validation;
mod yaml;

pub use yaml::YamlConfig;

/// Default directory the Markdown files are written to.
pub const DEFAULT_OUTPUT_DIR: &str = "output";

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

/// Report generator configuration
#[derive(Clone, PartialEq, Eq)]
pub struct ReportConfig {
    /// Speech resource subscription key
    pub speech_key: String,
    /// Region whose catalogue is queried
    pub region: AzureRegion,
    /// Directory for the generated Markdown files
    pub output_dir: PathBuf,
    /// Per-request timeout in seconds
    pub timeout_seconds: u64,
    /// Replacement URLs for individual endpoints
    pub endpoint_overrides: EndpointOverrides,
}

impl std::fmt::Debug for ReportConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReportConfig")
            .field("speech_key", &"<redacted>")
            .field("region", &self.region)
            .field("output_dir", &self.output_dir)
            .field("timeout_seconds", &self.timeout_seconds)
            .field("endpoint_overrides", &self.endpoint_overrides)
            .finish()
    }
}

impl ReportConfig {
    /// Load configuration from a YAML file with environment variable fallback
    ///
    /// Priority order (highest to lowest):
    /// 1. YAML file values
    /// 2. Environment variables
    /// 3. Default values
    ///
    /// # Errors
    /// Returns an error if the YAML file cannot be read or parsed, an
    /// environment variable is malformed, or validation fails.
    pub fn from_file(path: &PathBuf) -> ReportResult<Self> {
        let yaml_config = yaml::YamlConfig::from_file(path)?;
        let config = merge::merge_config(Some(yaml_config))?;
        validation::validate(&config)?;
        Ok(config)
    }

    /// Resolved endpoint URLs for this configuration.
    pub fn endpoints(&self) -> SpeechEndpoints {
        SpeechEndpoints::for_region(&self.region).with_overrides(&self.endpoint_overrides)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> ReportConfig {
        ReportConfig {
            speech_key: "secret-key".to_string(),
            region: AzureRegion::WestEurope,
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
            endpoint_overrides: EndpointOverrides::default(),
        }
    }

    #[test]
    fn test_debug_redacts_key() {
        let debug = format!("{:?}", config());
        assert!(!debug.contains("secret-key"));
        assert!(debug.contains("<redacted>"));
    }

    #[test]
    fn test_endpoints_apply_overrides() {
        let mut config = config();
        config.endpoint_overrides.base_models = Some("http://localhost:1/base".to_string());

        let endpoints = config.endpoints();
        assert_eq!(endpoints.base_models, "http://localhost:1/base");
        assert!(endpoints.stt_languages.contains("westeurope"));
    }
}
