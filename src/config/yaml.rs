use serde::Deserialize;
use std::path::PathBuf;

use crate::errors::{ReportError, ReportResult};

/// Complete YAML configuration structure
///
/// All fields are optional; anything missing falls back to environment
/// variables and then to defaults.
///
/// # Example YAML structure
/// ```yaml
/// speech:
///   key: "your-speech-key"
///   region: "westeurope"
///
/// output:
///   dir: "docs/includes"
///
/// http:
///   timeout_seconds: 60
///
/// endpoints:
///   stt_languages: "https://example.com/languages"
///   fast_transcription_locales: "https://example.com/locales"
///   base_models: "https://example.com/models/base"
///   voices_list: "https://example.com/voices/list"
/// ```
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct YamlConfig {
    pub speech: Option<SpeechYaml>,
    pub output: Option<OutputYaml>,
    pub http: Option<HttpYaml>,
    pub endpoints: Option<EndpointsYaml>,
}

/// Speech resource configuration from YAML
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct SpeechYaml {
    pub key: Option<String>,
    pub region: Option<String>,
}

/// Output configuration from YAML
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct OutputYaml {
    pub dir: Option<PathBuf>,
}

/// HTTP client configuration from YAML
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct HttpYaml {
    pub timeout_seconds: Option<u64>,
}

/// Endpoint overrides from YAML
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct EndpointsYaml {
    pub stt_languages: Option<String>,
    pub fast_transcription_locales: Option<String>,
    pub base_models: Option<String>,
    pub voices_list: Option<String>,
}

impl YamlConfig {
    /// Load configuration from a YAML file
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or the YAML is malformed.
    pub fn from_file(path: &PathBuf) -> ReportResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            ReportError::Config(format!(
                "Failed to read config file {}: {e}",
                path.display()
            ))
        })?;

        serde_yaml::from_str(&contents)
            .map_err(|e| ReportError::Config(format!("Failed to parse YAML config: {e}")))
    }
}
