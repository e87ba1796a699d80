use std::env;
use std::path::PathBuf;

use super::yaml::YamlConfig;
use super::{DEFAULT_OUTPUT_DIR, DEFAULT_TIMEOUT_SECONDS, ReportConfig};
use crate::core::providers::azure::{AzureRegion, EndpointOverrides};
use crate::errors::{ReportError, ReportResult};

/// Merge YAML configuration with environment variables
///
/// Priority order (highest to lowest):
/// 1. YAML configuration values
/// 2. Environment variables
/// 3. Default values
///
/// Empty environment variables count as unset.
pub fn merge_config(yaml_config: Option<YamlConfig>) -> ReportResult<ReportConfig> {
    let yaml = yaml_config.unwrap_or_default();

    // Helper macro for optional values: YAML > ENV
    macro_rules! get_optional {
        ($env_var:expr, $yaml_value:expr) => {
            $yaml_value.or_else(|| env::var($env_var).ok().filter(|v| !v.is_empty()))
        };
    }

    let speech_key = get_optional!(
        "SPEECH_KEY",
        yaml.speech.as_ref().and_then(|s| s.key.clone())
    )
    .unwrap_or_default();

    let region = get_optional!(
        "SPEECH_REGION",
        yaml.speech.as_ref().and_then(|s| s.region.clone())
    )
    .map(|r| r.parse::<AzureRegion>().unwrap_or_else(|never| match never {}))
    .unwrap_or_default();

    let output_dir = yaml
        .output
        .as_ref()
        .and_then(|o| o.dir.clone())
        .or_else(|| env::var("OUTPUT_DIR").ok().filter(|v| !v.is_empty()).map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR));

    let timeout_seconds = if let Some(timeout) = yaml.http.as_ref().and_then(|h| h.timeout_seconds)
    {
        timeout
    } else if let Some(timeout) = env::var("REQUEST_TIMEOUT_SECONDS")
        .ok()
        .filter(|v| !v.is_empty())
    {
        timeout.parse::<u64>().map_err(|e| {
            ReportError::Config(format!(
                "Invalid REQUEST_TIMEOUT_SECONDS environment variable: {e}"
            ))
        })?
    } else {
        DEFAULT_TIMEOUT_SECONDS
    };

    let endpoints = yaml.endpoints.unwrap_or_default();
    let endpoint_overrides = EndpointOverrides {
        stt_languages: get_optional!("STT_LANGUAGES_URL", endpoints.stt_languages),
        fast_transcription_locales: get_optional!(
            "FAST_TRANSCRIPTION_LOCALES_URL",
            endpoints.fast_transcription_locales
        ),
        base_models: get_optional!("BASE_MODELS_URL", endpoints.base_models),
        voices_list: get_optional!("VOICES_LIST_URL", endpoints.voices_list),
    };

    Ok(ReportConfig {
        speech_key,
        region,
        output_dir,
        timeout_seconds,
        endpoint_overrides,
    })
}
