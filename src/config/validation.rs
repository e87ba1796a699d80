use super::ReportConfig;
use crate::errors::{ReportError, ReportResult};

/// Validate a merged configuration
///
/// - The subscription key must be present.
/// - The request timeout must be positive.
pub fn validate(config: &ReportConfig) -> ReportResult<()> {
    if config.speech_key.trim().is_empty() {
        return Err(ReportError::Config(
            "SPEECH_KEY is required (set it in the environment, .env or the YAML speech.key)"
                .to_string(),
        ));
    }

    if config.timeout_seconds == 0 {
        return Err(ReportError::Config(
            "REQUEST_TIMEOUT_SECONDS must be greater than zero".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::providers::azure::{AzureRegion, EndpointOverrides};
    use std::path::PathBuf;

    fn config(key: &str, timeout_seconds: u64) -> ReportConfig {
        ReportConfig {
            speech_key: key.to_string(),
            region: AzureRegion::EastUS,
            output_dir: PathBuf::from("output"),
            timeout_seconds,
            endpoint_overrides: EndpointOverrides::default(),
        }
    }

    #[test]
    fn test_validate_ok() {
        assert!(validate(&config("key", 30)).is_ok());
    }

    #[test]
    fn test_validate_missing_key() {
        let result = validate(&config("  ", 30));
        assert!(matches!(result, Err(ReportError::Config(msg)) if msg.contains("SPEECH_KEY")));
    }

    #[test]
    fn test_validate_zero_timeout() {
        let result = validate(&config("key", 0));
        assert!(matches!(result, Err(ReportError::Config(msg)) if msg.contains("TIMEOUT")));
    }
}
