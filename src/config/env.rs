use super::ReportConfig;
use super::merge::merge_config;
use super::validation::validate;
use crate::errors::ReportResult;

impl ReportConfig {
    /// Load configuration from environment variables
    ///
    /// Also loads from .env file if present using dotenvy.
    ///
    /// | Variable | Default |
    /// | --- | --- |
    /// | `SPEECH_KEY` | required |
    /// | `SPEECH_REGION` | `eastus` |
    /// | `OUTPUT_DIR` | `output` |
    /// | `REQUEST_TIMEOUT_SECONDS` | `30` |
    /// | `STT_LANGUAGES_URL`, `FAST_TRANSCRIPTION_LOCALES_URL`, `BASE_MODELS_URL`, `VOICES_LIST_URL` | derived from region |
    ///
    /// # Errors
    /// Returns an error if a variable is malformed or the key is missing.
    pub fn from_env() -> ReportResult<Self> {
        // Load .env file if it exists
        let _ = dotenvy::dotenv();

        let config = merge_config(None)?;
        validate(&config)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::providers::azure::AzureRegion;
    use crate::errors::ReportError;
    use serial_test::serial;
    use std::env;
    use std::path::PathBuf;

    // Helper to clean up environment variables after tests
    fn cleanup_env_vars() {
        unsafe {
            env::remove_var("SPEECH_KEY");
            env::remove_var("SPEECH_REGION");
            env::remove_var("OUTPUT_DIR");
            env::remove_var("REQUEST_TIMEOUT_SECONDS");
            env::remove_var("VOICES_LIST_URL");
        }
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        cleanup_env_vars();
        unsafe {
            env::set_var("SPEECH_KEY", "env-key");
        }

        let config = ReportConfig::from_env().expect("Should load config");
        assert_eq!(config.speech_key, "env-key");
        assert_eq!(config.region, AzureRegion::EastUS);
        assert_eq!(config.output_dir, PathBuf::from("output"));
        assert_eq!(config.timeout_seconds, 30);
        assert!(config.endpoint_overrides.voices_list.is_none());

        cleanup_env_vars();
    }

    #[test]
    #[serial]
    fn test_from_env_custom_values() {
        cleanup_env_vars();
        unsafe {
            env::set_var("SPEECH_KEY", "env-key");
            env::set_var("SPEECH_REGION", "WestEurope");
            env::set_var("OUTPUT_DIR", "/tmp/tables");
            env::set_var("REQUEST_TIMEOUT_SECONDS", "5");
            env::set_var("VOICES_LIST_URL", "http://localhost:9/voices");
        }

        let config = ReportConfig::from_env().expect("Should load config");
        assert_eq!(config.region, AzureRegion::WestEurope);
        assert_eq!(config.output_dir, PathBuf::from("/tmp/tables"));
        assert_eq!(config.timeout_seconds, 5);
        assert_eq!(
            config.endpoints().voices_list,
            "http://localhost:9/voices"
        );

        cleanup_env_vars();
    }

    #[test]
    #[serial]
    fn test_from_env_invalid_timeout() {
        cleanup_env_vars();
        unsafe {
            env::set_var("SPEECH_KEY", "env-key");
            env::set_var("REQUEST_TIMEOUT_SECONDS", "soon");
        }

        let result = ReportConfig::from_env();
        assert!(matches!(result, Err(ReportError::Config(_))));

        cleanup_env_vars();
    }

    #[test]
    #[serial]
    fn test_from_env_empty_key_rejected() {
        cleanup_env_vars();
        unsafe {
            env::set_var("SPEECH_KEY", "");
        }

        let result = ReportConfig::from_env();
        assert!(matches!(result, Err(ReportError::Config(_))));

        cleanup_env_vars();
    }
}
