use std::path::PathBuf;

use reqwest::StatusCode;

use crate::core::models::SpeechErrorEnvelope;

/// Upper bound for error bodies carried in [`ReportError::ApiStatus`].
const MAX_ERROR_BODY_LEN: usize = 500;

/// Report generation error types
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    /// Configuration is missing or malformed
    #[error("Configuration error: {0}")]
    Config(String),

    /// Network-level failure (DNS, TLS, timeout, connection reset)
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    /// Speech service answered with a non-success status
    #[error("Speech service returned {status} for {url}: {body}")]
    ApiStatus {
        status: StatusCode,
        url: String,
        body: String,
    },

    /// Response body was not the JSON shape we expected
    #[error("Failed to parse response from {url}: {source}")]
    Json {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    /// Two speech to text records normalized to the same locale
    #[error("Duplicate speech to text locale: {0}")]
    DuplicateLocale(String),

    /// Writing an output file failed
    #[error("Failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ReportError {
    /// Build an [`ReportError::ApiStatus`] from a failed response body.
    ///
    /// Bodies in the speech service error envelope are rendered as
    /// `code: message (reason: message; ...)`. Anything else is kept verbatim,
    /// capped at 500 characters.
    pub fn api_status(status: StatusCode, url: &str, body: &str) -> Self {
        let rendered = serde_json::from_str::<SpeechErrorEnvelope>(body)
            .ok()
            .and_then(|envelope| envelope.describe())
            .unwrap_or_else(|| body.to_string());

        let body = if rendered.len() > MAX_ERROR_BODY_LEN {
            let mut end = MAX_ERROR_BODY_LEN;
            while !rendered.is_char_boundary(end) {
                end -= 1;
            }
            format!("{}... (truncated)", &rendered[..end])
        } else {
            rendered
        };

        Self::ApiStatus {
            status,
            url: url.to_string(),
            body,
        }
    }
}

/// Result type alias for report generation
pub type ReportResult<T> = Result<T, ReportError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_status_plain_body() {
        let err = ReportError::api_status(StatusCode::NOT_FOUND, "http://x/y", "nope");
        assert_eq!(
            err.to_string(),
            "Speech service returned 404 Not Found for http://x/y: nope"
        );
    }

    #[test]
    fn test_api_status_error_envelope() {
        let body = r#"{"error":{"code":"Unauthorized","message":"Bad key","errors":[{"reason":"KeyInvalid","message":"Key rejected"}]}}"#;
        let err = ReportError::api_status(StatusCode::UNAUTHORIZED, "http://x", body);

        match err {
            ReportError::ApiStatus { status, body, .. } => {
                assert_eq!(status, StatusCode::UNAUTHORIZED);
                assert_eq!(body, "Unauthorized: Bad key (KeyInvalid: Key rejected)");
            }
            other => panic!("Expected ApiStatus, got {other:?}"),
        }
    }

    #[test]
    fn test_api_status_body_capping() {
        let large = "X".repeat(1000);
        let err = ReportError::api_status(StatusCode::INTERNAL_SERVER_ERROR, "http://x", &large);

        if let ReportError::ApiStatus { body, .. } = err {
            assert!(body.len() <= 515);
            assert!(body.ends_with("(truncated)"));
        } else {
            panic!("Expected ApiStatus");
        }
    }

    #[test]
    fn test_duplicate_locale_display() {
        let err = ReportError::DuplicateLocale("en-US".to_string());
        assert_eq!(err.to_string(), "Duplicate speech to text locale: en-US");
    }
}
