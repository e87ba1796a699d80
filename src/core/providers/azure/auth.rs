//! Azure Speech Services subscription key authentication.
//!
//! Every metadata request carries the key in the `Ocp-Apim-Subscription-Key`
//! header and asks for JSON.
//!
//! See: <https://learn.microsoft.com/en-us/azure/ai-services/speech-service/rest-speech-to-text#authentication>

use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};

use crate::errors::{ReportError, ReportResult};

/// The HTTP header name for Azure subscription key authentication.
pub const AZURE_SUBSCRIPTION_KEY_HEADER: &str = "Ocp-Apim-Subscription-Key";

/// Default headers for every metadata request.
///
/// The key is marked sensitive so it never shows up in debug output.
///
/// # Errors
/// Returns [`ReportError::Config`] if the key contains characters that are
/// not valid in an HTTP header.
pub fn build_default_headers(subscription_key: &str) -> ReportResult<HeaderMap> {
    let mut key = HeaderValue::from_str(subscription_key).map_err(|_| {
        ReportError::Config("SPEECH_KEY contains invalid header characters".to_string())
    })?;
    key.set_sensitive(true);

    let mut headers = HeaderMap::new();
    headers.insert(AZURE_SUBSCRIPTION_KEY_HEADER, key);
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    Ok(headers)
}
