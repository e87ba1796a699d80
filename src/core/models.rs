//! Record types returned by the speech service metadata endpoints.
//!
//! Upstream schemas drift independently of this tool, so every field is
//! optional on the wire. Identity strings (locale, short name, label) default
//! to empty when missing or `null`; list-valued fields stay `None`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};

/// Treat a missing or `null` string as empty.
fn nullable_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// A speech to text language as reported by the recognition languages endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SttLanguage {
    /// Locale code, e.g. `en-US`
    #[serde(default, deserialize_with = "nullable_string")]
    pub name: String,
    /// English display name, e.g. `English (United States)`
    #[serde(default, deserialize_with = "nullable_string")]
    pub english_name: String,
    #[serde(default)]
    pub native_name: Option<String>,
    #[serde(default)]
    pub direction: Option<String>,
}

/// Locales supported by fast transcription.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct FastTranscriptionLocales {
    #[serde(rename = "Submit", default)]
    pub submit: Option<Vec<String>>,
    #[serde(rename = "Transcribe", default)]
    pub transcribe: Option<Vec<String>>,
}

/// One page of the custom speech base model listing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BaseModelPage {
    #[serde(rename = "values", default)]
    pub values: Option<Vec<BaseModel>>,
    /// Continuation cursor; absent or empty on the last page
    #[serde(rename = "@nextLink", default)]
    pub next_link: Option<String>,
}

/// A custom speech base model.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BaseModel {
    #[serde(rename = "self", default)]
    pub self_link: Option<String>,
    #[serde(default, deserialize_with = "nullable_string")]
    pub locale: String,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub properties: Option<ModelProperties>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelProperties {
    #[serde(default)]
    pub deprecation_dates: Option<DeprecationDates>,
    #[serde(default)]
    pub features: Option<ModelFeatures>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeprecationDates {
    #[serde(default)]
    pub adaptation_date_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub transcription_date_time: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelFeatures {
    #[serde(default)]
    pub supports_adaptations_with: Option<Vec<String>>,
    #[serde(default)]
    pub supported_output_formats: Option<Vec<String>>,
}

impl BaseModel {
    /// Date after which the model can no longer be adapted.
    pub fn adaptation_deadline(&self) -> Option<DateTime<Utc>> {
        self.properties
            .as_ref()?
            .deprecation_dates
            .as_ref()?
            .adaptation_date_time
    }

    /// Adaptation data types this model accepts (empty when unreported).
    pub fn supported_adaptations(&self) -> &[String] {
        self.properties
            .as_ref()
            .and_then(|p| p.features.as_ref())
            .and_then(|f| f.supports_adaptations_with.as_deref())
            .unwrap_or_default()
    }
}

/// A text to speech voice from the voices list endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TtsVoice {
    #[serde(default, alias = "ShortName", deserialize_with = "nullable_string")]
    pub short_name: String,
    #[serde(default, alias = "Gender", deserialize_with = "nullable_string")]
    pub gender: String,
    #[serde(default, alias = "Locale", deserialize_with = "nullable_string")]
    pub locale: String,
    #[serde(default, alias = "LocaleName", deserialize_with = "nullable_string")]
    pub locale_name: String,
    #[serde(default, alias = "Status", deserialize_with = "nullable_string")]
    pub status: String,
    /// Position in the fetched list after status filtering
    #[serde(skip)]
    pub order: usize,
    #[serde(default, alias = "StyleList")]
    pub style_list: Option<Vec<String>>,
    #[serde(default, alias = "RolePlayList")]
    pub role_play_list: Option<Vec<String>>,
}

impl TtsVoice {
    pub fn is_preview(&self) -> bool {
        self.status.contains("Preview")
    }

    /// Non-empty style list, if any.
    pub fn styles(&self) -> Option<&[String]> {
        self.style_list.as_deref().filter(|s| !s.is_empty())
    }

    /// Non-empty role list, if any.
    pub fn roles(&self) -> Option<&[String]> {
        self.role_play_list.as_deref().filter(|r| !r.is_empty())
    }
}

/// Error envelope returned by the speech service on failure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SpeechErrorEnvelope {
    #[serde(default)]
    pub error: Option<SpeechErrorBody>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SpeechErrorBody {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub errors: Option<Vec<SpeechErrorDetail>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SpeechErrorDetail {
    #[serde(default)]
    pub reason: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl SpeechErrorEnvelope {
    /// Human readable summary, or `None` if the envelope carries nothing.
    pub fn describe(&self) -> Option<String> {
        let error = self.error.as_ref()?;
        if error.code.is_none() && error.message.is_none() {
            return None;
        }

        let mut text = format!(
            "{}: {}",
            error.code.as_deref().unwrap_or("Unknown"),
            error.message.as_deref().unwrap_or_default()
        );

        let details: Vec<String> = error
            .errors
            .iter()
            .flatten()
            .map(|d| {
                format!(
                    "{}: {}",
                    d.reason.as_deref().unwrap_or("Unknown"),
                    d.message.as_deref().unwrap_or_default()
                )
            })
            .collect();
        if !details.is_empty() {
            text.push_str(&format!(" ({})", details.join("; ")));
        }

        Some(text)
    }
}
