//! Azure Speech Service regions and their metadata endpoints.
//!
//! Every metadata endpoint this tool reads is regional: speech to text
//! languages live on the `stt.speech` host, voices on the `tts.speech` host,
//! and the custom speech / fast transcription APIs on the
//! `api.cognitive` host.
//!
//! # Example
//!
//! ```rust
//! use speech_locales::core::providers::azure::AzureRegion;
//!
//! let region = AzureRegion::WestEurope;
//! assert_eq!(region.stt_hostname(), "westeurope.stt.speech.microsoft.com");
//! assert!(region.voices_list_url().contains("cognitiveservices/voices/list"));
//! ```
//!
//! See: <https://learn.microsoft.com/en-us/azure/ai-services/speech-service/regions>

use std::fmt;

/// API version of the fast transcription locales endpoint.
pub const FAST_TRANSCRIPTION_API_VERSION: &str = "2024-11-15";

/// Azure Speech Service region.
///
/// Only the regions used in the generated documentation are named; any other
/// region identifier is carried through `Custom`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AzureRegion {
    #[default]
    EastUS,
    WestUS,
    WestEurope,
    SoutheastAsia,
    JapanEast,
    Custom(String),
}

/// Named regions, for identifier lookup.
const NAMED_REGIONS: [AzureRegion; 5] = [
    AzureRegion::EastUS,
    AzureRegion::WestUS,
    AzureRegion::WestEurope,
    AzureRegion::SoutheastAsia,
    AzureRegion::JapanEast,
];

impl AzureRegion {
    /// Region identifier used in Azure hostnames.
    ///
    /// ```rust
    /// use speech_locales::core::providers::azure::AzureRegion;
    ///
    /// assert_eq!(AzureRegion::EastUS.as_str(), "eastus");
    /// assert_eq!(AzureRegion::Custom("centralindia".into()).as_str(), "centralindia");
    /// ```
    pub fn as_str(&self) -> &str {
        match self {
            Self::EastUS => "eastus",
            Self::WestUS => "westus",
            Self::WestEurope => "westeurope",
            Self::SoutheastAsia => "southeastasia",
            Self::JapanEast => "japaneast",
            Self::Custom(region) => region,
        }
    }

    /// Speech to text host: `<region>.stt.speech.microsoft.com`
    #[inline]
    pub fn stt_hostname(&self) -> String {
        format!("{}.stt.speech.microsoft.com", self.as_str())
    }

    /// Text to speech host: `<region>.tts.speech.microsoft.com`
    #[inline]
    pub fn tts_hostname(&self) -> String {
        format!("{}.tts.speech.microsoft.com", self.as_str())
    }

    /// Cognitive Services REST host: `<region>.api.cognitive.microsoft.com`
    #[inline]
    pub fn cognitive_hostname(&self) -> String {
        format!("{}.api.cognitive.microsoft.com", self.as_str())
    }

    /// Speech to text recognition languages, detailed format.
    ///
    /// ```rust
    /// use speech_locales::core::providers::azure::AzureRegion;
    ///
    /// assert_eq!(
    ///     AzureRegion::EastUS.stt_languages_url(),
    ///     "https://eastus.stt.speech.microsoft.com/api/v1.0/languages/recognition?alt=json&format=detailed"
    /// );
    /// ```
    pub fn stt_languages_url(&self) -> String {
        format!(
            "https://{}/api/v1.0/languages/recognition?alt=json&format=detailed",
            self.stt_hostname()
        )
    }

    /// Locales accepted by fast transcription.
    pub fn fast_transcription_locales_url(&self) -> String {
        format!(
            "https://{}/speechtotext/transcriptions/locales?api-version={}",
            self.cognitive_hostname(),
            FAST_TRANSCRIPTION_API_VERSION
        )
    }

    /// First page of the custom speech base model listing.
    ///
    /// Later pages are reached through the `@nextLink` of each response.
    pub fn base_models_url(&self) -> String {
        format!(
            "https://{}/speechtotext/v3.2/models/base?alt=json",
            self.cognitive_hostname()
        )
    }

    /// Text to speech voices list.
    ///
    /// ```rust
    /// use speech_locales::core::providers::azure::AzureRegion;
    ///
    /// assert_eq!(
    ///     AzureRegion::WestEurope.voices_list_url(),
    ///     "https://westeurope.tts.speech.microsoft.com/cognitiveservices/voices/list?alt=json"
    /// );
    /// ```
    pub fn voices_list_url(&self) -> String {
        format!(
            "https://{}/cognitiveservices/voices/list?alt=json",
            self.tts_hostname()
        )
    }
}

impl fmt::Display for AzureRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for AzureRegion {
    type Err = std::convert::Infallible;

    /// Named regions match case-insensitively; anything else is `Custom`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let region = NAMED_REGIONS
            .into_iter()
            .find(|region| region.as_str().eq_ignore_ascii_case(s))
            .unwrap_or_else(|| Self::Custom(s.to_string()));
        Ok(region)
    }
}
