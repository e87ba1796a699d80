use super::AzureRegion;

/// Full URLs of the four metadata endpoints.
///
/// Normally derived from a region; individual URLs may be overridden to point
/// at a sovereign cloud or a mock server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpeechEndpoints {
    pub stt_languages: String,
    pub fast_transcription_locales: String,
    pub base_models: String,
    pub voices_list: String,
}

/// Optional per-endpoint URL overrides.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EndpointOverrides {
    pub stt_languages: Option<String>,
    pub fast_transcription_locales: Option<String>,
    pub base_models: Option<String>,
    pub voices_list: Option<String>,
}

impl SpeechEndpoints {
    pub fn for_region(region: &AzureRegion) -> Self {
        Self {
            stt_languages: region.stt_languages_url(),
            fast_transcription_locales: region.fast_transcription_locales_url(),
            base_models: region.base_models_url(),
            voices_list: region.voices_list_url(),
        }
    }

    pub fn with_overrides(mut self, overrides: &EndpointOverrides) -> Self {
        if let Some(url) = &overrides.stt_languages {
            self.stt_languages = url.clone();
        }
        if let Some(url) = &overrides.fast_transcription_locales {
            self.fast_transcription_locales = url.clone();
        }
        if let Some(url) = &overrides.base_models {
            self.base_models = url.clone();
        }
        if let Some(url) = &overrides.voices_list {
            self.voices_list = url.clone();
        }
        self
    }
}
