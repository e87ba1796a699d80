use std::time::Duration;

use chrono::{DateTime, Utc};
use futures::{Stream, TryStreamExt, stream};
use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::config::ReportConfig;
use crate::core::models::{
    BaseModel, BaseModelPage, FastTranscriptionLocales, SttLanguage, TtsVoice,
};
use crate::core::prepare::{prepare_base_models, prepare_stt_languages, prepare_tts_voices};
use crate::core::providers::azure::{SpeechEndpoints, build_default_headers};
use crate::errors::{ReportError, ReportResult};

/// Read-only client for the speech service metadata endpoints.
#[derive(Clone)]
pub struct SpeechServiceClient {
    client: Client,
    endpoints: SpeechEndpoints,
}

impl std::fmt::Debug for SpeechServiceClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpeechServiceClient")
            .field("endpoints", &self.endpoints)
            .field("subscription_key", &"<redacted>")
            .finish()
    }
}

impl SpeechServiceClient {
    /// Create a client from report configuration.
    ///
    /// # Errors
    /// Returns [`ReportError::Config`] if the key is not a valid header value
    /// or the HTTP client cannot be built.
    pub fn from_config(config: &ReportConfig) -> ReportResult<Self> {
        Self::new(
            &config.speech_key,
            config.endpoints(),
            Duration::from_secs(config.timeout_seconds),
        )
    }

    pub fn new(
        subscription_key: &str,
        endpoints: SpeechEndpoints,
        timeout: Duration,
    ) -> ReportResult<Self> {
        let client = Client::builder()
            .default_headers(build_default_headers(subscription_key)?)
            .timeout(timeout)
            .build()
            .map_err(|e| ReportError::Config(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { client, endpoints })
    }

    /// Speech to text languages, sorted and normalized.
    pub async fn get_stt_languages(&self) -> ReportResult<Vec<SttLanguage>> {
        let languages: Vec<SttLanguage> = self.get_json(&self.endpoints.stt_languages).await?;
        tracing::debug!(count = languages.len(), "Fetched speech to text languages");
        Ok(prepare_stt_languages(languages))
    }

    /// Raw fast transcription locale lists.
    pub async fn get_fast_transcription_locales(&self) -> ReportResult<FastTranscriptionLocales> {
        self.get_json(&self.endpoints.fast_transcription_locales)
            .await
    }

    /// Lazily fetch base model pages, following `@nextLink` until it is empty.
    ///
    /// Nothing is requested until the stream is polled. The first failed page
    /// ends the stream with that error.
    pub fn base_model_pages(&self) -> impl Stream<Item = ReportResult<BaseModelPage>> + '_ {
        let first = Some(self.endpoints.base_models.clone());

        stream::try_unfold(first, move |cursor| async move {
            let Some(url) = cursor else {
                return Ok::<_, ReportError>(None);
            };

            let page: BaseModelPage = self.get_json(&url).await?;
            let next = page.next_link.clone().filter(|link| !link.is_empty());
            tracing::debug!(
                models = page.values.as_ref().map_or(0, Vec::len),
                has_next = next.is_some(),
                "Fetched base model page"
            );

            Ok(Some((page, next)))
        })
    }

    /// Base models still open for adaptation at `now`, sorted and normalized.
    pub async fn get_custom_speech_base_models(
        &self,
        now: DateTime<Utc>,
    ) -> ReportResult<Vec<BaseModel>> {
        let pages: Vec<BaseModelPage> = self.base_model_pages().try_collect().await?;
        let models: Vec<BaseModel> = pages
            .into_iter()
            .flat_map(|page| page.values.unwrap_or_default())
            .collect();

        tracing::debug!(count = models.len(), "Fetched base models");
        Ok(prepare_base_models(models, now))
    }

    /// GA and preview voices, numbered, normalized and sorted by locale.
    pub async fn get_tts_voices(&self) -> ReportResult<Vec<TtsVoice>> {
        let voices: Vec<TtsVoice> = self.get_json(&self.endpoints.voices_list).await?;
        tracing::debug!(count = voices.len(), "Fetched text to speech voices");
        Ok(prepare_tts_voices(voices))
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> ReportResult<T> {
        tracing::debug!(url, "GET");

        let response = self.client.get(url).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(ReportError::api_status(status, url, &body));
        }

        serde_json::from_str(&body).map_err(|source| ReportError::Json {
            url: url.to_string(),
            source,
        })
    }
}
