//! In-place enrichment applied to freshly fetched records.
//!
//! Each function takes ownership of a fetched batch and returns it sorted and
//! normalized, ready for table building.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};

use super::locale::{normalize_language, normalize_locale};
use super::models::{BaseModel, FastTranscriptionLocales, SttLanguage, TtsVoice};

/// Sort languages by raw locale, then normalize locale and label.
pub fn prepare_stt_languages(mut languages: Vec<SttLanguage>) -> Vec<SttLanguage> {
    languages.sort_by(|a, b| a.name.cmp(&b.name));

    for language in &mut languages {
        language.name = normalize_locale(&language.name);
        language.english_name = normalize_language(&language.name, &language.english_name);
    }

    languages
}

/// Keep models that can still be adapted after `now`, sorted by locale.
pub fn prepare_base_models(models: Vec<BaseModel>, now: DateTime<Utc>) -> Vec<BaseModel> {
    let mut models: Vec<BaseModel> = models
        .into_iter()
        .filter(|model| match model.adaptation_deadline() {
            Some(deadline) => deadline > now,
            None => {
                tracing::warn!(
                    locale = %model.locale,
                    model = model.self_link.as_deref().unwrap_or_default(),
                    "Skipping base model without adaptation deprecation date"
                );
                false
            }
        })
        .collect();

    models.sort_by(|a, b| a.locale.cmp(&b.locale));
    for model in &mut models {
        model.locale = normalize_locale(&model.locale);
    }

    models
}

/// Keep GA and preview voices, number them, then normalize and sort by locale.
///
/// `order` is the position among the kept voices and survives the final
/// stable sort, so it still reflects the upstream order within a locale.
pub fn prepare_tts_voices(voices: Vec<TtsVoice>) -> Vec<TtsVoice> {
    let mut voices: Vec<TtsVoice> = voices
        .into_iter()
        .filter(|v| v.status.contains("GA") || v.status.contains("Preview"))
        .collect();

    for (order, voice) in voices.iter_mut().enumerate() {
        voice.order = order;
        voice.locale = normalize_locale(&voice.locale);
        voice.locale_name = normalize_language(&voice.locale, &voice.locale_name);
        if let Some(styles) = voice.style_list.as_mut() {
            styles.sort();
        }
        if let Some(roles) = voice.role_play_list.as_mut() {
            roles.sort();
        }
    }

    voices.sort_by(|a, b| a.locale.cmp(&b.locale));
    voices
}

/// Normalized locales that fast transcription can transcribe.
pub fn fast_transcription_set(locales: &FastTranscriptionLocales) -> BTreeSet<String> {
    locales
        .transcribe
        .iter()
        .flatten()
        .map(|locale| normalize_locale(locale))
        .collect()
}
