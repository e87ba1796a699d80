//! Locale → label tables built from the individual metadata sources.
//!
//! Tables are `BTreeMap`s keyed by the normalized locale, so iteration is
//! always in ascending byte-wise order of the locale code.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use super::normalize::{normalize_language, normalize_locale};
use crate::core::models::{SttLanguage, TtsVoice};
use crate::errors::{ReportError, ReportResult};

/// Ordered mapping from normalized locale code to display label.
pub type LocaleTable = BTreeMap<String, String>;

/// Build the locale table for speech to text languages.
///
/// Upstream lists every locale once; a second record normalizing to the same
/// code is an error. Records without a locale are skipped.
pub fn extract_stt_locales(languages: &[SttLanguage]) -> ReportResult<LocaleTable> {
    let mut locales = LocaleTable::new();

    for language in languages {
        if language.name.is_empty() {
            continue;
        }

        match locales.entry(normalize_locale(&language.name)) {
            Entry::Occupied(entry) => {
                return Err(ReportError::DuplicateLocale(entry.key().clone()));
            }
            Entry::Vacant(entry) => {
                entry.insert(normalize_language(&language.name, &language.english_name));
            }
        }
    }

    Ok(locales)
}

/// Build the locale table for text to speech voices.
///
/// Many voices share a locale; the first voice seen decides the label.
pub fn extract_tts_locales(voices: &[TtsVoice]) -> LocaleTable {
    let mut locales = LocaleTable::new();

    for voice in voices.iter().filter(|v| !v.locale.is_empty()) {
        locales
            .entry(normalize_locale(&voice.locale))
            .or_insert_with(|| normalize_language(&voice.locale, &voice.locale_name));
    }

    locales
}

/// Union of two locale tables. Labels from `primary` win on conflict.
pub fn combine(primary: &LocaleTable, secondary: &LocaleTable) -> LocaleTable {
    let mut combined = primary.clone();
    for (locale, label) in secondary {
        combined
            .entry(locale.clone())
            .or_insert_with(|| label.clone());
    }
    combined
}
