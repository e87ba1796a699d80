use std::collections::BTreeMap;

use super::{LINE_BREAK, NOT_SUPPORTED, code, table_header, table_row};
use crate::core::annotate::{display_gender, footnote_suffix, voice_footnotes};
use crate::core::locale::{LocaleTable, combine, extract_tts_locales};
use crate::core::models::TtsVoice;

const HEADER: &str = "| Locale (BCP-47) | Language | Text to speech voices |";

/// One voice as listed in the table: `` `name`<sup>1,3</sup> (Female) ``.
pub fn voice_entry(voice: &TtsVoice) -> String {
    format!(
        "{}{} ({})",
        code(&voice.short_name),
        footnote_suffix(&voice_footnotes(voice)),
        display_gender(voice)
    )
}

/// Voice cells per locale, each listing voices in fetch order.
pub fn voice_cells(voices: &[TtsVoice]) -> BTreeMap<&str, String> {
    let mut by_locale: BTreeMap<&str, Vec<&TtsVoice>> = BTreeMap::new();
    for voice in voices
        .iter()
        .filter(|v| !v.locale.is_empty() && !v.short_name.is_empty())
    {
        by_locale.entry(voice.locale.as_str()).or_default().push(voice);
    }

    by_locale
        .into_iter()
        .map(|(locale, mut voices)| {
            voices.sort_by_key(|v| v.order);
            let entries: Vec<String> = voices.into_iter().map(voice_entry).collect();
            (locale, entries.join(LINE_BREAK))
        })
        .collect()
}

/// Text to speech table: one row per locale known to either source.
///
/// Voice locale names take priority over speech to text labels. Locales
/// without voices show "Not supported".
pub fn build_tts_table(voices: &[TtsVoice], stt_locales: &LocaleTable) -> Vec<String> {
    let labels = combine(&extract_tts_locales(voices), stt_locales);
    let cells = voice_cells(voices);

    let mut lines = table_header(HEADER, 3);
    for (locale, language) in &labels {
        let voices = cells
            .get(locale.as_str())
            .map(String::as_str)
            .unwrap_or(NOT_SUPPORTED);

        lines.push(table_row(&[code(locale).as_str(), language.as_str(), voices]));
    }

    lines
}
