use std::collections::{BTreeMap, BTreeSet};

use super::{NOT_SUPPORTED, code, table_header, table_row};
use crate::core::annotate::custom_speech_cells;
use crate::core::locale::LocaleTable;
use crate::core::models::BaseModel;

const HEADER: &str =
    "| Locale (BCP-47) | Language | Fast transcription support | Custom speech support |";

/// Speech to text table.
///
/// `fast_transcription` holds normalized locales of the fast transcription
/// "Transcribe" list.
pub fn build_stt_table(
    stt_locales: &LocaleTable,
    fast_transcription: &BTreeSet<String>,
    base_models: &[BaseModel],
) -> Vec<String> {
    let customizations: BTreeMap<String, String> = custom_speech_cells(base_models);

    let mut lines = table_header(HEADER, 4);
    for (locale, language) in stt_locales {
        let fast = if fast_transcription.contains(locale) {
            "Yes"
        } else {
            "No"
        };
        let custom = customizations
            .get(locale)
            .map(String::as_str)
            .filter(|cell| !cell.is_empty())
            .unwrap_or(NOT_SUPPORTED);

        lines.push(table_row(&[code(locale).as_str(), language.as_str(), fast, custom]));
    }

    lines
}
