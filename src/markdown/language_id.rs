use std::collections::BTreeSet;

use super::{LINE_BREAK, code, table_header, table_row};
use crate::core::locale::LocaleTable;

const HEADER: &str = "| Language | Locales (BCP-47) |";

/// Language name without its parenthetical qualifier:
/// `English (United States)` → `English`.
pub fn base_language(label: &str) -> &str {
    label.split('(').next().unwrap_or_default().trim()
}

/// Language identification table: one row per base language, listing every
/// locale whose label contains that language name.
///
/// Matching is by substring, so a language whose name is contained in another
/// label (for example `Malay` in `Malayalam (India)`) lists both locales.
/// Labels without a language name are left out, since an empty name would
/// match every locale.
pub fn build_language_id_table(stt_locales: &LocaleTable) -> Vec<String> {
    let languages: BTreeSet<&str> = stt_locales
        .values()
        .map(|label| base_language(label))
        .filter(|language| !language.is_empty())
        .collect();

    let mut lines = table_header(HEADER, 2);
    for language in languages {
        let locales: Vec<String> = stt_locales
            .iter()
            .filter(|(_, label)| label.contains(language))
            .map(|(locale, _)| code(locale))
            .collect();

        lines.push(table_row(&[language, locales.join(LINE_BREAK).as_str()]));
    }

    lines
}
