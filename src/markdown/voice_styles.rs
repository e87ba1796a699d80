use super::{NOT_SUPPORTED, code, table_header, table_row};
use crate::core::models::TtsVoice;

const HEADER: &str = "| Voice | Styles |Roles |";

/// Backtick-quoted, comma separated list, or "Not supported".
fn list_cell(items: Option<&[String]>) -> String {
    match items {
        Some(items) => items
            .iter()
            .map(|item| code(item))
            .collect::<Vec<_>>()
            .join(", "),
        None => NOT_SUPPORTED.to_string(),
    }
}

/// Voice styles and roles table, for voices with at least one style or role.
pub fn build_voice_styles_table(voices: &[TtsVoice]) -> Vec<String> {
    let mut expressive: Vec<&TtsVoice> = voices
        .iter()
        .filter(|v| !v.short_name.is_empty())
        .filter(|v| v.styles().is_some() || v.roles().is_some())
        .collect();
    expressive.sort_by(|a, b| a.short_name.cmp(&b.short_name));

    let mut lines = table_header(HEADER, 3);
    for voice in expressive {
        lines.push(table_row(&[
            code(&voice.short_name),
            list_cell(voice.styles()),
            list_cell(voice.roles()),
        ]));
    }

    lines
}
