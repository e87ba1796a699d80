//! Markdown reference tables.
//!
//! Every builder returns the lines of one table: a header row, a separator
//! row, then one row per entity. Rows are in ascending locale (or voice name)
//! order.

pub mod language_id;
pub mod stt;
pub mod tts;
pub mod voice_styles;

/// Placeholder for a cell with nothing to show.
pub const NOT_SUPPORTED: &str = "Not supported";

/// Separator between entries listed inside one cell.
pub const LINE_BREAK: &str = "<br/>";

/// The tables this tool produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReportTable {
    Stt,
    LanguageIdentification,
    Tts,
    VoiceStylesAndRoles,
}

impl ReportTable {
    pub const ALL: [ReportTable; 4] = [
        ReportTable::LanguageIdentification,
        ReportTable::Stt,
        ReportTable::Tts,
        ReportTable::VoiceStylesAndRoles,
    ];

    /// Output file name.
    pub fn file_name(self) -> &'static str {
        match self {
            Self::Stt => "stt.md",
            Self::LanguageIdentification => "language-identification.md",
            Self::Tts => "tts.md",
            Self::VoiceStylesAndRoles => "voice-styles-and-roles.md",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Stt => "speech to text",
            Self::LanguageIdentification => "language identification",
            Self::Tts => "text to speech",
            Self::VoiceStylesAndRoles => "voice styles and roles",
        }
    }
}

/// Header and separator lines for a table with `columns` columns.
fn table_header(header: &str, columns: usize) -> Vec<String> {
    let separator = format!("|{}", " ----- |".repeat(columns));
    vec![header.to_string(), separator]
}

/// A table row: `| a | b | c |`.
fn table_row<S: AsRef<str>>(cells: &[S]) -> String {
    let cells: Vec<&str> = cells.iter().map(AsRef::as_ref).collect();
    format!("| {} |", cells.join(" | "))
}

/// Wrap a locale code or voice name in backticks.
fn code(text: &str) -> String {
    format!("`{text}`")
}
