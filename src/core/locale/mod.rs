//! Locale normalization and cross-source locale tables.

pub mod merge;
pub mod normalize;
pub mod tables;

pub use merge::{LocaleTable, combine, extract_stt_locales, extract_tts_locales};
pub use normalize::{normalize_language, normalize_locale};
