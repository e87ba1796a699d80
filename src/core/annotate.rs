//! Per-locale and per-voice supplementary markers rendered into the tables.

use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet};

use super::locale::tables::{
    adaptation_label, is_child_voice, is_indian_region, supports_phrase_list, supports_visemes,
};
use super::models::{BaseModel, TtsVoice};

/// Separator between entries of a custom speech support cell.
pub const CUSTOMIZATION_SEPARATOR: &str = "<br/><br/>";

/// Entry appended for locales that accept phrase lists.
pub const PHRASE_LIST_LABEL: &str = "Phrase list";

/// Customization options per locale, rendered as table cells.
///
/// Adaptation types of every model at a locale are deduplicated, sorted,
/// mapped to display names, followed by "Phrase list" where supported.
/// Models with an empty locale are ignored. A locale whose models report
/// nothing maps to an empty string.
pub fn custom_speech_cells(models: &[BaseModel]) -> BTreeMap<String, String> {
    let mut adaptations_by_locale: BTreeMap<&str, BTreeSet<&str>> = BTreeMap::new();

    for model in models.iter().filter(|m| !m.locale.is_empty()) {
        adaptations_by_locale
            .entry(model.locale.as_str())
            .or_default()
            .extend(model.supported_adaptations().iter().map(String::as_str));
    }

    adaptations_by_locale
        .into_iter()
        .map(|(locale, adaptations)| {
            let mut entries: Vec<&str> = adaptations.into_iter().map(adaptation_label).collect();
            if supports_phrase_list(locale) {
                entries.push(PHRASE_LIST_LABEL);
            }
            (locale.to_string(), entries.join(CUSTOMIZATION_SEPARATOR))
        })
        .collect()
}

/// Footnotes attached to a voice in the text to speech table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum VoiceFootnote {
    /// Voice is in public preview
    Preview,
    /// Voice is in preview in an Indian-region locale
    PreviewIndianRegion,
    /// Locale has no viseme support
    NoVisemes,
    /// Voice speaks multiple languages
    Multilingual,
}

impl VoiceFootnote {
    /// Footnote number as printed in the superscript.
    pub fn marker(self) -> u8 {
        match self {
            Self::Preview => 1,
            Self::PreviewIndianRegion => 2,
            Self::NoVisemes => 3,
            Self::Multilingual => 4,
        }
    }
}

/// Footnotes for a voice, in marker order.
pub fn voice_footnotes(voice: &TtsVoice) -> Vec<VoiceFootnote> {
    let mut footnotes = Vec::with_capacity(3);

    if voice.is_preview() {
        if is_indian_region(&voice.locale) {
            footnotes.push(VoiceFootnote::PreviewIndianRegion);
        } else {
            footnotes.push(VoiceFootnote::Preview);
        }
    }
    if !supports_visemes(&voice.locale) {
        footnotes.push(VoiceFootnote::NoVisemes);
    }
    if voice.short_name.contains("Multilingual") {
        footnotes.push(VoiceFootnote::Multilingual);
    }

    footnotes
}

/// Render footnotes as a `<sup>1,3</sup>` suffix, empty when there are none.
pub fn footnote_suffix(footnotes: &[VoiceFootnote]) -> String {
    if footnotes.is_empty() {
        return String::new();
    }

    let markers: Vec<String> = footnotes.iter().map(|f| f.marker().to_string()).collect();
    format!("<sup>{}</sup>", markers.join(","))
}

/// Gender as displayed in the tables, with ", Child" for child voices.
pub fn display_gender(voice: &TtsVoice) -> Cow<'_, str> {
    if is_child_voice(&voice.short_name) {
        Cow::Owned(format!("{}, Child", voice.gender))
    } else {
        Cow::Borrowed(voice.gender.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::{ModelFeatures, ModelProperties};

    fn model(locale: &str, adaptations: &[&str]) -> BaseModel {
        BaseModel {
            locale: locale.to_string(),
            properties: Some(ModelProperties {
                features: Some(ModelFeatures {
                    supports_adaptations_with: Some(
                        adaptations.iter().map(|a| a.to_string()).collect(),
                    ),
                    supported_output_formats: None,
                }),
                deprecation_dates: None,
            }),
            ..Default::default()
        }
    }

    fn voice(short_name: &str, locale: &str, status: &str) -> TtsVoice {
        TtsVoice {
            short_name: short_name.to_string(),
            locale: locale.to_string(),
            status: status.to_string(),
            gender: "Female".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_custom_speech_cells_dedup_sort_and_label() {
        let cells = custom_speech_cells(&[
            model("de-DE", &["Language", "Acoustic"]),
            model("de-DE", &["Pronunciation", "Language", "LanguageMarkdown"]),
        ]);

        assert_eq!(
            cells["de-DE"],
            "Audio + human-labeled transcript<br/><br/>Plain text<br/><br/>Structured text<br/><br/>Pronunciation<br/><br/>Phrase list"
        );
    }

    #[test]
    fn test_custom_speech_cells_phrase_list_only_where_supported() {
        let cells = custom_speech_cells(&[
            model("en-US", &["Language"]),
            model("af-ZA", &["Language", "Custom"]),
        ]);

        assert_eq!(cells["en-US"], "Plain text<br/><br/>Phrase list");
        assert_eq!(cells["af-ZA"], "Custom<br/><br/>Plain text");
        assert!(!cells["af-ZA"].contains(PHRASE_LIST_LABEL));
    }

    #[test]
    fn test_custom_speech_cells_empty_adaptations() {
        let cells = custom_speech_cells(&[
            BaseModel {
                locale: "af-ZA".to_string(),
                ..Default::default()
            },
            BaseModel {
                locale: "en-GB".to_string(),
                ..Default::default()
            },
            BaseModel::default(),
        ]);

        assert_eq!(cells.len(), 2);
        assert_eq!(cells["af-ZA"], "");
        assert_eq!(cells["en-GB"], PHRASE_LIST_LABEL);
    }

    #[test]
    fn test_footnotes_preview_general() {
        let footnotes = voice_footnotes(&voice("en-US-AvaNeural", "en-US", "Preview"));
        assert_eq!(footnotes, vec![VoiceFootnote::Preview]);
    }

    #[test]
    fn test_footnotes_preview_indian_region() {
        let footnotes = voice_footnotes(&voice("pa-IN-OjasNeural", "pa-IN", "Preview"));
        assert_eq!(
            footnotes,
            vec![VoiceFootnote::PreviewIndianRegion, VoiceFootnote::NoVisemes]
        );
        assert!(!footnotes.contains(&VoiceFootnote::Preview));
    }

    #[test]
    fn test_footnotes_ga_without_visemes_multilingual() {
        let footnotes = voice_footnotes(&voice("af-ZA-MultilingualNeural", "af-ZA", "GA"));
        assert_eq!(
            footnotes,
            vec![VoiceFootnote::NoVisemes, VoiceFootnote::Multilingual]
        );
        assert_eq!(footnote_suffix(&footnotes), "<sup>3,4</sup>");
    }

    #[test]
    fn test_footnote_suffix_empty() {
        let footnotes = voice_footnotes(&voice("en-US-AriaNeural", "en-US", "GA"));
        assert!(footnotes.is_empty());
        assert_eq!(footnote_suffix(&footnotes), "");
    }

    #[test]
    fn test_footnote_markers() {
        assert_eq!(VoiceFootnote::Preview.marker(), 1);
        assert_eq!(VoiceFootnote::PreviewIndianRegion.marker(), 2);
        assert_eq!(VoiceFootnote::NoVisemes.marker(), 3);
        assert_eq!(VoiceFootnote::Multilingual.marker(), 4);
    }

    #[test]
    fn test_display_gender_child() {
        assert_eq!(
            display_gender(&voice("en-US-AnaNeural", "en-US", "GA")),
            "Female, Child"
        );
        assert_eq!(
            display_gender(&voice("en-US-AriaNeural", "en-US", "GA")),
            "Female"
        );
    }
}
