//! Fixed lookup tables used when normalizing locales and annotating rows.

/// Chinese dialect accent segments kept lower-case in locale codes
/// (`zh-CN-liaoning`, `zh-CN-sichuan`).
pub const CHINESE_ACCENTS: &[&str] = &["shandong", "liaoning", "sichuan", "henan", "shaanxi"];

/// Display labels that replace whatever upstream reports for these locales.
/// Checked in order; the first key contained in the locale wins.
pub const LANGUAGE_OVERRIDES: &[(&str, &str)] = &[
    ("ca-ES", "Catalan"),
    ("tr-TR", "Turkish (Türkiye)"),
    ("sw-KE", "Kiswahili (Kenya)"),
    ("sw-TZ", "Kiswahili (Tanzania)"),
    ("zu-ZA", "isiZulu (South Africa)"),
];

/// Locales where custom speech phrase lists are available.
pub const PHRASE_LIST_LOCALES: &[&str] = &[
    "ar-SA", "de-CH", "de-DE", "en-AU", "en-CA", "en-GB", "en-IE", "en-IN", "en-US", "en-ZA",
    "es-ES", "es-MX", "es-US", "fr-CA", "fr-FR", "hi-IN", "id-ID", "it-IT", "ja-JP", "ko-KR",
    "nl-NL", "pl-PL", "pt-BR", "pt-PT", "ru-RU", "sv-SE", "th-TH", "vi-VN", "zh-CN", "zh-HK",
    "zh-TW",
];

/// Locales whose voices emit viseme events.
pub const VISEME_LOCALES: &[&str] = &[
    "ar-AE", "ar-BH", "ar-DZ", "ar-EG", "ar-IQ", "ar-JO", "ar-KW", "ar-LB", "ar-LY", "ar-MA",
    "ar-OM", "ar-QA", "ar-SA", "ar-SY", "ar-TN", "ar-YE", "bg-BG", "ca-ES", "cs-CZ", "da-DK",
    "de-AT", "de-CH", "de-DE", "el-GR", "en-AU", "en-CA", "en-GB", "en-HK", "en-IE", "en-IN",
    "en-KE", "en-NG", "en-NZ", "en-PH", "en-SG", "en-TZ", "en-US", "en-ZA", "es-AR", "es-BO",
    "es-CL", "es-CO", "es-CR", "es-CU", "es-DO", "es-EC", "es-ES", "es-GQ", "es-GT", "es-HN",
    "es-MX", "es-NI", "es-PA", "es-PE", "es-PR", "es-PY", "es-SV", "es-US", "es-UY", "es-VE",
    "fi-FI", "fr-BE", "fr-CA", "fr-CH", "fr-FR", "gu-IN", "he-IL", "hi-IN", "hr-HR", "hu-HU",
    "id-ID", "it-IT", "ja-JP", "ko-KR", "mr-IN", "ms-MY", "nb-NO", "nl-BE", "nl-NL", "pl-PL",
    "pt-BR", "pt-PT", "ro-RO", "ru-RU", "sk-SK", "sl-SI", "sv-SE", "sw-TZ", "ta-IN", "ta-LK",
    "ta-MY", "ta-SG", "te-IN", "th-TH", "tr-TR", "uk-UA", "ur-IN", "ur-PK", "vi-VN", "zh-CN",
    "zh-HK", "zh-TW",
];

/// Voices that speak as a child.
pub const CHILD_VOICES: &[&str] = &[
    "de-DE-GiselaNeural",
    "en-GB-MaisieNeural",
    "en-US-AnaNeural",
    "es-MX-MarinaNeural",
    "fr-FR-EloiseNeural",
    "it-IT-PierinaNeural",
    "pt-BR-LeticiaNeural",
    "zh-CN-XiaoshuangNeural",
    "zh-CN-XiaoyouNeural",
];

/// Indian-region locales whose preview voices carry a dedicated footnote.
pub const INDIAN_REGION_LOCALES: &[&str] = &["as-IN", "or-IN", "pa-IN"];

pub fn is_chinese_accent(segment: &str) -> bool {
    CHINESE_ACCENTS
        .iter()
        .any(|accent| accent.eq_ignore_ascii_case(segment))
}

pub fn supports_phrase_list(locale: &str) -> bool {
    PHRASE_LIST_LOCALES.contains(&locale)
}

pub fn supports_visemes(locale: &str) -> bool {
    VISEME_LOCALES.contains(&locale)
}

pub fn is_child_voice(short_name: &str) -> bool {
    CHILD_VOICES.contains(&short_name)
}

pub fn is_indian_region(locale: &str) -> bool {
    INDIAN_REGION_LOCALES.contains(&locale)
}

/// Human readable name for a custom speech adaptation data type.
///
/// Unknown codes pass through unchanged.
pub fn adaptation_label(code: &str) -> &str {
    match code {
        "Acoustic" => "Audio + human-labeled transcript",
        "AudioFiles" => "Audio",
        "Language" => "Plain text",
        "Pronunciation" => "Pronunciation",
        "LanguageMarkdown" => "Structured text",
        "OutputFormatting" => "Output format",
        other => other,
    }
}
