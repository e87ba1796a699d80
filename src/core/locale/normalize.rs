//! Canonical display forms for locale codes and language labels.

use super::tables::{LANGUAGE_OVERRIDES, is_chinese_accent};

/// Normalize the casing of a locale code.
///
/// The language segment is kept as-is. Every following segment is upper-cased,
/// except Chinese dialect accents which are lower-cased:
///
/// ```rust
/// use speech_locales::core::locale::normalize_locale;
///
/// assert_eq!(normalize_locale("fr-fr"), "fr-FR");
/// assert_eq!(normalize_locale("zh-cn-LIAONING"), "zh-CN-liaoning");
/// ```
pub fn normalize_locale(raw: &str) -> String {
    let mut segments = raw.split('-');
    let mut locale = segments.next().unwrap_or_default().to_string();

    for segment in segments {
        locale.push('-');
        if is_chinese_accent(segment) {
            locale.push_str(&segment.to_lowercase());
        } else {
            locale.push_str(&segment.to_uppercase());
        }
    }

    locale
}

/// Replace the upstream label for locales with a fixed display name.
///
/// Matching is by substring containment on the locale, so `tr-TR-x` also
/// picks up the `tr-TR` label.
pub fn normalize_language(locale: &str, label: &str) -> String {
    LANGUAGE_OVERRIDES
        .iter()
        .find(|(key, _)| locale.contains(key))
        .map(|(_, name)| (*name).to_string())
        .unwrap_or_else(|| label.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_locale_region_upper() {
        assert_eq!(normalize_locale("fr-fr"), "fr-FR");
        assert_eq!(normalize_locale("en-US"), "en-US");
        assert_eq!(normalize_locale("sr-latn-rs"), "sr-LATN-RS");
    }

    #[test]
    fn test_normalize_locale_keeps_language_segment() {
        assert_eq!(normalize_locale("EN-us"), "EN-US");
        assert_eq!(normalize_locale("fil"), "fil");
    }

    #[test]
    fn test_normalize_locale_chinese_accents() {
        assert_eq!(normalize_locale("zh-cn-liaoning"), "zh-CN-liaoning");
        assert_eq!(normalize_locale("zh-CN-SICHUAN"), "zh-CN-sichuan");
        assert_eq!(normalize_locale("zh-cn-Shaanxi"), "zh-CN-shaanxi");
    }

    #[test]
    fn test_normalize_locale_empty_segments() {
        assert_eq!(normalize_locale(""), "");
        assert_eq!(normalize_locale("en-"), "en-");
        assert_eq!(normalize_locale("-us"), "-US");
    }

    #[test]
    fn test_normalize_locale_idempotent() {
        for raw in ["zh-cn-henan", "de-ch", "wuu-cn", ""] {
            let once = normalize_locale(raw);
            assert_eq!(normalize_locale(&once), once);
        }
    }

    #[test]
    fn test_normalize_language_overrides() {
        assert_eq!(normalize_language("ca-ES", "Catalan (Spain)"), "Catalan");
        assert_eq!(normalize_language("tr-TR-whatever", "Turkish"), "Turkish (Türkiye)");
        assert_eq!(normalize_language("sw-KE", "Swahili"), "Kiswahili (Kenya)");
        assert_eq!(normalize_language("sw-TZ", "Swahili"), "Kiswahili (Tanzania)");
        assert_eq!(normalize_language("zu-ZA", "Zulu"), "isiZulu (South Africa)");
    }

    #[test]
    fn test_normalize_language_passthrough() {
        assert_eq!(
            normalize_language("en-US", "English (United States)"),
            "English (United States)"
        );
        assert_eq!(normalize_language("", ""), "");
    }

    #[test]
    fn test_normalize_language_matching_is_case_sensitive() {
        // keys are matched exactly as written
        assert_eq!(normalize_language("tr-tr", "Turkish"), "Turkish");
    }
}
