//! # Language detection
//!
//! Maps raw text to a [`LanguageCode`] with two stages: a Unicode script-range
//! table checked in fixed priority order, then a statistical fallback
//! (`whatlang`) for Latin-script languages. Detection never fails; anything
//! unknown, ambiguous, or shorter than [`MIN_TEXT_LEN`] yields the configured
//! default code.

use ostaad_core::LanguageCode;
use std::ops::RangeInclusive;

/// Inputs shorter than this (after trimming) skip detection entirely.
pub const MIN_TEXT_LEN: usize = 3;

/// Script ranges in priority order; the first range with a matching character
/// wins. The Arabic block maps to Urdu here (the dominant user base); Arabic
/// itself is still reachable through the statistical fallback and through an
/// explicit user preference.
const SCRIPT_RANGES: &[(LanguageCode, RangeInclusive<u32>)] = &[
    (LanguageCode::Hi, 0x0900..=0x097F), // Devanagari
    (LanguageCode::Ur, 0x0600..=0x06FF), // Arabic block
    (LanguageCode::Bn, 0x0980..=0x09FF), // Bengali
    (LanguageCode::Pa, 0x0A00..=0x0A7F), // Gurmukhi
    (LanguageCode::Gu, 0x0A80..=0x0AFF), // Gujarati
    (LanguageCode::Or, 0x0B00..=0x0B7F), // Oriya
    (LanguageCode::Ta, 0x0B80..=0x0BFF), // Tamil
    (LanguageCode::Te, 0x0C00..=0x0C7F), // Telugu
    (LanguageCode::Kn, 0x0C80..=0x0CFF), // Kannada
];

/// Detects the language of incoming messages.
#[derive(Debug, Clone)]
pub struct LanguageDetector {
    default: LanguageCode,
}

impl LanguageDetector {
    pub fn new(default: LanguageCode) -> Self {
        Self { default }
    }

    pub fn default_language(&self) -> LanguageCode {
        self.default
    }

    /// Returns the detected language code, or the configured default for
    /// empty, too-short, or unclassifiable input. Deterministic: `whatlang`
    /// has no random state.
    pub fn detect(&self, text: &str) -> LanguageCode {
        let trimmed = text.trim();
        if trimmed.chars().count() < MIN_TEXT_LEN {
            return self.default;
        }

        for (lang, range) in SCRIPT_RANGES {
            if trimmed.chars().any(|c| range.contains(&(c as u32))) {
                return *lang;
            }
        }

        whatlang::detect(trimmed)
            .and_then(|info| map_statistical(info.lang()))
            .unwrap_or(self.default)
    }
}

impl Default for LanguageDetector {
    fn default() -> Self {
        Self::new(LanguageCode::En)
    }
}

/// Maps a statistical-detector language to the supported set; `None` for
/// anything outside it (the caller degrades to the default).
fn map_statistical(lang: whatlang::Lang) -> Option<LanguageCode> {
    use whatlang::Lang;
    match lang {
        Lang::Eng => Some(LanguageCode::En),
        Lang::Hin => Some(LanguageCode::Hi),
        Lang::Urd => Some(LanguageCode::Ur),
        Lang::Ara => Some(LanguageCode::Ar),
        Lang::Ben => Some(LanguageCode::Bn),
        Lang::Mar => Some(LanguageCode::Mr),
        Lang::Tel => Some(LanguageCode::Te),
        Lang::Tam => Some(LanguageCode::Ta),
        Lang::Guj => Some(LanguageCode::Gu),
        Lang::Kan => Some(LanguageCode::Kn),
        Lang::Ori => Some(LanguageCode::Or),
        Lang::Pan => Some(LanguageCode::Pa),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detector() -> LanguageDetector {
        LanguageDetector::new(LanguageCode::En)
    }

    #[test]
    fn test_short_input_returns_default() {
        let d = detector();
        assert_eq!(d.detect(""), LanguageCode::En);
        assert_eq!(d.detect("   "), LanguageCode::En);
        assert_eq!(d.detect("ab"), LanguageCode::En);
    }

    #[test]
    fn test_short_input_honours_configured_default() {
        let d = LanguageDetector::new(LanguageCode::Hi);
        assert_eq!(d.detect("ab"), LanguageCode::Hi);
    }

    #[test]
    fn test_script_ranges_map_to_codes() {
        let d = detector();
        assert_eq!(d.detect("नमस्ते दुनिया"), LanguageCode::Hi);
        assert_eq!(d.detect("آپ کیسے ہیں"), LanguageCode::Ur);
        assert_eq!(d.detect("আপনি কেমন আছেন"), LanguageCode::Bn);
        assert_eq!(d.detect("ਤੁਸੀਂ ਕਿਵੇਂ ਹੋ"), LanguageCode::Pa);
        assert_eq!(d.detect("તમે કેમ છો"), LanguageCode::Gu);
        assert_eq!(d.detect("ଆପଣ କେମିତି ଅଛନ୍ତି"), LanguageCode::Or);
        assert_eq!(d.detect("நீங்கள் எப்படி இருக்கிறீர்கள்"), LanguageCode::Ta);
        assert_eq!(d.detect("మీరు ఎలా ఉన్నారు"), LanguageCode::Te);
        assert_eq!(d.detect("ನೀವು ಹೇಗಿದ್ದೀರಿ"), LanguageCode::Kn);
    }

    #[test]
    fn test_script_wins_over_statistical_fallback() {
        // Mixed text with a single Devanagari character resolves by script.
        let d = detector();
        assert_eq!(d.detect("hello दunia how are you"), LanguageCode::Hi);
    }

    #[test]
    fn test_latin_text_falls_back_to_statistical() {
        let d = detector();
        assert_eq!(
            d.detect("The quick brown fox jumps over the lazy dog"),
            LanguageCode::En
        );
    }

    #[test]
    fn test_unsupported_language_degrades_to_default() {
        // Japanese is outside the supported set.
        let d = detector();
        assert_eq!(d.detect("これは日本語のテキストです"), LanguageCode::En);
    }

    #[test]
    fn test_detection_is_deterministic() {
        let d = detector();
        let text = "bonjour tout le monde, comment allez vous aujourd'hui";
        let first = d.detect(text);
        for _ in 0..10 {
            assert_eq!(d.detect(text), first);
        }
    }
}
