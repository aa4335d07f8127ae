//! Knowledge-domain classification: normalised keyword-bag scoring with a
//! higher weight for native-script hits on non-English messages.

use crate::keywords::DOMAIN_KEYWORDS;
use ostaad_core::{DomainTag, LanguageCode};

/// Best score below this collapses to `General`.
pub const MIN_DOMAIN_CONFIDENCE: f32 = 0.1;

/// Confidence reported for the `General` fallback.
pub const GENERAL_CONFIDENCE: f32 = 0.5;

/// Weight applied to native-script keyword hits: in-language signal counts
/// for more than incidental English vocabulary.
const NATIVE_WEIGHT: f32 = 1.5;

/// Maps a message to one [`DomainTag`] with a confidence in `[0, 1]`.
///
/// Per domain: `english_hits / |english| + 1.5 × native_hits / |native|`
/// (native term only for non-English messages), clamped to 1.0. The best
/// domain wins; below [`MIN_DOMAIN_CONFIDENCE`] the result is
/// `(General, 0.5)`. Pure function: the caller records the tag on the session.
#[derive(Debug, Clone, Copy, Default)]
pub struct DomainClassifier;

impl DomainClassifier {
    pub fn new() -> Self {
        Self
    }

    pub fn classify(&self, text: &str, language: LanguageCode) -> (DomainTag, f32) {
        let lower = text.to_lowercase();

        let mut best: Option<(DomainTag, f32)> = None;
        for entry in DOMAIN_KEYWORDS {
            let english_hits = entry.english.iter().filter(|w| lower.contains(*w)).count();
            let mut score = english_hits as f32 / entry.english.len() as f32;

            if language.uses_native_keywords() {
                // Native lists are in original script; no lowercasing needed.
                let native_hits = entry.native.iter().filter(|w| text.contains(*w)).count();
                score += NATIVE_WEIGHT * native_hits as f32 / entry.native.len() as f32;
            }

            let score = score.min(1.0);
            if best.map_or(true, |(_, s)| score > s) {
                best = Some((entry.tag, score));
            }
        }

        match best {
            Some((tag, confidence)) if confidence >= MIN_DOMAIN_CONFIDENCE => (tag, confidence),
            _ => (DomainTag::General, GENERAL_CONFIDENCE),
        }
    }
}
