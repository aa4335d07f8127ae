//! Mood classification: case-insensitive substring membership against fixed
//! keyword sets, first matching category in priority order wins.

use crate::keywords::MOOD_KEYWORDS;
use ostaad_core::MoodTag;

/// Maps a message to exactly one [`MoodTag`].
///
/// Priority order is `sad → happy → angry → confused`; `neutral` when no
/// keyword matches. There is no cross-category scoring: the first category
/// with any hit wins, which keeps the result deterministic and cheap.
#[derive(Debug, Clone, Copy, Default)]
pub struct MoodClassifier;

impl MoodClassifier {
    pub fn new() -> Self {
        Self
    }

    pub fn classify(&self, text: &str) -> MoodTag {
        let lower = text.to_lowercase();
        for (tag, words) in MOOD_KEYWORDS {
            if words.iter().any(|w| lower.contains(w)) {
                return *tag;
            }
        }
        MoodTag::Neutral
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_category_matches() {
        let c = MoodClassifier::new();
        assert_eq!(c.classify("I am so sad today"), MoodTag::Sad);
        assert_eq!(c.classify("this is awesome!"), MoodTag::Happy);
        assert_eq!(c.classify("I hate this bakwas"), MoodTag::Angry);
        assert_eq!(c.classify("I am confused, explain please"), MoodTag::Confused);
        assert_eq!(c.classify("the sky is blue"), MoodTag::Neutral);
    }

    #[test]
    fn test_case_insensitive() {
        let c = MoodClassifier::new();
        assert_eq!(c.classify("SO HAPPY RIGHT NOW"), MoodTag::Happy);
    }

    #[test]
    fn test_priority_sad_beats_happy() {
        // Dual-keyword input: sad is checked before happy.
        let c = MoodClassifier::new();
        assert_eq!(c.classify("happy songs make me sad"), MoodTag::Sad);
    }

    #[test]
    fn test_priority_happy_beats_angry() {
        let c = MoodClassifier::new();
        assert_eq!(c.classify("great, but I still hate mondays"), MoodTag::Happy);
    }

    #[test]
    fn test_idempotent() {
        let c = MoodClassifier::new();
        let text = "yaar bahut tension hai";
        let first = c.classify(text);
        assert_eq!(first, MoodTag::Sad);
        assert_eq!(c.classify(text), first);
    }

    #[test]
    fn test_devanagari_keywords() {
        let c = MoodClassifier::new();
        assert_eq!(c.classify("मैं बहुत उदास हूँ"), MoodTag::Sad);
    }
}
