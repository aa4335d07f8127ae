//! Keyword tables for the mood and domain classifiers.
//!
//! One table per classifier, covering English, romanised Hinglish and native
//! scripts together. Keeping every list here (rather than inline in each
//! classifier) is deliberate: the lists are the behaviour, and a single table
//! cannot drift between call sites.

use ostaad_core::{DomainTag, MoodTag};

/// Mood keyword sets in priority order: the first set with a hit wins, so a
/// message containing both a sad and a happy keyword classifies as sad.
/// `Neutral` is the fallback and has no keywords.
pub const MOOD_KEYWORDS: &[(MoodTag, &[&str])] = &[
    (
        MoodTag::Sad,
        &[
            "sad", "depressed", "upset", "crying", "hurt", "pain", "breakup", "udaas", "dukhi",
            "pareshan", "tension", "mushkil", "उदास", "दुखी", "परेशान",
        ],
    ),
    (
        MoodTag::Happy,
        &[
            "happy", "excited", "great", "awesome", "amazing", "khush", "maza", "badhiya",
            "accha", "sahi", "perfect", "खुश", "मज़ा", "बढ़िया",
        ],
    ),
    (
        MoodTag::Angry,
        &[
            "angry", "frustrated", "hate", "stupid", "worst", "gussa", "pagal", "bakwas",
            "faltu", "bekar", "गुस्सा", "बकवास",
        ],
    ),
    (
        MoodTag::Confused,
        &[
            "confused", "samjha nahi", "samjhao", "bataao", "explain", "doubt", "kaise",
            "समझाओ", "कैसे", "उलझन",
        ],
    ),
];

/// Keyword lists for one knowledge domain: an English list plus a parallel
/// native-script list (weighted higher for non-English messages).
pub struct DomainKeywords {
    pub tag: DomainTag,
    pub english: &'static [&'static str],
    pub native: &'static [&'static str],
}

/// Domain keyword table. `General` is the low-confidence fallback and is
/// intentionally absent.
pub const DOMAIN_KEYWORDS: &[DomainKeywords] = &[
    DomainKeywords {
        tag: DomainTag::Academic,
        english: &[
            "mathematics", "math", "algebra", "calculus", "geometry", "statistics", "physics",
            "chemistry", "biology", "science", "equation", "formula", "theorem", "exam",
            "upsc", "jee", "neet", "study", "research", "syllabus",
        ],
        native: &["गणित", "भौतिकी", "रसायन", "विज्ञान", "परीक्षा", "पढ़ाई", "सूत्र"],
    },
    DomainKeywords {
        tag: DomainTag::Technology,
        english: &[
            "programming", "coding", "software", "development", "algorithm", "database", "api",
            "framework", "javascript", "python", "java", "rust", "machine learning",
            "artificial intelligence", "blockchain", "cybersecurity", "cloud", "docker",
        ],
        native: &["प्रोग्रामिंग", "कोडिंग", "सॉफ्टवेयर", "तकनीक", "एल्गोरिदम"],
    },
    DomainKeywords {
        tag: DomainTag::Creative,
        english: &[
            "writing", "poetry", "shayari", "story", "creative", "art", "design", "music",
            "painting", "literature", "novel", "poem", "blogging", "storytelling",
        ],
        native: &["लेखन", "कविता", "शायरी", "कहानी", "कला", "साहित्य"],
    },
    DomainKeywords {
        tag: DomainTag::Business,
        english: &[
            "business", "startup", "entrepreneur", "marketing", "finance", "investment",
            "stock market", "economics", "management", "strategy", "sales", "profit",
            "revenue", "budget",
        ],
        native: &["व्यापार", "व्यवसाय", "निवेश", "बाजार", "अर्थशास्त्र", "प्रबंधन"],
    },
    DomainKeywords {
        tag: DomainTag::LifeSkills,
        english: &[
            "career", "job", "interview", "resume", "relationship", "motivation",
            "productivity", "time management", "goal setting", "habit", "communication",
            "leadership",
        ],
        native: &["करियर", "नौकरी", "रिश्ते", "प्रेरणा", "लक्ष्य", "आदत", "नेतृत्व"],
    },
    DomainKeywords {
        tag: DomainTag::Culture,
        english: &[
            "culture", "tradition", "festival", "religion", "spirituality", "philosophy",
            "history", "mythology", "bollywood", "cricket", "customs", "rituals",
        ],
        native: &["संस्कृति", "परंपरा", "त्योहार", "धर्म", "अध्यात्म", "इतिहास", "पुराण"],
    },
    DomainKeywords {
        tag: DomainTag::CurrentAffairs,
        english: &[
            "news", "politics", "government", "policy", "election", "current events",
            "international", "economy", "social issues", "environment",
        ],
        native: &["समाचार", "राजनीति", "सरकार", "नीति", "चुनाव", "अर्थव्यवस्था"],
    },
    DomainKeywords {
        tag: DomainTag::Health,
        english: &[
            "health", "fitness", "exercise", "diet", "nutrition", "wellness", "yoga",
            "meditation", "mental health", "stress", "lifestyle",
        ],
        native: &["स्वास्थ्य", "फिटनेस", "व्यायाम", "आहार", "योग", "ध्यान", "तनाव"],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mood_priority_order_is_fixed() {
        let order: Vec<MoodTag> = MOOD_KEYWORDS.iter().map(|(tag, _)| *tag).collect();
        assert_eq!(
            order,
            vec![MoodTag::Sad, MoodTag::Happy, MoodTag::Angry, MoodTag::Confused]
        );
    }

    #[test]
    fn test_every_domain_has_both_keyword_families() {
        for entry in DOMAIN_KEYWORDS {
            assert!(!entry.english.is_empty(), "{:?}", entry.tag);
            assert!(!entry.native.is_empty(), "{:?}", entry.tag);
        }
    }

    #[test]
    fn test_general_is_not_in_the_table() {
        assert!(DOMAIN_KEYWORDS
            .iter()
            .all(|entry| entry.tag != DomainTag::General));
    }
}
