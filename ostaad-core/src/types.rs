//! Core types: chat turns, language codes, mood and knowledge-domain tags.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Role of a turn, one-to-one with the chat-completions API `role` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

/// One turn of a conversation, as stored in the rolling history window and as
/// sent to the completion endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatTurn {
    pub role: ChatRole,
    pub content: String,
}

impl ChatTurn {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Assistant,
            content: content.into(),
        }
    }
}

/// Supported language codes. Unknown codes always degrade to a configured
/// default rather than failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LanguageCode {
    En,
    Hi,
    Ur,
    Ar,
    Bn,
    Mr,
    Te,
    Ta,
    Gu,
    Kn,
    Or,
    Pa,
}

impl LanguageCode {
    /// ISO 639-1 code.
    pub fn code(self) -> &'static str {
        match self {
            LanguageCode::En => "en",
            LanguageCode::Hi => "hi",
            LanguageCode::Ur => "ur",
            LanguageCode::Ar => "ar",
            LanguageCode::Bn => "bn",
            LanguageCode::Mr => "mr",
            LanguageCode::Te => "te",
            LanguageCode::Ta => "ta",
            LanguageCode::Gu => "gu",
            LanguageCode::Kn => "kn",
            LanguageCode::Or => "or",
            LanguageCode::Pa => "pa",
        }
    }

    /// Display name in the language's own script.
    pub fn display_name(self) -> &'static str {
        match self {
            LanguageCode::En => "English",
            LanguageCode::Hi => "हिन्दी",
            LanguageCode::Ur => "اردو",
            LanguageCode::Ar => "العربية",
            LanguageCode::Bn => "বাংলা",
            LanguageCode::Mr => "मराठी",
            LanguageCode::Te => "తెలుగు",
            LanguageCode::Ta => "தமிழ்",
            LanguageCode::Gu => "ગુજરાતી",
            LanguageCode::Kn => "ಕನ್ನಡ",
            LanguageCode::Or => "ଓଡ଼ିଆ",
            LanguageCode::Pa => "ਪੰਜਾਬੀ",
        }
    }

    /// Parses an ISO 639-1 code; `None` for anything outside the supported set.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "en" => Some(LanguageCode::En),
            "hi" => Some(LanguageCode::Hi),
            "ur" => Some(LanguageCode::Ur),
            "ar" => Some(LanguageCode::Ar),
            "bn" => Some(LanguageCode::Bn),
            "mr" => Some(LanguageCode::Mr),
            "te" => Some(LanguageCode::Te),
            "ta" => Some(LanguageCode::Ta),
            "gu" => Some(LanguageCode::Gu),
            "kn" => Some(LanguageCode::Kn),
            "or" => Some(LanguageCode::Or),
            "pa" => Some(LanguageCode::Pa),
            _ => None,
        }
    }

    /// Whether native-script keyword lists apply for this language. Used by the
    /// domain classifier to weight in-language keyword hits.
    pub fn uses_native_keywords(self) -> bool {
        !matches!(self, LanguageCode::En)
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Coarse emotional classification of a user message; steers response tone.
/// Exactly one tag per turn, `Neutral` when nothing matches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoodTag {
    Sad,
    Happy,
    Angry,
    Confused,
    #[default]
    Neutral,
}

impl MoodTag {
    pub fn as_str(self) -> &'static str {
        match self {
            MoodTag::Sad => "sad",
            MoodTag::Happy => "happy",
            MoodTag::Angry => "angry",
            MoodTag::Confused => "confused",
            MoodTag::Neutral => "neutral",
        }
    }
}

/// Coarse topical classification; steers response content emphasis. Low
/// classification confidence collapses to `General`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DomainTag {
    Academic,
    Technology,
    Creative,
    Business,
    LifeSkills,
    Culture,
    CurrentAffairs,
    Health,
    #[default]
    General,
}

impl DomainTag {
    pub fn as_str(self) -> &'static str {
        match self {
            DomainTag::Academic => "academic",
            DomainTag::Technology => "technology",
            DomainTag::Creative => "creative",
            DomainTag::Business => "business",
            DomainTag::LifeSkills => "life_skills",
            DomainTag::Culture => "culture",
            DomainTag::CurrentAffairs => "current_affairs",
            DomainTag::Health => "health",
            DomainTag::General => "general",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_code_round_trip() {
        for code in ["en", "hi", "ur", "ar", "bn", "mr", "te", "ta", "gu", "kn", "or", "pa"] {
            let lang = LanguageCode::from_code(code).unwrap();
            assert_eq!(lang.code(), code);
            assert!(!lang.display_name().is_empty());
        }
        assert_eq!(LanguageCode::from_code("xx"), None);
        assert_eq!(LanguageCode::from_code(""), None);
    }

    #[test]
    fn test_defaults() {
        assert_eq!(MoodTag::default(), MoodTag::Neutral);
        assert_eq!(DomainTag::default(), DomainTag::General);
    }

    #[test]
    fn test_chat_turn_constructors() {
        let turn = ChatTurn::user("hello");
        assert_eq!(turn.role, ChatRole::User);
        assert_eq!(turn.content, "hello");
        assert_eq!(ChatTurn::assistant("hi").role, ChatRole::Assistant);
    }
}
