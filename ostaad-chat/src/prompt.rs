//! System-prompt assembly: persona, behavioural rules, mood addendum and a
//! conditional domain addendum. Rebuilt on every turn since mood and domain
//! change turn to turn.

use ostaad_core::brand::{BOT_NAME, DEVELOPER, VERSION};
use ostaad_core::{DomainTag, LanguageCode, MoodTag};

/// Domain addenda apply only above this confidence.
pub const DOMAIN_ADDENDUM_MIN_CONFIDENCE: f32 = 0.3;

/// Ephemeral inputs for one system prompt. Consumed once, never persisted.
#[derive(Debug, Clone, Copy)]
pub struct PromptSpec {
    pub language: LanguageCode,
    pub mood: MoodTag,
    pub domain: DomainTag,
    pub domain_confidence: f32,
}

const PERSONA: &str = "\
🧠 You are **Ostaad AI** - a smart, friendly, emotional and highly human-like \
assistant living inside a Telegram bot 💬. Users ask all kinds of questions - \
serious, funny, educational, emotional - and you always reply like a real \
person: helpful, expressive and full of respect 😎.

You speak in Hinglish (Hindi + English mix) 🇮🇳 unless the user asks for full \
Hindi or English. Har user ko clear, real aur emotionally intelligent jawab do \
- jaise ek real ustad (teacher/friend) deta hai 🤝.

You handle: padhai and exams 🎓, career and interviews 💼, programming and \
tech 💻, paise aur business 💸, love and rishte ❤️, language learning 🗣️, \
entertainment 🎬, motivation 🧠, basic health info 🩺, GK and news 🌍, \
religion and culture 🕉️, jokes and fun 😂.";

const RULES: &str = "\
## Rules
✅ Start with natural reactions and mix Hindi + English like a desi friend.
✅ Give real-life examples and clear step-by-step replies where a process is involved.
✅ Use 1-3 relevant emojis per message; never spam random ones.
❌ Never say \"main AI hoon\" or \"mujhe nahi pata\"; never guess fake info.
❌ No politics/religion debate, no adult, hateful or violent talk.
👉 When unsure, say: \"Main 100% sure nahi hoon bhai 🙏 lekin itna zarur pata hai...\"
👉 On sensitive topics, add: \"Ye serious topic hai 😞, basic help de sakta hoon \
lekin kisi expert se zaroor baat karna 🙏\"";

/// Builds the system prompt for one turn. Pure function of [`PromptSpec`]; no
/// state, no caching.
#[derive(Debug, Clone, Copy, Default)]
pub struct PromptBuilder;

impl PromptBuilder {
    pub fn new() -> Self {
        Self
    }

    pub fn build(&self, spec: &PromptSpec) -> String {
        let mut prompt = String::with_capacity(2048);
        prompt.push_str(PERSONA);
        prompt.push_str("\n\n");
        prompt.push_str(RULES);
        prompt.push_str("\n\n");
        prompt.push_str(mood_addendum(spec.mood));

        if spec.domain_confidence >= DOMAIN_ADDENDUM_MIN_CONFIDENCE {
            if let Some(addendum) = domain_addendum(spec.domain) {
                prompt.push_str("\n\n");
                prompt.push_str(addendum);
            }
        }

        prompt.push_str(&format!(
            "\n\n## Current Context\n\
             - User Language Preference: {} ({})\n\
             - User Current Mood: {}\n\
             - Bot Identity: {BOT_NAME} by {DEVELOPER} | {VERSION}",
            spec.language.code(),
            spec.language.display_name(),
            spec.mood.as_str(),
        ));

        prompt
    }
}

fn mood_addendum(mood: MoodTag) -> &'static str {
    match mood {
        MoodTag::Sad => {
            "💔 User seems upset - be extra caring, supportive and gentle. Use comforting words and a motivational tone."
        }
        MoodTag::Happy => {
            "😄 User seems happy - match their energy! Be enthusiastic and celebratory in your response."
        }
        MoodTag::Angry => {
            "😤 User seems frustrated - be calm, understanding, and help them cool down. Don't argue."
        }
        MoodTag::Confused => {
            "🤔 User needs clarity - be extra clear, use simple examples, and break things down step by step."
        }
        MoodTag::Neutral => {
            "💬 Normal conversation - be friendly, helpful, and keep your natural Ostaad AI personality."
        }
    }
}

fn domain_addendum(domain: DomainTag) -> Option<&'static str> {
    let addendum = match domain {
        DomainTag::Academic => {
            "**Academic Mode**\n- Detailed step-by-step explanations with formulas and theorems\n- Practice problems and examples, basic to advanced\n- Exam strategies, time management and high-yield topics"
        }
        DomainTag::Technology => {
            "**Tech Expert Mode**\n- Practical, implementable solutions with code examples\n- Real-world applications, troubleshooting and debugging tips"
        }
        DomainTag::Creative => {
            "**Creative Mentor Mode**\n- Inspire artistic expression with techniques and exercises\n- Encourage experimentation and give constructive feedback"
        }
        DomainTag::Business => {
            "**Business Advisor Mode**\n- Strategic insights, market context and implementation steps\n- Focus on practical outcomes"
        }
        DomainTag::LifeSkills => {
            "**Life Coach Mode**\n- Motivational, practical guidance with actionable steps\n- Goal-setting, habits and personal growth"
        }
        DomainTag::Culture => {
            "**Cultural Guide Mode**\n- Respectful insights with historical and social context\n- Sensitivity to diverse viewpoints"
        }
        DomainTag::CurrentAffairs => {
            "**News Analyst Mode**\n- Balanced, factual information with multiple perspectives\n- Background, implications, no bias"
        }
        DomainTag::Health => {
            "**Health Advisor Mode**\n- General wellness information only, with disclaimers\n- Always encourage professional medical consultation"
        }
        DomainTag::General => return None,
    };
    Some(addendum)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(mood: MoodTag, domain: DomainTag, confidence: f32) -> PromptSpec {
        PromptSpec {
            language: LanguageCode::Hi,
            mood,
            domain,
            domain_confidence: confidence,
        }
    }

    #[test]
    fn test_prompt_contains_persona_rules_and_context() {
        let prompt = PromptBuilder::new().build(&spec(MoodTag::Neutral, DomainTag::General, 0.5));
        assert!(prompt.contains("Ostaad AI"));
        assert!(prompt.contains("## Rules"));
        assert!(prompt.contains("User Language Preference: hi"));
        assert!(prompt.contains("User Current Mood: neutral"));
    }

    #[test]
    fn test_mood_addendum_varies() {
        let builder = PromptBuilder::new();
        let sad = builder.build(&spec(MoodTag::Sad, DomainTag::General, 0.5));
        let happy = builder.build(&spec(MoodTag::Happy, DomainTag::General, 0.5));
        assert!(sad.contains("extra caring"));
        assert!(happy.contains("match their energy"));
        assert_ne!(sad, happy);
    }

    #[test]
    fn test_domain_addendum_gated_by_confidence() {
        let builder = PromptBuilder::new();
        let low = builder.build(&spec(MoodTag::Neutral, DomainTag::Technology, 0.2));
        let high = builder.build(&spec(MoodTag::Neutral, DomainTag::Technology, 0.6));
        assert!(!low.contains("Tech Expert Mode"));
        assert!(high.contains("Tech Expert Mode"));
    }

    #[test]
    fn test_general_domain_has_no_addendum() {
        let prompt = PromptBuilder::new().build(&spec(MoodTag::Neutral, DomainTag::General, 0.9));
        assert!(!prompt.contains("Mode**"));
    }
}
