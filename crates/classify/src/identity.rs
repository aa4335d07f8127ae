//! Identity-question interception: a small fixed set of "who/what are you"
//! phrasings answered from canned text before any model call.
//!
//! Matching is deliberately narrow — only explicit identity phrasings trigger,
//! never broad words like a bare "help" that would over-match ordinary
//! conversation. Developer questions are checked first, then name, then
//! capabilities.

use ostaad_core::brand::{BOT_NAME, DEVELOPER, POWERED_BY, VERSION};
use ostaad_core::LanguageCode;

const NAME_QUESTIONS: &[&str] = &[
    "what is your name",
    "your name",
    "who are you",
    "kaun ho tum",
    "tum kaun ho",
    "aap kaun ho",
    "naam kya hai",
    "introduce yourself",
    "apna parichay",
    "तुम कौन हो",
    "तुम्हारा नाम",
];

const CAPABILITY_QUESTIONS: &[&str] = &[
    "what can you do",
    "kya kar sakte ho",
    "your capabilities",
    "kaise help kar sakte",
    "what do you know",
    "क्या कर सकते हो",
];

const DEVELOPER_QUESTIONS: &[&str] = &[
    "who made you",
    "who created you",
    "who built you",
    "kisne banaya",
    "your developer",
    "your creator",
    "किसने बनाया",
];

/// Short-circuit matcher for identity questions. Returns the canned answer, or
/// `None` when the caller should proceed to the model.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityInterceptor;

impl IdentityInterceptor {
    pub fn new() -> Self {
        Self
    }

    pub fn try_intercept(&self, text: &str, language: LanguageCode) -> Option<String> {
        let lower = text.to_lowercase();
        if DEVELOPER_QUESTIONS.iter().any(|p| lower.contains(p)) {
            return Some(developer_response(language));
        }
        if NAME_QUESTIONS.iter().any(|p| lower.contains(p)) {
            return Some(identity_response(language));
        }
        if CAPABILITY_QUESTIONS.iter().any(|p| lower.contains(p)) {
            return Some(capabilities_response(language));
        }
        None
    }
}

fn identity_response(language: LanguageCode) -> String {
    match language {
        LanguageCode::Hi => format!(
            "🎯 Namaste bhai! Main **{BOT_NAME}** hoon! 🤖\n\n\
             Main tumhara digital ustad hoon - padhai, tech, career, rishte, \
             har field mein expert. 💪 Hinglish mein baat karta hoon, bilkul \
             tumhare dost ki tarah. 😊\n\n\
             {POWERED_BY} | Developer: {DEVELOPER} | {VERSION}"
        ),
        _ => format!(
            "🎯 Hello! I'm **{BOT_NAME}**! 🤖\n\n\
             I'm your digital ustad (teacher) - an expert in studies, tech, \
             career, relationships and more. 💪 I chat in Hinglish, just like \
             a friend. 😊\n\n\
             {POWERED_BY} | Developer: {DEVELOPER} | {VERSION}"
        ),
    }
}

fn capabilities_response(language: LanguageCode) -> String {
    match language {
        LanguageCode::Hi => format!(
            "🚀 **{BOT_NAME} ki Powers** 🚀\n\n\
             • 🎓 Padhai: school se competitive exams tak\n\
             • 💻 Tech: programming, AI/ML, bots\n\
             • 🎨 Creative: writing, shayari, storytelling\n\
             • 💼 Career & business guidance\n\
             • ❤️ Rishte aur motivation\n\
             • 🌍 Culture, news, health basics\n\n\
             Bas poocho - har sawal ka jawab ready hai! 🤝\n\n\
             {POWERED_BY} | {VERSION}"
        ),
        _ => format!(
            "🚀 **What {BOT_NAME} can do** 🚀\n\n\
             • 🎓 Studies: school to competitive exams\n\
             • 💻 Tech: programming, AI/ML, bots\n\
             • 🎨 Creative: writing, poetry, storytelling\n\
             • 💼 Career & business guidance\n\
             • ❤️ Relationships and motivation\n\
             • 🌍 Culture, news, health basics\n\n\
             Just ask - an answer is ready for every question! 🤝\n\n\
             {POWERED_BY} | {VERSION}"
        ),
    }
}

fn developer_response(language: LanguageCode) -> String {
    match language {
        LanguageCode::Hi => format!(
            "👨‍💻 **Mere Creator ke baare mein** 👨‍💻\n\n\
             🔥 Developer: **{DEVELOPER}**\n\
             🎯 Expertise: AI development aur Telegram bot architecture\n\n\
             Unhone mujhe isliye banaya taaki har user ko world-class AI \
             assistance mile - human-like, Indian context ke saath! 💪\n\n\
             {POWERED_BY} | {VERSION}"
        ),
        _ => format!(
            "👨‍💻 **About my creator** 👨‍💻\n\n\
             🔥 Developer: **{DEVELOPER}**\n\
             🎯 Expertise: AI development and Telegram bot architecture\n\n\
             He built me so that every user gets world-class AI assistance - \
             human-like, with an Indian context! 💪\n\n\
             {POWERED_BY} | {VERSION}"
        ),
    }
}
