//! Reply post-processing: a mood-appropriate opening when the model didn't
//! produce one, topic tip blocks triggered by the reply body, and a signature
//! on long replies. The only nondeterminism is the choice among a mood's
//! opening phrases, and that comes from an injected seedable RNG.

use ostaad_core::MoodTag;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Mutex;

/// Replies longer than this get the signature line.
pub const SIGNATURE_MIN_CHARS: usize = 200;

/// How far into the reply an existing opening is looked for.
const OPENING_SCAN_CHARS: usize = 20;

const SIGNATURE: &str = "\n\n🎯 **Ostaad AI** | Always here to help! 🤝";

const SAD_OPENINGS: &[&str] = &["Are bhai 😞", "Kya hua yaar 💔", "Samjh gaya bhai 🥺"];
const HAPPY_OPENINGS: &[&str] = &["Waah bhai! 😄", "Bahut badhiya! 🔥", "Sahi hai yaar! 😎"];
const ANGRY_OPENINGS: &[&str] = &["Arre shaant ho jao 😌", "Samjha bhai 😤", "Thoda relax karo 🙏"];
const CONFUSED_OPENINGS: &[&str] = &["Chalo samjhaata hoon 🤔", "Dekho bhai 💡", "Aise samjho 📚"];
const NEUTRAL_OPENINGS: &[&str] = &["Suno bhai 👋", "Dekho 💬", "Samjho 👌"];

/// Tip blocks keyed by trigger words in the reply body; at most one block per
/// category, independent of mood.
const TOPIC_TIPS: &[(&[&str], &str)] = &[
    (
        &["algorithm", "programming", "code"],
        "\n\n💻 **Tech Tip**: Practice daily coding karo bhai - consistency is key! 🔥",
    ),
    (
        &["study", "exam", "padhai"],
        "\n\n📚 **Padhai Tip**: Time table banao aur regular revision karte raho! 💪",
    ),
    (
        &["love", "relationship", "breakup"],
        "\n\n❤️ **Dil Ki Baat**: Sabr rakho bhai, sab theek ho jaayega! 🤗",
    ),
    (
        &["job", "career", "interview"],
        "\n\n💼 **Career Advice**: Confidence rakho aur preparation solid karo! 📈",
    ),
];

/// Returns the opening phrase list for a mood. Exposed so callers (and tests)
/// can recognise enhanced output.
pub fn openings(mood: MoodTag) -> &'static [&'static str] {
    match mood {
        MoodTag::Sad => SAD_OPENINGS,
        MoodTag::Happy => HAPPY_OPENINGS,
        MoodTag::Angry => ANGRY_OPENINGS,
        MoodTag::Confused => CONFUSED_OPENINGS,
        MoodTag::Neutral => NEUTRAL_OPENINGS,
    }
}

pub struct ResponseEnhancer {
    rng: Mutex<StdRng>,
}

impl ResponseEnhancer {
    pub fn new() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// Deterministic enhancer for tests.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    pub fn enhance(&self, reply: &str, mood: MoodTag) -> String {
        let mut out = if has_opening(reply) {
            reply.to_string()
        } else {
            let list = openings(mood);
            let idx = self.rng.lock().expect("rng lock poisoned").gen_range(0..list.len());
            format!("{}, {}", list[idx], reply)
        };

        let lower = out.to_lowercase();
        for (triggers, tip) in TOPIC_TIPS {
            if triggers.iter().any(|t| lower.contains(t)) {
                out.push_str(tip);
            }
        }

        if out.chars().count() > SIGNATURE_MIN_CHARS {
            out.push_str(SIGNATURE);
        }

        out
    }
}

impl Default for ResponseEnhancer {
    fn default() -> Self {
        Self::new()
    }
}

/// Whether the reply already starts with a recognised opening: the first word
/// of any opening phrase, matched case-insensitively in the first ~20 chars.
fn has_opening(reply: &str) -> bool {
    let head: String = reply.chars().take(OPENING_SCAN_CHARS).collect();
    let head = head.to_lowercase();
    [
        SAD_OPENINGS,
        HAPPY_OPENINGS,
        ANGRY_OPENINGS,
        CONFUSED_OPENINGS,
        NEUTRAL_OPENINGS,
    ]
    .iter()
    .flat_map(|list| list.iter())
    .filter_map(|opening| opening.split_whitespace().next())
    .any(|first_word| head.contains(&first_word.to_lowercase()))
}
