//! Splits an oversized reply into transport-safe pieces at paragraph
//! boundaries, falling back to sentence boundaries for a paragraph that is
//! itself too long.
//!
//! Chunks keep their trailing separators, so `chunks.concat()` reproduces the
//! input byte-for-byte. The one exception to the length bound: a single
//! sentence longer than `max_len` is returned whole, since there is no
//! boundary left to split at.

/// Splits `text` into chunks of at most `max_len` characters (with the
/// oversized-sentence exception above). `max_len` below 1 is treated as 1.
pub fn split_message(text: &str, max_len: usize) -> Vec<String> {
    let max_len = max_len.max(1);
    if char_len(text) <= max_len {
        return vec![text.to_string()];
    }

    let mut chunks = Vec::new();
    let mut current = String::new();
    let mut current_len = 0usize;

    for paragraph in text.split_inclusive("\n\n") {
        let paragraph_len = char_len(paragraph);
        if current_len + paragraph_len <= max_len {
            current.push_str(paragraph);
            current_len += paragraph_len;
            continue;
        }

        if !current.is_empty() {
            chunks.push(std::mem::take(&mut current));
            current_len = 0;
        }

        if paragraph_len <= max_len {
            current.push_str(paragraph);
            current_len = paragraph_len;
        } else {
            pack_sentences(paragraph, max_len, &mut chunks, &mut current, &mut current_len);
        }
    }

    if !current.is_empty() {
        chunks.push(current);
    }
    chunks
}

/// Greedily packs the sentences of one oversized paragraph, leaving any
/// unfinished tail in `current` so the next paragraph can continue filling it.
fn pack_sentences(
    paragraph: &str,
    max_len: usize,
    chunks: &mut Vec<String>,
    current: &mut String,
    current_len: &mut usize,
) {
    for sentence in paragraph.split_inclusive(". ") {
        let sentence_len = char_len(sentence);
        if *current_len + sentence_len <= max_len {
            current.push_str(sentence);
            *current_len += sentence_len;
            continue;
        }

        if !current.is_empty() {
            chunks.push(std::mem::take(current));
            *current_len = 0;
        }

        if sentence_len <= max_len {
            current.push_str(sentence);
            *current_len = sentence_len;
        } else {
            // Atomic sentence longer than the limit: emitted whole.
            chunks.push(sentence.to_string());
        }
    }
}

fn char_len(s: &str) -> usize {
    s.chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_round_trip(text: &str, max_len: usize) {
        let chunks = split_message(text, max_len);
        assert_eq!(chunks.concat(), text, "lossy split at max_len={max_len}");
    }

    #[test]
    fn test_short_text_returned_whole() {
        assert_eq!(split_message("hello", 4096), vec!["hello".to_string()]);
        assert_eq!(split_message("", 10), vec![String::new()]);
    }

    #[test]
    fn test_paragraph_packing() {
        let text = "aaaa\n\nbbbb\n\ncccc";
        let chunks = split_message(text, 12);
        // First chunk packs two paragraphs (with separator), third overflows.
        assert_eq!(chunks, vec!["aaaa\n\nbbbb\n\n".to_string(), "cccc".to_string()]);
        assert_round_trip(text, 12);
    }

    #[test]
    fn test_sentence_fallback_for_long_paragraph() {
        let text = "one two. three four. five six. seven";
        let chunks = split_message(text, 12);
        assert!(chunks.iter().all(|c| c.chars().count() <= 12), "{chunks:?}");
        assert_round_trip(text, 12);
    }

    #[test]
    fn test_oversized_atomic_sentence_returned_whole() {
        let text = "supercalifragilisticexpialidocious";
        let chunks = split_message(text, 10);
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0], text);
    }

    #[test]
    fn test_round_trip_property() {
        let inputs = [
            "plain short text",
            "para one\n\npara two\n\npara three",
            "Sentence one. Sentence two. Sentence three. Sentence four.",
            "mixed\n\nA very long paragraph. With several sentences. That need splitting. Indeed.\n\ntail",
            "no separators at all just one long run of words without punctuation",
            "trailing separator\n\n",
            "multibyte नमस्ते दुनिया. फिर मिलेंगे. 🙏 ठीक है\n\nदूसरा पैराग्राफ",
        ];
        for text in inputs {
            for max_len in [1, 5, 12, 30, 4096] {
                assert_round_trip(text, max_len);
            }
        }
    }

    #[test]
    fn test_chunks_respect_limit_except_atomic_sentences() {
        let text = "Sentence one is here. Sentence two follows. Sentence three ends.";
        for max_len in [25, 40, 64] {
            for chunk in split_message(text, max_len) {
                assert!(chunk.chars().count() <= max_len, "{chunk:?} at {max_len}");
            }
        }
    }
}
