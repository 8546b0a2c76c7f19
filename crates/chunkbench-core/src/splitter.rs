// src/splitter.rs

use once_cell::sync::Lazy;
use regex::Regex;

use crate::metadata::count_words;

static SENTENCE_END_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.!?]+").expect("valid regex"));

/// Split an oversized text block into sub-chunks at paragraph and
/// sentence boundaries, never exceeding `max_words` per sub-chunk
/// except for a single sentence that alone is larger than the budget.
///
/// Paragraphs (blank-line delimited) are packed whole while they fit;
/// a paragraph that would overflow the open sub-chunk is re-split at
/// `[.!?]+` boundaries, with the terminal punctuation kept attached to
/// its sentence so no word is altered or lost.
///
/// Whitespace-only input yields no sub-chunks; otherwise every input
/// word appears in exactly one sub-chunk, in order, and no sub-chunk
/// is empty.
pub fn split_sentence_aware(text: &str, max_words: usize) -> Vec<String> {
    split_with_carry(text, max_words, 0)
}

/// Carry-aware form used by the packer: `carry` is the word count
/// already sitting in the caller's open accumulator, which the first
/// sub-chunk continues. When nothing fits the remaining allowance the
/// first sub-chunk comes back empty, signalling the caller to flush
/// its accumulator unchanged. Only the first sub-chunk can be empty.
pub(crate) fn split_with_carry(text: &str, max_words: usize, carry: usize) -> Vec<String> {
    let mut subs: Vec<String> = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    let mut running = carry;

    for paragraph in text.split("\n\n") {
        let paragraph = paragraph.trim();
        if paragraph.is_empty() {
            continue;
        }

        let paragraph_words = count_words(paragraph);
        if running + paragraph_words <= max_words {
            current.push(paragraph);
            running += paragraph_words;
            continue;
        }

        // Paragraph would overflow: fall back to sentence granularity.
        for sentence in split_sentences(paragraph) {
            let sentence_words = count_words(sentence);
            if running + sentence_words > max_words && running > 0 {
                subs.push(current.join("\n\n"));
                current.clear();
                running = 0;
            }
            current.push(sentence);
            running += sentence_words;
        }
    }

    if !current.is_empty() {
        subs.push(current.join("\n\n"));
    }
    subs
}

/// Cut a paragraph after each run of sentence-terminal punctuation.
/// Text after the last terminator becomes a final, unterminated piece.
fn split_sentences(paragraph: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;

    for m in SENTENCE_END_RE.find_iter(paragraph) {
        let piece = paragraph[start..m.end()].trim();
        if !piece.is_empty() {
            sentences.push(piece);
        }
        start = m.end();
    }

    let tail = paragraph[start..].trim();
    if !tail.is_empty() {
        sentences.push(tail);
    }
    sentences
}
