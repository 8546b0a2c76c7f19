// src/metadata.rs

use serde::{Deserialize, Serialize};

/// Count whitespace-delimited words, the unit every budget in this crate
/// is expressed in.
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

/// A finished unit of output: one or more block contents joined by a
/// blank line, bounded by the configured word budget except where a
/// single indivisible block or sentence already exceeds it alone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chunk {
    pub content: String,
    pub word_count: usize,
}

impl Chunk {
    pub fn new(content: String) -> Self {
        let word_count = count_words(&content);
        Self {
            content,
            word_count,
        }
    }
}
