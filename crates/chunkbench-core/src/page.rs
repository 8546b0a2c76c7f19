// src/page.rs

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::metadata::{count_words, Chunk};
use crate::splitter::split_sentence_aware;

static PAGE_HEADER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^# Page \d+ of \d+\s*").expect("valid regex"));

/// One physical page of extracted text, as supplied by a per-page
/// converter. `number` is 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageText {
    pub number: usize,
    pub count: usize,
    pub text: String,
}

impl PageText {
    pub fn new(number: usize, count: usize, text: impl Into<String>) -> Self {
        Self {
            number,
            count,
            text: text.into(),
        }
    }

    /// The synthetic header line for this page.
    pub fn header(&self) -> String {
        format!("# Page {} of {}", self.number, self.count)
    }
}

/// Chunk page-by-page, never letting a chunk span two pages.
///
/// A page that fits the budget becomes a single chunk with its header
/// as the first line. An oversized page is split sentence-aware and
/// every resulting chunk is prefixed with a freshly rendered header,
/// so each chunk stays traceable to its page. Every input page
/// contributes at least one header-bearing chunk, even when its text
/// is empty.
pub fn chunk_pages(pages: &[PageText], max_words: usize) -> Vec<Chunk> {
    let mut chunks = Vec::new();

    for page in pages {
        let header = page.header();
        let header_words = count_words(&header);
        let body = page.text.trim();

        if header_words + count_words(body) <= max_words {
            let content = if body.is_empty() {
                header
            } else {
                format!("{header}\n\n{body}")
            };
            chunks.push(Chunk::new(content));
            continue;
        }

        let subs = split_sentence_aware(body, max_words.saturating_sub(header_words));
        if subs.is_empty() {
            chunks.push(Chunk::new(header));
            continue;
        }
        for sub in subs {
            chunks.push(Chunk::new(format!("{header}\n\n{sub}")));
        }
    }

    chunks
}

/// Parse a `---`-separated page dump (the on-disk shape a page-by-page
/// converter writes) into ordered [`PageText`] records. Sections that
/// already open with a `# Page N of M` line have it stripped, since
/// [`chunk_pages`] regenerates headers itself.
pub fn paginate_delimited(text: &str) -> Vec<PageText> {
    let sections: Vec<&str> = text
        .split("\n\n---\n\n")
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();

    let count = sections.len();
    sections
        .into_iter()
        .enumerate()
        .map(|(i, section)| {
            let body = PAGE_HEADER_RE.replace(section, "");
            PageText::new(i + 1, count, body.trim())
        })
        .collect()
}
