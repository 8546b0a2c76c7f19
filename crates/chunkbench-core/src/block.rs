// src/block.rs

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::metadata::count_words;

static HEADER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^#{1,6}\s+").expect("valid regex"));
static LIST_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:[*-]\s+|\d+\.\s+)").expect("valid regex"));
static IMAGE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^!\[.*\]\(.*\)").expect("valid regex"));

/// Structural kind of a classified run of input lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockKind {
    Header,
    List,
    Code,
    Table,
    Image,
    HorizontalRule,
    Text,
}

/// How the packer treats a block of a given kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackPolicy {
    /// Packed as a whole, never split internally. May overflow a chunk
    /// when it alone exceeds the budget.
    Atomic,
    /// May be re-split at paragraph and sentence boundaries.
    Splittable,
    /// Appended to the open chunk regardless of the budget.
    AlwaysAttach,
    /// Forces a chunk boundary; the block itself is discarded.
    Boundary,
}

impl BlockKind {
    /// Packing rule for this kind. One table, consulted by the single
    /// packer implementation.
    pub fn policy(self) -> PackPolicy {
        match self {
            BlockKind::Header | BlockKind::List | BlockKind::Code | BlockKind::Table => {
                PackPolicy::Atomic
            }
            BlockKind::Image => PackPolicy::AlwaysAttach,
            BlockKind::HorizontalRule => PackPolicy::Boundary,
            BlockKind::Text => PackPolicy::Splittable,
        }
    }
}

/// A classified contiguous run of input lines sharing one kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    pub kind: BlockKind,
    pub content: String,
}

impl Block {
    pub fn new(kind: BlockKind, content: impl Into<String>) -> Self {
        Self {
            kind,
            content: content.into(),
        }
    }

    pub fn word_count(&self) -> usize {
        count_words(&self.content)
    }
}

/// Classify a single trimmed, non-empty line.
///
/// Tested in priority order: header, list, code fence, table row,
/// image reference, horizontal rule, plain text. Fences are not
/// tracked across lines; every line classifies independently.
pub fn classify_line(line: &str) -> BlockKind {
    if HEADER_RE.is_match(line) {
        BlockKind::Header
    } else if LIST_RE.is_match(line) {
        BlockKind::List
    } else if line.starts_with("```") {
        BlockKind::Code
    } else if line.starts_with('|') {
        BlockKind::Table
    } else if IMAGE_RE.is_match(line) {
        BlockKind::Image
    } else if line == "---" {
        BlockKind::HorizontalRule
    } else {
        BlockKind::Text
    }
}

/// Scan raw markdown-like text into an ordered sequence of blocks.
///
/// Adjacent lines of the same kind merge into one block; a blank line
/// always closes the block being accumulated and is itself discarded,
/// so no block ever spans a paragraph break.
pub fn classify_blocks(text: &str) -> Vec<Block> {
    let mut blocks = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    let mut current_kind = BlockKind::Text;

    for raw in text.lines() {
        let line = raw.trim();

        if line.is_empty() {
            close_block(&mut blocks, &mut current, current_kind);
            continue;
        }

        let kind = classify_line(line);
        if kind != current_kind {
            close_block(&mut blocks, &mut current, current_kind);
            current_kind = kind;
        }
        current.push(line);
    }
    close_block(&mut blocks, &mut current, current_kind);

    blocks
}

fn close_block(blocks: &mut Vec<Block>, current: &mut Vec<&str>, kind: BlockKind) {
    if !current.is_empty() {
        blocks.push(Block::new(kind, current.join("\n")));
        current.clear();
    }
}
