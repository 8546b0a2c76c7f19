// src/lib.rs
//! # chunkbench-core
//!
//! Markdown-aware chunking and chunk-quality scoring for document
//! parser benchmarking. Takes the markdown-like text an external
//! parser extracted from a document, partitions it into bounded-size
//! chunks without breaking structure (headers, lists, tables, code,
//! images), and scores the result along descriptive quality
//! dimensions so competing chunking strategies can be compared.
//!
//! ## Features
//!
//! - **Block-aware chunking**: classifies lines into structural blocks
//!   and packs them greedily under a word budget
//! - **Sentence-aware splitting**: oversized text falls back to
//!   paragraph, then sentence boundaries; lists, tables and code are
//!   never split mid-block
//! - **Page-aware chunking**: per-page input never produces a chunk
//!   spanning two pages, and every chunk of a split page re-carries
//!   its `Page N of M` header
//! - **Quality scoring**: size distribution, structural-marker counts
//!   and sentence completeness per chunk run
//!
//! ## Quick Start
//!
//! ```rust
//! use chunkbench_core::Chunker;
//!
//! let text = "# Introduction\n\nThis is a test document.";
//! let chunker = Chunker::new();
//! let chunks = chunker.chunk(text);
//!
//! assert_eq!(chunks.len(), 1);
//! println!("{} words", chunks[0].word_count);
//! ```
//!
//! ## Advanced Usage
//!
//! ```rust
//! use chunkbench_core::{ChunkStrategy, Chunker};
//!
//! let chunker = Chunker::builder()
//!     .max_words(200)
//!     .strategy(ChunkStrategy::SentenceOnly)
//!     .build();
//!
//! let chunks = chunker.chunk("First sentence. Second sentence.");
//! let metrics = chunkbench_core::score(&chunks);
//! assert_eq!(metrics.total_chunks, chunks.len());
//! ```

pub mod block;
pub mod error;
pub mod metadata;
pub mod packer;
pub mod page;
pub mod quality;
pub mod serializer;
pub mod splitter;

use serde::{Deserialize, Serialize};

pub use block::{classify_blocks, classify_line, Block, BlockKind, PackPolicy};
pub use error::{ChunkbenchError, Result};
pub use metadata::{count_words, Chunk};
pub use packer::pack_blocks;
pub use page::{chunk_pages, paginate_delimited, PageText};
pub use quality::{compare_strategies, score, ComparisonReport, QualityMetrics, StrategyReport};
pub use serializer::{JsonOptions, JsonSerializer, MarkdownSerializer};
pub use splitter::split_sentence_aware;

/// Default word budget per chunk.
pub const DEFAULT_MAX_WORDS: usize = 500;

/// How a document is partitioned into chunks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChunkStrategy {
    /// Pack paragraphs and sentences under the budget, ignoring block
    /// structure entirely.
    SentenceOnly,
    /// Classify lines into structural blocks first and pack per block
    /// kind (the default).
    BlockAware,
}

impl ChunkStrategy {
    pub fn name(self) -> &'static str {
        match self {
            ChunkStrategy::SentenceOnly => "sentence_only",
            ChunkStrategy::BlockAware => "block_aware",
        }
    }
}

/// Main chunking interface.
///
/// Configure with the builder, then feed it documents. Each call is
/// independent; the chunker holds no per-document state.
///
/// # Example
///
/// ```rust
/// use chunkbench_core::Chunker;
///
/// let chunker = Chunker::builder().max_words(300).build();
/// let chunks = chunker.chunk("# Title\n\nContent here.");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Chunker {
    max_words: usize,
    strategy: ChunkStrategy,
}

impl Chunker {
    /// Create a chunker with the default budget (500 words) and the
    /// block-aware strategy.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> ChunkerBuilder {
        ChunkerBuilder::new()
    }

    /// Partition `text` into chunks under the configured budget.
    pub fn chunk(&self, text: &str) -> Vec<Chunk> {
        match self.strategy {
            ChunkStrategy::SentenceOnly => split_sentence_aware(text, self.max_words)
                .into_iter()
                .map(Chunk::new)
                .collect(),
            ChunkStrategy::BlockAware => pack_blocks(&classify_blocks(text), self.max_words),
        }
    }

    /// Partition per-page input, never letting a chunk span two pages.
    /// The configured strategy does not apply here; pages are split
    /// sentence-aware with their header re-injected into every chunk.
    pub fn chunk_pages(&self, pages: &[PageText]) -> Vec<Chunk> {
        page::chunk_pages(pages, self.max_words)
    }

    pub fn max_words(&self) -> usize {
        self.max_words
    }

    pub fn strategy(&self) -> ChunkStrategy {
        self.strategy
    }
}

impl Default for Chunker {
    fn default() -> Self {
        Self {
            max_words: DEFAULT_MAX_WORDS,
            strategy: ChunkStrategy::BlockAware,
        }
    }
}

/// Builder for a [`Chunker`] with custom settings.
#[derive(Debug, Clone, Copy)]
pub struct ChunkerBuilder {
    max_words: usize,
    strategy: ChunkStrategy,
}

impl ChunkerBuilder {
    pub fn new() -> Self {
        Self {
            max_words: DEFAULT_MAX_WORDS,
            strategy: ChunkStrategy::BlockAware,
        }
    }

    /// Set the word budget per chunk.
    ///
    /// Default: 500. A budget of 0 is defined behavior: every block
    /// (and every sentence of a text block) becomes its own chunk.
    pub fn max_words(mut self, max_words: usize) -> Self {
        self.max_words = max_words;
        self
    }

    /// Set the chunking strategy. Default: [`ChunkStrategy::BlockAware`].
    pub fn strategy(mut self, strategy: ChunkStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn build(self) -> Chunker {
        Chunker {
            max_words: self.max_words,
            strategy: self.strategy,
        }
    }
}

impl Default for ChunkerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
