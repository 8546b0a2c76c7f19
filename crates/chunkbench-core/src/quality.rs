// src/quality.rs

use std::time::Instant;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::metadata::Chunk;
use crate::{ChunkStrategy, Chunker};

static HEADER_MARK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^#{1,6}\s+").expect("valid regex"));
static LIST_MARK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^(?:[*-]\s+|\d+\.\s+)").expect("valid regex"));
static TABLE_MARK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^(?:\||```)").expect("valid regex"));
static IMAGE_MARK_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"!\[.*\]\(.*\)").expect("valid regex"));

/// Descriptive statistics over a finished chunk sequence. Recomputed
/// fresh per sequence; scoring an empty sequence yields all zeros.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QualityMetrics {
    pub total_chunks: usize,
    pub avg_chunk_size_words: f64,
    /// Population variance of per-chunk word counts.
    pub chunk_size_variance: f64,
    pub header_chunks: usize,
    pub list_chunks: usize,
    pub table_chunks: usize,
    pub image_chunks: usize,
    /// Fraction of chunks whose trimmed content ends in `.`, `!` or `?`.
    pub completeness: f64,
    /// Fraction of all blank-line-delimited paragraphs, across all
    /// chunks, that end in sentence-terminal punctuation.
    pub paragraph_completeness: f64,
    pub total_paragraphs: usize,
    pub complete_paragraphs: usize,
}

fn ends_terminal(text: &str) -> bool {
    matches!(text.trim_end().chars().last(), Some('.' | '!' | '?'))
}

/// Score a chunk sequence. Pure; no side effects.
pub fn score(chunks: &[Chunk]) -> QualityMetrics {
    if chunks.is_empty() {
        return QualityMetrics::default();
    }

    let sizes: Vec<f64> = chunks.iter().map(|c| c.word_count as f64).collect();
    let total = chunks.len() as f64;
    let avg = sizes.iter().sum::<f64>() / total;
    let variance = sizes.iter().map(|s| (s - avg).powi(2)).sum::<f64>() / total;

    let mut total_paragraphs = 0usize;
    let mut complete_paragraphs = 0usize;
    for chunk in chunks {
        for paragraph in chunk.content.split("\n\n") {
            if paragraph.trim().is_empty() {
                continue;
            }
            total_paragraphs += 1;
            if ends_terminal(paragraph) {
                complete_paragraphs += 1;
            }
        }
    }

    let complete_chunks = chunks.iter().filter(|c| ends_terminal(&c.content)).count();

    QualityMetrics {
        total_chunks: chunks.len(),
        avg_chunk_size_words: avg,
        chunk_size_variance: variance,
        header_chunks: count_matching(chunks, &HEADER_MARK_RE),
        list_chunks: count_matching(chunks, &LIST_MARK_RE),
        table_chunks: count_matching(chunks, &TABLE_MARK_RE),
        image_chunks: count_matching(chunks, &IMAGE_MARK_RE),
        completeness: complete_chunks as f64 / total,
        paragraph_completeness: if total_paragraphs == 0 {
            0.0
        } else {
            complete_paragraphs as f64 / total_paragraphs as f64
        },
        total_paragraphs,
        complete_paragraphs,
    }
}

fn count_matching(chunks: &[Chunk], re: &Regex) -> usize {
    chunks.iter().filter(|c| re.is_match(&c.content)).count()
}

/// One strategy's run over a document: chunk count, wall-clock
/// chunking time, and quality metrics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StrategyReport {
    pub strategy: ChunkStrategy,
    pub chunk_count: usize,
    pub chunking_time_ms: f64,
    pub metrics: QualityMetrics,
}

/// Every strategy run over the same text, for side-by-side comparison.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonReport {
    pub max_words: usize,
    pub generated_at: String,
    pub strategies: Vec<StrategyReport>,
}

/// Run every chunking strategy over `text` with the same budget,
/// timing and scoring each run.
pub fn compare_strategies(text: &str, max_words: usize) -> ComparisonReport {
    let mut strategies = Vec::new();

    for strategy in [ChunkStrategy::SentenceOnly, ChunkStrategy::BlockAware] {
        let chunker = Chunker::builder()
            .max_words(max_words)
            .strategy(strategy)
            .build();

        let start = Instant::now();
        let chunks = chunker.chunk(text);
        let chunking_time_ms = start.elapsed().as_secs_f64() * 1000.0;

        strategies.push(StrategyReport {
            strategy,
            chunk_count: chunks.len(),
            chunking_time_ms,
            metrics: score(&chunks),
        });
    }

    ComparisonReport {
        max_words,
        generated_at: chrono::Utc::now().to_rfc3339(),
        strategies,
    }
}
