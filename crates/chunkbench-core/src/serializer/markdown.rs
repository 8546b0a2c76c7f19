// src/serializer/markdown.rs

//! Markdown rendering for quality metrics and comparison reports:
//! the tables a benchmark summary embeds.

use std::fmt::Write;

use crate::quality::{ComparisonReport, QualityMetrics};

/// Renders metrics and comparison reports as Markdown tables.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct MarkdownSerializer;

impl MarkdownSerializer {
    pub fn new() -> Self {
        Self
    }

    /// Render one run's metrics as a two-column table.
    pub fn render_metrics(&self, metrics: &QualityMetrics) -> String {
        let mut out = String::new();
        out.push_str("| Metric | Value |\n");
        out.push_str("|--------|-------|\n");
        let _ = writeln!(out, "| Total chunks | {} |", metrics.total_chunks);
        let _ = writeln!(
            out,
            "| Avg chunk size (words) | {:.1} |",
            metrics.avg_chunk_size_words
        );
        let _ = writeln!(
            out,
            "| Chunk size variance | {:.1} |",
            metrics.chunk_size_variance
        );
        let _ = writeln!(out, "| Header chunks | {} |", metrics.header_chunks);
        let _ = writeln!(out, "| List chunks | {} |", metrics.list_chunks);
        let _ = writeln!(out, "| Table chunks | {} |", metrics.table_chunks);
        let _ = writeln!(out, "| Image chunks | {} |", metrics.image_chunks);
        let _ = writeln!(out, "| Completeness | {:.2}% |", metrics.completeness * 100.0);
        let _ = writeln!(
            out,
            "| Paragraph completeness | {:.2}% |",
            metrics.paragraph_completeness * 100.0
        );
        out
    }

    /// Render a comparison report: one row per strategy.
    pub fn render_comparison(&self, report: &ComparisonReport) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "# Chunking strategy comparison\n");
        let _ = writeln!(out, "Budget: {} words per chunk.", report.max_words);
        let _ = writeln!(out, "Generated: {}\n", report.generated_at);

        out.push_str(
            "| Strategy | Chunks | Avg words | Variance | Completeness | Para. completeness | Time (ms) |\n",
        );
        out.push_str(
            "|----------|--------|-----------|----------|--------------|--------------------|-----------|\n",
        );
        for run in &report.strategies {
            let m = &run.metrics;
            let _ = writeln!(
                out,
                "| {} | {} | {:.1} | {:.1} | {:.2}% | {:.2}% | {:.3} |",
                run.strategy.name(),
                run.chunk_count,
                m.avg_chunk_size_words,
                m.chunk_size_variance,
                m.completeness * 100.0,
                m.paragraph_completeness * 100.0,
                run.chunking_time_ms
            );
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quality::{compare_strategies, score};
    use crate::metadata::Chunk;

    #[test]
    fn test_metrics_table_shape() {
        let metrics = score(&[Chunk::new("one two.".to_string())]);
        let table = MarkdownSerializer::new().render_metrics(&metrics);
        assert!(table.starts_with("| Metric | Value |"));
        assert!(table.contains("| Total chunks | 1 |"));
    }

    #[test]
    fn test_comparison_has_row_per_strategy() {
        let report = compare_strategies("Some text. More text here.", 10);
        let md = MarkdownSerializer::new().render_comparison(&report);
        assert!(md.contains("| sentence_only |"));
        assert!(md.contains("| block_aware |"));
    }
}
