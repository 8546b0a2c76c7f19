// tests/integration.rs

use chunkbench_core::{
    chunk_pages, classify_blocks, compare_strategies, score, BlockKind, ChunkStrategy, Chunker,
    PageText,
};

/// Words of a document, skipping horizontal-rule separator lines
/// (the packer discards those by contract).
fn content_words(text: &str) -> Vec<&str> {
    text.lines()
        .filter(|line| line.trim() != "---")
        .flat_map(str::split_whitespace)
        .collect()
}

#[test]
fn test_word_conservation_on_fixture() {
    let markdown = include_str!("fixtures/mixed_structure.md");

    for budget in [15, 40, 500] {
        let chunker = Chunker::builder().max_words(budget).build();
        let chunks = chunker.chunk(markdown);

        let original = content_words(markdown);
        let chunked: Vec<&str> = chunks
            .iter()
            .flat_map(|c| c.content.split_whitespace())
            .collect();

        assert_eq!(original, chunked, "budget {budget} lost or reordered words");
    }
}

#[test]
fn test_budget_respected_except_indivisible_blocks() {
    let markdown = include_str!("fixtures/mixed_structure.md");
    let budget = 40;
    let chunks = Chunker::builder().max_words(budget).build().chunk(markdown);

    for chunk in &chunks {
        if chunk.word_count <= budget {
            continue;
        }
        // Overflow is only legal for a chunk built around one
        // indivisible unit: a single list/code/table block (plus any
        // always-attached images) or a single oversized sentence.
        let blocks = classify_blocks(&chunk.content);
        let non_image: Vec<_> = blocks
            .iter()
            .filter(|b| b.kind != BlockKind::Image)
            .collect();
        assert_eq!(
            non_image.len(),
            1,
            "oversized multi-block chunk: {}",
            chunk.content
        );
        assert!(
            matches!(
                non_image[0].kind,
                BlockKind::List | BlockKind::Code | BlockKind::Table
            ),
            "oversized chunk of kind {:?}",
            non_image[0].kind
        );
    }
}

#[test]
fn test_horizontal_rule_is_a_forced_boundary() {
    let chunks = Chunker::builder().max_words(1000).build().chunk("A\n\n---\n\nB");
    assert_eq!(chunks.len(), 2);
    assert_eq!(chunks[0].content, "A");
    assert_eq!(chunks[1].content, "B");
}

#[test]
fn test_fixture_rules_separate_sections() {
    let markdown = include_str!("fixtures/mixed_structure.md");
    let chunks = Chunker::builder().max_words(10_000).build().chunk(markdown);
    // Two rules, three sections, everything else fits the huge budget.
    assert_eq!(chunks.len(), 3);
    assert!(chunks[0].content.contains("# Annual Report"));
    assert!(chunks[1].content.contains("## Methods"));
    assert!(chunks[2].content.contains("## Outlook"));
}

#[test]
fn test_four_block_document_packs_into_one_chunk() {
    let text = "# Title\n\nSome short text.\n\n* item one\n* item two\n\n| a | b |\n";
    let chunks = Chunker::builder().max_words(500).build().chunk(text);
    assert_eq!(chunks.len(), 1);

    let blocks = classify_blocks(&chunks[0].content);
    let kinds: Vec<BlockKind> = blocks.iter().map(|b| b.kind).collect();
    assert_eq!(
        kinds,
        vec![
            BlockKind::Header,
            BlockKind::Text,
            BlockKind::List,
            BlockKind::Table
        ]
    );
}

#[test]
fn test_six_hundred_paragraphs_split_five_hundred_one_hundred() {
    let text: String = (1..=600)
        .map(|i| format!("word{i}"))
        .collect::<Vec<_>>()
        .join("\n\n");

    for strategy in [ChunkStrategy::SentenceOnly, ChunkStrategy::BlockAware] {
        let chunker = Chunker::builder().max_words(500).strategy(strategy).build();
        let chunks = chunker.chunk(&text);
        assert_eq!(chunks.len(), 2, "{strategy:?}");
        assert_eq!(chunks[0].word_count, 500, "{strategy:?}");
        assert_eq!(chunks[1].word_count, 100, "{strategy:?}");
    }
}

#[test]
fn test_empty_input_zero_chunks_zero_metrics() {
    let chunks = Chunker::new().chunk("");
    assert!(chunks.is_empty());

    let metrics = score(&chunks);
    assert_eq!(metrics.total_chunks, 0);
    assert_eq!(metrics.avg_chunk_size_words, 0.0);
    assert_eq!(metrics.chunk_size_variance, 0.0);
    assert_eq!(metrics.completeness, 0.0);
    assert_eq!(metrics.paragraph_completeness, 0.0);
}

#[test]
fn test_classification_is_idempotent_over_output_blocks() {
    let markdown = include_str!("fixtures/mixed_structure.md");
    for block in classify_blocks(markdown) {
        let reclassified = classify_blocks(&block.content);
        assert_eq!(reclassified.len(), 1);
        assert_eq!(reclassified[0].kind, block.kind);
    }
}

#[test]
fn test_chunking_is_deterministic() {
    let markdown = include_str!("fixtures/mixed_structure.md");
    for strategy in [ChunkStrategy::SentenceOnly, ChunkStrategy::BlockAware] {
        let chunker = Chunker::builder().max_words(35).strategy(strategy).build();
        assert_eq!(chunker.chunk(markdown), chunker.chunk(markdown));
    }
}

#[test]
fn test_every_page_contributes_a_header_bearing_chunk() {
    let long_body: String = (0..60)
        .map(|_| "several words inside one sentence.")
        .collect::<Vec<_>>()
        .join(" ");
    let pages = vec![
        PageText::new(1, 3, "short first page."),
        PageText::new(2, 3, long_body),
        PageText::new(3, 3, "short last page."),
    ];

    let chunks = chunk_pages(&pages, 50);
    assert!(chunks.len() > 3, "oversized page should split");

    for number in 1..=3 {
        let header = format!("# Page {number} of 3");
        let carrying = chunks
            .iter()
            .filter(|c| c.content.starts_with(&header))
            .count();
        assert!(carrying >= 1, "page {number} lost its header");
        if number == 2 {
            assert!(carrying > 1, "split page must repeat its header");
        }
    }

    // Headers partition the chunk sequence: each chunk belongs to
    // exactly one page.
    assert_eq!(
        chunks.len(),
        chunks
            .iter()
            .filter(|c| c.content.starts_with("# Page "))
            .count()
    );
}

#[test]
fn test_comparison_report_covers_both_strategies() {
    let markdown = include_str!("fixtures/mixed_structure.md");
    let report = compare_strategies(markdown, 120);

    assert_eq!(report.strategies.len(), 2);
    let names: Vec<&str> = report.strategies.iter().map(|s| s.strategy.name()).collect();
    assert!(names.contains(&"sentence_only"));
    assert!(names.contains(&"block_aware"));

    let block_run = report
        .strategies
        .iter()
        .find(|s| s.strategy == ChunkStrategy::BlockAware)
        .unwrap();
    assert!(block_run.metrics.table_chunks >= 1);
    assert!(block_run.metrics.header_chunks >= 1);
}
