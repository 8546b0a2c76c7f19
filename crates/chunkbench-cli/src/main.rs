//! chunkbench CLI - chunk parsed documents and compare chunk quality.
//!
//! Reads the markdown-like text an external document parser produced,
//! chunks it under a word budget, and emits the chunks or a quality
//! report as text, JSON or Markdown.

use std::fmt::Write as _;
use std::fs;
use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chunkbench_core::{
    compare_strategies, paginate_delimited, score, Chunk, ChunkStrategy, Chunker, JsonOptions,
    JsonSerializer, MarkdownSerializer, DEFAULT_MAX_WORDS,
};
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use log::debug;

#[derive(Parser, Debug)]
#[command(
    name = "chunkbench",
    about = "Chunk parsed documents and compare chunk quality",
    long_about = "Chunk the markdown-like output of a document parser under a word budget\n\
                  and score the result. Input is a plain text/markdown file, or a\n\
                  ---separated page dump when --pages is given.",
    version
)]
struct Args {
    /// Suppress the summary printed to stderr
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Chunk a document and emit the chunks
    Chunk {
        /// Input file path, or '-' to read from stdin
        #[arg(value_name = "INPUT")]
        input: String,

        /// Word budget per chunk
        #[arg(long, value_name = "N", default_value_t = DEFAULT_MAX_WORDS)]
        max_words: usize,

        /// Chunking strategy
        #[arg(short, long, value_enum, default_value_t = StrategyArg::BlockAware)]
        strategy: StrategyArg,

        /// Treat the input as a ---separated page dump and chunk
        /// page-aware (page headers are re-injected into every chunk)
        #[arg(long)]
        pages: bool,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = Format::Text)]
        format: Format,

        /// Output file path (default: stdout)
        #[arg(short, long, value_name = "OUTPUT")]
        output: Option<PathBuf>,

        /// Compact JSON output (no pretty-printing)
        #[arg(long)]
        compact: bool,
    },

    /// Run every strategy over a document and compare chunk quality
    Compare {
        /// Input file path, or '-' to read from stdin
        #[arg(value_name = "INPUT")]
        input: String,

        /// Word budget per chunk
        #[arg(long, value_name = "N", default_value_t = DEFAULT_MAX_WORDS)]
        max_words: usize,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = Format::Markdown)]
        format: Format,

        /// Output file path (default: stdout)
        #[arg(short, long, value_name = "OUTPUT")]
        output: Option<PathBuf>,

        /// Compact JSON output (no pretty-printing)
        #[arg(long)]
        compact: bool,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum StrategyArg {
    SentenceOnly,
    BlockAware,
}

impl From<StrategyArg> for ChunkStrategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::SentenceOnly => ChunkStrategy::SentenceOnly,
            StrategyArg::BlockAware => ChunkStrategy::BlockAware,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Format {
    Text,
    Json,
    Markdown,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    match args.command {
        Commands::Chunk {
            input,
            max_words,
            strategy,
            pages,
            format,
            output,
            compact,
        } => run_chunk(
            &input, max_words, strategy, pages, format, output, compact, args.quiet,
        ),
        Commands::Compare {
            input,
            max_words,
            format,
            output,
            compact,
        } => run_compare(&input, max_words, format, output, compact, args.quiet),
    }
}

#[allow(clippy::too_many_arguments, clippy::fn_params_excessive_bools)]
fn run_chunk(
    input: &str,
    max_words: usize,
    strategy: StrategyArg,
    pages: bool,
    format: Format,
    output: Option<PathBuf>,
    compact: bool,
    quiet: bool,
) -> Result<()> {
    let text = read_input(input)?;
    let chunker = Chunker::builder()
        .max_words(max_words)
        .strategy(strategy.into())
        .build();

    let chunks = if pages {
        let page_list = paginate_delimited(&text);
        debug!("paginated input into {} pages", page_list.len());
        chunker.chunk_pages(&page_list)
    } else {
        chunker.chunk(&text)
    };

    let rendered = match format {
        Format::Text => render_chunks_text(&chunks),
        Format::Json => JsonSerializer::with_options(JsonOptions { pretty: !compact })
            .serialize_chunks(&chunks)?,
        Format::Markdown => render_chunks_markdown(&chunks),
    };
    write_output(output.as_deref(), &rendered)?;

    if !quiet {
        let metrics = score(&chunks);
        eprintln!(
            "{} {} chunks, avg {:.1} words (budget {})",
            "✓".green(),
            chunks.len(),
            metrics.avg_chunk_size_words,
            max_words
        );
    }
    Ok(())
}

fn run_compare(
    input: &str,
    max_words: usize,
    format: Format,
    output: Option<PathBuf>,
    compact: bool,
    quiet: bool,
) -> Result<()> {
    let text = read_input(input)?;
    let report = compare_strategies(&text, max_words);

    let rendered = match format {
        Format::Json => JsonSerializer::with_options(JsonOptions { pretty: !compact })
            .serialize_report(&report)?,
        Format::Text | Format::Markdown => MarkdownSerializer::new().render_comparison(&report),
    };
    write_output(output.as_deref(), &rendered)?;

    if !quiet {
        eprintln!(
            "{} compared {} strategies (budget {})",
            "✓".green(),
            report.strategies.len(),
            max_words
        );
    }
    Ok(())
}

fn read_input(input: &str) -> Result<String> {
    if input == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read from stdin")?;
        Ok(buf)
    } else {
        fs::read_to_string(input).with_context(|| format!("failed to read {input}"))
    }
}

fn write_output(output: Option<&std::path::Path>, rendered: &str) -> Result<()> {
    match output {
        Some(path) => fs::write(path, rendered)
            .with_context(|| format!("failed to write {}", path.display())),
        None => {
            println!("{rendered}");
            Ok(())
        }
    }
}

fn render_chunks_text(chunks: &[Chunk]) -> String {
    let mut out = String::new();
    for (i, chunk) in chunks.iter().enumerate() {
        let _ = writeln!(out, "=== chunk {} ({} words) ===", i + 1, chunk.word_count);
        out.push_str(&chunk.content);
        out.push_str("\n\n");
    }
    out
}

fn render_chunks_markdown(chunks: &[Chunk]) -> String {
    let mut out = String::new();
    out.push_str("# Chunk run\n\n");
    out.push_str(&MarkdownSerializer::new().render_metrics(&score(chunks)));
    for (i, chunk) in chunks.iter().enumerate() {
        let _ = write!(
            out,
            "\n## Chunk {} ({} words)\n\n{}\n",
            i + 1,
            chunk.word_count,
            chunk.content
        );
    }
    out
}
