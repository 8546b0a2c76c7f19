// src/packer.rs

use log::{debug, trace};

use crate::block::{Block, PackPolicy};
use crate::metadata::{count_words, Chunk};
use crate::splitter::split_with_carry;

/// Consume classified blocks in order and emit bounded chunks.
///
/// One pass, one accumulator. Per-kind behavior comes from
/// [`PackPolicy`](crate::block::PackPolicy): atomic kinds (header,
/// list, code, table) pack whole and trigger a flush when they would
/// overflow a non-empty accumulator; images always attach; a
/// horizontal rule forces a boundary and is discarded; text re-splits
/// at paragraph and sentence boundaries.
///
/// Never fails: empty-content blocks are dropped, a zero budget
/// degenerates to one block (or one sentence) per chunk, and the only
/// chunks allowed past the budget are a lone atomic block or a lone
/// sentence that exceeds it by itself.
pub fn pack_blocks(blocks: &[Block], max_words: usize) -> Vec<Chunk> {
    let mut chunks: Vec<Chunk> = Vec::new();
    let mut acc: Vec<String> = Vec::new();
    let mut word_count = 0usize;

    for block in blocks {
        let block_words = block.word_count();
        trace!("block {:?}: {} words", block.kind, block_words);

        let policy = block.kind.policy();
        if block_words == 0 && policy != PackPolicy::Boundary {
            // Degenerate block, contributes nothing.
            continue;
        }

        match policy {
            PackPolicy::Boundary => {
                // Separator, never content.
                flush(&mut chunks, &mut acc, &mut word_count);
            }
            PackPolicy::AlwaysAttach => {
                acc.push(block.content.clone());
                word_count += block_words;
            }
            PackPolicy::Atomic => {
                if word_count + block_words > max_words && !acc.is_empty() {
                    flush(&mut chunks, &mut acc, &mut word_count);
                }
                acc.push(block.content.clone());
                word_count += block_words;
            }
            PackPolicy::Splittable => {
                if word_count + block_words <= max_words {
                    acc.push(block.content.clone());
                    word_count += block_words;
                    continue;
                }

                // The first sub-chunk tops off the open accumulator (it
                // comes back empty when nothing fits the remaining
                // allowance), middle sub-chunks are complete, and the
                // last one reopens accumulation so later blocks can
                // still pack into it.
                let mut subs = split_with_carry(&block.content, max_words, word_count);
                let tail = subs.pop().unwrap_or_default();

                let mut rest = subs.into_iter();
                if let Some(first) = rest.next() {
                    if !first.is_empty() {
                        acc.push(first);
                    }
                    flush(&mut chunks, &mut acc, &mut word_count);
                    for middle in rest {
                        debug!("split text chunk: {} words", count_words(&middle));
                        chunks.push(Chunk::new(middle));
                    }
                }
                if !tail.is_empty() {
                    word_count = count_words(&tail);
                    acc.push(tail);
                }
            }
        }
    }

    flush(&mut chunks, &mut acc, &mut word_count);
    chunks
}

fn flush(chunks: &mut Vec<Chunk>, acc: &mut Vec<String>, word_count: &mut usize) {
    if !acc.is_empty() {
        debug!("flushing chunk: {} blocks, {} words", acc.len(), word_count);
        chunks.push(Chunk::new(acc.join("\n\n")));
        acc.clear();
    }
    *word_count = 0;
}
