// Copyright (c) 2025 SemSplit
//
// Licensed under MIT License
// See LICENSE file in the project root for full license information.

//! Embedding-driven topic segmentation.
//!
//! Sentences are embedded in order, consecutive pairs are scored with cosine
//! distance, and a breakpoint is placed wherever the distance exceeds a
//! percentile of this request's own distance distribution. The threshold is
//! recomputed per request, so the cutoff adapts to each document's variance
//! instead of using one absolute constant.

use std::sync::Arc;
use tracing::debug;

use crate::embedding::EmbeddingProvider;
use crate::error::AppError;
use crate::text::splitter::{split_sentences, Sentence};
use crate::utils::{cosine_distance, percentile};

#[derive(Debug, Clone)]
pub struct ChunkerConfig {
    /// Percentile of the observed distance distribution used as the
    /// breakpoint threshold.
    pub threshold_percentile: f64,
    /// Neighboring sentences combined with each sentence before embedding.
    /// 0 and 1 both mean the sentence is embedded alone.
    pub buffer_size: usize,
    /// Chunks shorter than this merge into a neighbor; 0 disables the pass.
    pub min_chunk_chars: usize,
}

impl Default for ChunkerConfig {
    fn default() -> Self {
        Self {
            threshold_percentile: 95.0,
            buffer_size: 1,
            min_chunk_chars: 0,
        }
    }
}

pub struct SemanticChunker {
    provider: Arc<dyn EmbeddingProvider>,
    config: ChunkerConfig,
}

impl SemanticChunker {
    pub fn new(provider: Arc<dyn EmbeddingProvider>, config: ChunkerConfig) -> Self {
        Self { provider, config }
    }

    /// Splits `text` into semantically coherent chunks, in original order.
    pub async fn chunk(&self, text: &str) -> Result<Vec<String>, AppError> {
        let sentences = split_sentences(text);

        if sentences.is_empty() {
            return Ok(Vec::new());
        }
        if sentences.len() == 1 {
            return Ok(vec![sentences[0].text.clone()]);
        }

        let windows = build_windows(&sentences, self.config.buffer_size);
        let embeddings = self.provider.embed(&windows).await?;

        if embeddings.len() != sentences.len() {
            return Err(AppError::SegmentationFailure(format!(
                "expected {} embeddings, received {}",
                sentences.len(),
                embeddings.len()
            )));
        }

        let mut distances = Vec::with_capacity(sentences.len() - 1);
        for pair in embeddings.windows(2) {
            distances.push(cosine_distance(&pair[0], &pair[1])?);
        }

        let threshold = percentile(&distances, self.config.threshold_percentile);
        let breakpoints: Vec<usize> = distances
            .iter()
            .enumerate()
            .filter(|(_, distance)| **distance > threshold)
            .map(|(index, _)| index)
            .collect();

        debug!(
            sentences = sentences.len(),
            breakpoints = breakpoints.len(),
            threshold,
            "semantic chunking complete"
        );

        let mut chunks = assemble_chunks(&sentences, &breakpoints);
        if self.config.min_chunk_chars > 0 {
            chunks = merge_small_chunks(chunks, self.config.min_chunk_chars);
        }

        Ok(chunks)
    }
}

/// Combines each sentence with `buffer_size` neighbors on each side to give
/// the embedding model more context than a lone short sentence. Values 0 and
/// 1 collapse the window to the sentence itself.
fn build_windows(sentences: &[Sentence], buffer_size: usize) -> Vec<String> {
    let radius = if buffer_size <= 1 { 0 } else { buffer_size };

    sentences
        .iter()
        .enumerate()
        .map(|(i, sentence)| {
            if radius == 0 {
                return sentence.text.clone();
            }
            let lo = i.saturating_sub(radius);
            let hi = (i + radius + 1).min(sentences.len());
            sentences[lo..hi]
                .iter()
                .map(|s| s.text.as_str())
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}

/// Slices the sentence sequence at breakpoints into maximal runs, joining
/// each run into one chunk string. A breakpoint at index `i` means a
/// boundary between sentence `i` and `i + 1`.
fn assemble_chunks(sentences: &[Sentence], breakpoints: &[usize]) -> Vec<String> {
    let mut chunks = Vec::with_capacity(breakpoints.len() + 1);
    let mut run_start = 0;

    for &breakpoint in breakpoints {
        chunks.push(join_run(&sentences[run_start..=breakpoint]));
        run_start = breakpoint + 1;
    }
    chunks.push(join_run(&sentences[run_start..]));

    chunks
}

fn join_run(run: &[Sentence]) -> String {
    run.iter()
        .map(|s| s.text.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Left-to-right merge pass: a chunk shorter than `min_chars` merges into
/// the following chunk; a short final chunk merges into the preceding one.
fn merge_small_chunks(chunks: Vec<String>, min_chars: usize) -> Vec<String> {
    let mut merged: Vec<String> = Vec::with_capacity(chunks.len());
    let mut carry: Option<String> = None;

    for chunk in chunks {
        let candidate = match carry.take() {
            Some(prev) => format!("{prev} {chunk}"),
            None => chunk,
        };
        if candidate.chars().count() < min_chars {
            carry = Some(candidate);
        } else {
            merged.push(candidate);
        }
    }

    if let Some(rest) = carry {
        match merged.last_mut() {
            Some(last) => {
                last.push(' ');
                last.push_str(&rest);
            }
            None => merged.push(rest),
        }
    }

    merged
}
