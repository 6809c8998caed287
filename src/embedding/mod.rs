// Copyright (c) 2025 SemSplit
//
// Licensed under MIT License
// See LICENSE file in the project root for full license information.

pub mod openai;

use async_trait::async_trait;

use crate::error::AppError;

pub use openai::OpenAiEmbeddingClient;

/// Embedding provider abstraction.
///
/// The returned vectors are in the same order as the input texts, one per
/// text, all with the same dimension. Implementations surface transport,
/// timeout, and shape problems as [`AppError::EmbeddingProviderFailure`].
#[async_trait]
pub trait EmbeddingProvider: Send + Sync {
    async fn embed(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, AppError>;
}
