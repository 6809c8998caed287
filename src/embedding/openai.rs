// Copyright (c) 2025 SemSplit
//
// Licensed under MIT License
// See LICENSE file in the project root for full license information.

//! OpenAI-compatible embedding client.
//!
//! Talks to any `/v1/embeddings` endpoint that follows the OpenAI
//! Embeddings API shape. See: https://platform.openai.com/docs/api-reference/embeddings

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;
use tracing::debug;

use crate::config::EmbeddingConfig;
use crate::embedding::EmbeddingProvider;
use crate::error::AppError;

pub struct OpenAiEmbeddingClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
    expected_dimension: Option<usize>,
}

#[derive(Debug, Deserialize)]
struct EmbeddingsResponse {
    data: Vec<EmbeddingItem>,
}

#[derive(Debug, Deserialize)]
struct EmbeddingItem {
    embedding: Vec<f32>,
    index: usize,
}

impl OpenAiEmbeddingClient {
    pub fn new(config: &EmbeddingConfig) -> Result<Self, AppError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::ConfigError(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            expected_dimension: config.expected_dimension,
        })
    }
}

#[async_trait]
impl EmbeddingProvider for OpenAiEmbeddingClient {
    async fn embed(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, AppError> {
        if texts.is_empty() {
            return Ok(Vec::new());
        }

        let url = format!("{}/v1/embeddings", self.base_url);
        let body = json!({
            "model": self.model,
            "input": texts,
        });

        debug!("embedding request for {} texts to {}", texts.len(), url);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    AppError::EmbeddingProviderFailure(
                        "embedding provider timed out".to_string(),
                    )
                } else {
                    AppError::EmbeddingProviderFailure(format!("embedding request failed: {e}"))
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::EmbeddingProviderFailure(format!(
                "embedding provider returned status {}",
                status.as_u16()
            )));
        }

        let parsed: EmbeddingsResponse = response.json().await.map_err(|e| {
            AppError::EmbeddingProviderFailure(format!("invalid embedding response: {e}"))
        })?;

        // The API may return items out of order; the index field is authoritative.
        let mut items = parsed.data;
        items.sort_by_key(|item| item.index);

        if items.len() != texts.len() {
            return Err(AppError::EmbeddingProviderFailure(format!(
                "embedding count mismatch: requested {}, received {}",
                texts.len(),
                items.len()
            )));
        }

        let dimension = self
            .expected_dimension
            .unwrap_or_else(|| items[0].embedding.len());
        if let Some(item) = items.iter().find(|item| item.embedding.len() != dimension) {
            return Err(AppError::EmbeddingProviderFailure(format!(
                "embedding dimension mismatch: expected {}, received {}",
                dimension,
                item.embedding.len()
            )));
        }

        Ok(items.into_iter().map(|item| item.embedding).collect())
    }
}
