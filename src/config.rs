// Copyright (c) 2025 SemSplit
//
// Licensed under MIT License
// See LICENSE file in the project root for full license information.

use serde::Deserialize;
use std::env;

use crate::error::AppError;
use crate::text::ChunkerConfig;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub embedding: EmbeddingConfig,
    pub auth: AuthConfig,
    pub chunking: ChunkingConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct EmbeddingConfig {
    pub base_url: String,
    pub api_key: String,
    pub model: String,
    pub timeout_secs: u64,
    pub expected_dimension: Option<usize>,
}

/// Either a static key list or a remote key store; when both are
/// configured the remote store wins.
#[derive(Debug, Deserialize, Clone)]
pub struct AuthConfig {
    pub api_keys: Vec<String>,
    pub store_url: Option<String>,
    pub store_api_key: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ChunkingConfig {
    pub threshold_percentile: f64,
    pub buffer_size: usize,
    pub min_chunk_chars: usize,
}

impl From<&ChunkingConfig> for ChunkerConfig {
    fn from(config: &ChunkingConfig) -> Self {
        ChunkerConfig {
            threshold_percentile: config.threshold_percentile,
            buffer_size: config.buffer_size,
            min_chunk_chars: config.min_chunk_chars,
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()
            .unwrap_or(3000);

        let base_url =
            env::var("EMBEDDING_BASE_URL").unwrap_or_else(|_| "https://api.openai.com".to_string());
        let api_key = env::var("EMBEDDING_API_KEY")
            .map_err(|_| AppError::ConfigError("EMBEDDING_API_KEY is not set".to_string()))?;
        let model = env::var("EMBEDDING_MODEL")
            .unwrap_or_else(|_| "text-embedding-3-small".to_string());
        let timeout_secs = env::var("EMBEDDING_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".to_string())
            .parse()
            .unwrap_or(30);
        let expected_dimension = env::var("EMBEDDING_DIMENSION")
            .unwrap_or_else(|_| "".to_string())
            .parse()
            .ok();

        let api_keys = env::var("API_KEYS")
            .unwrap_or_else(|_| "".to_string())
            .split(',')
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .map(str::to_string)
            .collect();
        let store_url = env::var("KEY_STORE_URL").ok().filter(|url| !url.is_empty());
        let store_api_key = env::var("KEY_STORE_API_KEY")
            .ok()
            .filter(|key| !key.is_empty());

        let threshold_percentile = env::var("CHUNK_THRESHOLD_PERCENTILE")
            .unwrap_or_else(|_| "95".to_string())
            .parse()
            .unwrap_or(95.0);
        let buffer_size = env::var("CHUNK_BUFFER_SIZE")
            .unwrap_or_else(|_| "1".to_string())
            .parse()
            .unwrap_or(1);
        let min_chunk_chars = env::var("CHUNK_MIN_CHARS")
            .unwrap_or_else(|_| "0".to_string())
            .parse()
            .unwrap_or(0);

        if !(0.0..=100.0).contains(&threshold_percentile) {
            return Err(AppError::ConfigError(format!(
                "CHUNK_THRESHOLD_PERCENTILE must be within [0, 100], got {threshold_percentile}"
            )));
        }

        Ok(AppConfig {
            server: ServerConfig { host, port },
            embedding: EmbeddingConfig {
                base_url,
                api_key,
                model,
                timeout_secs,
                expected_dimension,
            },
            auth: AuthConfig {
                api_keys,
                store_url,
                store_api_key,
            },
            chunking: ChunkingConfig {
                threshold_percentile,
                buffer_size,
                min_chunk_chars,
            },
        })
    }
}
