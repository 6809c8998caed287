// Copyright (c) 2025 SemSplit
//
// Licensed under MIT License
// See LICENSE file in the project root for full license information.

pub mod auth;
pub mod config;
pub mod domain;
pub mod embedding;
pub mod error;
pub mod routes;
pub mod text;
pub mod utils;

use std::sync::Arc;

pub use auth::{Authorizer, KeyStore, RestKeyStore, StaticKeyStore};
pub use config::AppConfig;
pub use embedding::{EmbeddingProvider, OpenAiEmbeddingClient};
pub use error::AppError;
pub use routes::create_router;
pub use text::{ChunkerConfig, SemanticChunker};

/// Shared per-process dependencies, constructed once at startup and handed
/// to the router. Requests only read through the `Arc`s, so clones are cheap
/// and no request holds an exclusive lock.
#[derive(Clone)]
pub struct AppState {
    pub chunker: Arc<SemanticChunker>,
    pub authorizer: Arc<Authorizer>,
}

impl AppState {
    pub fn new(chunker: Arc<SemanticChunker>, authorizer: Arc<Authorizer>) -> Self {
        Self {
            chunker,
            authorizer,
        }
    }
}
