// Copyright (c) 2025 SemSplit
//
// Licensed under MIT License
// See LICENSE file in the project root for full license information.

use std::sync::Arc;

use semsplit::{
    auth::{Authorizer, KeyStore, RestKeyStore, StaticKeyStore},
    create_router,
    embedding::{EmbeddingProvider, OpenAiEmbeddingClient},
    text::{ChunkerConfig, SemanticChunker},
    AppConfig, AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    tracing::info!("Starting semantic chunking service...");

    let config = AppConfig::load()?;
    tracing::info!(
        "Configuration loaded: model={}, threshold_percentile={}, buffer_size={}",
        config.embedding.model,
        config.chunking.threshold_percentile,
        config.chunking.buffer_size
    );

    let provider: Arc<dyn EmbeddingProvider> =
        Arc::new(OpenAiEmbeddingClient::new(&config.embedding)?);

    let key_store: Arc<dyn KeyStore> = match &config.auth.store_url {
        Some(store_url) => {
            tracing::info!("Using remote key store");
            Arc::new(RestKeyStore::new(
                store_url.clone(),
                config.auth.store_api_key.clone().unwrap_or_default(),
            )?)
        }
        None => {
            if config.auth.api_keys.is_empty() {
                tracing::warn!("No API keys configured; every request will be rejected");
            }
            Arc::new(StaticKeyStore::new(config.auth.api_keys.clone()))
        }
    };

    let authorizer = Arc::new(Authorizer::new(key_store));
    let chunker = Arc::new(SemanticChunker::new(
        provider,
        ChunkerConfig::from(&config.chunking),
    ));

    let app = create_router(AppState::new(chunker, authorizer));

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
