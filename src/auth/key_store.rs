// Copyright (c) 2025 SemSplit
//
// Licensed under MIT License
// See LICENSE file in the project root for full license information.

//! Read-only sources of valid API keys.

use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;

use crate::error::AppError;

const REST_STORE_TIMEOUT: Duration = Duration::from_secs(10);

/// Read-only key lookup; the storage backend is swappable so tests can run
/// against an in-memory store.
#[async_trait]
pub trait KeyStore: Send + Sync {
    async fn list_valid_keys(&self) -> Result<Vec<String>, AppError>;
}

/// Fixed key set, configured from the environment at startup. Also the test
/// double for the remote store.
pub struct StaticKeyStore {
    keys: Vec<String>,
}

impl StaticKeyStore {
    pub fn new(keys: Vec<String>) -> Self {
        Self { keys }
    }
}

#[async_trait]
impl KeyStore for StaticKeyStore {
    async fn list_valid_keys(&self) -> Result<Vec<String>, AppError> {
        Ok(self.keys.clone())
    }
}

/// Remote key store exposing a PostgREST-style read of an `api_keys` table.
pub struct RestKeyStore {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

#[derive(Debug, Deserialize)]
struct KeyRow {
    api_key: String,
}

impl RestKeyStore {
    pub fn new(base_url: String, api_key: String) -> Result<Self, AppError> {
        let client = reqwest::Client::builder()
            .timeout(REST_STORE_TIMEOUT)
            .build()
            .map_err(|e| AppError::ConfigError(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        })
    }
}

#[async_trait]
impl KeyStore for RestKeyStore {
    async fn list_valid_keys(&self) -> Result<Vec<String>, AppError> {
        let url = format!("{}/rest/v1/api_keys?select=api_key", self.base_url);

        let response = self
            .client
            .get(&url)
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .send()
            .await
            .map_err(|e| AppError::CredentialStoreUnavailable(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::CredentialStoreUnavailable(format!(
                "key store returned status {}",
                status.as_u16()
            )));
        }

        let rows: Vec<KeyRow> = response
            .json()
            .await
            .map_err(|e| AppError::CredentialStoreUnavailable(e.to_string()))?;

        Ok(rows.into_iter().map(|row| row.api_key).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    #[tokio::test]
    async fn static_store_returns_configured_keys() {
        let store = StaticKeyStore::new(vec!["alpha".to_string(), "beta".to_string()]);
        let keys = store.list_valid_keys().await.unwrap();
        assert_eq!(keys, vec!["alpha".to_string(), "beta".to_string()]);
    }

    #[tokio::test]
    async fn rest_store_parses_key_rows() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/rest/v1/api_keys")
                    .query_param("select", "api_key")
                    .header("apikey", "service-key");
                then.status(200)
                    .json_body(serde_json::json!([{"api_key": "stored-key"}]));
            })
            .await;

        let store = RestKeyStore::new(server.base_url(), "service-key".to_string()).unwrap();
        let keys = store.list_valid_keys().await.unwrap();

        mock.assert_async().await;
        assert_eq!(keys, vec!["stored-key".to_string()]);
    }

    #[tokio::test]
    async fn rest_store_maps_failure_to_store_unavailable() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/rest/v1/api_keys");
                then.status(500);
            })
            .await;

        let store = RestKeyStore::new(server.base_url(), "service-key".to_string()).unwrap();
        let err = store.list_valid_keys().await.unwrap_err();
        assert!(matches!(err, AppError::CredentialStoreUnavailable(_)));
    }
}
