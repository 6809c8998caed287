// Copyright (c) 2025 SemSplit
//
// Licensed under MIT License
// See LICENSE file in the project root for full license information.

use std::sync::Arc;

use crate::auth::key_store::KeyStore;
use crate::error::AppError;

/// Validates a presented API key against the key store.
///
/// Fail closed: a missing header, an unreachable store, and an empty store
/// all reject. Keys compare byte-for-byte, no normalization. Key material is
/// never logged.
pub struct Authorizer {
    store: Arc<dyn KeyStore>,
}

impl Authorizer {
    pub fn new(store: Arc<dyn KeyStore>) -> Self {
        Self { store }
    }

    pub async fn authorize(&self, presented: Option<&str>) -> Result<(), AppError> {
        let presented = presented.ok_or(AppError::MissingCredential)?;

        let keys = self.store.list_valid_keys().await.map_err(|err| match err {
            err @ AppError::CredentialStoreUnavailable(_) => err,
            other => AppError::CredentialStoreUnavailable(other.to_string()),
        })?;

        if keys.is_empty() {
            return Err(AppError::CredentialStoreUnavailable(
                "key store returned no keys".to_string(),
            ));
        }

        if keys.iter().any(|key| key == presented) {
            Ok(())
        } else {
            Err(AppError::InvalidCredential)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::key_store::StaticKeyStore;
    use async_trait::async_trait;

    struct FailingStore;

    #[async_trait]
    impl KeyStore for FailingStore {
        async fn list_valid_keys(&self) -> Result<Vec<String>, AppError> {
            Err(AppError::CredentialStoreUnavailable(
                "connection refused".to_string(),
            ))
        }
    }

    fn authorizer_with_keys(keys: Vec<&str>) -> Authorizer {
        Authorizer::new(Arc::new(StaticKeyStore::new(
            keys.into_iter().map(str::to_string).collect(),
        )))
    }

    #[tokio::test]
    async fn missing_key_is_rejected_without_store_read() {
        let authorizer = Authorizer::new(Arc::new(FailingStore));
        let err = authorizer.authorize(None).await.unwrap_err();
        assert!(matches!(err, AppError::MissingCredential));
    }

    #[tokio::test]
    async fn matching_key_is_authorized() {
        let authorizer = authorizer_with_keys(vec!["secret-key"]);
        assert!(authorizer.authorize(Some("secret-key")).await.is_ok());
    }

    #[tokio::test]
    async fn unknown_key_is_rejected() {
        let authorizer = authorizer_with_keys(vec!["secret-key"]);
        let err = authorizer.authorize(Some("wrong-key")).await.unwrap_err();
        assert!(matches!(err, AppError::InvalidCredential));
    }

    #[tokio::test]
    async fn key_comparison_is_case_sensitive() {
        let authorizer = authorizer_with_keys(vec!["Secret-Key"]);
        let err = authorizer.authorize(Some("secret-key")).await.unwrap_err();
        assert!(matches!(err, AppError::InvalidCredential));
    }

    #[tokio::test]
    async fn empty_store_rejects() {
        let authorizer = authorizer_with_keys(vec![]);
        let err = authorizer.authorize(Some("any-key")).await.unwrap_err();
        assert!(matches!(err, AppError::CredentialStoreUnavailable(_)));
    }

    #[tokio::test]
    async fn store_failure_rejects() {
        let authorizer = Authorizer::new(Arc::new(FailingStore));
        let err = authorizer.authorize(Some("secret-key")).await.unwrap_err();
        assert!(matches!(err, AppError::CredentialStoreUnavailable(_)));
    }
}
