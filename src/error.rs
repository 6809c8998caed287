// Copyright (c) 2025 SemSplit
//
// Licensed under MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Unauthorized. API key is missing.")]
    MissingCredential,

    #[error("Unauthorized. Invalid API key.")]
    InvalidCredential,

    #[error("Credential store unavailable: {0}")]
    CredentialStoreUnavailable(String),

    #[error("{0}")]
    MalformedRequest(String),

    #[error("Embedding provider error: {0}")]
    EmbeddingProviderFailure(String),

    #[error("Segmentation error: {0}")]
    SegmentationFailure(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::MissingCredential => (
                StatusCode::UNAUTHORIZED,
                json!({"message": "Unauthorized. API key is missing."}),
            ),
            AppError::InvalidCredential => (
                StatusCode::UNAUTHORIZED,
                json!({"message": "Unauthorized. Invalid API key."}),
            ),
            AppError::CredentialStoreUnavailable(detail) => {
                // Same body as an invalid key so callers cannot probe store health.
                tracing::warn!("key store lookup failed: {detail}");
                (
                    StatusCode::UNAUTHORIZED,
                    json!({"message": "Unauthorized. Invalid API key."}),
                )
            }
            AppError::MalformedRequest(msg) => (StatusCode::BAD_REQUEST, json!({"error": msg})),
            AppError::EmbeddingProviderFailure(msg) => {
                (StatusCode::INTERNAL_SERVER_ERROR, json!({"error": msg}))
            }
            AppError::SegmentationFailure(msg) => {
                (StatusCode::INTERNAL_SERVER_ERROR, json!({"error": msg}))
            }
            other => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({"error": other.to_string()}),
            ),
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_credential_maps_to_401() {
        let response = AppError::MissingCredential.into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn store_unavailable_maps_to_401() {
        let response =
            AppError::CredentialStoreUnavailable("connection refused".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn malformed_request_maps_to_400() {
        let response = AppError::MalformedRequest("Missing text data in request body".to_string())
            .into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn embedding_failure_maps_to_500() {
        let response =
            AppError::EmbeddingProviderFailure("provider returned status 503".to_string())
                .into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
