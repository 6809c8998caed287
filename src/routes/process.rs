// Copyright (c) 2025 SemSplit
//
// Licensed under MIT License
// See LICENSE file in the project root for full license information.

//! The chunking endpoint.

use axum::{extract::State, Json};
use serde_json::Value;

use crate::domain::ProcessTextResponse;
use crate::error::AppError;
use crate::AppState;

/// Semantic chunking handler
///
/// Splits the submitted text into semantically coherent chunks. The API key
/// middleware has already run by the time this executes.
#[utoipa::path(
    post,
    path = "/process_text",
    tag = "chunking",
    request_body = crate::domain::ProcessTextRequest,
    responses(
        (status = 200, description = "Chunking successful", body = ProcessTextResponse),
        (status = 400, description = "Missing text data in request body"),
        (status = 401, description = "Missing or invalid API key"),
        (status = 500, description = "Embedding provider or segmentation failure")
    ),
    operation_id = "process_text"
)]
pub async fn process_text_handler(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> Result<Json<ProcessTextResponse>, AppError> {
    // Shape-checked by hand so `{}` and wrong-typed fields yield the
    // documented 400 body rather than a generic rejection.
    let text = payload
        .get("text")
        .and_then(Value::as_str)
        .ok_or_else(|| {
            AppError::MalformedRequest("Missing text data in request body".to_string())
        })?;

    let chunks = state.chunker.chunk(text).await?;

    Ok(Json(ProcessTextResponse { chunks }))
}
