// Copyright (c) 2025 SemSplit
//
// Licensed under MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body of `POST /process_text`.
///
/// The handler deserializes the raw JSON itself so a missing or wrong-typed
/// `text` field produces the documented 400 body; this type backs the API
/// docs and client-side serialization.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[schema(example = json!({"text": "The sky is blue. Bananas are yellow."}))]
pub struct ProcessTextRequest {
    /// The text to split into semantically coherent chunks.
    pub text: String,
}

/// Successful chunking result, chunks in original text order.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[schema(example = json!({"chunks": ["The sky is blue. Bananas are yellow.", "The ocean is deep."]}))]
pub struct ProcessTextResponse {
    pub chunks: Vec<String>,
}
