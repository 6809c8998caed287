// Copyright (c) 2025 SemSplit
//
// Licensed under MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::error::AppError;
use crate::AppState;

pub const API_KEY_HEADER: &str = "x-api-key";

/// Runs the authorizer before the protected handler and short-circuits into
/// the 401 response on rejection. The request body is never touched here.
pub async fn api_key_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let presented = request
        .headers()
        .get(API_KEY_HEADER)
        .and_then(|value| value.to_str().ok());

    state.authorizer.authorize(presented).await?;

    Ok(next.run(request).await)
}
