// Copyright (c) 2025 SemSplit
//
// Licensed under MIT License
// See LICENSE file in the project root for full license information.

//! Route definitions, kept out of main.rs for maintainability.

pub(crate) mod health;
pub(crate) mod process;

use axum::{http::HeaderValue, middleware, routing::get, routing::post, Router};
use std::time::Duration;
use tower_http::{
    set_header::SetResponseHeaderLayer, timeout::TimeoutLayer, trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::AppState;

/// Default request timeout (30 seconds)
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(OpenApi)]
#[openapi(
    info(
        title = "SemSplit API",
        version = "0.1.0",
        description = "Semantic text chunking service",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    ),
    paths(
        health::health_check,
        health::home,
        health::about,
        health::test_probe,
        process::process_text_handler,
    ),
    components(
        schemas(
            crate::domain::ProcessTextRequest,
            crate::domain::ProcessTextResponse,
        )
    ),
    tags(
        (name = "health", description = "Liveness probes"),
        (name = "chunking", description = "Semantic chunking")
    )
)]
pub(crate) struct ApiDoc;

/// Create unified router
///
/// Probe routes stay public; `/process_text` sits behind the API key
/// middleware with a request timeout.
pub fn create_router(state: AppState) -> Router {
    let openapi = ApiDoc::openapi();

    let public = Router::new()
        .route("/", get(health::home))
        .route("/about", get(health::about))
        .route("/test", get(health::test_probe))
        .route("/health", get(health::health_check))
        .with_state(state.clone());

    let protected = Router::new()
        .route("/process_text", post(process::process_text_handler))
        .with_state(state.clone())
        .layer(middleware::from_fn_with_state(
            state,
            crate::auth::api_key_middleware,
        ))
        .layer(TimeoutLayer::new(DEFAULT_TIMEOUT));

    Router::new()
        .merge(public)
        .merge(protected)
        .merge(SwaggerUi::new("/api-docs").url("/api-docs/openapi.json", openapi))
        .layer(TraceLayer::new_for_http())
        .layer(SetResponseHeaderLayer::overriding(
            axum::http::header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            axum::http::header::X_FRAME_OPTIONS,
            HeaderValue::from_static("DENY"),
        ))
}
