// Copyright (c) 2025 SemSplit
//
// Licensed under MIT License
// See LICENSE file in the project root for full license information.

//! Liveness probe routes. No contract beyond returning 200 with static text.

/// Basic health check handler
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is running normally", body = String)
    ),
    operation_id = "health_check"
)]
pub async fn health_check() -> &'static str {
    "OK"
}

#[utoipa::path(
    get,
    path = "/",
    tag = "health",
    responses((status = 200, body = String)),
    operation_id = "home"
)]
pub async fn home() -> &'static str {
    "Hello, World!"
}

#[utoipa::path(
    get,
    path = "/about",
    tag = "health",
    responses((status = 200, body = String)),
    operation_id = "about"
)]
pub async fn about() -> &'static str {
    "About"
}

#[utoipa::path(
    get,
    path = "/test",
    tag = "health",
    responses((status = 200, body = String)),
    operation_id = "test"
)]
pub async fn test_probe() -> &'static str {
    "test"
}
