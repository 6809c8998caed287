// Copyright (c) 2025 SemSplit
//
// Licensed under MIT License
// See LICENSE file in the project root for full license information.

pub mod authorizer;
pub mod key_store;
pub mod middleware;

pub use authorizer::Authorizer;
pub use key_store::{KeyStore, RestKeyStore, StaticKeyStore};
pub use middleware::{api_key_middleware, API_KEY_HEADER};
