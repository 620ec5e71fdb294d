// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Tailway animal rescue site server.
//!
//! This crate serves the localized pages of the site (home, guides, guide
//! detail, directory, blog) as JSON view models, backed by the headless
//! content API and the embedded translation dictionaries.

pub mod api;
pub mod error;
pub mod extract;
pub mod locale_middleware;
pub mod routes;
pub mod version;
pub mod views;

pub use api::{create_app_state, create_router, page_paths, AppState};
pub use error::ServerError;
pub use extract::PageLocale;
pub use tailway_server_config::ServerConfig;
