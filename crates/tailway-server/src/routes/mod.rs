// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! HTTP route handlers.

pub mod blog;
pub mod directory;
pub mod guides;
pub mod health;
pub mod home;

use axum::http::Uri;

use crate::error::ServerError;

/// Fallback for paths no page or asset answers.
pub async fn not_found(uri: Uri) -> ServerError {
	ServerError::NotFound(uri.path().to_string())
}
