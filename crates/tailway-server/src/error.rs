// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Server error type.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use tailway_common_i18n::I18nError;
use tailway_content::ContentError;
use tailway_server_config::ConfigError;

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
	#[error("not found: {0}")]
	NotFound(String),
	#[error(transparent)]
	Config(#[from] ConfigError),
	#[error(transparent)]
	Dictionary(#[from] I18nError),
	#[error(transparent)]
	Content(#[from] ContentError),
}

impl IntoResponse for ServerError {
	fn into_response(self) -> Response {
		let status = match &self {
			ServerError::NotFound(_) => StatusCode::NOT_FOUND,
			ServerError::Content(_) => StatusCode::BAD_GATEWAY,
			ServerError::Config(_) | ServerError::Dictionary(_) => StatusCode::INTERNAL_SERVER_ERROR,
		};

		if status.is_server_error() {
			tracing::error!(error = %self, "request failed");
		}

		(status, Json(json!({ "error": self.to_string() }))).into_response()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_not_found_status() {
		let response = ServerError::NotFound("/nope".to_string()).into_response();
		assert_eq!(response.status(), StatusCode::NOT_FOUND);
	}

	#[test]
	fn test_content_error_is_bad_gateway() {
		let response = ServerError::from(ContentError::Timeout).into_response();
		assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
	}
}
