// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Error types for the content API client.

use thiserror::Error;

/// Errors that can occur when fetching from the content API.
#[derive(Debug, Error)]
pub enum ContentError {
	/// The content API answered with a non-success status.
	#[error("API request failed: {status} {message}")]
	RequestFailed { status: u16, message: String },

	/// The body was not JSON, or lacked the expected `data` collection.
	#[error("Malformed response from content API: {0}")]
	MalformedResponse(String),

	/// Network-level error during HTTP communication.
	#[error("Network error: {0}")]
	Network(#[from] reqwest::Error),

	/// Request exceeded the configured timeout.
	#[error("Request timed out")]
	Timeout,

	/// The HTTP client could not be constructed.
	#[error("Failed to build HTTP client: {0}")]
	ClientBuild(String),
}

impl ContentError {
	/// HTTP status reported by the content API, if it answered at all.
	pub fn status(&self) -> Option<u16> {
		match self {
			ContentError::RequestFailed { status, .. } => Some(*status),
			_ => None,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_request_failed_display() {
		let err = ContentError::RequestFailed {
			status: 503,
			message: "Service Unavailable".to_string(),
		};
		assert_eq!(err.to_string(), "API request failed: 503 Service Unavailable");
		assert_eq!(err.status(), Some(503));
	}

	#[test]
	fn test_malformed_response_has_no_status() {
		let err = ContentError::MalformedResponse("missing data".to_string());
		assert!(err.to_string().contains("missing data"));
		assert_eq!(err.status(), None);
	}
}
