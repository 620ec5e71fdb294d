// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Content API configuration.

use std::time::Duration;

use serde::Deserialize;

pub const DEFAULT_CONTENT_URL: &str = "http://localhost:1337";

/// Content API configuration (runtime, fully resolved).
#[derive(Debug, Clone)]
pub struct ContentConfig {
	pub base_url: String,
	/// Per-request bound; `None` leaves requests unbounded.
	pub timeout: Option<Duration>,
}

impl Default for ContentConfig {
	fn default() -> Self {
		Self {
			base_url: DEFAULT_CONTENT_URL.to_string(),
			timeout: None,
		}
	}
}

/// Content API configuration layer (partial, for merging).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContentConfigLayer {
	#[serde(default)]
	pub base_url: Option<String>,
	#[serde(default)]
	pub timeout_secs: Option<u64>,
}

impl ContentConfigLayer {
	pub fn merge(&mut self, other: ContentConfigLayer) {
		if other.base_url.is_some() {
			self.base_url = other.base_url;
		}
		if other.timeout_secs.is_some() {
			self.timeout_secs = other.timeout_secs;
		}
	}

	pub fn finalize(self) -> ContentConfig {
		ContentConfig {
			base_url: self
				.base_url
				.unwrap_or_else(|| DEFAULT_CONTENT_URL.to_string()),
			timeout: self
				.timeout_secs
				.filter(|secs| *secs > 0)
				.map(Duration::from_secs),
		}
	}
}
