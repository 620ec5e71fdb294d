// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Partial configuration layer, merged across sources.

use serde::Deserialize;

use crate::sections::{ContentConfigLayer, HttpConfigLayer, LoggingConfigLayer};

/// One source's view of the server configuration. Every field is optional so
/// that later sources only override what they actually set.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ServerConfigLayer {
	#[serde(default)]
	pub http: Option<HttpConfigLayer>,
	#[serde(default)]
	pub content: Option<ContentConfigLayer>,
	#[serde(default)]
	pub logging: Option<LoggingConfigLayer>,
}

impl ServerConfigLayer {
	/// Merge `other` on top of `self`; values present in `other` win.
	pub fn merge(&mut self, other: ServerConfigLayer) {
		if let Some(http) = other.http {
			self.http.get_or_insert_with(Default::default).merge(http);
		}
		if let Some(content) = other.content {
			self.content.get_or_insert_with(Default::default).merge(content);
		}
		if let Some(logging) = other.logging {
			self.logging.get_or_insert_with(Default::default).merge(logging);
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_merge_overrides_only_set_fields() {
		let mut base = ServerConfigLayer {
			http: Some(HttpConfigLayer {
				host: Some("127.0.0.1".to_string()),
				port: Some(8080),
				static_dir: None,
			}),
			..Default::default()
		};
		base.merge(ServerConfigLayer {
			http: Some(HttpConfigLayer {
				port: Some(9090),
				..Default::default()
			}),
			logging: Some(LoggingConfigLayer {
				level: Some("debug".to_string()),
			}),
			..Default::default()
		});

		let http = base.http.unwrap();
		assert_eq!(http.host.as_deref(), Some("127.0.0.1"));
		assert_eq!(http.port, Some(9090));
		assert_eq!(base.logging.unwrap().level.as_deref(), Some("debug"));
		assert!(base.content.is_none());
	}

	#[test]
	fn test_parse_from_toml() {
		let layer: ServerConfigLayer = toml::from_str(
			r#"
			[http]
			port = 4000
			static_dir = "./public"

			[content]
			base_url = "https://cms.example.org"
			timeout_secs = 5
			"#,
		)
		.unwrap();

		let http = layer.http.unwrap();
		assert_eq!(http.port, Some(4000));
		assert_eq!(http.static_dir.as_deref(), Some("./public"));
		let content = layer.content.unwrap();
		assert_eq!(content.base_url.as_deref(), Some("https://cms.example.org"));
		assert_eq!(content.timeout_secs, Some(5));
		assert!(layer.logging.is_none());
	}
}
