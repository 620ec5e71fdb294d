// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! The content API's collection response envelope.

use serde::{Deserialize, Serialize};

/// `{ "data": [...], "meta": { "pagination": {...} } }`
///
/// `data` is optional here so that a body missing it can be told apart from
/// an empty collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentEnvelope<T> {
	pub data: Option<Vec<T>>,
	#[serde(default)]
	pub meta: Option<ContentMeta>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContentMeta {
	#[serde(default)]
	pub pagination: Option<Pagination>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
	pub page: u32,
	pub page_size: u32,
	pub page_count: u32,
	pub total: u64,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn parses_full_envelope() {
		let json = r#"{
			"data": [1, 2, 3],
			"meta": { "pagination": { "page": 1, "pageSize": 25, "pageCount": 1, "total": 3 } }
		}"#;
		let envelope: ContentEnvelope<u32> = serde_json::from_str(json).unwrap();
		assert_eq!(envelope.data, Some(vec![1, 2, 3]));
		let pagination = envelope.meta.unwrap().pagination.unwrap();
		assert_eq!(pagination.page_size, 25);
		assert_eq!(pagination.total, 3);
	}

	#[test]
	fn missing_data_is_none_not_empty() {
		let envelope: ContentEnvelope<u32> = serde_json::from_str(r#"{"meta":{}}"#).unwrap();
		assert!(envelope.data.is_none());

		let envelope: ContentEnvelope<u32> = serde_json::from_str(r#"{"data":[]}"#).unwrap();
		assert_eq!(envelope.data, Some(vec![]));
	}
}
