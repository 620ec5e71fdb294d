// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Content API client implementation.

use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;
use tailway_common_i18n::Locale;
use tailway_content_core::{AnimalType, ContentEnvelope, DirectoryListing, Guide};
use tracing::{debug, error, instrument, trace};

use crate::error::ContentError;

/// Base URL used when none is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:1337";

const GUIDES_COLLECTION: &str = "animal-guides";
const LISTINGS_COLLECTION: &str = "directory-listings";
const ANIMAL_TYPE_FILTER: &str = "filters[animalType][$eq]";

/// Client for the headless content API.
#[derive(Debug, Clone)]
pub struct ContentClient {
	http_client: Client,
	base_url: String,
}

impl ContentClient {
	/// Creates a client for the given base URL.
	///
	/// With `timeout` unset, requests rely on the HTTP client's defaults.
	pub fn new(base_url: impl Into<String>, timeout: Option<Duration>) -> Result<Self, ContentError> {
		let http_client = match timeout {
			Some(timeout) => tailway_common_http::new_client_with_timeout(timeout),
			None => tailway_common_http::new_client(),
		}
		.map_err(|e| ContentError::ClientBuild(e.to_string()))?;

		Ok(Self {
			http_client,
			base_url: base_url.into().trim_end_matches('/').to_string(),
		})
	}

	/// Base URL requests are issued against, without a trailing slash.
	pub fn base_url(&self) -> &str {
		&self.base_url
	}

	/// Fetches guides for `locale`, optionally restricted to one animal type.
	#[instrument(skip(self), fields(locale = %locale))]
	pub async fn fetch_guides(
		&self,
		locale: Locale,
		animal_type: Option<AnimalType>,
	) -> Result<Vec<Guide>, ContentError> {
		let mut query = Vec::with_capacity(2);
		if let Some(animal_type) = animal_type {
			query.push((ANIMAL_TYPE_FILTER, animal_type.as_str()));
		}
		query.push(("locale", locale.as_str()));

		let guides: Vec<Guide> = self.fetch_collection(GUIDES_COLLECTION, &query).await?;
		debug!(count = guides.len(), "Fetched guides");
		Ok(guides)
	}

	/// Fetches all directory listings for `locale`.
	#[instrument(skip(self), fields(locale = %locale))]
	pub async fn fetch_directory_listings(
		&self,
		locale: Locale,
	) -> Result<Vec<DirectoryListing>, ContentError> {
		let query = [("locale", locale.as_str())];
		let listings: Vec<DirectoryListing> =
			self.fetch_collection(LISTINGS_COLLECTION, &query).await?;
		debug!(count = listings.len(), "Fetched directory listings");
		Ok(listings)
	}

	fn endpoint(&self, collection: &str) -> String {
		format!("{}/api/{}", self.base_url, collection)
	}

	async fn fetch_collection<T: DeserializeOwned>(
		&self,
		collection: &str,
		query: &[(&str, &str)],
	) -> Result<Vec<T>, ContentError> {
		let url = self.endpoint(collection);
		debug!(url = %url, "Sending request to content API");
		trace!(?query, "Query parameters");

		let response = self
			.http_client
			.get(&url)
			.query(query)
			.send()
			.await
			.map_err(|e| {
				if e.is_timeout() {
					error!("Request timed out");
					return ContentError::Timeout;
				}
				error!(error = %e, "Network error during content request");
				ContentError::Network(e)
			})?;

		let status = response.status();
		debug!(status = %status, "Received response from content API");

		if !status.is_success() {
			let status_code = status.as_u16();
			let body = response.text().await.unwrap_or_default();
			error!(status = status_code, body = %body, "Content API error");
			return Err(ContentError::RequestFailed {
				status: status_code,
				message: status.canonical_reason().unwrap_or("Unknown").to_string(),
			});
		}

		let body = response.text().await.map_err(|e| {
			if e.is_timeout() {
				error!("Timed out reading response body");
				return ContentError::Timeout;
			}
			error!(error = %e, "Failed to read response body");
			ContentError::Network(e)
		})?;

		trace!(body = %body, "Response body");

		let envelope: ContentEnvelope<T> = serde_json::from_str(&body).map_err(|e| {
			error!(error = %e, "Failed to parse content response");
			ContentError::MalformedResponse(format!("JSON parse error: {e}"))
		})?;

		envelope.data.ok_or_else(|| {
			error!("Content response has no data collection");
			ContentError::MalformedResponse("missing data collection".to_string())
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_new_strips_trailing_slash() {
		let client = ContentClient::new("http://cms.example:1337/", None).unwrap();
		assert_eq!(client.base_url(), "http://cms.example:1337");
		assert_eq!(
			client.endpoint(GUIDES_COLLECTION),
			"http://cms.example:1337/api/animal-guides"
		);
	}

	#[test]
	fn test_new_with_timeout() {
		let client = ContentClient::new(DEFAULT_BASE_URL, Some(Duration::from_secs(2))).unwrap();
		assert_eq!(
			client.endpoint(LISTINGS_COLLECTION),
			"http://localhost:1337/api/directory-listings"
		);
	}
}
