// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

use async_trait::async_trait;
use tailway_common_i18n::Locale;
use tailway_content_core::{AnimalType, DirectoryListing, Guide};

use crate::client::ContentClient;
use crate::error::ContentError;

/// Anything that can supply localized guides and directory listings.
///
/// The server holds one of these behind an `Arc<dyn ContentSource>`.
#[async_trait]
pub trait ContentSource: Send + Sync {
	async fn guides(
		&self,
		locale: Locale,
		animal_type: Option<AnimalType>,
	) -> Result<Vec<Guide>, ContentError>;

	async fn directory_listings(&self, locale: Locale) -> Result<Vec<DirectoryListing>, ContentError>;
}

#[async_trait]
impl ContentSource for ContentClient {
	async fn guides(
		&self,
		locale: Locale,
		animal_type: Option<AnimalType>,
	) -> Result<Vec<Guide>, ContentError> {
		self.fetch_guides(locale, animal_type).await
	}

	async fn directory_listings(&self, locale: Locale) -> Result<Vec<DirectoryListing>, ContentError> {
		self.fetch_directory_listings(locale).await
	}
}
