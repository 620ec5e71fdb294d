// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Directory page handler.

use axum::extract::{RawQuery, State};
use serde::Serialize;
use tailway_common_i18n::Dictionary;
use tailway_content_core::{
	filter_listings_ref, format_service_type, Coordinates, DirectoryListing, ListingQuery,
	ServiceType, DISTANCE_OPTIONS_KM,
};
use tracing::{debug, instrument, warn};

use crate::{
	api::AppState,
	extract::PageLocale,
	views::{PageBody, PageView},
};

/// Query parameters of the directory page. Every field is optional text so
/// that malformed values degrade to "no filter" instead of a rejection.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct DirectoryParams {
	pub q: Option<String>,
	/// Comma separated. Repeated `tags` keys are joined in order.
	pub tags: Option<String>,
	pub distance: Option<String>,
}

impl DirectoryParams {
	/// Parses a raw query string. Repeated `q` and `distance` keys keep the
	/// last value; unknown keys are ignored.
	pub fn parse(raw: Option<&str>) -> Self {
		let mut params = Self::default();
		let mut tags: Vec<String> = Vec::new();
		for (key, value) in url::form_urlencoded::parse(raw.unwrap_or_default().as_bytes()) {
			match key.as_ref() {
				"q" => params.q = Some(value.into_owned()),
				"tags" if !value.trim().is_empty() => tags.push(value.into_owned()),
				"distance" => params.distance = Some(value.into_owned()),
				_ => {}
			}
		}
		if !tags.is_empty() {
			params.tags = Some(tags.join(","));
		}
		params
	}

	pub fn to_query(&self) -> ListingQuery {
		let distance = self.distance.as_deref().and_then(|d| d.trim().parse().ok());
		ListingQuery::from_params(self.q.as_deref(), self.tags.as_deref(), distance)
	}
}

#[derive(Debug, Clone, Serialize)]
pub struct DirectoryContent {
	pub title: String,
	pub subtitle: String,
	pub search: SearchView,
	pub filters: FilterPanel,
	pub total: usize,
	pub listings: Vec<ListingView>,
	/// Shown when nothing matches.
	pub no_results: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SearchView {
	pub placeholder: String,
	pub filters_label: String,
	pub query: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct FilterPanel {
	pub title: String,
	pub service_type_title: String,
	pub service_types: Vec<ServiceOption>,
	pub distance_title: String,
	pub distance_options: Vec<DistanceOption>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceOption {
	pub id: &'static str,
	pub label: String,
	pub checked: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DistanceOption {
	pub km: u32,
	pub label: String,
	pub selected: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct ListingView {
	pub id: u64,
	pub name: String,
	pub address: String,
	pub phone: Option<String>,
	pub email: Option<String>,
	pub tags: Vec<String>,
	/// Localized emergency badge, present only for 24/7 services.
	pub emergency: Option<String>,
	pub coordinates: Option<Coordinates>,
}

/// GET /{lang}/directory?q=&tags=&distance=
#[instrument(skip_all, fields(locale = %page.locale))]
pub async fn directory_page(
	State(state): State<AppState>,
	page: PageLocale,
	RawQuery(raw): RawQuery,
) -> PageView<DirectoryContent> {
	let dict = state.dictionaries.get(page.locale);
	let query = DirectoryParams::parse(raw.as_deref()).to_query();

	let body = match state.content.directory_listings(page.locale).await {
		Ok(listings) => PageBody::Ready {
			content: directory_content(dict, &listings, &query),
		},
		Err(e) => {
			warn!(error = %e, "directory listings unavailable");
			PageBody::error(dict, e)
		}
	};

	PageView::new(dict, &page, body)
}

fn directory_content(
	dict: &Dictionary,
	listings: &[DirectoryListing],
	query: &ListingQuery,
) -> DirectoryContent {
	let listings: Vec<ListingView> = filter_listings_ref(listings, query)
		.into_iter()
		.map(|listing| listing_view(dict, listing))
		.collect();
	debug!(matched = listings.len(), "directory filtered");

	let selected_km = query.selected_distance_km();
	DirectoryContent {
		title: dict.t("directory.title"),
		subtitle: dict.t("directory.subtitle"),
		search: SearchView {
			placeholder: dict.t("directory.search.placeholder"),
			filters_label: dict.t("directory.search.filters"),
			query: query.search.clone(),
		},
		filters: FilterPanel {
			title: dict.t("directory.filters.title"),
			service_type_title: dict.t("directory.filters.serviceType"),
			service_types: ServiceType::ALL
				.iter()
				.map(|service| ServiceOption {
					id: service.id(),
					label: service.label(),
					checked: query.is_tag_selected(service.id()),
				})
				.collect(),
			distance_title: dict.t("directory.filters.distance"),
			distance_options: DISTANCE_OPTIONS_KM
				.iter()
				.map(|&km| DistanceOption {
					km,
					label: dict.t(&format!("directory.filters.distanceOptions.{km}")),
					selected: km == selected_km,
				})
				.collect(),
		},
		total: listings.len(),
		no_results: listings.is_empty().then(|| dict.t("common.noResults")),
		listings,
	}
}

fn listing_view(dict: &Dictionary, listing: &DirectoryListing) -> ListingView {
	ListingView {
		id: listing.id,
		name: listing.name.clone(),
		address: listing.address.clone(),
		phone: listing.phone.clone(),
		email: listing.email.clone(),
		tags: listing.tags.iter().map(|tag| format_service_type(tag)).collect(),
		emergency: listing
			.is_emergency()
			.then(|| dict.t("directory.listing.emergency")),
		coordinates: listing.coordinates,
	}
}
