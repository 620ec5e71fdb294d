// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Directory listing filter.
//!
//! A listing is kept when it matches the free-text search AND the service
//! selection. Both predicates accept everything when empty. Input order is
//! preserved and the input is never modified.

use crate::listing::DirectoryListing;

/// Distance choices offered by the directory page, in kilometres.
pub const DISTANCE_OPTIONS_KM: [u32; 3] = [5, 10, 20];

pub const DEFAULT_DISTANCE_KM: u32 = 5;

/// The directory page's filter state for one request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingQuery {
	/// Free-text search. Only the empty string disables it.
	pub search: String,
	/// Selected service tags, either ids (`animalShelter`) or labels (`Animal Shelter`).
	pub tags: Vec<String>,
	/// Selected distance. Carried for display; listings are not narrowed by it.
	pub distance_km: Option<u32>,
}

impl ListingQuery {
	pub fn search(search: impl Into<String>) -> Self {
		Self {
			search: search.into(),
			..Default::default()
		}
	}

	pub fn with_tags<T: Into<String>>(mut self, tags: impl IntoIterator<Item = T>) -> Self {
		self.tags = tags.into_iter().map(Into::into).collect();
		self
	}

	/// Builds a query from page parameters. `tags` is comma separated; blank
	/// items are dropped. Distances outside [`DISTANCE_OPTIONS_KM`] are ignored.
	pub fn from_params(search: Option<&str>, tags: Option<&str>, distance_km: Option<u32>) -> Self {
		let tags = tags
			.map(|csv| {
				csv
					.split(',')
					.map(str::trim)
					.filter(|tag| !tag.is_empty())
					.map(str::to_string)
					.collect()
			})
			.unwrap_or_default();

		Self {
			search: search.unwrap_or_default().to_string(),
			tags,
			distance_km: distance_km.filter(|d| DISTANCE_OPTIONS_KM.contains(d)),
		}
	}

	pub fn selected_distance_km(&self) -> u32 {
		self.distance_km.unwrap_or(DEFAULT_DISTANCE_KM)
	}

	/// True when `tag_id` is among the selected tags after normalisation.
	pub fn is_tag_selected(&self, tag_id: &str) -> bool {
		let wanted = normalize_tag(tag_id);
		self.tags.iter().any(|tag| normalize_tag(tag) == wanted)
	}

	pub fn matches(&self, listing: &DirectoryListing) -> bool {
		Matcher::new(self).matches(listing)
	}
}

/// Strips all whitespace and lowercases, so that `Animal Shelter`,
/// `animalShelter` and `animal shelter` compare equal.
pub fn normalize_tag(tag: &str) -> String {
	tag
		.chars()
		.filter(|c| !c.is_whitespace())
		.flat_map(char::to_lowercase)
		.collect()
}

/// A query with its comparison keys computed once.
struct Matcher {
	needle: Option<String>,
	selected: Vec<String>,
}

impl Matcher {
	fn new(query: &ListingQuery) -> Self {
		Self {
			needle: (!query.search.is_empty()).then(|| query.search.to_lowercase()),
			selected: query.tags.iter().map(|tag| normalize_tag(tag)).collect(),
		}
	}

	fn matches(&self, listing: &DirectoryListing) -> bool {
		self.matches_search(listing) && self.matches_tags(listing)
	}

	fn matches_search(&self, listing: &DirectoryListing) -> bool {
		let Some(needle) = &self.needle else {
			return true;
		};
		let contains = |haystack: &str| haystack.to_lowercase().contains(needle.as_str());

		contains(&listing.name)
			|| contains(&listing.address)
			|| listing.tags.iter().any(|tag| contains(tag))
	}

	fn matches_tags(&self, listing: &DirectoryListing) -> bool {
		if self.selected.is_empty() {
			return true;
		}
		listing
			.tags
			.iter()
			.any(|tag| self.selected.contains(&normalize_tag(tag)))
	}
}

/// Returns the listings matching `query`, cloned, in input order.
pub fn filter_listings(listings: &[DirectoryListing], query: &ListingQuery) -> Vec<DirectoryListing> {
	filter_listings_ref(listings, query)
		.into_iter()
		.cloned()
		.collect()
}

/// Borrowing variant of [`filter_listings`].
pub fn filter_listings_ref<'a>(
	listings: &'a [DirectoryListing],
	query: &ListingQuery,
) -> Vec<&'a DirectoryListing> {
	let matcher = Matcher::new(query);
	listings
		.iter()
		.filter(|listing| matcher.matches(listing))
		.collect()
}
