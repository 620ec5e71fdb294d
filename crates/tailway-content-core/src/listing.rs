// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Rescue service directory listings.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::serde_util::null_as_default;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
	pub latitude: f64,
	pub longitude: f64,
}

/// A rescue or veterinary service as served by the content API.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectoryListing {
	pub id: u64,
	#[serde(default)]
	pub document_id: Option<String>,
	#[serde(default, deserialize_with = "null_as_default")]
	pub name: String,
	#[serde(default, deserialize_with = "null_as_default")]
	pub address: String,
	#[serde(default)]
	pub phone: Option<String>,
	#[serde(default)]
	pub email: Option<String>,
	#[serde(default, deserialize_with = "null_as_default")]
	pub tags: Vec<String>,
	/// `None` when the content API does not know.
	#[serde(default)]
	pub is_emergency_service: Option<bool>,
	#[serde(default)]
	pub coordinates: Option<Coordinates>,
	#[serde(default)]
	pub created_at: Option<DateTime<Utc>>,
	#[serde(default)]
	pub updated_at: Option<DateTime<Utc>>,
	#[serde(default)]
	pub published_at: Option<DateTime<Utc>>,
	#[serde(default)]
	pub locale: Option<String>,
}

impl DirectoryListing {
	pub fn new<T: Into<String>>(
		id: u64,
		name: impl Into<String>,
		address: impl Into<String>,
		tags: impl IntoIterator<Item = T>,
	) -> Self {
		Self {
			id,
			name: name.into(),
			address: address.into(),
			tags: tags.into_iter().map(Into::into).collect(),
			..Default::default()
		}
	}

	/// True only when the listing is known to be an emergency service.
	pub fn is_emergency(&self) -> bool {
		self.is_emergency_service == Some(true)
	}
}

/// Service types offered as directory filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ServiceType {
	VeterinaryClinic,
	EmergencyCare,
	AnimalShelter,
	WildlifeRescue,
	Rehabilitation,
}

impl ServiceType {
	pub const ALL: [ServiceType; 5] = [
		ServiceType::VeterinaryClinic,
		ServiceType::EmergencyCare,
		ServiceType::AnimalShelter,
		ServiceType::WildlifeRescue,
		ServiceType::Rehabilitation,
	];

	/// Filter identifier, as sent in the directory page's `tags` parameter.
	pub const fn id(&self) -> &'static str {
		match self {
			ServiceType::VeterinaryClinic => "veterinaryClinic",
			ServiceType::EmergencyCare => "emergencyCare",
			ServiceType::AnimalShelter => "animalShelter",
			ServiceType::WildlifeRescue => "wildlifeRescue",
			ServiceType::Rehabilitation => "rehabilitation",
		}
	}

	pub fn label(&self) -> String {
		format_service_type(self.id())
	}
}

/// Turns a camelCase identifier into its display form: a space before every
/// capital and the first letter upper-cased (`animalShelter` -> `Animal Shelter`).
pub fn format_service_type(id: &str) -> String {
	let mut out = String::with_capacity(id.len() + 4);
	for c in id.chars() {
		if c.is_uppercase() {
			out.push(' ');
		}
		if out.is_empty() {
			out.extend(c.to_uppercase());
		} else {
			out.push(c);
		}
	}
	out.trim().to_string()
}
