// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Request extractors.

use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use tailway_common_i18n::{resolve_locale, Locale};

/// The locale a page renders in, taken from the first path segment.
///
/// Never rejects: an unsupported segment resolves to the default locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLocale {
	pub locale: Locale,
	/// Request path, kept for building language-switcher links.
	pub path: String,
}

impl PageLocale {
	pub fn from_path(path: &str) -> Self {
		let segment = path.split('/').nth(1);
		Self {
			locale: resolve_locale(segment),
			path: path.to_string(),
		}
	}
}

impl<S> FromRequestParts<S> for PageLocale
where
	S: Send + Sync,
{
	type Rejection = Infallible;

	async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
		Ok(Self::from_path(parts.uri.path()))
	}
}
