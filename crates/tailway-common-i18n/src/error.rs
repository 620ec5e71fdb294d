// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use thiserror::Error;

use crate::Locale;

/// Errors raised while loading translation dictionaries.
///
/// Lookups never fail; only building a [`crate::DictionaryStore`] can.
#[derive(Debug, Error)]
pub enum I18nError {
	#[error("dictionary for locale '{locale}' is not valid JSON: {source}")]
	Parse {
		locale: Locale,
		#[source]
		source: serde_json::Error,
	},

	#[error("dictionary for locale '{0}' must be a JSON object at the top level")]
	InvalidDictionary(Locale),

	#[error("no dictionary provided for locale '{0}'")]
	MissingDictionary(Locale),
}
