// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Locale resolution logic.

use crate::locale::{Locale, DEFAULT_LOCALE};

/// Resolve the effective locale for a request.
///
/// A supported candidate code wins; anything else (absent, empty, unknown)
/// resolves to [`DEFAULT_LOCALE`]. Unsupported locales are never an error.
///
/// # Example
///
/// ```
/// use tailway_common_i18n::{resolve_locale, Locale};
///
/// assert_eq!(resolve_locale(Some("fr")), Locale::Fr);
/// assert_eq!(resolve_locale(Some("de")), Locale::En);
/// assert_eq!(resolve_locale(None), Locale::En);
/// ```
pub fn resolve_locale(candidate: Option<&str>) -> Locale {
	candidate.and_then(Locale::parse).unwrap_or(DEFAULT_LOCALE)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_supported_candidate_takes_priority() {
		assert_eq!(resolve_locale(Some("nl")), Locale::Nl);
		assert_eq!(resolve_locale(Some("fr")), Locale::Fr);
		assert_eq!(resolve_locale(Some("en")), Locale::En);
	}

	#[test]
	fn test_fallback_to_default_when_unsupported() {
		assert_eq!(resolve_locale(Some("invalid")), DEFAULT_LOCALE);
		assert_eq!(resolve_locale(Some("de")), DEFAULT_LOCALE);
		assert_eq!(resolve_locale(Some("NL")), DEFAULT_LOCALE);
	}

	#[test]
	fn test_empty_string_is_invalid() {
		assert_eq!(resolve_locale(Some("")), DEFAULT_LOCALE);
		assert_eq!(resolve_locale(None), DEFAULT_LOCALE);
	}
}
