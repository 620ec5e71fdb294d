// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Request-path locale routing.
//!
//! Decides, for every inbound request path, whether the request proceeds
//! unchanged or is redirected to a locale-prefixed equivalent. The decision is
//! a pure function of the path; the HTTP layer turns it into a response.

use crate::locale::{DEFAULT_LOCALE, LOCALES};

/// Reserved prefix for server-internal endpoints (health, assets).
pub const INTERNAL_PREFIX: &str = "/_tailway";

/// Outcome of locale routing for one request path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocaleRoute {
	/// Serve the request as-is.
	PassThrough,
	/// Redirect to the contained path.
	Redirect(String),
}

/// Computes the locale routing decision for `path`.
///
/// Rules, first match wins:
/// 1. paths containing `.` (assets) or starting with [`INTERNAL_PREFIX`] pass through
/// 2. `/` redirects to `/<default>`
/// 3. paths not starting with `/<locale>` for any locale redirect to `/<default><path>`
/// 4. everything else passes through
///
/// Rule 3 is a plain string-prefix test, so `/english` passes through.
pub fn route_path(path: &str) -> LocaleRoute {
	if path.contains('.') || path.starts_with(INTERNAL_PREFIX) {
		return LocaleRoute::PassThrough;
	}

	if path == "/" {
		return LocaleRoute::Redirect(format!("/{DEFAULT_LOCALE}"));
	}

	let has_locale = LOCALES
		.iter()
		.any(|locale| path.strip_prefix('/').is_some_and(|rest| rest.starts_with(locale.as_str())));
	if !has_locale {
		return LocaleRoute::Redirect(format!("/{DEFAULT_LOCALE}{path}"));
	}

	LocaleRoute::PassThrough
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;

	#[test]
	fn root_redirects_to_default_locale() {
		assert_eq!(route_path("/"), LocaleRoute::Redirect("/en".to_string()));
	}

	#[test]
	fn bare_paths_gain_default_prefix() {
		assert_eq!(
			route_path("/guides"),
			LocaleRoute::Redirect("/en/guides".to_string())
		);
		assert_eq!(
			route_path("/directory/x"),
			LocaleRoute::Redirect("/en/directory/x".to_string())
		);
		assert_eq!(route_path("/de"), LocaleRoute::Redirect("/en/de".to_string()));
	}

	#[test]
	fn localized_paths_pass_through() {
		assert_eq!(route_path("/en"), LocaleRoute::PassThrough);
		assert_eq!(route_path("/nl/guides"), LocaleRoute::PassThrough);
		assert_eq!(route_path("/fr/directory"), LocaleRoute::PassThrough);
	}

	#[test]
	fn prefix_match_is_literal() {
		assert_eq!(route_path("/english"), LocaleRoute::PassThrough);
		assert_eq!(route_path("/frogs"), LocaleRoute::PassThrough);
	}

	#[test]
	fn assets_and_internal_paths_are_exempt() {
		assert_eq!(route_path("/favicon.ico"), LocaleRoute::PassThrough);
		assert_eq!(route_path("/images/dog.png"), LocaleRoute::PassThrough);
		assert_eq!(route_path("/_tailway/health"), LocaleRoute::PassThrough);
	}

	#[test]
	fn empty_path_redirects() {
		assert_eq!(route_path(""), LocaleRoute::Redirect("/en".to_string()));
	}

	proptest! {
		/// Any dotted path is treated as an asset.
		#[test]
		fn dotted_paths_never_redirect(a in "[a-z/]{0,12}", b in "[a-z]{1,4}") {
			let path = format!("/{a}.{b}");
			prop_assert_eq!(route_path(&path), LocaleRoute::PassThrough);
		}

		/// Paths under a locale prefix are never rewritten.
		#[test]
		fn locale_prefixed_paths_pass(idx in 0usize..3, rest in "(/[a-z0-9-]{1,8}){0,3}") {
			let path = format!("/{}{}", LOCALES[idx], rest);
			prop_assert_eq!(route_path(&path), LocaleRoute::PassThrough);
		}

		/// Bare paths redirect to the same path under the default locale.
		#[test]
		fn bare_paths_redirect_under_default(rest in "(/[a-z0-9-]{1,8}){1,3}") {
			let starts_with_locale = LOCALES
				.iter()
				.any(|l| rest.starts_with(&format!("/{l}")));
			prop_assume!(!starts_with_locale);
			prop_assert_eq!(route_path(&rest), LocaleRoute::Redirect(format!("/en{rest}")));
		}

		/// Redirect targets always pass through on the next request.
		#[test]
		fn redirect_targets_are_stable(rest in "(/[a-z0-9-]{0,8}){1,3}") {
			if let LocaleRoute::Redirect(target) = route_path(&rest) {
				prop_assert_eq!(route_path(&target), LocaleRoute::PassThrough);
			}
		}
	}
}
