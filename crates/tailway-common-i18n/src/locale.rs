// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! The fixed locale registry.
//!
//! Adding a locale means adding a variant here, an entry in [`LOCALES`], and a
//! dictionary file under `dictionaries/`.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A supported locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
	En,
	Nl,
	Fr,
}

/// Every supported locale, in registry order.
pub const LOCALES: [Locale; 3] = [Locale::En, Locale::Nl, Locale::Fr];

/// The locale used for bare paths and unknown locale codes.
pub const DEFAULT_LOCALE: Locale = Locale::En;

impl Locale {
	/// Parses an exact locale code (`"en"`, `"nl"`, `"fr"`).
	pub fn parse(code: &str) -> Option<Self> {
		match code {
			"en" => Some(Locale::En),
			"nl" => Some(Locale::Nl),
			"fr" => Some(Locale::Fr),
			_ => None,
		}
	}

	pub const fn as_str(&self) -> &'static str {
		match self {
			Locale::En => "en",
			Locale::Nl => "nl",
			Locale::Fr => "fr",
		}
	}

	/// Position of this locale in [`LOCALES`].
	pub(crate) const fn index(&self) -> usize {
		match self {
			Locale::En => 0,
			Locale::Nl => 1,
			Locale::Fr => 2,
		}
	}

	/// Native display name, used by the language switcher.
	pub const fn native_name(&self) -> &'static str {
		match self {
			Locale::En => "English",
			Locale::Nl => "Nederlands",
			Locale::Fr => "Français",
		}
	}
}

impl Default for Locale {
	fn default() -> Self {
		DEFAULT_LOCALE
	}
}

impl fmt::Display for Locale {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Returns true if `code` names a supported locale.
pub fn is_supported(code: &str) -> bool {
	Locale::parse(code).is_some()
}

/// Route parameters for one locale-scoped page tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StaticParams {
	pub lang: Locale,
}

/// One `{ lang }` parameter set per supported locale, in registry order.
pub fn static_params() -> Vec<StaticParams> {
	LOCALES.iter().map(|&lang| StaticParams { lang }).collect()
}

/// An alternate-language link for page metadata (`hreflang` -> `href`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlternateLink {
	pub hreflang: String,
	pub href: String,
}

/// Alternate links: `x-default` pointing at `/`, then one per locale.
pub fn alternate_links() -> Vec<AlternateLink> {
	std::iter::once(AlternateLink {
		hreflang: "x-default".to_string(),
		href: "/".to_string(),
	})
	.chain(LOCALES.iter().map(|locale| AlternateLink {
		hreflang: locale.as_str().to_string(),
		href: format!("/{locale}"),
	}))
	.collect()
}

/// Computes the path the language switcher navigates to.
///
/// The current locale is taken from the first path segment, or the default
/// locale when the path has none. Its first `/<current>` occurrence is removed
/// and `/<target>` is prepended to what remains.
pub fn switch_locale_path(pathname: &str, target: Locale) -> String {
	let current = pathname
		.split('/')
		.nth(1)
		.filter(|segment| !segment.is_empty())
		.unwrap_or(DEFAULT_LOCALE.as_str());
	let rest = pathname.replacen(&format!("/{current}"), "", 1);
	format!("/{target}{rest}")
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn parse_accepts_registry_codes_only() {
		assert_eq!(Locale::parse("en"), Some(Locale::En));
		assert_eq!(Locale::parse("nl"), Some(Locale::Nl));
		assert_eq!(Locale::parse("fr"), Some(Locale::Fr));
		assert_eq!(Locale::parse("EN"), None);
		assert_eq!(Locale::parse("de"), None);
		assert_eq!(Locale::parse(""), None);
	}

	#[test]
	fn registry_round_trips_through_codes() {
		for locale in LOCALES {
			assert_eq!(Locale::parse(locale.as_str()), Some(locale));
			assert!(is_supported(&locale.to_string()));
		}
	}

	#[test]
	fn index_matches_registry_position() {
		for (i, locale) in LOCALES.iter().enumerate() {
			assert_eq!(locale.index(), i);
		}
	}

	#[test]
	fn default_locale_is_registered() {
		assert!(LOCALES.contains(&DEFAULT_LOCALE));
		assert_eq!(Locale::default(), Locale::En);
	}

	#[test]
	fn static_params_cover_every_locale_in_order() {
		let params = static_params();
		let langs: Vec<Locale> = params.iter().map(|p| p.lang).collect();
		assert_eq!(langs, LOCALES.to_vec());
	}

	#[test]
	fn alternate_links_start_with_x_default() {
		let links = alternate_links();
		assert_eq!(links.len(), LOCALES.len() + 1);
		assert_eq!(links[0].hreflang, "x-default");
		assert_eq!(links[0].href, "/");
		assert_eq!(links[2].hreflang, "nl");
		assert_eq!(links[2].href, "/nl");
	}

	#[test]
	fn switch_replaces_current_prefix() {
		assert_eq!(switch_locale_path("/nl/guides/dog", Locale::Fr), "/fr/guides/dog");
		assert_eq!(switch_locale_path("/en", Locale::Nl), "/nl");
		assert_eq!(switch_locale_path("/fr/directory", Locale::Fr), "/fr/directory");
	}

	#[test]
	fn switch_from_root_uses_default_locale() {
		assert_eq!(switch_locale_path("/", Locale::Nl), "/nl/");
		assert_eq!(switch_locale_path("", Locale::Fr), "/fr");
	}

	#[test]
	fn locale_serializes_as_code() {
		assert_eq!(serde_json::to_string(&Locale::Nl).unwrap(), "\"nl\"");
		assert_eq!(
			serde_json::to_string(&StaticParams { lang: Locale::Fr }).unwrap(),
			r#"{"lang":"fr"}"#
		);
	}
}
