// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Internationalization (i18n) support for Tailway.
//!
//! This crate owns everything locale-shaped:
//!
//! - the fixed locale registry (`en`, `nl`, `fr`, default `en`)
//! - resolution of arbitrary locale codes to a supported [`Locale`]
//! - the request-path routing decision that adds a locale prefix to bare paths
//! - per-locale translation dictionaries with fallback to the default locale
//!
//! # Key Naming Convention
//!
//! Dictionary keys use a hierarchical dot-notation path into the JSON tree:
//!
//! - `common.` for shared loading/error strings
//! - `home.`, `guides.`, `guide.`, `directory.`, `blog.` for page sections
//!
//! Example: `home.nav.guides`
//!
//! # Example
//!
//! ```
//! use tailway_common_i18n::{resolve_locale, route_path, DictionaryStore, Locale, LocaleRoute};
//!
//! let store = DictionaryStore::embedded().unwrap();
//!
//! // Unknown locales fall back to the default dictionary
//! let dict = store.resolve("de");
//! assert_eq!(dict.t("home.nav.guides"), store.get(Locale::En).t("home.nav.guides"));
//!
//! // Bare paths gain the default locale prefix
//! assert_eq!(route_path("/guides"), LocaleRoute::Redirect("/en/guides".to_string()));
//!
//! assert_eq!(resolve_locale(Some("nl")), Locale::Nl);
//! ```

mod dictionary;
mod error;
mod locale;
mod resolve;
mod route;

pub use dictionary::{Dictionary, DictionaryStore};
pub use error::I18nError;
pub use locale::{
	alternate_links, is_supported, static_params, switch_locale_path, AlternateLink, Locale,
	StaticParams, DEFAULT_LOCALE, LOCALES,
};
pub use resolve::resolve_locale;
pub use route::{route_path, LocaleRoute, INTERNAL_PREFIX};
