// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Translation dictionaries.
//!
//! Each locale has one JSON tree of UI strings, compiled into the binary and
//! parsed once at startup. Lookups by unknown locale fall back to the default
//! locale's tree; lookups by missing key fall back to the key itself.

use serde_json::Value;
use tracing::{debug, warn};

use crate::error::I18nError;
use crate::locale::{Locale, DEFAULT_LOCALE, LOCALES};
use crate::resolve::resolve_locale;

const EMBEDDED: [(Locale, &str); 3] = [
	(Locale::En, include_str!("../dictionaries/en.json")),
	(Locale::Nl, include_str!("../dictionaries/nl.json")),
	(Locale::Fr, include_str!("../dictionaries/fr.json")),
];

/// The translated UI strings for one locale.
#[derive(Debug, Clone, PartialEq)]
pub struct Dictionary {
	locale: Locale,
	root: Value,
}

impl Dictionary {
	/// Parses a dictionary from JSON. The top level must be an object.
	pub fn from_json(locale: Locale, json: &str) -> Result<Self, I18nError> {
		let root: Value =
			serde_json::from_str(json).map_err(|source| I18nError::Parse { locale, source })?;
		if !root.is_object() {
			return Err(I18nError::InvalidDictionary(locale));
		}
		Ok(Self { locale, root })
	}

	pub fn locale(&self) -> Locale {
		self.locale
	}

	/// Returns the subtree at a dot-separated path.
	pub fn section(&self, path: &str) -> Option<&Value> {
		path
			.split('.')
			.try_fold(&self.root, |node, segment| node.as_object()?.get(segment))
	}

	/// Returns the string at a dot-separated path, if present.
	pub fn get(&self, key: &str) -> Option<&str> {
		self.section(key).and_then(Value::as_str)
	}

	/// Translates `key`, returning the key itself when it is missing.
	pub fn t(&self, key: &str) -> String {
		match self.get(key) {
			Some(text) => text.to_string(),
			None => {
				debug!(locale = %self.locale, key, "missing translation key");
				key.to_string()
			}
		}
	}

	/// Every leaf path in the tree, sorted.
	pub fn keys(&self) -> Vec<String> {
		let mut keys = Vec::new();
		collect_keys(&self.root, String::new(), &mut keys);
		keys.sort();
		keys
	}
}

fn collect_keys(node: &Value, prefix: String, out: &mut Vec<String>) {
	match node.as_object() {
		Some(map) => {
			for (name, child) in map {
				let path = if prefix.is_empty() {
					name.clone()
				} else {
					format!("{prefix}.{name}")
				};
				collect_keys(child, path, out);
			}
		}
		None => out.push(prefix),
	}
}

/// Read-only mapping from every supported locale to its dictionary.
#[derive(Debug, Clone)]
pub struct DictionaryStore {
	dictionaries: [Dictionary; LOCALES.len()],
}

impl DictionaryStore {
	/// Loads the dictionaries compiled into the binary.
	pub fn embedded() -> Result<Self, I18nError> {
		Self::from_sources(&EMBEDDED)
	}

	/// Builds a store from `(locale, json)` pairs. Every registry locale must
	/// be present; later duplicates win.
	pub fn from_sources(sources: &[(Locale, &str)]) -> Result<Self, I18nError> {
		let mut loaded = Vec::with_capacity(LOCALES.len());
		for locale in LOCALES {
			let json = sources
				.iter()
				.rev()
				.find(|(l, _)| *l == locale)
				.map(|(_, json)| *json)
				.ok_or(I18nError::MissingDictionary(locale))?;
			loaded.push(Dictionary::from_json(locale, json)?);
		}

		let dictionaries: [Dictionary; LOCALES.len()] = loaded
			.try_into()
			.map_err(|_| I18nError::MissingDictionary(DEFAULT_LOCALE))?;
		let store = Self { dictionaries };

		for (locale, key) in store.schema_drift() {
			warn!(%locale, key, "dictionary is missing a key present in the default locale");
		}
		debug!(locales = LOCALES.len(), "dictionaries loaded");

		Ok(store)
	}

	pub fn get(&self, locale: Locale) -> &Dictionary {
		&self.dictionaries[locale.index()]
	}

	/// Returns the dictionary for `code`, or the default locale's dictionary
	/// when `code` is not supported.
	pub fn resolve(&self, code: &str) -> &Dictionary {
		self.get(resolve_locale(Some(code)))
	}

	/// Keys present in the default dictionary but missing from another locale.
	pub fn schema_drift(&self) -> Vec<(Locale, String)> {
		let reference = self.get(DEFAULT_LOCALE).keys();
		LOCALES
			.iter()
			.filter(|&&locale| locale != DEFAULT_LOCALE)
			.flat_map(|&locale| {
				let dict = self.get(locale);
				reference
					.iter()
					.filter(move |key| dict.section(key).is_none())
					.map(move |key| (locale, key.clone()))
			})
			.collect()
	}
}
