// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Page view models shared by every localized page.
//!
//! A page is rendered as a [`PageView`]: site metadata, the navigation bar
//! and a body whose `state` decides the response status.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use tailway_common_i18n::{alternate_links, switch_locale_path, AlternateLink, Dictionary, Locale, LOCALES};

use crate::extract::PageLocale;

pub const SITE_NAME: &str = "Tailway";
pub const SITE_TITLE: &str = "Tailway - Animal Emergency Response Guide";
pub const SITE_DESCRIPTION: &str = "Immediate guidance for helping animals in distress";

#[derive(Debug, Clone, Serialize)]
pub struct PageView<B> {
	pub lang: Locale,
	pub meta: PageMeta,
	pub navigation: NavigationView,
	pub body: PageBody<B>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PageMeta {
	pub title: &'static str,
	pub description: &'static str,
	pub alternates: Vec<AlternateLink>,
}

impl Default for PageMeta {
	fn default() -> Self {
		Self {
			title: SITE_TITLE,
			description: SITE_DESCRIPTION,
			alternates: alternate_links(),
		}
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkView {
	pub label: String,
	pub href: String,
}

impl LinkView {
	pub fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
		Self {
			label: label.into(),
			href: href.into(),
		}
	}
}

#[derive(Debug, Clone, Serialize)]
pub struct NavigationView {
	pub brand: LinkView,
	pub links: Vec<LinkView>,
	pub languages: Vec<LanguageOption>,
}

/// One entry of the language switcher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LanguageOption {
	pub code: Locale,
	pub name: &'static str,
	pub href: String,
	pub current: bool,
}

impl NavigationView {
	pub fn new(dict: &Dictionary, page: &PageLocale) -> Self {
		let lang = page.locale;
		Self {
			brand: LinkView::new(SITE_NAME, format!("/{lang}")),
			links: vec![
				LinkView::new(dict.t("home.nav.guides"), format!("/{lang}/guides")),
				LinkView::new(dict.t("home.nav.directory"), format!("/{lang}/directory")),
				LinkView::new(dict.t("home.nav.blog"), format!("/{lang}/blog")),
			],
			languages: LOCALES
				.iter()
				.map(|&code| LanguageOption {
					code,
					name: code.native_name(),
					href: switch_locale_path(&page.path, code),
					current: code == lang,
				})
				.collect(),
		}
	}
}

/// Page body, tagged by `state`.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum PageBody<B> {
	Ready { content: B },
	Error { notice: String },
	NotFound {
		title: String,
		description: String,
		back: LinkView,
	},
}

impl<B> PageBody<B> {
	/// Inline error notice, `"<common.error>: <message>"`.
	pub fn error(dict: &Dictionary, message: impl std::fmt::Display) -> Self {
		PageBody::Error {
			notice: format!("{}: {message}", dict.t("common.error")),
		}
	}

	pub fn status(&self) -> StatusCode {
		match self {
			PageBody::Ready { .. } => StatusCode::OK,
			PageBody::Error { .. } => StatusCode::BAD_GATEWAY,
			PageBody::NotFound { .. } => StatusCode::NOT_FOUND,
		}
	}
}

impl<B> PageView<B> {
	pub fn new(dict: &Dictionary, page: &PageLocale, body: PageBody<B>) -> Self {
		Self {
			lang: page.locale,
			meta: PageMeta::default(),
			navigation: NavigationView::new(dict, page),
			body,
		}
	}
}

impl<B: Serialize> IntoResponse for PageView<B> {
	fn into_response(self) -> Response {
		(self.body.status(), Json(self)).into_response()
	}
}
