// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Blog placeholder page.

use axum::extract::State;
use serde::Serialize;

use crate::{
	api::AppState,
	extract::PageLocale,
	views::{LinkView, PageBody, PageView},
};

#[derive(Debug, Clone, Serialize)]
pub struct BlogContent {
	pub title: String,
	pub description: String,
	pub back: LinkView,
}

/// GET /{lang}/blog - "coming soon" page linking back home.
pub async fn blog_page(State(state): State<AppState>, page: PageLocale) -> PageView<BlogContent> {
	let dict = state.dictionaries.get(page.locale);
	let content = BlogContent {
		title: dict.t("blog.title"),
		description: dict.t("blog.description"),
		back: LinkView::new(dict.t("blog.back"), format!("/{}", page.locale)),
	};
	PageView::new(dict, &page, PageBody::Ready { content })
}
