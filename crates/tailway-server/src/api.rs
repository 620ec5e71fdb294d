// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Application state and router construction.

use std::path::PathBuf;
use std::sync::Arc;

use axum::middleware::from_fn_with_state;
use axum::routing::get;
use axum::Router;
use tailway_common_i18n::{static_params, DictionaryStore, INTERNAL_PREFIX};
use tailway_content::{ContentClient, ContentSource};
use tailway_content_core::AnimalType;
use tailway_server_config::ServerConfig;
use tower_http::services::ServeDir;

use crate::error::ServerError;
use crate::locale_middleware::locale_redirect;
use crate::routes;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
	pub dictionaries: Arc<DictionaryStore>,
	pub content: Arc<dyn ContentSource>,
	/// Reported by the health endpoint.
	pub content_api_url: String,
	pub static_dir: Option<PathBuf>,
}

impl AppState {
	pub fn new(
		dictionaries: DictionaryStore,
		content: Arc<dyn ContentSource>,
		content_api_url: impl Into<String>,
	) -> Self {
		Self {
			dictionaries: Arc::new(dictionaries),
			content,
			content_api_url: content_api_url.into(),
			static_dir: None,
		}
	}

	pub fn with_static_dir(mut self, static_dir: impl Into<PathBuf>) -> Self {
		self.static_dir = Some(static_dir.into());
		self
	}
}

/// Builds the state for a configured server: embedded dictionaries and an
/// HTTP content client.
pub fn create_app_state(config: &ServerConfig) -> Result<AppState, ServerError> {
	let dictionaries = DictionaryStore::embedded()?;
	let client = ContentClient::new(config.content.base_url.clone(), config.content.timeout)?;

	let mut state = AppState::new(dictionaries, Arc::new(client), config.content.base_url.clone());
	state.static_dir = config.http.static_dir.clone();
	Ok(state)
}

pub fn create_router(state: AppState) -> Router {
	let mut router = Router::new()
		.route(
			&format!("{INTERNAL_PREFIX}/health"),
			get(routes::health::health_check),
		)
		.route("/{lang}", get(routes::home::home_page))
		.route("/{lang}/guides", get(routes::guides::guides_index))
		.route(
			"/{lang}/guides/{animal_type}",
			get(routes::guides::guide_detail),
		)
		.route("/{lang}/directory", get(routes::directory::directory_page))
		.route("/{lang}/blog", get(routes::blog::blog_page));

	router = match &state.static_dir {
		Some(dir) => {
			tracing::info!(static_dir = %dir.display(), "serving static assets");
			router.fallback_service(ServeDir::new(dir))
		}
		None => router.fallback(routes::not_found),
	};

	router
		.layer(from_fn_with_state(state.clone(), locale_redirect))
		.with_state(state)
}

/// Every locale-scoped page path the site serves, in registry order.
pub fn page_paths() -> Vec<String> {
	static_params()
		.into_iter()
		.flat_map(|params| {
			let lang = params.lang;
			let mut paths = vec![format!("/{lang}"), format!("/{lang}/guides")];
			paths.extend(
				AnimalType::ALL
					.iter()
					.map(|animal| format!("/{lang}/guides/{animal}")),
			);
			paths.push(format!("/{lang}/directory"));
			paths.push(format!("/{lang}/blog"));
			paths
		})
		.collect()
}
