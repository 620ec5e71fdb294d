// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Locale routing in front of the page routes.

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};
use tailway_common_i18n::{route_path, LocaleRoute, INTERNAL_PREFIX};
use tower::ServiceExt;
use tower_http::services::ServeDir;
use tracing::debug;

use crate::api::AppState;
use crate::routes;

/// Answers `307 Temporary Redirect` for paths without a locale prefix or with
/// a trailing slash, and forwards everything else. The query string survives
/// the redirect.
///
/// Asset paths (any `.` outside [`INTERNAL_PREFIX`]) never reach the page
/// routes: they are served from the static directory or answered with 404.
pub async fn locale_redirect(
	State(state): State<AppState>,
	request: Request,
	next: Next,
) -> Response {
	let path = request.uri().path();
	if is_asset_path(path) {
		return serve_asset(&state, request).await;
	}

	let Some(target) = redirect_target(path) else {
		return next.run(request).await;
	};
	let location = redirect_location(&target, request.uri().query());
	debug!(from = %request.uri().path(), to = %location, "redirecting to localized path");
	Redirect::temporary(&location).into_response()
}

pub(crate) fn is_asset_path(path: &str) -> bool {
	path.contains('.') && !path.starts_with(INTERNAL_PREFIX)
}

/// Where a non-asset path should be redirected, if anywhere. Trailing slashes
/// are dropped in the same hop as the locale prefix is added.
fn redirect_target(path: &str) -> Option<String> {
	let trimmed = match path.trim_end_matches('/') {
		"" => "/",
		trimmed => trimmed,
	};
	match route_path(trimmed) {
		LocaleRoute::Redirect(target) => Some(target),
		LocaleRoute::PassThrough if trimmed != path => Some(trimmed.to_string()),
		LocaleRoute::PassThrough => None,
	}
}

async fn serve_asset(state: &AppState, request: Request) -> Response {
	match &state.static_dir {
		Some(dir) => match ServeDir::new(dir).oneshot(request).await {
			Ok(response) => response.into_response(),
			Err(never) => match never {},
		},
		None => routes::not_found(request.uri().clone()).await.into_response(),
	}
}

fn redirect_location(target: &str, query: Option<&str>) -> String {
	match query {
		Some(query) if !query.is_empty() => format!("{target}?{query}"),
		_ => target.to_string(),
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_redirect_location_keeps_query() {
		assert_eq!(
			redirect_location("/en/directory", Some("q=vet&tags=emergencyCare")),
			"/en/directory?q=vet&tags=emergencyCare"
		);
	}

	#[test]
	fn test_redirect_location_without_query() {
		assert_eq!(redirect_location("/en", None), "/en");
		assert_eq!(redirect_location("/en", Some("")), "/en");
	}

	#[test]
	fn test_asset_paths() {
		assert!(is_asset_path("/favicon.ico"));
		assert!(is_asset_path("/en/guides/dog.png"));
		assert!(!is_asset_path("/en/guides/dog"));
		assert!(!is_asset_path("/_tailway/health.json"));
	}

	#[test]
	fn test_trailing_slash_is_dropped() {
		assert_eq!(redirect_target("/en/"), Some("/en".to_string()));
		assert_eq!(redirect_target("/nl/guides//"), Some("/nl/guides".to_string()));
		assert_eq!(redirect_target("/guides/"), Some("/en/guides".to_string()));
		assert_eq!(redirect_target("/"), Some("/en".to_string()));
		assert_eq!(redirect_target("/en"), None);
		assert_eq!(redirect_target("/_tailway/health"), None);
	}
}
