// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Guide index and guide detail handlers.

use axum::extract::{Path, State};
use serde::Serialize;
use tailway_common_i18n::{Dictionary, Locale};
use tailway_content_core::{Guide, GuideOutcome, GuideState, GuideStep};
use tracing::{instrument, warn};

use crate::{
	api::AppState,
	extract::PageLocale,
	views::{LinkView, PageBody, PageView},
};

#[derive(Debug, Clone, Serialize)]
pub struct GuidesContent {
	pub title: String,
	pub subtitle: String,
	pub guides: Vec<GuideCard>,
}

#[derive(Debug, Clone, Serialize)]
pub struct GuideCard {
	pub title: String,
	pub animal_type: String,
	pub summary: String,
	pub link: LinkView,
}

#[derive(Debug, Clone, Serialize)]
pub struct GuideDetail {
	pub back: LinkView,
	pub title: String,
	pub animal_type: String,
	pub description: String,
	pub emergency_warning: String,
	pub steps: Vec<GuideStep>,
	pub safety_tips: Section<Vec<String>>,
	/// Mermaid source; omitted when the guide has none.
	pub flow_chart: Option<Section<String>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Section<T> {
	pub title: String,
	pub body: T,
}

/// GET /{lang}/guides
#[instrument(skip_all, fields(locale = %page.locale))]
pub async fn guides_index(State(state): State<AppState>, page: PageLocale) -> PageView<GuidesContent> {
	let dict = state.dictionaries.get(page.locale);

	let body = match state.content.guides(page.locale, None).await {
		Ok(guides) => PageBody::Ready {
			content: GuidesContent {
				title: dict.t("guides.title"),
				subtitle: dict.t("guides.subtitle"),
				guides: guides
					.iter()
					.map(|guide| guide_card(dict, page.locale, guide))
					.collect(),
			},
		},
		Err(e) => {
			warn!(error = %e, "guide index unavailable");
			PageBody::error(dict, e)
		}
	};

	PageView::new(dict, &page, body)
}

/// GET /{lang}/guides/{animal_type}
#[instrument(skip_all, fields(locale = %page.locale, animal_type = %animal_type))]
pub async fn guide_detail(
	State(state): State<AppState>,
	page: PageLocale,
	Path((_lang, animal_type)): Path<(String, String)>,
) -> PageView<GuideDetail> {
	let dict = state.dictionaries.get(page.locale);

	let outcome = match GuideState::begin(Some(animal_type.as_str())) {
		Ok((loading, animal)) => {
			let fetched = state.content.guides(page.locale, Some(animal)).await;
			if let Err(e) = &fetched {
				warn!(error = %e, "guide fetch failed");
			}
			loading.complete(fetched)
		}
		Err(_) => GuideOutcome::NotFound,
	};

	let body = match outcome {
		GuideOutcome::Loaded(guide) => PageBody::Ready {
			content: guide_detail_content(dict, page.locale, guide),
		},
		GuideOutcome::NotFound => PageBody::NotFound {
			title: dict.t("guide.notFound.title"),
			description: dict.t("guide.notFound.description"),
			back: LinkView::new(dict.t("guide.notFound.back"), format!("/{}/guides", page.locale)),
		},
		GuideOutcome::Errored(message) => PageBody::error(dict, message),
	};

	PageView::new(dict, &page, body)
}

fn guide_card(dict: &Dictionary, lang: Locale, guide: &Guide) -> GuideCard {
	GuideCard {
		title: guide.title.clone(),
		animal_type: guide.animal_type.clone(),
		summary: guide.description_text(),
		link: LinkView::new(
			dict.t("guides.viewGuide"),
			format!("/{lang}/guides/{}", guide.animal_type),
		),
	}
}

fn guide_detail_content(dict: &Dictionary, lang: Locale, guide: Guide) -> GuideDetail {
	let description = guide.description_text();
	let flow_chart = guide.flow_chart().map(|source| Section {
		title: dict.t("guide.flowChart"),
		body: source.to_string(),
	});

	GuideDetail {
		back: LinkView::new(dict.t("guide.back"), format!("/{lang}/guides")),
		title: guide.title,
		animal_type: guide.animal_type,
		description,
		emergency_warning: dict.t("guide.emergencyWarning"),
		steps: guide.steps,
		safety_tips: Section {
			title: dict.t("guide.safetyTips"),
			body: guide.safety_tips,
		},
		flow_chart,
	}
}

#[cfg(test)]
mod tests {
	use tailway_common_i18n::DictionaryStore;
	use tailway_content_core::RichTextNode;

	use super::*;

	fn cat_guide() -> Guide {
		Guide {
			id: 2,
			title: "Helping a cat".to_string(),
			animal_type: "cat".to_string(),
			description: vec![RichTextNode::paragraph(vec![
				RichTextNode::text("Move"),
				RichTextNode::text("slowly."),
			])],
			safety_tips: vec!["Never chase the cat".to_string()],
			flow_chart: Some("   ".to_string()),
			..Default::default()
		}
	}

	#[test]
	fn test_guide_card_links_by_animal_type() {
		let store = DictionaryStore::embedded().unwrap();
		let card = guide_card(store.get(Locale::Fr), Locale::Fr, &cat_guide());
		assert_eq!(card.link.href, "/fr/guides/cat");
		assert_eq!(card.summary, "Move slowly.");
	}

	#[test]
	fn test_detail_omits_blank_flow_chart() {
		let store = DictionaryStore::embedded().unwrap();
		let detail = guide_detail_content(store.get(Locale::En), Locale::En, cat_guide());
		assert!(detail.flow_chart.is_none());
		assert_eq!(detail.safety_tips.title, "Safety Tips");
		assert_eq!(detail.back.href, "/en/guides");
	}
}
