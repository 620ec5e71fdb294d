// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Home page handler.

use axum::extract::State;
use serde::Serialize;
use tailway_common_i18n::Dictionary;
use tailway_content_core::{AnimalType, ServiceType};

use crate::{
	api::AppState,
	extract::PageLocale,
	views::{LinkView, PageBody, PageView},
};

#[derive(Debug, Clone, Serialize)]
pub struct HomeContent {
	pub hero: HeroView,
	pub quick_access: QuickAccessView,
	pub emergency: EmergencyView,
}

#[derive(Debug, Clone, Serialize)]
pub struct HeroView {
	pub title: String,
	pub subtitle: String,
	pub emergency: LinkView,
	pub find_help: LinkView,
}

#[derive(Debug, Clone, Serialize)]
pub struct QuickAccessView {
	pub title: String,
	pub guides: Vec<QuickGuideCard>,
}

#[derive(Debug, Clone, Serialize)]
pub struct QuickGuideCard {
	pub animal_type: AnimalType,
	pub title: String,
	pub description: String,
	pub href: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct EmergencyView {
	pub title: String,
	pub contacts: Vec<EmergencyContact>,
}

#[derive(Debug, Clone, Serialize)]
pub struct EmergencyContact {
	pub title: String,
	pub description: String,
	pub action: LinkView,
}

/// GET /{lang}
pub async fn home_page(State(state): State<AppState>, page: PageLocale) -> PageView<HomeContent> {
	let dict = state.dictionaries.get(page.locale);
	let content = home_content(dict, &page);
	PageView::new(dict, &page, PageBody::Ready { content })
}

fn home_content(dict: &Dictionary, page: &PageLocale) -> HomeContent {
	let lang = page.locale;

	let guides = AnimalType::ALL
		.iter()
		.map(|&animal_type| {
			let key = format!("home.quickAccess.guides.{}", animal_type.plural_key());
			QuickGuideCard {
				animal_type,
				title: dict.t(&format!("{key}.title")),
				description: dict.t(&format!("{key}.description")),
				href: format!("/{lang}/guides/{animal_type}"),
			}
		})
		.collect();

	let contact = |section: &str, service: ServiceType| EmergencyContact {
		title: dict.t(&format!("home.emergency.{section}.title")),
		description: dict.t(&format!("home.emergency.{section}.description")),
		action: LinkView::new(
			dict.t(&format!("home.emergency.{section}.button")),
			format!("/{lang}/directory?tags={}", service.id()),
		),
	};

	HomeContent {
		hero: HeroView {
			title: dict.t("home.hero.title"),
			subtitle: dict.t("home.hero.subtitle"),
			emergency: LinkView::new(dict.t("home.hero.emergencyButton"), format!("/{lang}/guides")),
			find_help: LinkView::new(dict.t("home.hero.findHelpButton"), format!("/{lang}/directory")),
		},
		quick_access: QuickAccessView {
			title: dict.t("home.quickAccess.title"),
			guides,
		},
		emergency: EmergencyView {
			title: dict.t("home.emergency.title"),
			contacts: vec![
				contact("veterinary", ServiceType::EmergencyCare),
				contact("wildlife", ServiceType::WildlifeRescue),
			],
		},
	}
}

#[cfg(test)]
mod tests {
	use tailway_common_i18n::{DictionaryStore, Locale};

	use super::*;

	#[test]
	fn test_quick_access_cards_link_to_guides() {
		let store = DictionaryStore::embedded().unwrap();
		let page = PageLocale::from_path("/nl");
		let content = home_content(store.get(Locale::Nl), &page);

		let hrefs: Vec<_> = content
			.quick_access
			.guides
			.iter()
			.map(|card| card.href.as_str())
			.collect();
		assert_eq!(hrefs, vec!["/nl/guides/dog", "/nl/guides/cat", "/nl/guides/bird"]);
		assert_eq!(content.hero.find_help.href, "/nl/directory");
		assert_eq!(
			content.emergency.contacts[1].action.href,
			"/nl/directory?tags=wildlifeRescue"
		);
	}

	#[test]
	fn test_every_label_is_translated() {
		let store = DictionaryStore::embedded().unwrap();
		let page = PageLocale::from_path("/en");
		let content = home_content(store.get(Locale::En), &page);

		assert_eq!(content.hero.title, "Found an animal in distress?");
		assert_eq!(content.quick_access.guides[0].title, "Dogs");
		assert!(content
			.emergency
			.contacts
			.iter()
			.all(|c| !c.title.starts_with("home.")));
	}
}
