// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Guide detail page state.
//!
//! ```text
//! Loading ──fetch ok, ≥1 guide──▶ Loaded
//!    │ ────fetch ok, 0 guides──▶ NotFound
//!    └─────fetch failed───────▶ Errored
//! ```
//!
//! A missing or unsupported animal type goes straight to `NotFound` without
//! fetching. `NotFound` and `Errored` are rendered differently.

use std::fmt::Display;

use crate::guide::{AnimalType, Guide};

#[derive(Debug, Clone, PartialEq)]
pub enum GuideState {
	Loading,
	Loaded(Guide),
	NotFound,
	Errored(String),
}

impl GuideState {
	/// Starts a guide request.
	///
	/// Returns `Loading` with the parsed animal type when a fetch should be
	/// made, or the terminal `NotFound` state when it should not.
	pub fn begin(animal_type: Option<&str>) -> Result<(GuideState, AnimalType), GuideState> {
		match animal_type.and_then(AnimalType::parse) {
			Some(animal) => Ok((GuideState::Loading, animal)),
			None => Err(GuideState::NotFound),
		}
	}

	/// Applies the fetch outcome. Terminal states are returned unchanged.
	pub fn resolve<E: Display>(self, outcome: Result<Vec<Guide>, E>) -> GuideState {
		self.complete(outcome).into()
	}

	/// Like [`GuideState::resolve`], but the result type admits only the
	/// terminal states.
	pub fn complete<E: Display>(self, outcome: Result<Vec<Guide>, E>) -> GuideOutcome {
		match self {
			GuideState::Loading => GuideOutcome::from_fetch(outcome),
			GuideState::Loaded(guide) => GuideOutcome::Loaded(guide),
			GuideState::NotFound => GuideOutcome::NotFound,
			GuideState::Errored(message) => GuideOutcome::Errored(message),
		}
	}

	pub fn is_terminal(&self) -> bool {
		!matches!(self, GuideState::Loading)
	}
}

/// A terminal [`GuideState`].
#[derive(Debug, Clone, PartialEq)]
pub enum GuideOutcome {
	Loaded(Guide),
	NotFound,
	Errored(String),
}

impl GuideOutcome {
	fn from_fetch<E: Display>(outcome: Result<Vec<Guide>, E>) -> Self {
		match outcome {
			Ok(guides) => match guides.into_iter().next() {
				Some(guide) => GuideOutcome::Loaded(guide),
				None => GuideOutcome::NotFound,
			},
			Err(e) => GuideOutcome::Errored(e.to_string()),
		}
	}
}

impl From<GuideOutcome> for GuideState {
	fn from(outcome: GuideOutcome) -> Self {
		match outcome {
			GuideOutcome::Loaded(guide) => GuideState::Loaded(guide),
			GuideOutcome::NotFound => GuideState::NotFound,
			GuideOutcome::Errored(message) => GuideState::Errored(message),
		}
	}
}
