// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Animal rescue guides.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::serde_util::null_as_default;

/// Animal types with rescue guides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnimalType {
	Dog,
	Cat,
	Bird,
}

impl AnimalType {
	pub const ALL: [AnimalType; 3] = [AnimalType::Dog, AnimalType::Cat, AnimalType::Bird];

	/// Parses an animal type, ignoring ASCII case.
	pub fn parse(value: &str) -> Option<Self> {
		match value.to_ascii_lowercase().as_str() {
			"dog" => Some(AnimalType::Dog),
			"cat" => Some(AnimalType::Cat),
			"bird" => Some(AnimalType::Bird),
			_ => None,
		}
	}

	pub const fn as_str(&self) -> &'static str {
		match self {
			AnimalType::Dog => "dog",
			AnimalType::Cat => "cat",
			AnimalType::Bird => "bird",
		}
	}

	/// Plural key used by the home page dictionary (`home.quickAccess.guides.<key>`).
	pub const fn plural_key(&self) -> &'static str {
		match self {
			AnimalType::Dog => "dogs",
			AnimalType::Cat => "cats",
			AnimalType::Bird => "birds",
		}
	}
}

impl fmt::Display for AnimalType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// A node of the structured rich-text tree used for guide descriptions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RichTextNode {
	#[serde(rename = "type", default)]
	pub node_type: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub text: Option<String>,
	#[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
	pub children: Vec<RichTextNode>,
}

impl RichTextNode {
	pub fn text(text: impl Into<String>) -> Self {
		Self {
			node_type: "text".to_string(),
			text: Some(text.into()),
			children: Vec::new(),
		}
	}

	pub fn paragraph(children: Vec<RichTextNode>) -> Self {
		Self {
			node_type: "paragraph".to_string(),
			text: None,
			children,
		}
	}
}

/// Flattens a rich-text tree to plain text.
///
/// A node contributes its own text when it has non-empty text, otherwise the
/// plain text of its children. Siblings are joined by a single space.
pub fn plain_text(nodes: &[RichTextNode]) -> String {
	nodes
		.iter()
		.map(|node| match node.text.as_deref() {
			Some(text) if !text.is_empty() => text.to_string(),
			_ => plain_text(&node.children),
		})
		.collect::<Vec<_>>()
		.join(" ")
}

/// One step of a rescue guide.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuideStep {
	pub id: u64,
	#[serde(default)]
	pub title: String,
	#[serde(default, deserialize_with = "null_as_default")]
	pub description: String,
	#[serde(default, deserialize_with = "null_as_default")]
	pub check_points: Vec<String>,
}

/// A rescue guide document as served by the content API.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Guide {
	pub id: u64,
	#[serde(default)]
	pub document_id: Option<String>,
	#[serde(default)]
	pub title: String,
	#[serde(default)]
	pub animal_type: String,
	#[serde(default, deserialize_with = "null_as_default")]
	pub description: Vec<RichTextNode>,
	#[serde(default, deserialize_with = "null_as_default")]
	pub steps: Vec<GuideStep>,
	#[serde(default, deserialize_with = "null_as_default")]
	pub safety_tips: Vec<String>,
	#[serde(default)]
	pub flow_chart: Option<String>,
	#[serde(default)]
	pub locale: Option<String>,
}

impl Guide {
	/// The guide's animal type, if it is one this site knows about.
	pub fn animal(&self) -> Option<AnimalType> {
		AnimalType::parse(&self.animal_type)
	}

	pub fn description_text(&self) -> String {
		plain_text(&self.description)
	}

	/// The flow chart source, or `None` when absent or blank.
	pub fn flow_chart(&self) -> Option<&str> {
		self
			.flow_chart
			.as_deref()
			.map(str::trim)
			.filter(|chart| !chart.is_empty())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	const DOG_GUIDE: &str = r#"{
		"id": 3,
		"documentId": "k2j3h4",
		"title": "Helping a Dog in Distress",
		"animalType": "dog",
		"description": [
			{ "type": "paragraph", "children": [
				{ "type": "text", "text": "Step-by-step guide" },
				{ "type": "text", "text": "for dogs" }
			] },
			{ "type": "paragraph", "children": [ { "type": "text", "text": "in need" } ] }
		],
		"steps": [
			{ "id": 1, "title": "Assess the Situation", "description": "Observe first",
			  "checkPoints": ["Check for aggression", "Look for injuries"] }
		],
		"safetyTips": ["Approach slowly and calmly"],
		"flowChart": "flowchart TD\n A[Found a Dog] --> B{Approachable?}",
		"locale": "en"
	}"#;

	#[test]
	fn animal_type_parse_is_case_insensitive() {
		assert_eq!(AnimalType::parse("dog"), Some(AnimalType::Dog));
		assert_eq!(AnimalType::parse("Cat"), Some(AnimalType::Cat));
		assert_eq!(AnimalType::parse("BIRD"), Some(AnimalType::Bird));
		assert_eq!(AnimalType::parse("elephant"), None);
		assert_eq!(AnimalType::parse(""), None);
	}

	#[test]
	fn deserializes_content_api_guide() {
		let guide: Guide = serde_json::from_str(DOG_GUIDE).unwrap();
		assert_eq!(guide.id, 3);
		assert_eq!(guide.document_id.as_deref(), Some("k2j3h4"));
		assert_eq!(guide.animal(), Some(AnimalType::Dog));
		assert_eq!(guide.steps.len(), 1);
		assert_eq!(guide.steps[0].check_points.len(), 2);
		assert_eq!(guide.safety_tips, vec!["Approach slowly and calmly"]);
		assert!(guide.flow_chart().unwrap().starts_with("flowchart TD"));
	}

	#[test]
	fn description_flattens_to_plain_text() {
		let guide: Guide = serde_json::from_str(DOG_GUIDE).unwrap();
		assert_eq!(guide.description_text(), "Step-by-step guide for dogs in need");
	}

	#[test]
	fn missing_and_null_lists_are_empty() {
		let guide: Guide = serde_json::from_str(
			r#"{"id":1,"title":"T","animalType":"cat","steps":null,"safetyTips":null}"#,
		)
		.unwrap();
		assert!(guide.description.is_empty());
		assert!(guide.steps.is_empty());
		assert!(guide.safety_tips.is_empty());
		assert_eq!(guide.flow_chart(), None);
	}

	#[test]
	fn blank_flow_chart_is_none() {
		let guide = Guide {
			flow_chart: Some("   \n ".to_string()),
			..Default::default()
		};
		assert_eq!(guide.flow_chart(), None);
	}

	#[test]
	fn plain_text_prefers_node_text_over_children() {
		let node = RichTextNode {
			node_type: "link".to_string(),
			text: Some("outer".to_string()),
			children: vec![RichTextNode::text("inner")],
		};
		assert_eq!(plain_text(&[node]), "outer");
	}

	#[test]
	fn plain_text_descends_through_empty_text() {
		let node = RichTextNode {
			node_type: "paragraph".to_string(),
			text: Some(String::new()),
			children: vec![RichTextNode::text("a"), RichTextNode::text("b")],
		};
		assert_eq!(plain_text(&[node]), "a b");
		assert_eq!(plain_text(&[]), "");
	}
}
