// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Core types for Tailway content.
//!
//! This crate holds the read-only shapes of the documents served by the
//! content API (animal guides and directory listings), the directory listing
//! filter, and the state machine behind the guide detail page. It performs no
//! I/O; `tailway-content` fetches, `tailway-server` renders.
//!
//! # Example
//!
//! ```
//! use tailway_content_core::{filter_listings, DirectoryListing, ListingQuery};
//!
//! let listings = vec![
//!     DirectoryListing::new(1, "Happy Paws Veterinary Clinic", "1 Main St", ["Emergency Care"]),
//!     DirectoryListing::new(2, "Wildlife Rescue Center", "2 Forest Rd", ["Wildlife Rescue"]),
//! ];
//!
//! let found = filter_listings(&listings, &ListingQuery::search("clinic"));
//! assert_eq!(found.len(), 1);
//! assert_eq!(found[0].id, 1);
//! ```

pub mod envelope;
pub mod filter;
pub mod guide;
pub mod guide_state;
pub mod listing;

mod serde_util;

pub use envelope::{ContentEnvelope, ContentMeta, Pagination};
pub use filter::{
	filter_listings, filter_listings_ref, normalize_tag, ListingQuery, DEFAULT_DISTANCE_KM,
	DISTANCE_OPTIONS_KM,
};
pub use guide::{plain_text, AnimalType, Guide, GuideStep, RichTextNode};
pub use guide_state::{GuideOutcome, GuideState};
pub use listing::{format_service_type, Coordinates, DirectoryListing, ServiceType};
