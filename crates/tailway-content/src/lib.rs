// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Content API client for Tailway.
//!
//! This crate provides a typed client for the headless content API that owns
//! animal guides and directory listings, encapsulating request shaping and
//! response-envelope decoding. Every call is a single attempt: no retry, no
//! caching.

pub mod client;
pub mod error;
pub mod source;

pub use client::{ContentClient, DEFAULT_BASE_URL};
pub use error::ContentError;
pub use source::ContentSource;
pub use tailway_content_core::{AnimalType, DirectoryListing, Guide};
