// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Shared HTTP utilities for Tailway.
//!
//! This crate provides a pre-configured HTTP client with a consistent
//! User-Agent header. Callers decide on timeouts; there is no retry layer.

mod client;

pub use client::{builder, new_client, new_client_with_timeout, user_agent};
