// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Shared HTTP client with consistent User-Agent header.

use std::env::consts::{ARCH, OS};

use reqwest::{Client, ClientBuilder};

/// Creates a client builder with the standard Loom User-Agent header.
///
/// No timeout is set; callers that want one add it here or bound the
/// request future themselves.
///
/// # Example
/// ```ignore
/// let client = loom_common_http::builder()
///     .timeout(Duration::from_secs(30))
///     .build()?;
/// ```
pub fn builder() -> ClientBuilder {
	Client::builder().user_agent(user_agent())
}

/// Builds a client with the standard Loom User-Agent header.
pub fn new_client() -> reqwest::Result<Client> {
	builder().build()
}

/// Returns the standard Loom User-Agent string.
///
/// Format: `loom/{os}-{arch}/{version}`, e.g. `loom/linux-x86_64/0.1.0`.
pub fn user_agent() -> String {
	format!("loom/{OS}-{ARCH}/{}", env!("CARGO_PKG_VERSION"))
}
