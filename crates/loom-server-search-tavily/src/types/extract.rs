// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

use serde::{Deserialize, Serialize};

use super::{is_false, null_as_default, ExtractDepth};

/// Body of `POST /extract`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ExtractRequest {
	pub urls: Vec<String>,
	#[serde(skip_serializing_if = "is_false")]
	pub include_images: bool,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub extract_depth: Option<ExtractDepth>,
}

impl ExtractRequest {
	pub fn new<I, S>(urls: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		Self {
			urls: urls.into_iter().map(Into::into).collect(),
			..Default::default()
		}
	}

	pub fn with_images(mut self, include: bool) -> Self {
		self.include_images = include;
		self
	}

	pub fn with_extract_depth(mut self, depth: ExtractDepth) -> Self {
		self.extract_depth = Some(depth);
		self
	}
}

/// Response from `POST /extract`.
///
/// URLs the service could not process land in `failed_results`; that is
/// still a successful call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtractResponse {
	#[serde(default, deserialize_with = "null_as_default")]
	pub results: Vec<ExtractResult>,
	#[serde(default, deserialize_with = "null_as_default")]
	pub failed_results: Vec<ExtractFailedResult>,
	#[serde(default, deserialize_with = "null_as_default")]
	pub response_time: f64,
}

impl ExtractResponse {
	pub fn is_partial(&self) -> bool {
		!self.failed_results.is_empty()
	}
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtractResult {
	#[serde(default, deserialize_with = "null_as_default")]
	pub url: String,
	#[serde(default, deserialize_with = "null_as_default")]
	pub raw_content: String,
	/// Image URLs found on the page.
	#[serde(default, deserialize_with = "null_as_default")]
	pub images: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtractFailedResult {
	#[serde(default, deserialize_with = "null_as_default")]
	pub url: String,
	#[serde(default, deserialize_with = "null_as_default")]
	pub error: String,
}
