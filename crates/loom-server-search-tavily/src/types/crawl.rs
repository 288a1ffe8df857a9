// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

use serde::{Deserialize, Serialize};

use super::{is_false, null_as_default, ExtractDepth};

/// Where a crawl or map starts and how far it may wander.
///
/// Path and domain filters are regular expressions evaluated by Tavily.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SiteScope {
	/// Root URL.
	pub url: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub max_depth: Option<u32>,
	/// Links followed per level.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub max_breadth: Option<u32>,
	/// Total pages processed before stopping.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub limit: Option<u32>,
	/// Natural-language guidance for which pages to visit.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub instructions: Option<String>,
	#[serde(skip_serializing_if = "Vec::is_empty")]
	pub select_paths: Vec<String>,
	#[serde(skip_serializing_if = "Vec::is_empty")]
	pub select_domains: Vec<String>,
	#[serde(skip_serializing_if = "Vec::is_empty")]
	pub exclude_paths: Vec<String>,
	#[serde(skip_serializing_if = "Vec::is_empty")]
	pub exclude_domains: Vec<String>,
	/// Follow links to other domains. Unset leaves the service default.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub allow_external: Option<bool>,
	/// Page categories to favour, e.g. `Documentation` or `Blog`.
	#[serde(skip_serializing_if = "Vec::is_empty")]
	pub categories: Vec<String>,
}

impl SiteScope {
	pub fn new(url: impl Into<String>) -> Self {
		Self {
			url: url.into(),
			..Default::default()
		}
	}

	pub fn with_max_depth(mut self, depth: u32) -> Self {
		self.max_depth = Some(depth);
		self
	}

	pub fn with_max_breadth(mut self, breadth: u32) -> Self {
		self.max_breadth = Some(breadth);
		self
	}

	pub fn with_limit(mut self, limit: u32) -> Self {
		self.limit = Some(limit);
		self
	}

	pub fn with_instructions(mut self, instructions: impl Into<String>) -> Self {
		self.instructions = Some(instructions.into());
		self
	}

	pub fn select_path(mut self, pattern: impl Into<String>) -> Self {
		self.select_paths.push(pattern.into());
		self
	}

	pub fn select_domain(mut self, pattern: impl Into<String>) -> Self {
		self.select_domains.push(pattern.into());
		self
	}

	pub fn exclude_path(mut self, pattern: impl Into<String>) -> Self {
		self.exclude_paths.push(pattern.into());
		self
	}

	pub fn exclude_domain(mut self, pattern: impl Into<String>) -> Self {
		self.exclude_domains.push(pattern.into());
		self
	}

	pub fn with_allow_external(mut self, allow: bool) -> Self {
		self.allow_external = Some(allow);
		self
	}

	pub fn with_category(mut self, category: impl Into<String>) -> Self {
		self.categories.push(category.into());
		self
	}
}

/// Body of `POST /crawl`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CrawlRequest {
	#[serde(flatten)]
	pub scope: SiteScope,
	#[serde(skip_serializing_if = "is_false")]
	pub include_images: bool,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub extract_depth: Option<ExtractDepth>,
}

impl CrawlRequest {
	pub fn new(scope: SiteScope) -> Self {
		Self {
			scope,
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

/// Response from `POST /crawl`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CrawlResponse {
	#[serde(default, deserialize_with = "null_as_default")]
	pub base_url: String,
	#[serde(default, deserialize_with = "null_as_default")]
	pub results: Vec<CrawlResult>,
	#[serde(default, deserialize_with = "null_as_default")]
	pub response_time: f64,
}

/// One crawled page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CrawlResult {
	#[serde(default, deserialize_with = "null_as_default")]
	pub url: String,
	#[serde(default, deserialize_with = "null_as_default")]
	pub raw_content: String,
	/// Image URLs, present when `include_images` was set.
	#[serde(
		default,
		deserialize_with = "null_as_default",
		skip_serializing_if = "Vec::is_empty"
	)]
	pub images: Vec<String>,
}

/// Body of `POST /map`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MapRequest {
	#[serde(flatten)]
	pub scope: SiteScope,
}

impl MapRequest {
	pub fn new(scope: SiteScope) -> Self {
		Self { scope }
	}
}

impl From<SiteScope> for MapRequest {
	fn from(scope: SiteScope) -> Self {
		Self::new(scope)
	}
}

impl From<SiteScope> for CrawlRequest {
	fn from(scope: SiteScope) -> Self {
		Self::new(scope)
	}
}

/// Response from `POST /map`: discovered URLs only, no content.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MapResponse {
	#[serde(default, deserialize_with = "null_as_default")]
	pub base_url: String,
	#[serde(default, deserialize_with = "null_as_default")]
	pub results: Vec<String>,
	#[serde(default, deserialize_with = "null_as_default")]
	pub response_time: f64,
}
