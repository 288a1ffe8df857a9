// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

use serde::{Deserialize, Serialize};

use super::images::{self, SearchImage};
use super::{is_false, null_as_default, AnswerMode, SearchDepth, TimeRange, Topic};

/// Body of `POST /search`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SearchRequest {
	pub query: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub topic: Option<Topic>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub search_depth: Option<SearchDepth>,
	/// Content chunks per source (1-3). Only honoured for advanced depth.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub chunks_per_source: Option<u32>,
	/// Result cap (0-20).
	#[serde(skip_serializing_if = "Option::is_none")]
	pub max_results: Option<u32>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub time_range: Option<TimeRange>,
	/// Days back from today. Only honoured for the news topic.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub days: Option<u32>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub include_answer: Option<AnswerMode>,
	#[serde(skip_serializing_if = "is_false")]
	pub include_raw_content: bool,
	#[serde(skip_serializing_if = "is_false")]
	pub include_images: bool,
	#[serde(skip_serializing_if = "is_false")]
	pub include_image_descriptions: bool,
	#[serde(skip_serializing_if = "Vec::is_empty")]
	pub include_domains: Vec<String>,
	#[serde(skip_serializing_if = "Vec::is_empty")]
	pub exclude_domains: Vec<String>,
}

impl SearchRequest {
	pub fn new(query: impl Into<String>) -> Self {
		Self {
			query: query.into(),
			..Default::default()
		}
	}

	pub fn with_topic(mut self, topic: Topic) -> Self {
		self.topic = Some(topic);
		self
	}

	pub fn with_search_depth(mut self, depth: SearchDepth) -> Self {
		self.search_depth = Some(depth);
		self
	}

	pub fn with_chunks_per_source(mut self, chunks: u32) -> Self {
		self.chunks_per_source = Some(chunks);
		self
	}

	pub fn with_max_results(mut self, max_results: u32) -> Self {
		self.max_results = Some(max_results);
		self
	}

	pub fn with_time_range(mut self, range: TimeRange) -> Self {
		self.time_range = Some(range);
		self
	}

	pub fn with_days(mut self, days: u32) -> Self {
		self.days = Some(days);
		self
	}

	pub fn with_answer(mut self, mode: AnswerMode) -> Self {
		self.include_answer = Some(mode);
		self
	}

	pub fn with_raw_content(mut self, include: bool) -> Self {
		self.include_raw_content = include;
		self
	}

	pub fn with_images(mut self, include: bool) -> Self {
		self.include_images = include;
		self
	}

	/// Asks for a caption per image. Only honoured together with images.
	pub fn with_image_descriptions(mut self, include: bool) -> Self {
		self.include_image_descriptions = include;
		self
	}

	pub fn include_domain(mut self, domain: impl Into<String>) -> Self {
		self.include_domains.push(domain.into());
		self
	}

	pub fn exclude_domain(mut self, domain: impl Into<String>) -> Self {
		self.exclude_domains.push(domain.into());
		self
	}
}

/// Response from `POST /search`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
	#[serde(default, deserialize_with = "null_as_default")]
	pub query: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub answer: Option<String>,
	#[serde(default, deserialize_with = "null_as_default")]
	pub follow_up_questions: Vec<String>,
	#[serde(default, deserialize_with = "images::deserialize")]
	pub images: Vec<SearchImage>,
	#[serde(default, deserialize_with = "null_as_default")]
	pub results: Vec<SearchResult>,
	/// Server-side processing time in seconds.
	#[serde(default, deserialize_with = "null_as_default")]
	pub response_time: f64,
}

/// A single ranked search result.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
	#[serde(default, deserialize_with = "null_as_default")]
	pub title: String,
	#[serde(default, deserialize_with = "null_as_default")]
	pub url: String,
	/// Snippet most relevant to the query.
	#[serde(default, deserialize_with = "null_as_default")]
	pub content: String,
	#[serde(default, deserialize_with = "null_as_default")]
	pub score: f64,
	/// Cleaned page content, present when `include_raw_content` was set.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub raw_content: Option<String>,
	/// Publication date, present for the news topic.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub published_date: Option<String>,
}
