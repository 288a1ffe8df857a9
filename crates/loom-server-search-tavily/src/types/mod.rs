// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Request and response types for the Tavily API.
//!
//! Optional request fields left unset are omitted from the JSON body so the
//! service applies its own defaults. Documented ranges (for example
//! `max_results` 0-20) are not checked locally; Tavily rejects bad values.

mod crawl;
mod extract;
pub(crate) mod images;
mod search;

use serde::{Deserialize, Deserializer, Serialize};

pub use crawl::{CrawlRequest, CrawlResponse, CrawlResult, MapRequest, MapResponse, SiteScope};
pub use extract::{ExtractFailedResult, ExtractRequest, ExtractResponse, ExtractResult};
pub use images::SearchImage;
pub use search::{SearchRequest, SearchResponse, SearchResult};

/// Category of a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Topic {
	General,
	/// Real-time updates from mainstream media sources.
	News,
}

/// How hard the service works to find relevant sources and snippets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchDepth {
	Basic,
	Advanced,
}

/// How much content the service pulls out of each page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExtractDepth {
	Basic,
	/// Includes tables and embedded content, at higher latency.
	Advanced,
}

/// Window back from today used to filter search results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeRange {
	Day,
	Week,
	Month,
	Year,
}

/// Style of the LLM-generated answer requested with a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnswerMode {
	Basic,
	Advanced,
}

/// Decodes `null` as `T::default()`.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
	D: Deserializer<'de>,
	T: Deserialize<'de> + Default,
{
	Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

pub(crate) fn is_false(value: &bool) -> bool {
	!*value
}
