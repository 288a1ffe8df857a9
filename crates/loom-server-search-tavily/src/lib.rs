// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Tavily API client for Loom.
//!
//! This crate provides a typed Rust client for the four Tavily endpoints:
//! search, extract, crawl and map. Each call is one authenticated JSON POST
//! with no retries, caching or pagination.
//!
//! # Example
//!
//! ```ignore
//! use loom_server_search_tavily::{SearchRequest, TavilyClient, Topic};
//!
//! let client = TavilyClient::new(api_key);
//! let response = client
//!     .search(&SearchRequest::new("who is Leo Messi?").with_topic(Topic::General))
//!     .await?;
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod types;

pub use client::{TavilyClient, DEFAULT_BASE_URL};
pub use config::TavilyConfig;
pub use error::{Operation, TavilyError};
pub use tokio_util::sync::CancellationToken;
pub use types::{
	AnswerMode, CrawlRequest, CrawlResponse, CrawlResult, ExtractDepth, ExtractFailedResult,
	ExtractRequest, ExtractResponse, ExtractResult, MapRequest, MapResponse, SearchDepth,
	SearchImage, SearchRequest, SearchResponse, SearchResult, SiteScope, TimeRange, Topic,
};
