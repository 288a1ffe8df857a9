// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Tavily API client implementation.

use bytes::Bytes;
use loom_common_config::SecretString;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, instrument, trace, warn};

use crate::error::{Operation, TavilyError};
use crate::types::{
	CrawlRequest, CrawlResponse, ExtractRequest, ExtractResponse, MapRequest, MapResponse,
	SearchRequest, SearchResponse,
};

pub const DEFAULT_BASE_URL: &str = "https://api.tavily.com";

/// Client for the Tavily search, extract, crawl and map API.
///
/// Cheap to clone and safe to share across tasks; nothing is mutated after
/// construction. Requests are never retried and carry no client-side
/// timeout. Bound a call with `tokio::time::timeout`, drop its future, or
/// attach a token with [`TavilyClient::with_cancellation`].
#[derive(Debug, Clone)]
pub struct TavilyClient {
	http_client: Client,
	api_key: SecretString,
	base_url: String,
	cancellation: CancellationToken,
}

impl TavilyClient {
	/// Creates a client for the production endpoint. Does no I/O.
	pub fn new(api_key: impl Into<String>) -> Self {
		let http_client = loom_common_http::new_client().unwrap_or_else(|e| {
			warn!(error = %e, "Failed to build Loom HTTP client, using reqwest defaults");
			Client::new()
		});

		Self {
			http_client,
			api_key: SecretString::new(api_key.into()),
			base_url: DEFAULT_BASE_URL.to_string(),
			cancellation: CancellationToken::new(),
		}
	}

	/// Sets a custom base URL for the API (useful for testing).
	pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
		let base_url = base_url.into();
		self.base_url = base_url.trim_end_matches('/').to_string();
		self
	}

	/// Replaces the transport, e.g. to configure a proxy, TLS or pool limits.
	pub fn with_http_client(mut self, http_client: Client) -> Self {
		self.http_client = http_client;
		self
	}

	/// Returns a client whose calls fail with [`TavilyError::Cancelled`] as
	/// soon as `token` is cancelled.
	pub fn with_cancellation(&self, token: CancellationToken) -> Self {
		Self {
			cancellation: token,
			..self.clone()
		}
	}

	pub fn base_url(&self) -> &str {
		&self.base_url
	}

	/// Runs a web search.
	#[instrument(skip(self, request), fields(query = %request.query))]
	pub async fn search(&self, request: &SearchRequest) -> Result<SearchResponse, TavilyError> {
		let response: SearchResponse = self.call(Operation::Search, request).await?;
		debug!(
			result_count = response.results.len(),
			image_count = response.images.len(),
			"Search completed successfully"
		);
		Ok(response)
	}

	/// Extracts page content from each URL. Per-URL failures are reported in
	/// [`ExtractResponse::failed_results`], not as an error.
	#[instrument(skip(self, request), fields(url_count = request.urls.len()))]
	pub async fn extract(&self, request: &ExtractRequest) -> Result<ExtractResponse, TavilyError> {
		let response: ExtractResponse = self.call(Operation::Extract, request).await?;
		if response.is_partial() {
			warn!(
				failed_count = response.failed_results.len(),
				"Some URLs could not be extracted"
			);
		}
		debug!(
			result_count = response.results.len(),
			"Extract completed successfully"
		);
		Ok(response)
	}

	/// Crawls a site from its root URL and returns page content.
	#[instrument(skip(self, request), fields(url = %request.scope.url))]
	pub async fn crawl(&self, request: &CrawlRequest) -> Result<CrawlResponse, TavilyError> {
		let response: CrawlResponse = self.call(Operation::Crawl, request).await?;
		debug!(
			page_count = response.results.len(),
			"Crawl completed successfully"
		);
		Ok(response)
	}

	/// Discovers a site's URLs without fetching their content.
	#[instrument(skip(self, request), fields(url = %request.scope.url))]
	pub async fn map(&self, request: &MapRequest) -> Result<MapResponse, TavilyError> {
		let response: MapResponse = self.call(Operation::Map, request).await?;
		debug!(
			url_count = response.results.len(),
			"Map completed successfully"
		);
		Ok(response)
	}

	async fn call<Req, Resp>(&self, operation: Operation, request: &Req) -> Result<Resp, TavilyError>
	where
		Req: Serialize,
		Resp: DeserializeOwned,
	{
		let payload = serde_json::to_vec(request).map_err(|source| {
			error!(error = %source, "Failed to encode Tavily request");
			TavilyError::Serialize { operation, source }
		})?;

		let body = self.execute(operation, payload).await?;

		serde_json::from_slice(&body).map_err(|source| {
			error!(error = %source, "Failed to parse Tavily response");
			TavilyError::InvalidResponse { operation, source }
		})
	}

	/// The only place requests hit the network. Returns the raw body of a 200.
	async fn execute(&self, operation: Operation, payload: Vec<u8>) -> Result<Bytes, TavilyError> {
		tokio::select! {
			biased;
			_ = self.cancellation.cancelled() => {
				warn!("Tavily request cancelled");
				Err(TavilyError::Cancelled { operation })
			}
			result = self.send(operation, payload) => result,
		}
	}

	async fn send(&self, operation: Operation, payload: Vec<u8>) -> Result<Bytes, TavilyError> {
		let url = format!("{}{}", self.base_url, operation.path());
		debug!(url = %url, "Sending request to Tavily");

		let response = self
			.http_client
			.post(&url)
			.bearer_auth(self.api_key.expose())
			.header(CONTENT_TYPE, "application/json")
			.body(payload)
			.send()
			.await
			.map_err(|source| {
				error!(error = %source, "Network error during Tavily request");
				TavilyError::Network { operation, source }
			})?;

		let status = response.status();
		debug!(status = %status, "Received response from Tavily");

		let body = response.bytes().await.map_err(|source| {
			error!(error = %source, "Failed to read response body");
			TavilyError::Network { operation, source }
		})?;

		if status != StatusCode::OK {
			let body = String::from_utf8_lossy(&body).into_owned();
			error!(status = status.as_u16(), body = %body, "Tavily API error");
			return Err(TavilyError::Api {
				operation,
				status: status.as_u16(),
				body,
			});
		}

		trace!(body = %String::from_utf8_lossy(&body), "Response body");
		Ok(body)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_client_creation() {
		let client = TavilyClient::new("tvly-test-key");
		assert_eq!(client.api_key.expose(), "tvly-test-key");
		assert_eq!(client.base_url(), DEFAULT_BASE_URL);
		assert!(!client.cancellation.is_cancelled());
	}

	#[test]
	fn test_with_base_url_trims_trailing_slash() {
		let client = TavilyClient::new("key").with_base_url("http://127.0.0.1:9000/");
		assert_eq!(client.base_url(), "http://127.0.0.1:9000");
	}

	#[test]
	fn test_debug_redacts_api_key() {
		let client = TavilyClient::new("tvly-very-secret");
		let debug = format!("{client:?}");
		assert!(!debug.contains("tvly-very-secret"));
		assert!(debug.contains("[REDACTED]"));
	}

	#[test]
	fn test_with_cancellation_returns_bound_copy() {
		let client = TavilyClient::new("key").with_base_url("http://localhost:1");
		let token = CancellationToken::new();
		let bound = client.with_cancellation(token.clone());
		token.cancel();

		assert!(bound.cancellation.is_cancelled());
		assert!(!client.cancellation.is_cancelled());
		assert_eq!(bound.base_url(), client.base_url());
	}

	#[tokio::test]
	async fn test_cancelled_before_send_does_no_io() {
		// Port 1 is never listening; a real send would be a network error.
		let token = CancellationToken::new();
		token.cancel();
		let client = TavilyClient::new("key")
			.with_base_url("http://127.0.0.1:1")
			.with_cancellation(token);

		let err = client.search(&SearchRequest::new("q")).await.unwrap_err();
		assert!(err.is_cancelled());
		assert_eq!(err.operation(), Operation::Search);
	}
}
