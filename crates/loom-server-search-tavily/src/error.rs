// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Error types for the Tavily API client.

use std::fmt;

use thiserror::Error;

/// The API operation an error came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
	Search,
	Extract,
	Crawl,
	Map,
}

impl Operation {
	pub fn as_str(&self) -> &'static str {
		match self {
			Operation::Search => "search",
			Operation::Extract => "extract",
			Operation::Crawl => "crawl",
			Operation::Map => "map",
		}
	}

	/// Request path appended to the client's base URL.
	pub fn path(&self) -> &'static str {
		match self {
			Operation::Search => "/search",
			Operation::Extract => "/extract",
			Operation::Crawl => "/crawl",
			Operation::Map => "/map",
		}
	}
}

impl fmt::Display for Operation {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Errors that can occur when calling the Tavily API.
///
/// None of these are retried by the client.
#[derive(Debug, Error)]
pub enum TavilyError {
	/// The request could not be encoded. Nothing was sent.
	///
	/// The built-in request types always encode; this covers a future field
	/// whose `Serialize` impl can fail, such as a map keyed by a struct.
	#[error("tavily {operation}: failed to encode request: {source}")]
	Serialize {
		operation: Operation,
		#[source]
		source: serde_json::Error,
	},

	/// The HTTP exchange could not be completed.
	#[error("tavily {operation}: network error: {source}")]
	Network {
		operation: Operation,
		#[source]
		source: reqwest::Error,
	},

	/// The caller's cancellation token fired before a response arrived.
	#[error("tavily {operation}: request cancelled")]
	Cancelled { operation: Operation },

	/// Tavily answered with a status other than 200. `body` is verbatim.
	#[error("tavily {operation}: API error: {status} - {body}")]
	Api {
		operation: Operation,
		status: u16,
		body: String,
	},

	/// The response body did not match the expected shape.
	#[error("tavily {operation}: invalid response: {source}")]
	InvalidResponse {
		operation: Operation,
		#[source]
		source: serde_json::Error,
	},
}

impl TavilyError {
	pub fn operation(&self) -> Operation {
		match self {
			TavilyError::Serialize { operation, .. }
			| TavilyError::Network { operation, .. }
			| TavilyError::Cancelled { operation }
			| TavilyError::Api { operation, .. }
			| TavilyError::InvalidResponse { operation, .. } => *operation,
		}
	}

	/// HTTP status for [`TavilyError::Api`].
	pub fn status(&self) -> Option<u16> {
		match self {
			TavilyError::Api { status, .. } => Some(*status),
			_ => None,
		}
	}

	/// True when the exchange itself failed, cancellation included.
	pub fn is_transport(&self) -> bool {
		matches!(
			self,
			TavilyError::Network { .. } | TavilyError::Cancelled { .. }
		)
	}

	pub fn is_cancelled(&self) -> bool {
		matches!(self, TavilyError::Cancelled { .. })
	}
}
