// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Tavily client configuration.

use loom_common_config::{load_env, load_secret_env, SecretEnvError, SecretString};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::client::TavilyClient;

pub const API_KEY_ENV: &str = "LOOM_SERVER_TAVILY_API_KEY";
pub const BASE_URL_ENV: &str = "LOOM_SERVER_TAVILY_BASE_URL";

/// Settings for building a [`TavilyClient`] from config files or the
/// environment. Unset fields fall back to the client's defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TavilyConfig {
	#[serde(default)]
	pub api_key: Option<SecretString>,
	#[serde(default)]
	pub base_url: Option<String>,
}

impl TavilyConfig {
	/// Reads `LOOM_SERVER_TAVILY_API_KEY` (or `LOOM_SERVER_TAVILY_API_KEY_FILE`)
	/// and `LOOM_SERVER_TAVILY_BASE_URL`. Empty values count as unset.
	pub fn from_env() -> Result<Self, SecretEnvError> {
		Self::from_env_vars(API_KEY_ENV, BASE_URL_ENV)
	}

	fn from_env_vars(api_key_var: &str, base_url_var: &str) -> Result<Self, SecretEnvError> {
		let api_key = load_secret_env(api_key_var)?.filter(|key| !key.expose().is_empty());
		Ok(Self {
			api_key,
			base_url: load_env(base_url_var),
		})
	}

	/// Overlays `other`; fields it sets win.
	pub fn merge(&mut self, other: Self) {
		if other.api_key.is_some() {
			self.api_key = other.api_key;
		}
		if other.base_url.is_some() {
			self.base_url = other.base_url;
		}
	}

	pub fn is_configured(&self) -> bool {
		self.api_key.is_some()
	}

	/// Builds a client, or `None` when no API key is configured.
	pub fn build_client(&self) -> Option<TavilyClient> {
		let Some(api_key) = &self.api_key else {
			info!("Tavily not configured");
			return None;
		};

		info!("Tavily configured, creating client");
		let client = TavilyClient::new(api_key.expose().clone());
		Some(match &self.base_url {
			Some(base_url) => client.with_base_url(base_url.clone()),
			None => client,
		})
	}
}
