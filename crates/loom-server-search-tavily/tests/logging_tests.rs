// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! The API key must never reach log output, even at TRACE.

use std::io;
use std::sync::{Arc, Mutex};

use loom_server_search_tavily::{SearchRequest, TavilyClient};
use serde_json::json;
use tracing_subscriber::fmt::MakeWriter;
use wiremock::matchers::method;
use wiremock::{Mock, MockServer, ResponseTemplate};

const API_KEY: &str = "tvly-must-not-leak";

#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
	fn contents(&self) -> String {
		String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
	}
}

impl io::Write for CapturedLogs {
	fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
		self.0.lock().unwrap().extend_from_slice(buf);
		Ok(buf.len())
	}

	fn flush(&mut self) -> io::Result<()> {
		Ok(())
	}
}

impl<'a> MakeWriter<'a> for CapturedLogs {
	type Writer = CapturedLogs;

	fn make_writer(&'a self) -> Self::Writer {
		self.clone()
	}
}

#[tokio::test]
async fn trace_logs_do_not_contain_api_key() {
	let logs = CapturedLogs::default();
	let subscriber = tracing_subscriber::fmt()
		.with_max_level(tracing::Level::TRACE)
		.with_ansi(false)
		.with_writer(logs.clone())
		.finish();
	// Current-thread runtime: the thread-local default covers every await.
	let _guard = tracing::subscriber::set_default(subscriber);

	let server = MockServer::start().await;
	Mock::given(method("POST"))
		.respond_with(ResponseTemplate::new(500).set_body_json(json!({"detail": "quota"})))
		.mount(&server)
		.await;

	let client = TavilyClient::new(API_KEY).with_base_url(server.uri());
	tracing::info!(client = ?client, "Client constructed");
	let _ = client.search(&SearchRequest::new("leak check")).await;

	let output = logs.contents();
	assert!(output.contains("Sending request to Tavily"), "{output}");
	assert!(output.contains("Tavily API error"), "{output}");
	assert!(output.contains("leak check"), "{output}");
	assert!(!output.contains(API_KEY), "{output}");
}
