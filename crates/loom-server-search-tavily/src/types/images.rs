// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Search response image list.
//!
//! Tavily sends `images` either as plain URL strings or as
//! `{url, description}` objects depending on `include_image_descriptions`.
//! Both are normalized into [`SearchImage`].

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::null_as_default;

/// An image attached to a search response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchImage {
	#[serde(default, deserialize_with = "null_as_default")]
	pub url: String,
	/// Empty when the service sent a bare URL.
	#[serde(
		default,
		deserialize_with = "null_as_default",
		skip_serializing_if = "String::is_empty"
	)]
	pub description: String,
}

impl SearchImage {
	pub fn new(url: impl Into<String>) -> Self {
		Self {
			url: url.into(),
			description: String::new(),
		}
	}
}

/// Tries `[string]`, then `[{url, description}]`. `null` is an empty list.
pub(crate) fn deserialize<'de, D>(deserializer: D) -> Result<Vec<SearchImage>, D::Error>
where
	D: Deserializer<'de>,
{
	let value = Value::deserialize(deserializer)?;
	decode(&value).ok_or_else(|| D::Error::custom("images: invalid format"))
}

fn decode(value: &Value) -> Option<Vec<SearchImage>> {
	if value.is_null() {
		return Some(Vec::new());
	}

	if let Ok(urls) = Vec::<String>::deserialize(value) {
		return Some(urls.into_iter().map(SearchImage::new).collect());
	}

	Vec::<SearchImage>::deserialize(value).ok()
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;
	use serde_json::json;

	#[derive(Debug, Deserialize)]
	struct Holder {
		#[serde(default, deserialize_with = "deserialize")]
		images: Vec<SearchImage>,
	}

	fn decode_holder(value: Value) -> Result<Vec<SearchImage>, serde_json::Error> {
		serde_json::from_value::<Holder>(value).map(|h| h.images)
	}

	#[test]
	fn plain_urls_get_empty_descriptions() {
		let images = decode_holder(json!({"images": ["http://a.com", "http://b.com"]})).unwrap();
		assert_eq!(
			images,
			vec![SearchImage::new("http://a.com"), SearchImage::new("http://b.com")]
		);
		assert!(images.iter().all(|i| i.description.is_empty()));
	}

	#[test]
	fn structured_entries_keep_description() {
		let images =
			decode_holder(json!({"images": [{"url": "http://a.com", "description": "x"}]})).unwrap();
		assert_eq!(images.len(), 1);
		assert_eq!(images[0].url, "http://a.com");
		assert_eq!(images[0].description, "x");
	}

	#[test]
	fn structured_entry_without_description() {
		let images = decode_holder(json!({"images": [
			{"url": "http://a.com"},
			{"url": "http://b.com", "description": null}
		]}))
		.unwrap();
		assert_eq!(
			images,
			vec![SearchImage::new("http://a.com"), SearchImage::new("http://b.com")]
		);
	}

	#[test]
	fn structured_entry_without_url_is_kept() {
		let images = decode_holder(json!({"images": [
			{"description": "no link"},
			{"url": null, "description": "null link"}
		]}))
		.unwrap();
		assert_eq!(images.len(), 2);
		assert_eq!(images[0].url, "");
		assert_eq!(images[0].description, "no link");
		assert_eq!(images[1].url, "");
	}

	#[test]
	fn object_is_format_error() {
		let err = decode_holder(json!({"images": {"bad": 1}})).unwrap_err();
		assert!(err.to_string().contains("images: invalid format"), "{err}");
	}

	#[test]
	fn mixed_shapes_are_format_error() {
		let err = decode_holder(json!({"images": ["http://a.com", {"url": "http://b.com"}]}))
			.unwrap_err();
		assert!(err.to_string().contains("images: invalid format"), "{err}");
	}

	#[test]
	fn null_and_missing_are_empty() {
		assert!(decode_holder(json!({"images": null})).unwrap().is_empty());
		assert!(decode_holder(json!({})).unwrap().is_empty());
	}

	#[test]
	fn empty_description_is_not_serialized() {
		let json = serde_json::to_value(SearchImage::new("http://a.com")).unwrap();
		assert_eq!(json, json!({"url": "http://a.com"}));
	}

	proptest! {
		/// Both wire shapes normalize to the same URLs, in order.
		#[test]
		fn shapes_agree_on_urls(urls in proptest::collection::vec("https://[a-z]{1,12}\\.com/[a-z0-9]{0,8}", 0..10)) {
			let plain = decode_holder(json!({"images": urls})).unwrap();
			let structured: Vec<Value> = urls.iter().map(|u| json!({"url": u})).collect();
			let structured = decode_holder(json!({"images": structured})).unwrap();

			prop_assert_eq!(&plain, &structured);
			let decoded: Vec<String> = plain.into_iter().map(|i| i.url).collect();
			prop_assert_eq!(decoded, urls);
		}
	}
}
