// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Shared HTTP utilities for Loom.
//!
//! Every outbound client is built from [`builder`] so requests carry the
//! same `User-Agent`.

mod client;

pub use client::{builder, new_client, user_agent};
