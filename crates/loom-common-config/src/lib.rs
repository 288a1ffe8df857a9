// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Common configuration primitives for Loom.
//!
//! - [`Secret<T>`]: wraps credentials so they never reach logs, config dumps
//!   or panic messages
//! - [`load_secret_env`] / [`require_secret_env`]: read a credential from
//!   `VAR` or from the file named by `VAR_FILE`

pub mod env;
mod secret;

pub use env::{
	load_env, load_secret_env, require_secret_env, RequiredSecretError, SecretEnvError,
};
pub use secret::{Secret, SecretString, REDACTED};
