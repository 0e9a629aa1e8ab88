// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Access to named translation configurations.

use std::path::PathBuf;

use crate::error::ConfigError;

/// A translation configuration bound to a locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationConfig {
	pub name: String,
	pub locale: String,
	pub translations_dir: PathBuf,
	pub output_format: String,
}

/// Registry of translation configurations, read-only after startup.
pub trait ConfigFactory: Send + Sync {
	/// Registered configuration names in natural order.
	fn names(&self) -> Vec<String>;

	/// Resolve configuration `name` for `locale`.
	fn config(&self, name: &str, locale: &str) -> Result<TranslationConfig, ConfigError>;

	/// Language messages are originally written in.
	fn source_language(&self) -> &str;
}
