// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Named translation configurations (`[configs.<name>]`).

use std::path::PathBuf;

use serde::Deserialize;

use crate::error::ConfigError;

/// Format used when a configuration does not name one.
pub const DEFAULT_OUTPUT_FORMAT: &str = "xliff";

/// One translation configuration (runtime, fully resolved).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationSection {
	/// Directory the extractor writes catalogues to.
	pub translations_dir: PathBuf,
	pub output_format: String,
}

/// Translation configuration layer (partial, for merging).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TranslationConfigLayer {
	#[serde(default)]
	pub translations_dir: Option<PathBuf>,
	#[serde(default)]
	pub output_format: Option<String>,
}

impl TranslationConfigLayer {
	pub fn merge(&mut self, other: TranslationConfigLayer) {
		if other.translations_dir.is_some() {
			self.translations_dir = other.translations_dir;
		}
		if other.output_format.is_some() {
			self.output_format = other.output_format;
		}
	}

	pub fn finalize(self, name: &str) -> Result<TranslationSection, ConfigError> {
		let translations_dir = self
			.translations_dir
			.filter(|dir| !dir.as_os_str().is_empty())
			.ok_or_else(|| ConfigError::missing_field(format!("configs.{name}.translations_dir")))?;

		let output_format = self
			.output_format
			.unwrap_or_else(|| DEFAULT_OUTPUT_FORMAT.to_string());
		if output_format.trim().is_empty() {
			return Err(ConfigError::InvalidValue {
				key: format!("configs.{name}.output_format"),
				message: "must not be empty".to_string(),
			});
		}

		Ok(TranslationSection {
			translations_dir,
			output_format,
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_default_output_format() {
		let layer = TranslationConfigLayer {
			translations_dir: Some(PathBuf::from("translations")),
			output_format: None,
		};
		let section = layer.finalize("app").unwrap();
		assert_eq!(section.output_format, "xliff");
		assert_eq!(section.translations_dir, PathBuf::from("translations"));
	}

	#[test]
	fn test_missing_dir_names_the_config() {
		let err = TranslationConfigLayer::default().finalize("admin").unwrap_err();
		assert!(err.to_string().contains("configs.admin.translations_dir"));
	}

	#[test]
	fn test_empty_dir_is_missing() {
		let layer = TranslationConfigLayer {
			translations_dir: Some(PathBuf::new()),
			output_format: None,
		};
		assert!(matches!(
			layer.finalize("app"),
			Err(ConfigError::MissingField(_))
		));
	}

	#[test]
	fn test_blank_format_rejected() {
		let layer = TranslationConfigLayer {
			translations_dir: Some(PathBuf::from("t")),
			output_format: Some(" ".to_string()),
		};
		assert!(matches!(
			layer.finalize("app"),
			Err(ConfigError::InvalidValue { .. })
		));
	}

	#[test]
	fn test_merge_overrides_per_field() {
		let mut layer = TranslationConfigLayer {
			translations_dir: Some(PathBuf::from("a")),
			output_format: Some("yml".to_string()),
		};
		layer.merge(TranslationConfigLayer {
			translations_dir: Some(PathBuf::from("b")),
			output_format: None,
		});
		let section = layer.finalize("app").unwrap();
		assert_eq!(section.translations_dir, PathBuf::from("b"));
		assert_eq!(section.output_format, "yml");
	}
}
