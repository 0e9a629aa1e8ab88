// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Configuration for the Glossa catalogue browser.
//!
//! This crate provides:
//! - Layered configuration from multiple sources (defaults, system and user
//!   TOML files, environment)
//! - Named translation configurations (`[configs.<name>]`), each pointing at a
//!   translations directory
//! - [`ConfigFactory`], the lookup interface the browser consumes
//!
//! # Usage
//!
//! ```ignore
//! use glossa_server_config::{load_config, ConfigFactory};
//!
//! let config = load_config()?;
//! for name in config.names() {
//!     println!("{name}: {}", config.config(&name, "en")?.translations_dir.display());
//! }
//! ```

pub mod error;
pub mod factory;
pub mod layer;
pub mod paths;
pub mod sections;
pub mod sources;

use std::collections::BTreeMap;

use glossa_common_catalog::natural_sort;
use tracing::{debug, info};

pub use error::ConfigError;
pub use factory::{ConfigFactory, TranslationConfig};
pub use layer::GlossaConfigLayer;
pub use paths::PathsConfig;
pub use sections::*;
pub use sources::{ConfigSource, DefaultsSource, EnvSource, Precedence, TomlSource};

/// Source language used when none is configured.
pub const DEFAULT_SOURCE_LANGUAGE: &str = "en";

/// Fully resolved configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlossaConfig {
	pub source_language: String,
	/// Not consumed by the Glossa libraries, which only emit `tracing` events.
	/// Binaries embedding them build their subscriber filter from `logging.level`.
	pub logging: LoggingConfig,
	pub configs: BTreeMap<String, TranslationSection>,
}

impl Default for GlossaConfig {
	fn default() -> Self {
		Self {
			source_language: DEFAULT_SOURCE_LANGUAGE.to_string(),
			logging: LoggingConfig::default(),
			configs: BTreeMap::new(),
		}
	}
}

impl ConfigFactory for GlossaConfig {
	fn names(&self) -> Vec<String> {
		let mut names: Vec<String> = self.configs.keys().cloned().collect();
		natural_sort(&mut names);
		names
	}

	fn config(&self, name: &str, locale: &str) -> Result<TranslationConfig, ConfigError> {
		let section = self
			.configs
			.get(name)
			.ok_or_else(|| ConfigError::UnknownConfig(name.to_string()))?;

		Ok(TranslationConfig {
			name: name.to_string(),
			locale: locale.to_string(),
			translations_dir: section.translations_dir.clone(),
			output_format: section.output_format.clone(),
		})
	}

	fn source_language(&self) -> &str {
		&self.source_language
	}
}

/// Load configuration from all sources with standard precedence.
///
/// Precedence (highest to lowest):
/// 1. Environment variables (`GLOSSA_*`)
/// 2. User config file (`$XDG_CONFIG_HOME/glossa/config.toml`)
/// 3. System config file (`/etc/glossa/config.toml`)
/// 4. Built-in defaults
pub fn load_config() -> Result<GlossaConfig, ConfigError> {
	let paths = paths::resolve_xdg_paths()?;

	let sources: Vec<Box<dyn ConfigSource>> = vec![
		Box::new(DefaultsSource),
		Box::new(TomlSource::system(&paths)),
		Box::new(TomlSource::user(&paths)),
		Box::new(EnvSource),
	];

	load_from_sources(sources)
}

/// Load configuration with a custom config file path in place of the system
/// and user files.
pub fn load_config_with_file(
	config_path: impl Into<std::path::PathBuf>,
) -> Result<GlossaConfig, ConfigError> {
	let sources: Vec<Box<dyn ConfigSource>> = vec![
		Box::new(DefaultsSource),
		Box::new(TomlSource::new(config_path)),
		Box::new(EnvSource),
	];

	load_from_sources(sources)
}

/// Merge `sources` in precedence order and finalize the result.
pub fn load_from_sources(
	mut sources: Vec<Box<dyn ConfigSource>>,
) -> Result<GlossaConfig, ConfigError> {
	sources.sort_by_key(|s| s.precedence());

	let mut merged = GlossaConfigLayer::default();
	for source in sources {
		debug!(source = source.name(), "loading configuration source");
		let layer = source.load()?;
		merged.merge(layer);
	}

	finalize(merged)
}

/// Finalize configuration layer into resolved config.
fn finalize(layer: GlossaConfigLayer) -> Result<GlossaConfig, ConfigError> {
	let source_language = layer
		.source_language
		.unwrap_or_else(|| DEFAULT_SOURCE_LANGUAGE.to_string());
	let logging = layer.logging.unwrap_or_default().finalize();

	let mut configs = BTreeMap::new();
	for (name, section) in layer.configs {
		let section = section.finalize(&name)?;
		configs.insert(name, section);
	}

	let config = GlossaConfig {
		source_language,
		logging,
		configs,
	};
	validate_config(&config)?;

	info!(
		source_language = %config.source_language,
		log_level = %config.logging.level,
		configs = config.configs.len(),
		"Glossa configuration loaded"
	);

	Ok(config)
}

/// Validate cross-field configuration rules.
fn validate_config(config: &GlossaConfig) -> Result<(), ConfigError> {
	if config.source_language.trim().is_empty() {
		return Err(ConfigError::validation("source_language must not be empty"));
	}

	if let Some(name) = config.configs.keys().find(|name| name.trim().is_empty()) {
		return Err(ConfigError::validation(format!(
			"translation config names must not be blank (got '{name}')"
		)));
	}

	Ok(())
}
