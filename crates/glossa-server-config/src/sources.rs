// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Configuration sources: defaults, TOML files and environment variables.

use std::path::PathBuf;

use tracing::{debug, trace};

use crate::error::ConfigError;
use crate::layer::GlossaConfigLayer;
use crate::paths::PathsConfig;
use crate::sections::{LoggingConfigLayer, TranslationConfigLayer};

/// Name of the configuration defined through `GLOSSA_TRANSLATIONS_DIR` when
/// `GLOSSA_CONFIG_NAME` is not set.
pub const DEFAULT_ENV_CONFIG_NAME: &str = "app";

/// Source precedence levels (higher = overrides lower).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
	Defaults = 10,
	SystemFile = 20,
	UserFile = 30,
	Environment = 50,
}

/// Trait for configuration sources.
pub trait ConfigSource: Send + Sync {
	fn name(&self) -> &'static str;
	fn precedence(&self) -> Precedence;
	fn load(&self) -> Result<GlossaConfigLayer, ConfigError>;
}

/// Built-in defaults source.
pub struct DefaultsSource;

impl ConfigSource for DefaultsSource {
	fn name(&self) -> &'static str {
		"defaults"
	}

	fn precedence(&self) -> Precedence {
		Precedence::Defaults
	}

	fn load(&self) -> Result<GlossaConfigLayer, ConfigError> {
		debug!("loading defaults");
		Ok(GlossaConfigLayer::default())
	}
}

/// TOML file configuration source. A missing file yields an empty layer.
pub struct TomlSource {
	path: PathBuf,
	precedence: Precedence,
}

impl TomlSource {
	pub fn new(path: impl Into<PathBuf>) -> Self {
		Self {
			path: path.into(),
			precedence: Precedence::UserFile,
		}
	}

	pub fn system(paths: &PathsConfig) -> Self {
		Self {
			path: paths.system_config_file.clone(),
			precedence: Precedence::SystemFile,
		}
	}

	pub fn user(paths: &PathsConfig) -> Self {
		Self::new(paths.user_config_file.clone())
	}
}

impl ConfigSource for TomlSource {
	fn name(&self) -> &'static str {
		"toml-config"
	}

	fn precedence(&self) -> Precedence {
		self.precedence
	}

	fn load(&self) -> Result<GlossaConfigLayer, ConfigError> {
		if !self.path.exists() {
			debug!(path = %self.path.display(), "config file not found, skipping");
			return Ok(GlossaConfigLayer::default());
		}

		debug!(path = %self.path.display(), "loading config file");
		let content = std::fs::read_to_string(&self.path).map_err(|e| ConfigError::FileRead {
			path: self.path.clone(),
			source: e,
		})?;

		let layer: GlossaConfigLayer =
			toml::from_str(&content).map_err(|e| ConfigError::TomlParse {
				path: self.path.clone(),
				source: e,
			})?;

		trace!(configs = layer.configs.len(), "parsed config layer from TOML");
		Ok(layer)
	}
}

/// Environment variable source.
///
/// - `GLOSSA_SOURCE_LANGUAGE`
/// - `GLOSSA_LOG_LEVEL`
/// - `GLOSSA_TRANSLATIONS_DIR` / `GLOSSA_OUTPUT_FORMAT`, applied to the
///   configuration named by `GLOSSA_CONFIG_NAME` (default `app`)
pub struct EnvSource;

impl ConfigSource for EnvSource {
	fn name(&self) -> &'static str {
		"environment"
	}

	fn precedence(&self) -> Precedence {
		Precedence::Environment
	}

	fn load(&self) -> Result<GlossaConfigLayer, ConfigError> {
		debug!("loading environment variables");
		Ok(layer_from_lookup(|name| std::env::var(name).ok()))
	}
}

fn layer_from_lookup(lookup: impl Fn(&str) -> Option<String>) -> GlossaConfigLayer {
	let env_var = |name: &str| lookup(name).filter(|s| !s.is_empty());

	let mut layer = GlossaConfigLayer {
		source_language: env_var("GLOSSA_SOURCE_LANGUAGE"),
		logging: Some(LoggingConfigLayer {
			level: env_var("GLOSSA_LOG_LEVEL"),
		}),
		..Default::default()
	};

	let translations_dir = env_var("GLOSSA_TRANSLATIONS_DIR").map(PathBuf::from);
	let output_format = env_var("GLOSSA_OUTPUT_FORMAT");
	if translations_dir.is_some() || output_format.is_some() {
		let name =
			env_var("GLOSSA_CONFIG_NAME").unwrap_or_else(|| DEFAULT_ENV_CONFIG_NAME.to_string());
		layer.configs.insert(
			name,
			TranslationConfigLayer {
				translations_dir,
				output_format,
			},
		);
	}

	layer
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::collections::HashMap;
	use std::io::Write;

	fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
		let vars: HashMap<String, String> = vars
			.iter()
			.map(|(k, v)| (k.to_string(), v.to_string()))
			.collect();
		move |name: &str| vars.get(name).cloned()
	}

	#[test]
	fn test_precedence_ordering() {
		assert!(Precedence::Environment > Precedence::UserFile);
		assert!(Precedence::UserFile > Precedence::SystemFile);
		assert!(Precedence::SystemFile > Precedence::Defaults);
	}

	#[test]
	fn test_defaults_source_returns_empty_layer() {
		let layer = DefaultsSource.load().unwrap();
		assert!(layer.source_language.is_none());
		assert!(layer.configs.is_empty());
	}

	#[test]
	fn test_file_sources_follow_paths() {
		let dir = tempfile::tempdir().unwrap();
		let paths = PathsConfig {
			user_config_file: dir.path().join("user.toml"),
			system_config_file: dir.path().join("system.toml"),
		};
		std::fs::write(&paths.system_config_file, "source_language = \"de\"\n").unwrap();
		std::fs::write(&paths.user_config_file, "source_language = \"fr\"\n").unwrap();

		let system = TomlSource::system(&paths);
		assert_eq!(system.precedence(), Precedence::SystemFile);
		assert_eq!(system.load().unwrap().source_language.as_deref(), Some("de"));

		let user = TomlSource::user(&paths);
		assert_eq!(user.precedence(), Precedence::UserFile);
		assert_eq!(user.load().unwrap().source_language.as_deref(), Some("fr"));
	}

	#[test]
	fn test_toml_source_missing_file_returns_empty() {
		let layer = TomlSource::new("/nonexistent/glossa.toml").load().unwrap();
		assert!(layer.configs.is_empty());
	}

	#[test]
	fn test_toml_source_parses_configs() {
		let mut file = tempfile::NamedTempFile::new().unwrap();
		writeln!(
			file,
			r#"
source_language = "de"

[logging]
level = "debug"

[configs.app]
translations_dir = "translations"

[configs.admin]
translations_dir = "admin/translations"
output_format = "yml"
"#
		)
		.unwrap();

		let layer = TomlSource::new(file.path()).load().unwrap();
		assert_eq!(layer.source_language.as_deref(), Some("de"));
		assert_eq!(layer.configs.len(), 2);
		assert_eq!(
			layer.configs["admin"].output_format.as_deref(),
			Some("yml")
		);
		assert_eq!(
			layer.logging.and_then(|l| l.level).as_deref(),
			Some("debug")
		);
	}

	#[test]
	fn test_toml_source_reports_parse_errors() {
		let mut file = tempfile::NamedTempFile::new().unwrap();
		writeln!(file, "[configs.app\ntranslations_dir = ").unwrap();

		let err = TomlSource::new(file.path()).load().unwrap_err();
		assert!(matches!(err, ConfigError::TomlParse { .. }));
	}

	#[test]
	fn test_env_defines_default_config() {
		let layer = layer_from_lookup(lookup(&[("GLOSSA_TRANSLATIONS_DIR", "/srv/t")]));
		let app = &layer.configs[DEFAULT_ENV_CONFIG_NAME];
		assert_eq!(app.translations_dir, Some(PathBuf::from("/srv/t")));
		assert!(app.output_format.is_none());
	}

	#[test]
	fn test_env_config_name_and_format() {
		let layer = layer_from_lookup(lookup(&[
			("GLOSSA_TRANSLATIONS_DIR", "/srv/admin"),
			("GLOSSA_CONFIG_NAME", "admin"),
			("GLOSSA_OUTPUT_FORMAT", "yml"),
			("GLOSSA_SOURCE_LANGUAGE", "fr"),
		]));
		assert!(!layer.configs.contains_key(DEFAULT_ENV_CONFIG_NAME));
		assert_eq!(layer.configs["admin"].output_format.as_deref(), Some("yml"));
		assert_eq!(layer.source_language.as_deref(), Some("fr"));
	}

	#[test]
	fn test_env_empty_values_ignored() {
		let layer = layer_from_lookup(lookup(&[
			("GLOSSA_TRANSLATIONS_DIR", ""),
			("GLOSSA_SOURCE_LANGUAGE", ""),
		]));
		assert!(layer.configs.is_empty());
		assert!(layer.source_language.is_none());
	}
}
