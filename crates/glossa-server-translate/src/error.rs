// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use std::path::PathBuf;

use glossa_common_catalog::CatalogueError;
use glossa_server_config::ConfigError;
use thiserror::Error;

/// Result type alias for browse operations.
pub type BrowseResult<T> = Result<T, BrowseError>;

/// Errors surfaced to the caller of a browse request.
///
/// Missing domains, missing locales and empty filters are not errors; they
/// fall back to the first available value.
#[derive(Error, Debug)]
pub enum BrowseError {
	#[error("You need to configure at least one translation config under \"configs\".")]
	NoConfiguration,

	#[error(
		"There are no translation files in {}, please run the extraction first.",
		dir.display()
	)]
	NoTranslationFiles { dir: PathBuf },

	#[error("The catalogue index is empty.")]
	EmptyIndex,

	#[error("Domain '{domain}' has no locales in the catalogue index.")]
	NoLocales { domain: String },

	#[error("No translation file indexed for domain '{domain}' and locale '{locale}'.")]
	MissingFile { domain: String, locale: String },

	#[error("Configuration error: {0}")]
	Config(#[from] ConfigError),

	#[error("Failed to locate translation files: {0}")]
	Locate(#[source] CatalogueError),

	#[error("Failed to load catalogue for domain '{domain}', locale '{locale}': {source}")]
	Load {
		domain: String,
		locale: String,
		#[source]
		source: CatalogueError,
	},
}
