// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! In-memory implementations of the collaborator ports.
//!
//! Useful when catalogues come from somewhere other than the file system
//! (a database, an embedded bundle) and for driving the browser in tests.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use tracing::{debug, trace};

use crate::catalogue::Catalogue;
use crate::error::CatalogueError;
use crate::index::CatalogueIndex;
use crate::ports::{CatalogueLoader, TranslationFileLocator};

/// Serves pre-built catalogues keyed by file path.
#[derive(Debug, Default)]
pub struct InMemoryCatalogueLoader {
	catalogues: HashMap<PathBuf, Catalogue>,
	loads: AtomicUsize,
}

impl InMemoryCatalogueLoader {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn insert(&mut self, path: impl Into<PathBuf>, catalogue: Catalogue) {
		self.catalogues.insert(path.into(), catalogue);
	}

	pub fn with_catalogue(mut self, path: impl Into<PathBuf>, catalogue: Catalogue) -> Self {
		self.insert(path, catalogue);
		self
	}

	/// Number of successful and failed `load` calls so far.
	pub fn load_count(&self) -> usize {
		self.loads.load(Ordering::Relaxed)
	}
}

impl CatalogueLoader for InMemoryCatalogueLoader {
	fn load(
		&self,
		path: &Path,
		format: &str,
		locale: &str,
		domain: &str,
	) -> Result<Catalogue, CatalogueError> {
		self.loads.fetch_add(1, Ordering::Relaxed);
		trace!(path = %path.display(), format, locale, domain, "loading in-memory catalogue");

		self
			.catalogues
			.get(path)
			.cloned()
			.ok_or_else(|| CatalogueError::load(path, "no catalogue registered for path"))
	}
}

/// Returns a fixed index per directory.
///
/// Unknown directories yield an empty index, matching a directory that holds
/// no translation files.
#[derive(Debug, Clone, Default)]
pub struct StaticFileLocator {
	indexes: HashMap<PathBuf, CatalogueIndex>,
}

impl StaticFileLocator {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn insert(&mut self, dir: impl Into<PathBuf>, index: CatalogueIndex) {
		self.indexes.insert(dir.into(), index);
	}

	pub fn with_index(mut self, dir: impl Into<PathBuf>, index: CatalogueIndex) -> Self {
		self.insert(dir, index);
		self
	}
}

impl TranslationFileLocator for StaticFileLocator {
	fn find(&self, dir: &Path) -> Result<CatalogueIndex, CatalogueError> {
		let index = self.indexes.get(dir).cloned().unwrap_or_default();
		debug!(dir = %dir.display(), files = index.len(), "located translation files");
		Ok(index)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::catalogue::Message;
	use crate::index::TranslationFile;

	#[test]
	fn test_loader_returns_registered_catalogue() {
		let loader = InMemoryCatalogueLoader::new().with_catalogue(
			"messages.en.yml",
			Catalogue::new("en").with_message("messages", Message::new("hello", "Hello")),
		);

		let catalogue = loader
			.load(Path::new("messages.en.yml"), "yml", "en", "messages")
			.unwrap();
		assert_eq!(catalogue.locale(), "en");
		assert_eq!(catalogue.len(), 1);
		assert_eq!(loader.load_count(), 1);
	}

	#[test]
	fn test_loader_unknown_path_errors() {
		let loader = InMemoryCatalogueLoader::new();
		let err = loader
			.load(Path::new("missing.fr.yml"), "yml", "fr", "missing")
			.unwrap_err();
		assert!(matches!(err, CatalogueError::Load { .. }));
		assert_eq!(loader.load_count(), 1);
	}

	#[test]
	fn test_locator_known_dir() {
		let index = CatalogueIndex::new().with_file(
			"messages",
			"en",
			TranslationFile::new("yml", "/t/messages.en.yml"),
		);
		let locator = StaticFileLocator::new().with_index("/t", index.clone());
		assert_eq!(locator.find(Path::new("/t")).unwrap(), index);
	}

	#[test]
	fn test_locator_unknown_dir_is_empty() {
		let locator = StaticFileLocator::new();
		assert!(locator.find(Path::new("/nowhere")).unwrap().is_empty());
	}
}
