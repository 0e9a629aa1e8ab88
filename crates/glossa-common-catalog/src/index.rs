// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Index of translation files by domain and locale.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::natural::natural_sort;

/// One translation file as reported by a locator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TranslationFile {
	/// Format identifier understood by the loader (`xliff`, `yml`, ...).
	pub format: String,
	pub path: PathBuf,
	/// Whether the current process may write to the file.
	pub writable: bool,
}

impl TranslationFile {
	/// A writable file in `format` at `path`.
	pub fn new(format: impl Into<String>, path: impl Into<PathBuf>) -> Self {
		Self {
			format: format.into(),
			path: path.into(),
			writable: true,
		}
	}

	pub fn read_only(mut self) -> Self {
		self.writable = false;
		self
	}

	pub fn path(&self) -> &Path {
		&self.path
	}
}

/// Mapping of domain → locale → [`TranslationFile`].
///
/// Every domain present in the index has at least one locale. Listing methods
/// return names in natural order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogueIndex {
	files: BTreeMap<String, BTreeMap<String, TranslationFile>>,
}

impl CatalogueIndex {
	pub fn new() -> Self {
		Self::default()
	}

	/// Register `file` for `domain` and `locale`, replacing any previous entry.
	pub fn insert(
		&mut self,
		domain: impl Into<String>,
		locale: impl Into<String>,
		file: TranslationFile,
	) {
		self
			.files
			.entry(domain.into())
			.or_default()
			.insert(locale.into(), file);
	}

	/// Builder form of [`CatalogueIndex::insert`].
	pub fn with_file(
		mut self,
		domain: impl Into<String>,
		locale: impl Into<String>,
		file: TranslationFile,
	) -> Self {
		self.insert(domain, locale, file);
		self
	}

	/// Domain names in natural order.
	pub fn domains(&self) -> Vec<&str> {
		let mut domains: Vec<&str> = self.files.keys().map(String::as_str).collect();
		natural_sort(&mut domains);
		domains
	}

	/// Locale codes of `domain` in natural order. Empty for an unknown domain.
	pub fn locales(&self, domain: &str) -> Vec<&str> {
		let mut locales: Vec<&str> = self
			.files
			.get(domain)
			.map(|l| l.keys().map(String::as_str).collect())
			.unwrap_or_default();
		natural_sort(&mut locales);
		locales
	}

	pub fn contains_domain(&self, domain: &str) -> bool {
		self.files.contains_key(domain)
	}

	pub fn contains(&self, domain: &str, locale: &str) -> bool {
		self.file(domain, locale).is_some()
	}

	pub fn file(&self, domain: &str, locale: &str) -> Option<&TranslationFile> {
		self.files.get(domain).and_then(|l| l.get(locale))
	}

	/// Number of files across all domains.
	pub fn len(&self) -> usize {
		self.files.values().map(BTreeMap::len).sum()
	}

	pub fn is_empty(&self) -> bool {
		self.files.is_empty()
	}
}
