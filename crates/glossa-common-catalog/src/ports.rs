// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Collaborator traits implemented outside this workspace.

use std::path::Path;

use crate::catalogue::Catalogue;
use crate::error::CatalogueError;
use crate::index::CatalogueIndex;

/// Scans a translations directory and reports the files it contains.
pub trait TranslationFileLocator: Send + Sync {
	fn find(&self, dir: &Path) -> Result<CatalogueIndex, CatalogueError>;
}

/// Parses one translation file into a catalogue.
///
/// The returned catalogue holds at least the messages of `domain` for `locale`.
pub trait CatalogueLoader: Send + Sync {
	fn load(
		&self,
		path: &Path,
		format: &str,
		locale: &str,
		domain: &str,
	) -> Result<Catalogue, CatalogueError>;
}
