// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Catalogue error types.

use std::path::PathBuf;

/// Errors reported by catalogue collaborators.
#[derive(Debug, thiserror::Error)]
pub enum CatalogueError {
	/// A translation file could not be loaded into a catalogue
	#[error("failed to load catalogue {}: {reason}", path.display())]
	Load { path: PathBuf, reason: String },

	/// A translations directory could not be scanned
	#[error("failed to locate translation files in {}: {reason}", dir.display())]
	Locate { dir: PathBuf, reason: String },

	/// I/O error raised by a collaborator
	#[error("I/O error: {0}")]
	Io(#[from] std::io::Error),
}

impl CatalogueError {
	/// Create a load error
	pub fn load(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
		Self::Load {
			path: path.into(),
			reason: reason.into(),
		}
	}

	/// Create a locate error
	pub fn locate(dir: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
		Self::Locate {
			dir: dir.into(),
			reason: reason.into(),
		}
	}
}
