// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Translation catalogue model for Glossa.
//!
//! This crate provides the read-only data the catalogue browser works with:
//!
//! - [`CatalogueIndex`]: domain → locale → [`TranslationFile`], as produced by a
//!   [`TranslationFileLocator`]
//! - [`Catalogue`] and [`Message`]: the parsed contents of one file, as produced
//!   by a [`CatalogueLoader`]
//! - [`natural_cmp`]: the human ordering used for domains and locales
//!
//! Scanning directories and parsing translation formats are left to the
//! implementors of the two ports. [`memory`] provides in-memory implementations
//! for embedding and tests.
//!
//! # Example
//!
//! ```
//! use glossa_common_catalog::{Catalogue, CatalogueIndex, Message, TranslationFile};
//!
//! let mut index = CatalogueIndex::new();
//! index.insert("messages", "fr", TranslationFile::new("xliff", "messages.fr.xliff"));
//! index.insert("messages", "en", TranslationFile::new("xliff", "messages.en.xliff"));
//! assert_eq!(index.locales("messages"), vec!["en", "fr"]);
//!
//! let mut catalogue = Catalogue::new("fr");
//! catalogue.add("messages", Message::new("home.title", "Accueil"));
//! catalogue.add("messages", Message::new("home.intro", "").mark_new());
//! assert_eq!(catalogue.search("messages", Some("accueil")).count(), 1);
//! ```

pub mod catalogue;
pub mod error;
pub mod index;
pub mod memory;
pub mod natural;
pub mod ports;

pub use catalogue::{Catalogue, Message, MessageMap};
pub use error::CatalogueError;
pub use index::{CatalogueIndex, TranslationFile};
pub use memory::{InMemoryCatalogueLoader, StaticFileLocator};
pub use natural::{natural_cmp, natural_sort};
pub use ports::{CatalogueLoader, TranslationFileLocator};
