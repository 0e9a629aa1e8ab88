// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! View models handed to the rendering layer.

use std::path::PathBuf;

use glossa_common_catalog::{Message, MessageMap};
use indexmap::IndexMap;
use serde::Serialize;

/// Message id → other locale → message.
pub type AlternativeMessages = IndexMap<String, IndexMap<String, Message>>;

/// Messages of one domain in one locale, split for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileView {
	pub domain: String,
	pub locale: String,
	/// Every locale of the domain, in natural order.
	pub locales: Vec<String>,
	pub format: String,
	pub file: PathBuf,
	pub new_messages: MessageMap,
	pub existing_messages: MessageMap,
	/// Never keyed by [`FileView::locale`].
	pub alternative_messages: AlternativeMessages,
	pub is_writeable: bool,
}

impl FileView {
	/// Whether the (filtered) selection holds no messages at all.
	pub fn is_empty(&self) -> bool {
		self.new_messages.is_empty() && self.existing_messages.is_empty()
	}

	pub fn message_count(&self) -> usize {
		self.new_messages.len() + self.existing_messages.len()
	}

	/// Translations of `id` in the other locales.
	pub fn alternatives(&self, id: &str) -> Option<&IndexMap<String, Message>> {
		self.alternative_messages.get(id)
	}
}

/// Summary of every domain with something to show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllDomainsView {
	/// Domain → view, in natural domain order. Domains without matching
	/// messages are left out.
	pub files: IndexMap<String, FileView>,
	/// Union of the locales of every domain, in natural order.
	pub locales: Vec<String>,
	/// The requested locale when any domain has it, otherwise the first of
	/// [`AllDomainsView::locales`].
	pub selected_locale: String,
}

/// Outcome of resolving a browse request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
	Single(FileView),
	All(AllDomainsView),
}

/// Everything the translation page template renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BrowsePage {
	pub selected_config: String,
	pub configs: Vec<String>,
	/// Selected domain name, or `"All"` for the summary.
	pub selected_domain: String,
	/// `"All"` followed by every domain in natural order.
	pub domains: Vec<String>,
	pub selected_locale: String,
	pub locales: Vec<String>,
	pub source_language: String,
	pub filter: Option<String>,
	pub files: IndexMap<String, FileView>,
}
