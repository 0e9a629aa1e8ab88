// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Request-scoped entry point tying configuration, file location and loading
//! together.

use std::sync::Arc;

use glossa_common_catalog::{CatalogueLoader, TranslationFileLocator};
use glossa_server_config::ConfigFactory;
use indexmap::IndexMap;
use serde::Deserialize;
use tracing::{debug, info};

use crate::error::{BrowseError, BrowseResult};
use crate::resolver::CatalogueViewResolver;
use crate::selection::{non_blank, DomainSelection, ALL_DOMAINS};
use crate::view::{BrowsePage, Resolution};

/// Query parameters of a browse request. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct BrowseRequest {
	pub config: Option<String>,
	/// Domain name, or `"All"` for the all-domains summary.
	pub domain: Option<String>,
	pub locale: Option<String>,
	pub filter: Option<String>,
}

impl BrowseRequest {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_config(mut self, config: impl Into<String>) -> Self {
		self.config = Some(config.into());
		self
	}

	pub fn with_domain(mut self, domain: impl Into<String>) -> Self {
		self.domain = Some(domain.into());
		self
	}

	pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
		self.locale = Some(locale.into());
		self
	}

	pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
		self.filter = Some(filter.into());
		self
	}
}

/// Serves browse requests against a configuration registry.
///
/// Holds no per-request state; share it behind an `Arc` across request handlers.
#[derive(Clone)]
pub struct CatalogueBrowser {
	configs: Arc<dyn ConfigFactory>,
	locator: Arc<dyn TranslationFileLocator>,
	loader: Arc<dyn CatalogueLoader>,
}

impl CatalogueBrowser {
	pub fn new(
		configs: Arc<dyn ConfigFactory>,
		locator: Arc<dyn TranslationFileLocator>,
		loader: Arc<dyn CatalogueLoader>,
	) -> Self {
		Self {
			configs,
			locator,
			loader,
		}
	}

	/// Resolve `request` into a page.
	///
	/// Fails when no configuration is registered, when the requested
	/// configuration is unknown, or when its translations directory holds no
	/// files. Unknown domains and locales fall back to the first available.
	pub fn browse(&self, request: &BrowseRequest) -> BrowseResult<BrowsePage> {
		let configs = self.configs.names();
		let selected_config = non_blank(request.config.as_deref())
			.map(str::to_string)
			.or_else(|| configs.first().cloned())
			.ok_or(BrowseError::NoConfiguration)?;

		let source_language = self.configs.source_language().to_string();
		let config = self.configs.config(&selected_config, &source_language)?;

		let index = self
			.locator
			.find(&config.translations_dir)
			.map_err(BrowseError::Locate)?;
		if index.is_empty() {
			return Err(BrowseError::NoTranslationFiles {
				dir: config.translations_dir,
			});
		}
		debug!(
			config = %selected_config,
			dir = %config.translations_dir.display(),
			files = index.len(),
			"located translation files"
		);

		let filter = non_blank(request.filter.as_deref());
		let selection = DomainSelection::from_param(request.domain.as_deref());

		let mut domains = vec![ALL_DOMAINS.to_string()];
		domains.extend(index.domains().into_iter().map(String::from));

		let resolver = CatalogueViewResolver::new(&index, self.loader.as_ref());
		let (selected_domain, selected_locale, locales, files) =
			match resolver.resolve(&selection, request.locale.as_deref(), filter)? {
				Resolution::Single(view) => {
					let domain = view.domain.clone();
					let locale = view.locale.clone();
					let locales = view.locales.clone();
					let mut files = IndexMap::new();
					files.insert(domain.clone(), view);
					(domain, locale, locales, files)
				}
				Resolution::All(all) => (
					ALL_DOMAINS.to_string(),
					all.selected_locale,
					all.locales,
					all.files,
				),
			};

		info!(
			config = %selected_config,
			domain = %selected_domain,
			locale = %selected_locale,
			all_domains = selection.is_all(),
			files = files.len(),
			"resolved catalogue page"
		);

		Ok(BrowsePage {
			selected_config,
			configs,
			selected_domain,
			domains,
			selected_locale,
			locales,
			source_language,
			filter: filter.map(str::to_string),
			files,
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_request_builder() {
		let request = BrowseRequest::new()
			.with_config("app")
			.with_domain("All")
			.with_locale("fr")
			.with_filter("home");
		assert_eq!(request.config.as_deref(), Some("app"));
		assert_eq!(request.domain.as_deref(), Some("All"));
		assert_eq!(request.locale.as_deref(), Some("fr"));
		assert_eq!(request.filter.as_deref(), Some("home"));
	}

	#[test]
	fn test_request_deserializes_partial_query() {
		let request: BrowseRequest =
			serde_json::from_str(r#"{"domain": "messages", "filter": ""}"#).unwrap();
		assert_eq!(request.domain.as_deref(), Some("messages"));
		assert_eq!(request.filter.as_deref(), Some(""));
		assert!(request.config.is_none());
	}
}
