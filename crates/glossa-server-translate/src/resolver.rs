// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Resolution of a (domain, locale, filter) request into catalogue views.

use std::collections::BTreeSet;

use glossa_common_catalog::{
	natural_sort, Catalogue, CatalogueIndex, CatalogueLoader, MessageMap, TranslationFile,
};
use indexmap::IndexMap;
use tracing::{debug, warn};

use crate::error::{BrowseError, BrowseResult};
use crate::selection::{non_blank, DomainSelection};
use crate::view::{AllDomainsView, AlternativeMessages, FileView, Resolution};

/// Builds [`FileView`]s from an index of translation files.
///
/// Unknown or absent domains and locales fall back to the first available
/// value in natural order. Each view costs one loader call per locale of its
/// domain.
pub struct CatalogueViewResolver<'a> {
	index: &'a CatalogueIndex,
	loader: &'a dyn CatalogueLoader,
}

impl<'a> CatalogueViewResolver<'a> {
	pub fn new(index: &'a CatalogueIndex, loader: &'a dyn CatalogueLoader) -> Self {
		Self { index, loader }
	}

	/// Resolve a request in either mode.
	pub fn resolve(
		&self,
		selection: &DomainSelection,
		locale: Option<&str>,
		filter: Option<&str>,
	) -> BrowseResult<Resolution> {
		match selection {
			DomainSelection::AllDomains => self.all_domains(locale, filter).map(Resolution::All),
			DomainSelection::SingleDomain(domain) => self
				.single_domain(domain.as_deref(), locale, filter)
				.map(Resolution::Single),
		}
	}

	/// The deep view of one domain. Always returns a view, even when the
	/// filter leaves nothing to show.
	pub fn single_domain(
		&self,
		domain: Option<&str>,
		locale: Option<&str>,
		filter: Option<&str>,
	) -> BrowseResult<FileView> {
		let domain = self.resolve_domain(domain)?;
		let (locales, locale) = self.resolve_locale(domain, locale)?;
		self.build_view(domain, locale, &locales, filter)
	}

	/// The summary of every domain, each resolved to its own locale.
	pub fn all_domains(
		&self,
		locale: Option<&str>,
		filter: Option<&str>,
	) -> BrowseResult<AllDomainsView> {
		if self.index.is_empty() {
			return Err(BrowseError::EmptyIndex);
		}

		let mut files = IndexMap::new();
		let mut seen_locales = BTreeSet::new();

		for domain in self.index.domains() {
			let (locales, selected) = self.resolve_locale(domain, locale)?;
			seen_locales.extend(locales.iter().copied());

			match self.file_view(domain, selected, &locales, filter, false)? {
				Some(view) => {
					files.insert(domain.to_string(), view);
				}
				None => debug!(domain, locale = selected, "nothing to show, skipping domain"),
			}
		}

		let mut locales: Vec<&str> = seen_locales.into_iter().collect();
		natural_sort(&mut locales);

		let selected_locale = non_blank(locale)
			.filter(|requested| locales.contains(requested))
			.or_else(|| locales.first().copied())
			.unwrap_or_default()
			.to_string();

		Ok(AllDomainsView {
			files,
			locales: locales.into_iter().map(String::from).collect(),
			selected_locale,
		})
	}

	/// The requested domain if indexed, otherwise the first in natural order.
	pub fn resolve_domain(&self, requested: Option<&str>) -> BrowseResult<&'a str> {
		let domains = self.index.domains();
		let first = domains.first().copied().ok_or(BrowseError::EmptyIndex)?;

		match non_blank(requested) {
			Some(requested) => match domains.iter().copied().find(|d| *d == requested) {
				Some(domain) => Ok(domain),
				None => {
					warn!(requested, fallback = first, "domain not found, using first domain");
					Ok(first)
				}
			},
			None => Ok(first),
		}
	}

	/// The naturally sorted locales of `domain` and the selected one among them.
	pub fn resolve_locale(
		&self,
		domain: &str,
		requested: Option<&str>,
	) -> BrowseResult<(Vec<&'a str>, &'a str)> {
		let locales = self.index.locales(domain);
		let first = locales.first().copied().ok_or_else(|| BrowseError::NoLocales {
			domain: domain.to_string(),
		})?;

		let selected = match non_blank(requested) {
			Some(requested) => match locales.iter().copied().find(|l| *l == requested) {
				Some(locale) => locale,
				None => {
					warn!(domain, requested, fallback = first, "locale not found, using first locale");
					first
				}
			},
			None => first,
		};

		Ok((locales, selected))
	}

	/// Build the view of `domain` in `locale`, or `None` when the filtered
	/// selection is empty and `force` is not set.
	pub fn file_view(
		&self,
		domain: &str,
		locale: &str,
		locales: &[&str],
		filter: Option<&str>,
		force: bool,
	) -> BrowseResult<Option<FileView>> {
		let view = self.build_view(domain, locale, locales, filter)?;
		Ok(Some(view).filter(|view| force || !view.is_empty()))
	}

	fn build_view(
		&self,
		domain: &str,
		locale: &str,
		locales: &[&str],
		filter: Option<&str>,
	) -> BrowseResult<FileView> {
		let mut alternative_messages = AlternativeMessages::new();
		for other in locales.iter().copied().filter(|other| *other != locale) {
			let catalogue = self.load(domain, other)?;
			for message in catalogue.messages(domain) {
				alternative_messages
					.entry(message.id.clone())
					.or_default()
					.insert(other.to_string(), message.clone());
			}
		}

		let catalogue = self.load(domain, locale)?;
		let mut new_messages = MessageMap::new();
		let mut existing_messages = MessageMap::new();
		for message in catalogue.search(domain, filter) {
			if message.is_new {
				new_messages.insert(message.id.clone(), message.clone());
			} else {
				existing_messages.insert(message.id.clone(), message.clone());
			}
		}

		let file = self.file(domain, locale)?;
		debug!(
			domain,
			locale,
			new = new_messages.len(),
			existing = existing_messages.len(),
			alternatives = alternative_messages.len(),
			"built catalogue view"
		);

		Ok(FileView {
			domain: domain.to_string(),
			locale: locale.to_string(),
			locales: locales.iter().map(|l| l.to_string()).collect(),
			format: file.format.clone(),
			file: file.path.clone(),
			new_messages,
			existing_messages,
			alternative_messages,
			is_writeable: file.writable,
		})
	}

	fn file(&self, domain: &str, locale: &str) -> BrowseResult<&'a TranslationFile> {
		self
			.index
			.file(domain, locale)
			.ok_or_else(|| BrowseError::MissingFile {
				domain: domain.to_string(),
				locale: locale.to_string(),
			})
	}

	fn load(&self, domain: &str, locale: &str) -> BrowseResult<Catalogue> {
		let file = self.file(domain, locale)?;
		debug!(
			domain,
			locale,
			format = %file.format,
			path = %file.path.display(),
			"loading catalogue"
		);

		self
			.loader
			.load(&file.path, &file.format, locale, domain)
			.map_err(|source| BrowseError::Load {
				domain: domain.to_string(),
				locale: locale.to_string(),
				source,
			})
	}
}
