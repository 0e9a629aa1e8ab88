// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Translation catalogue browsing for Glossa.
//!
//! Given the translation files of a configuration, this crate resolves the
//! requested domain and locale (falling back to the first available in natural
//! order), loads the selected catalogue plus every alternative locale, splits
//! messages into new and existing, and indexes each message id across locales.
//!
//! - [`CatalogueViewResolver`] does the resolution over a [`CatalogueIndex`]
//!   and a [`CatalogueLoader`].
//! - [`CatalogueBrowser`] wires configuration, file location and loading
//!   together for one request and returns a [`BrowsePage`] ready to render.
//!
//! Requesting the domain `"All"` switches to the all-domains summary, see
//! [`DomainSelection`].
//!
//! [`CatalogueIndex`]: glossa_common_catalog::CatalogueIndex
//! [`CatalogueLoader`]: glossa_common_catalog::CatalogueLoader

pub mod browser;
pub mod error;
pub mod resolver;
pub mod selection;
pub mod view;

pub use browser::{BrowseRequest, CatalogueBrowser};
pub use error::{BrowseError, BrowseResult};
pub use resolver::CatalogueViewResolver;
pub use selection::{DomainSelection, ALL_DOMAINS};
pub use view::{AllDomainsView, AlternativeMessages, BrowsePage, FileView, Resolution};
