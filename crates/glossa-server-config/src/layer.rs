// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Partial configuration produced by each source.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::sections::{LoggingConfigLayer, TranslationConfigLayer};

/// Top-level configuration layer, deserialized from TOML or built from the environment.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GlossaConfigLayer {
	#[serde(default)]
	pub source_language: Option<String>,
	#[serde(default)]
	pub logging: Option<LoggingConfigLayer>,
	#[serde(default)]
	pub configs: BTreeMap<String, TranslationConfigLayer>,
}

impl GlossaConfigLayer {
	/// Merge `other` on top of `self`; fields set in `other` win.
	pub fn merge(&mut self, other: GlossaConfigLayer) {
		if other.source_language.is_some() {
			self.source_language = other.source_language;
		}

		if let Some(logging) = other.logging {
			self.logging.get_or_insert_with(Default::default).merge(logging);
		}

		for (name, config) in other.configs {
			self.configs.entry(name).or_default().merge(config);
		}
	}
}
