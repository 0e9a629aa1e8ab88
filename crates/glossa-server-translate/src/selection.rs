// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Interpretation of the `domain` request parameter.

/// Reserved domain parameter selecting the all-domains summary.
///
/// A real domain with this name cannot be browsed on its own.
pub const ALL_DOMAINS: &str = "All";

/// Which domains a browse request covers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainSelection {
	/// Every domain of the index, each with its own locale.
	AllDomains,
	/// One domain; `None` selects the first in natural order.
	SingleDomain(Option<String>),
}

impl DomainSelection {
	/// Parse the raw `domain` parameter. Blank values select the default domain.
	pub fn from_param(domain: Option<&str>) -> Self {
		match non_blank(domain) {
			Some(ALL_DOMAINS) => Self::AllDomains,
			Some(domain) => Self::SingleDomain(Some(domain.to_string())),
			None => Self::SingleDomain(None),
		}
	}

	pub fn is_all(&self) -> bool {
		matches!(self, Self::AllDomains)
	}
}

impl Default for DomainSelection {
	fn default() -> Self {
		Self::SingleDomain(None)
	}
}

/// Trim a parameter, treating empty and whitespace-only values as absent.
pub(crate) fn non_blank(value: Option<&str>) -> Option<&str> {
	value.map(str::trim).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_all_is_reserved() {
		assert_eq!(DomainSelection::from_param(Some("All")), DomainSelection::AllDomains);
		assert!(DomainSelection::from_param(Some("All")).is_all());
	}

	#[test]
	fn test_all_is_case_sensitive() {
		assert_eq!(
			DomainSelection::from_param(Some("all")),
			DomainSelection::SingleDomain(Some("all".to_string()))
		);
	}

	#[test]
	fn test_blank_selects_default() {
		assert_eq!(DomainSelection::from_param(None), DomainSelection::default());
		assert_eq!(DomainSelection::from_param(Some("")), DomainSelection::default());
		assert_eq!(DomainSelection::from_param(Some(" ")), DomainSelection::default());
	}

	#[test]
	fn test_non_blank_trims() {
		assert_eq!(non_blank(Some("  accueil ")), Some("accueil"));
		assert_eq!(non_blank(Some("\t\n")), None);
		assert_eq!(non_blank(None), None);
	}

	#[test]
	fn test_padded_all_selects_summary() {
		assert_eq!(DomainSelection::from_param(Some(" All ")), DomainSelection::AllDomains);
	}

	#[test]
	fn test_named_domain() {
		assert_eq!(
			DomainSelection::from_param(Some("validators")),
			DomainSelection::SingleDomain(Some("validators".to_string()))
		);
	}
}
