// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Messages and per-locale catalogues.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Ordered mapping of message id to message, in catalogue order.
pub type MessageMap = IndexMap<String, Message>;

/// A single translation message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
	pub id: String,
	/// Translated text. Empty for messages that have never been translated.
	pub text: String,
	/// Set when extraction discovered the id but no translation was supplied yet.
	#[serde(default)]
	pub is_new: bool,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub description: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub meaning: Option<String>,
}

impl Message {
	pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
		Self {
			id: id.into(),
			text: text.into(),
			is_new: false,
			description: None,
			meaning: None,
		}
	}

	/// Flag the message as newly extracted.
	pub fn mark_new(mut self) -> Self {
		self.is_new = true;
		self
	}

	pub fn with_description(mut self, description: impl Into<String>) -> Self {
		self.description = Some(description.into());
		self
	}

	pub fn with_meaning(mut self, meaning: impl Into<String>) -> Self {
		self.meaning = Some(meaning.into());
		self
	}

	/// Whether `needle` (already lowercased) occurs in the id or the text.
	fn matches(&self, needle: &str) -> bool {
		self.id.to_lowercase().contains(needle) || self.text.to_lowercase().contains(needle)
	}
}

/// The messages of one locale, grouped by domain.
///
/// Domains and messages keep the order in which they were added.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalogue {
	locale: String,
	domains: IndexMap<String, MessageMap>,
}

impl Catalogue {
	pub fn new(locale: impl Into<String>) -> Self {
		Self {
			locale: locale.into(),
			domains: IndexMap::new(),
		}
	}

	pub fn locale(&self) -> &str {
		&self.locale
	}

	/// Add a message to `domain`, replacing any message with the same id.
	pub fn add(&mut self, domain: impl Into<String>, message: Message) {
		self
			.domains
			.entry(domain.into())
			.or_default()
			.insert(message.id.clone(), message);
	}

	/// Builder form of [`Catalogue::add`].
	pub fn with_message(mut self, domain: impl Into<String>, message: Message) -> Self {
		self.add(domain, message);
		self
	}

	pub fn domains(&self) -> impl Iterator<Item = &str> {
		self.domains.keys().map(String::as_str)
	}

	/// Every message of `domain`, in catalogue order. Empty when the domain is absent.
	pub fn messages<'a>(&'a self, domain: &str) -> impl Iterator<Item = &'a Message> + 'a {
		self.domains.get(domain).into_iter().flat_map(|m| m.values())
	}

	/// Messages of `domain` matching `filter`.
	///
	/// A message matches when the filter is a case-insensitive substring of its id
	/// or its text. `None` or a blank filter matches everything.
	pub fn search<'a>(
		&'a self,
		domain: &str,
		filter: Option<&str>,
	) -> impl Iterator<Item = &'a Message> + 'a {
		let needle = filter
			.map(str::trim)
			.filter(|f| !f.is_empty())
			.map(str::to_lowercase);

		self
			.messages(domain)
			.filter(move |message| needle.as_deref().map_or(true, |n| message.matches(n)))
	}

	pub fn len(&self) -> usize {
		self.domains.values().map(IndexMap::len).sum()
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn sample() -> Catalogue {
		Catalogue::new("de")
			.with_message("messages", Message::new("nav.home", "Startseite"))
			.with_message("messages", Message::new("nav.Logout", "Abmelden"))
			.with_message("messages", Message::new("form.save", "").mark_new())
			.with_message("validators", Message::new("email.invalid", "Ungültige E-Mail"))
	}

	#[test]
	fn test_messages_keep_insertion_order() {
		let catalogue = sample();
		let ids: Vec<_> = catalogue.messages("messages").map(|m| m.id.as_str()).collect();
		assert_eq!(ids, vec!["nav.home", "nav.Logout", "form.save"]);
	}

	#[test]
	fn test_missing_domain_is_empty() {
		assert_eq!(sample().messages("security").count(), 0);
	}

	#[test]
	fn test_search_without_filter_returns_all() {
		let catalogue = sample();
		assert_eq!(catalogue.search("messages", None).count(), 3);
		assert_eq!(catalogue.search("messages", Some("  ")).count(), 3);
	}

	#[test]
	fn test_search_matches_id_case_insensitively() {
		let catalogue = sample();
		let ids: Vec<_> = catalogue
			.search("messages", Some("LOGOUT"))
			.map(|m| m.id.as_str())
			.collect();
		assert_eq!(ids, vec!["nav.Logout"]);
	}

	#[test]
	fn test_search_matches_text() {
		let catalogue = sample();
		let ids: Vec<_> = catalogue
			.search("messages", Some("start"))
			.map(|m| m.id.as_str())
			.collect();
		assert_eq!(ids, vec!["nav.home"]);
	}

	#[test]
	fn test_search_scoped_to_domain() {
		assert_eq!(sample().search("messages", Some("mail")).count(), 0);
		assert_eq!(sample().search("validators", Some("mail")).count(), 1);
	}

	#[test]
	fn test_add_replaces_same_id() {
		let mut catalogue = sample();
		catalogue.add("messages", Message::new("form.save", "Speichern"));
		assert_eq!(catalogue.len(), 4);
		let saved = catalogue
			.messages("messages")
			.find(|m| m.id == "form.save")
			.unwrap();
		assert!(!saved.is_new);
		assert_eq!(saved.text, "Speichern");
	}

	#[test]
	fn test_message_serializes_camel_case() {
		let message = Message::new("a", "b").mark_new().with_description("Button label");
		let json = serde_json::to_value(&message).unwrap();
		assert_eq!(json["isNew"], true);
		assert_eq!(json["description"], "Button label");
		assert!(json.get("meaning").is_none());
	}
}
