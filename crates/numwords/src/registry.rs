//! Language registry definition

use tracing::debug;

use crate::lang;
use crate::language::Language;

/// Immutable lookup table from language code to [`Language`].
///
/// Built once at process startup and shared by reference afterwards;
/// nothing mutates it, so concurrent reads need no synchronization.
#[derive(Debug, Clone)]
pub struct Registry {
  languages: Vec<Language>,
}

impl Registry {
  /// Creates a registry holding the given languages.
  #[must_use]
  pub fn new(languages: Vec<Language>) -> Self {
    Self { languages }
  }

  /// Creates a registry with all built-in languages.
  #[must_use]
  pub fn with_default_languages() -> Self {
    let registry = Self::new(default_languages());
    debug!(count = registry.languages.len(), "language registry built");
    registry
  }

  /// Looks up a language by its code.
  #[must_use]
  pub fn lookup(&self, code: &str) -> Option<&Language> {
    self.languages.iter().find(|lang| lang.code == code)
  }

  /// All registered language codes, in registration order.
  #[must_use]
  pub fn codes(&self) -> Vec<&'static str> {
    self.languages.iter().map(|lang| lang.code).collect()
  }
}

/// Built-in language set.
fn default_languages() -> Vec<Language> {
  vec![
    Language::new("en-us", "American English", "American English", lang::en::american),
    Language::new("en-gb", "British English", "British English", lang::en::british),
    Language::new("fr-fr", "French", "Français", lang::fr::french),
  ]
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn lookup_known_language() {
    let registry = Registry::with_default_languages();
    let lang = registry.lookup("en-us").expect("en-us should be registered");
    assert_eq!(lang.code, "en-us");
    assert_eq!(lang.integer_to_words(42), "forty-two");
  }

  #[test]
  fn lookup_unknown_language_returns_none() {
    let registry = Registry::with_default_languages();
    assert!(registry.lookup("xx-yy").is_none());
  }

  #[test]
  fn lookup_is_case_sensitive() {
    let registry = Registry::with_default_languages();
    assert!(registry.lookup("EN-US").is_none());
  }

  #[test]
  fn default_set_contains_expected_codes() {
    let registry = Registry::with_default_languages();
    assert_eq!(registry.codes(), vec!["en-us", "en-gb", "fr-fr"]);
  }

  #[test]
  fn variants_diverge_where_expected() {
    let registry = Registry::with_default_languages();
    let us = registry.lookup("en-us").expect("en-us");
    let gb = registry.lookup("en-gb").expect("en-gb");
    assert_eq!(us.integer_to_words(101), "one hundred one");
    assert_eq!(gb.integer_to_words(101), "one hundred and one");
  }
}
