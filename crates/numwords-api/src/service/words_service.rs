//! Conversion service
//!
//! The dispatcher behind both endpoints: resolve the language once, then
//! convert each number in request order.

use std::sync::Arc;

use numwords::Registry;
use tracing::debug;

use crate::errors::{ApiError, Result};

/// Common interface for the conversion backend.
///
/// This trait allows swapping the registry-backed production
/// implementation (`RegistryWordsService`) with test stubs.
pub trait WordsService: Send + Sync {
  /// Resolves the language and converts each number, in order.
  ///
  /// The returned pairs match the input sequence positionally, duplicates
  /// included. An empty word string is a valid entry meaning the number is
  /// not supported by the language.
  ///
  /// # Errors
  /// `LanguageNotFound` when the language code is not registered.
  fn convert_all(&self, language: &str, numbers: &[i64]) -> Result<Vec<(i64, String)>>;
}

/// Production implementation backed by the immutable language registry.
#[derive(Clone)]
pub struct RegistryWordsService {
  registry: Arc<Registry>,
}

impl RegistryWordsService {
  /// Creates the service over a shared registry.
  #[must_use]
  pub fn new(registry: Arc<Registry>) -> Self {
    Self { registry }
  }
}

impl WordsService for RegistryWordsService {
  fn convert_all(&self, language: &str, numbers: &[i64]) -> Result<Vec<(i64, String)>> {
    let lang = self
      .registry
      .lookup(language)
      .ok_or_else(|| ApiError::language_not_found(language))?;

    debug!(language, count = numbers.len(), "converting numbers");

    Ok(numbers.iter().map(|&number| (number, lang.integer_to_words(number))).collect())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn service() -> RegistryWordsService {
    RegistryWordsService::new(Arc::new(Registry::with_default_languages()))
  }

  #[test]
  fn converts_in_request_order() {
    let results = service().convert_all("en-us", &[3, 1, 2]).unwrap();
    assert_eq!(
      results,
      vec![(3, "three".to_string()), (1, "one".to_string()), (2, "two".to_string())]
    );
  }

  #[test]
  fn duplicates_are_preserved_positionally() {
    let results = service().convert_all("en-us", &[5, 5]).unwrap();
    assert_eq!(results, vec![(5, "five".to_string()), (5, "five".to_string())]);
  }

  #[test]
  fn unknown_language_fails_before_any_conversion() {
    let err = service().convert_all("xx-yy", &[1]).unwrap_err();
    assert_eq!(err.kind(), crate::errors::ApiErrorKind::LanguageNotFound);
  }

  #[test]
  fn unsupported_number_passes_through_as_empty() {
    let results = service().convert_all("en-us", &[-1]).unwrap();
    assert_eq!(results, vec![(-1, String::new())]);
  }
}
