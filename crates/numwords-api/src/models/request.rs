//! Request model definitions
//!
//! [`RawRequest`] mirrors the loosely-specified shapes clients may send:
//! a singular `number`, a plural `numbers`, or both, from either a JSON
//! body or query parameters. [`RawRequest::normalize`] is the single place
//! that resolves the options into the validated [`CanonicalRequest`] all
//! dispatch logic operates on.

use serde::Deserialize;

use crate::errors::{ApiError, Result};

/// Raw, unvalidated request as received from the client.
///
/// Unknown fields (such as the superseded `languages` batch field from
/// earlier revisions) are ignored by deserialization.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawRequest {
  /// Language code, required after normalization
  pub language: Option<String>,
  /// Singular number field
  pub number: Option<i64>,
  /// Plural numbers field
  pub numbers: Option<Vec<i64>>,
}

/// Validated request: one language, at least one number.
///
/// Never constructed with an empty language or zero numbers; duplicates
/// are legal and keep their positions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalRequest {
  /// Language code
  pub language: String,
  /// Numbers to convert, in merge order
  pub numbers: Vec<i64>,
}

impl RawRequest {
  /// Decodes a JSON request body.
  ///
  /// # Errors
  /// `InvalidJson` when the body is not valid JSON for this shape.
  pub fn from_json(body: &[u8]) -> Result<Self> {
    serde_json::from_slice(body).map_err(ApiError::InvalidJson)
  }

  /// Builds a raw request from URL query pairs.
  ///
  /// - `language`: first occurrence wins.
  /// - `number`: every occurrence is parsed as an integer; tokens that do
  ///   not parse are silently discarded.
  /// - `numbers`: the first occurrence is split on `,`, tokens trimmed and
  ///   parsed, unparseable tokens silently discarded. CSV-derived values
  ///   come after the repeated-param values.
  #[must_use]
  pub fn from_query_pairs(pairs: &[(String, String)]) -> Self {
    let language = pairs.iter().find(|(key, _)| key == "language").map(|(_, value)| value.clone());

    let mut numbers: Vec<i64> = pairs
      .iter()
      .filter(|(key, _)| key == "number")
      .filter_map(|(_, value)| value.parse().ok())
      .collect();

    if let Some((_, csv)) = pairs.iter().find(|(key, _)| key == "numbers") {
      numbers.extend(csv.split(',').filter_map(|token| token.trim().parse::<i64>().ok()));
    }

    Self {
      language,
      number: None,
      numbers: if numbers.is_empty() { None } else { Some(numbers) },
    }
  }

  /// Merges the singular/plural variants into a [`CanonicalRequest`].
  ///
  /// Merge order: list-sourced values first, then the singular value
  /// appended. No deduplication.
  ///
  /// # Errors
  /// - `MissingLanguage` when the language field is absent or empty.
  /// - `MissingNumber` when no numbers remain after the merge.
  pub fn normalize(self) -> Result<CanonicalRequest> {
    let language = match self.language {
      Some(language) if !language.is_empty() => language,
      _ => return Err(ApiError::MissingLanguage),
    };

    let mut numbers = self.numbers.unwrap_or_default();
    if let Some(number) = self.number {
      numbers.push(number);
    }
    if numbers.is_empty() {
      return Err(ApiError::MissingNumber);
    }

    Ok(CanonicalRequest { language, numbers })
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::errors::ApiErrorKind;

  fn pairs(raw: &[(&str, &str)]) -> Vec<(String, String)> {
    raw.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect()
  }

  #[test]
  fn deserialize_singular_shape() {
    let req = RawRequest::from_json(br#"{"language": "en-us", "number": 42}"#).unwrap();
    assert_eq!(req.language.as_deref(), Some("en-us"));
    assert_eq!(req.number, Some(42));
    assert_eq!(req.numbers, None);
  }

  #[test]
  fn deserialize_plural_shape() {
    let req = RawRequest::from_json(br#"{"language": "en-us", "numbers": [1, 2, 3]}"#).unwrap();
    assert_eq!(req.numbers, Some(vec![1, 2, 3]));
    assert_eq!(req.number, None);
  }

  #[test]
  fn deserialize_ignores_unknown_fields() {
    let req =
      RawRequest::from_json(br#"{"language": "en-us", "number": 1, "languages": ["fr-fr"]}"#)
        .unwrap();
    assert_eq!(req.language.as_deref(), Some("en-us"));
  }

  #[test]
  fn malformed_json_is_invalid_json() {
    let err = RawRequest::from_json(b"{ not json").unwrap_err();
    assert_eq!(err.kind(), ApiErrorKind::InvalidJson);

    let err = RawRequest::from_json(br#"{"number": "forty-two"}"#).unwrap_err();
    assert_eq!(err.kind(), ApiErrorKind::InvalidJson);
  }

  #[test]
  fn query_language_first_occurrence_wins() {
    let req =
      RawRequest::from_query_pairs(&pairs(&[("language", "en-us"), ("language", "fr-fr")]));
    assert_eq!(req.language.as_deref(), Some("en-us"));
  }

  #[test]
  fn query_repeated_number_params() {
    let req = RawRequest::from_query_pairs(&pairs(&[
      ("language", "en-us"),
      ("number", "1"),
      ("number", "2"),
    ]));
    assert_eq!(req.numbers, Some(vec![1, 2]));
  }

  #[test]
  fn query_csv_numbers_are_trimmed_and_appended() {
    let req = RawRequest::from_query_pairs(&pairs(&[
      ("language", "en-us"),
      ("number", "7"),
      ("numbers", " 1, 2 ,3 "),
    ]));
    assert_eq!(req.numbers, Some(vec![7, 1, 2, 3]));
  }

  #[test]
  fn query_unparseable_tokens_are_silently_dropped() {
    let req = RawRequest::from_query_pairs(&pairs(&[
      ("language", "en-us"),
      ("number", "abc"),
      ("numbers", "1,x,3,"),
    ]));
    assert_eq!(req.numbers, Some(vec![1, 3]));
  }

  #[test]
  fn query_with_no_valid_numbers_leaves_numbers_unset() {
    let req = RawRequest::from_query_pairs(&pairs(&[("language", "en-us"), ("number", "abc")]));
    assert_eq!(req.numbers, None);
  }

  #[test]
  fn normalize_merges_list_then_singular() {
    let raw = RawRequest {
      language: Some("en-us".to_string()),
      number: Some(3),
      numbers: Some(vec![1, 2]),
    };
    let canonical = raw.normalize().unwrap();
    assert_eq!(canonical.numbers, vec![1, 2, 3]);
  }

  #[test]
  fn normalize_preserves_duplicates() {
    let raw = RawRequest {
      language: Some("en-us".to_string()),
      number: Some(5),
      numbers: Some(vec![5, 5]),
    };
    let canonical = raw.normalize().unwrap();
    assert_eq!(canonical.numbers, vec![5, 5, 5]);
  }

  #[test]
  fn normalize_missing_language() {
    let raw = RawRequest { language: None, number: Some(1), numbers: None };
    assert_eq!(raw.normalize().unwrap_err().kind(), ApiErrorKind::MissingLanguage);

    let raw = RawRequest { language: Some(String::new()), number: Some(1), numbers: None };
    assert_eq!(raw.normalize().unwrap_err().kind(), ApiErrorKind::MissingLanguage);
  }

  #[test]
  fn normalize_missing_number() {
    let raw = RawRequest { language: Some("en-us".to_string()), number: None, numbers: None };
    assert_eq!(raw.normalize().unwrap_err().kind(), ApiErrorKind::MissingNumber);

    let raw = RawRequest {
      language: Some("en-us".to_string()),
      number: None,
      numbers: Some(Vec::new()),
    };
    assert_eq!(raw.normalize().unwrap_err().kind(), ApiErrorKind::MissingNumber);
  }

  #[test]
  fn normalize_checks_language_before_numbers() {
    let raw = RawRequest { language: None, number: None, numbers: None };
    assert_eq!(raw.normalize().unwrap_err().kind(), ApiErrorKind::MissingLanguage);
  }
}
