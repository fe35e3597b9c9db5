//! Response model definition

use std::collections::BTreeMap;

use serde::Serialize;

/// Unified-endpoint success response.
///
/// Shape depends on how many numbers were requested: exactly one yields a
/// scalar `{"word": ...}` object, more than one yields a map keyed by the
/// decimal form of each requested integer.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum ApiResponse {
  /// Single-number response
  Single {
    /// Word form of the one requested number
    word: String,
  },
  /// Multi-number response, keyed by decimal integer
  Many(BTreeMap<String, String>),
}

impl ApiResponse {
  /// Shapes dispatch results into a response.
  ///
  /// When the same integer appears more than once, later occurrences
  /// overwrite earlier ones in the map; duplicates collapse to one entry.
  /// Conversion is pure, so the surviving value equals the overwritten
  /// ones and only positional information is lost.
  #[must_use]
  pub fn from_results(results: &[(i64, String)]) -> Self {
    match results {
      [(_, words)] => Self::Single { word: words.clone() },
      many => {
        Self::Many(many.iter().map(|(number, words)| (number.to_string(), words.clone())).collect())
      }
    }
  }
}
