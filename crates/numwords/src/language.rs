//! Language descriptor definition

/// A spelled-out-number convention for one language.
///
/// The conversion function is pure and infallible: numbers the convention
/// cannot express come back as the empty string, which callers treat as
/// "unsupported" rather than as an error.
#[derive(Debug, Clone)]
pub struct Language {
  /// Language code used for lookup (e.g. "en-us")
  pub code: &'static str,
  /// English name of the language (e.g. "American English")
  pub name: &'static str,
  /// Native name of the language (e.g. "Français")
  pub native_name: &'static str,
  /// Conversion function for this language
  convert: fn(i64) -> String,
}

impl Language {
  /// Creates a new language descriptor
  #[must_use]
  pub fn new(
    code: &'static str,
    name: &'static str,
    native_name: &'static str,
    convert: fn(i64) -> String,
  ) -> Self {
    Self { code, name, native_name, convert }
  }

  /// Converts an integer to its word form in this language.
  ///
  /// Returns the empty string when the number is not supported by this
  /// language (e.g. negative values, or values beyond the language's
  /// largest named scale).
  #[must_use]
  pub fn integer_to_words(&self, number: i64) -> String {
    (self.convert)(number)
  }
}
