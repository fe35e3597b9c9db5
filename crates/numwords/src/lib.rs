//! numwords number-to-words library
//!
//! Converts integers to their spelled-out word form in several languages.
//!
//! ```
//! use numwords::Registry;
//!
//! let registry = Registry::with_default_languages();
//! let en = registry.lookup("en-us").unwrap();
//! assert_eq!(en.integer_to_words(42), "forty-two");
//! ```

/// Language descriptor module - defines the `Language` type and its conversion entry point
pub mod language;

/// Converter modules - one submodule per supported language family
pub mod lang;

/// Registry module - immutable lookup table from language code to `Language`
pub mod registry;

/// Re-exports
pub use language::Language;
pub use registry::Registry;
