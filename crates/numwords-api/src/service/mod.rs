//! Service module

mod words_service;

pub use words_service::{RegistryWordsService, WordsService};
