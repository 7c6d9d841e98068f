//! Nomen Core - shared types for name-origin guessing.
//!
//! This crate provides the value types exchanged between the rule engine
//! and its consumers:
//!
//! - [`NameType`]: the supported matching variants
//! - [`Languages`]: the full candidate vocabulary of a variant
//! - [`LanguageSet`]: the narrowed result of a guess
//!
//! A downstream consumer (for example a phonetic transcription engine
//! selecting a ruleset per language) only needs these types, never the
//! rule machinery itself.
//!
//! # Example
//!
//! ```
//! use nomen_core::{Languages, NameType};
//!
//! let vocab = Languages::for_name_type(NameType::Ashkenazi);
//! assert!(vocab.contains("russian"));
//! assert!(!vocab.contains("any"));
//! ```

pub mod language_set;
pub mod languages;
pub mod types;

// Re-export core types for convenience
pub use language_set::{LanguageSet, LanguageTag};
pub use languages::{Languages, ANY};
pub use types::NameType;
