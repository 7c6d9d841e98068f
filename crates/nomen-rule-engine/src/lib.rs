//! Nomen Rule Engine - rule-based language guessing for personal names
//!
//! This crate guesses which language(s) a name likely originates from by
//! evaluating an ordered table of pattern rules against the name text:
//!
//! - **Rule tables**: regular-expression rules tied to language sets,
//!   loaded from embedded defaults or external rule files
//! - **Compiled matching**: patterns compiled once at load time, with
//!   size limits applied
//! - **Set narrowing**: each matching rule either narrows the candidate
//!   set to its languages or removes them; the full table always runs
//!
//! # Example
//!
//! ```
//! use nomen_core::{Languages, NameType};
//! use nomen_rule_engine::LanguageGuesser;
//!
//! # fn main() -> nomen_rule_engine::Result<()> {
//! let guesser = LanguageGuesser::load_builtin(
//!     NameType::Generic,
//!     Languages::for_name_type(NameType::Generic),
//! )?;
//!
//! let guess = guesser.guess_languages("schneider");
//! assert!(guess.contains("german"));
//! # Ok(())
//! # }
//! ```

pub mod constants;
pub mod rule;
pub mod loader;
pub mod built_in;
pub mod guesser;
pub mod registry;

// Re-export core types
pub use constants::*;
pub use rule::LangRule;
pub use loader::{load_rules_file, parse_rules};
pub use built_in::{ASHKENAZI_RULES, GENERIC_RULES, SEPHARDIC_RULES};
pub use guesser::LanguageGuesser;
pub use registry::GuesserRegistry;

/// Result type for rule operations
pub type Result<T> = std::result::Result<T, RuleError>;

/// Error types for rule loading
///
/// All of these are raised while a rule table is being built and abort
/// the whole load; guessing itself never fails.
#[derive(Debug, thiserror::Error)]
pub enum RuleError {
    #[error("invalid pattern '{pattern}' in language resource '{resource}': {reason}")]
    InvalidPattern {
        pattern: String,
        resource: String,
        reason: String,
    },

    #[error("malformed line '{line}' in language resource '{resource}'")]
    MalformedLine { line: String, resource: String },

    #[error("invalid accept flag '{flag}' on line '{line}' in language resource '{resource}'")]
    InvalidAcceptFlag {
        flag: String,
        line: String,
        resource: String,
    },

    #[error("unable to read language resource '{resource}': {source}")]
    ResourceNotFound {
        resource: String,
        #[source]
        source: std::io::Error,
    },
}
