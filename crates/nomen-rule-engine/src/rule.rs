//! Compiled language rules
//!
//! A rule ties one regular expression to a set of language tags and a
//! polarity. Patterns are compiled once at load time; matching never
//! fails afterwards.

use std::collections::BTreeSet;

use nomen_core::LanguageTag;
use regex::{Regex, RegexBuilder};

use crate::constants::{MAX_REGEX_LENGTH, REGEX_DFA_SIZE_LIMIT, REGEX_SIZE_LIMIT};
use crate::{Result, RuleError};

/// Compile a regex with size limits applied
///
/// Limits cover pattern length, compiled program size and DFA cache size,
/// so an external rule file cannot make the engine allocate unbounded
/// memory at load or match time.
pub(crate) fn compile_regex_safe(pattern: &str, resource: &str) -> Result<Regex> {
    if pattern.len() > MAX_REGEX_LENGTH {
        return Err(RuleError::InvalidPattern {
            pattern: pattern.to_string(),
            resource: resource.to_string(),
            reason: format!("exceeds maximum length of {} characters", MAX_REGEX_LENGTH),
        });
    }

    RegexBuilder::new(pattern)
        .size_limit(REGEX_SIZE_LIMIT)
        .dfa_size_limit(REGEX_DFA_SIZE_LIMIT)
        .build()
        .map_err(|e| RuleError::InvalidPattern {
            pattern: pattern.to_string(),
            resource: resource.to_string(),
            reason: e.to_string(),
        })
}

/// One compiled pattern rule
///
/// Immutable once built. A match anywhere in the text either narrows the
/// candidate set to this rule's languages (accept) or removes them
/// (reject).
#[derive(Debug, Clone)]
pub struct LangRule {
    pattern: Regex,
    languages: BTreeSet<LanguageTag>,
    accept_on_match: bool,
}

impl LangRule {
    /// Compiles a rule from its raw parts
    ///
    /// `resource` identifies where the pattern came from in error
    /// messages.
    pub fn compile(
        pattern: &str,
        languages: BTreeSet<LanguageTag>,
        accept_on_match: bool,
        resource: &str,
    ) -> Result<Self> {
        Ok(Self {
            pattern: compile_regex_safe(pattern, resource)?,
            languages,
            accept_on_match,
        })
    }

    /// Whether the pattern matches anywhere in `text`
    pub fn matches(&self, text: &str) -> bool {
        self.pattern.is_match(text)
    }

    /// The languages this rule accepts or rejects
    pub fn languages(&self) -> &BTreeSet<LanguageTag> {
        &self.languages
    }

    /// True if a match narrows the candidate set to these languages,
    /// false if it removes them
    pub fn accept_on_match(&self) -> bool {
        self.accept_on_match
    }

    /// The source text of the pattern
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }
}
