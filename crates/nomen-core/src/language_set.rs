//! Candidate language sets produced by rule narrowing.

use std::collections::BTreeSet;
use std::fmt;

/// A supported language or script name, e.g. "german" or "cyrillic".
///
/// Tags are opaque identifiers compared by exact string equality.
pub type LanguageTag = String;

/// The outcome of narrowing a candidate set of languages.
///
/// The top-level guess API never returns `None`: over-narrowing to the
/// empty set is folded into `Any` at that boundary. `Some` is never
/// constructed empty; use [`LanguageSet::from_set`] to uphold this.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LanguageSet {
    /// Narrowing eliminated every candidate
    None,
    /// Unknown or ambiguous
    Any,
    /// A concrete, non-empty set of candidates
    Some(BTreeSet<LanguageTag>),
}

impl LanguageSet {
    /// Wraps a set of tags, mapping the empty set to [`LanguageSet::None`].
    pub fn from_set(languages: BTreeSet<LanguageTag>) -> Self {
        if languages.is_empty() {
            LanguageSet::None
        } else {
            LanguageSet::Some(languages)
        }
    }

    /// True iff this is a concrete set with exactly one member.
    pub fn is_singleton(&self) -> bool {
        matches!(self, LanguageSet::Some(langs) if langs.len() == 1)
    }

    /// The sole member of a singleton set, `None` for any other shape.
    pub fn single(&self) -> Option<&str> {
        match self {
            LanguageSet::Some(langs) if langs.len() == 1 => {
                langs.iter().next().map(String::as_str)
            }
            _ => None,
        }
    }

    /// Whether a tag is still a possible candidate.
    ///
    /// `Any` contains every tag, `None` contains none.
    pub fn contains(&self, tag: &str) -> bool {
        match self {
            LanguageSet::None => false,
            LanguageSet::Any => true,
            LanguageSet::Some(langs) => langs.contains(tag),
        }
    }
}

impl fmt::Display for LanguageSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LanguageSet::None => write!(f, "none"),
            LanguageSet::Any => write!(f, "any"),
            LanguageSet::Some(langs) => {
                let mut first = true;
                for lang in langs {
                    if !first {
                        write!(f, "+")?;
                    }
                    write!(f, "{}", lang)?;
                    first = false;
                }
                Ok(())
            }
        }
    }
}
