//! Language vocabularies for the supported name types.

use std::collections::BTreeSet;

use crate::language_set::LanguageTag;
use crate::types::NameType;

/// Sentinel returned when no single language could be determined.
///
/// Never a member of any vocabulary.
pub const ANY: &str = "any";

/// Language tags understood by the generic rules.
pub const GENERIC_LANGUAGES: &[&str] = &[
    "arabic",
    "cyrillic",
    "czech",
    "dutch",
    "english",
    "french",
    "german",
    "greek",
    "greeklatin",
    "hebrew",
    "hungarian",
    "italian",
    "polish",
    "portuguese",
    "romanian",
    "russian",
    "spanish",
    "turkish",
];

/// Language tags understood by the ashkenazi rules.
pub const ASHKENAZI_LANGUAGES: &[&str] = &[
    "cyrillic",
    "english",
    "french",
    "german",
    "hebrew",
    "hungarian",
    "polish",
    "romanian",
    "russian",
    "spanish",
];

/// Language tags understood by the sephardic rules.
pub const SEPHARDIC_LANGUAGES: &[&str] = &[
    "french",
    "hebrew",
    "italian",
    "portuguese",
    "spanish",
];

/// The full initial candidate vocabulary for one matching variant.
///
/// A guess starts from the whole vocabulary and narrows it down; no rule
/// can introduce a tag that is not in here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Languages {
    languages: BTreeSet<LanguageTag>,
}

impl Languages {
    /// Creates a vocabulary from an arbitrary set of tags.
    pub fn new(languages: BTreeSet<LanguageTag>) -> Self {
        Self { languages }
    }

    /// The built-in vocabulary for a name type.
    pub fn for_name_type(name_type: NameType) -> Self {
        let tags = match name_type {
            NameType::Ashkenazi => ASHKENAZI_LANGUAGES,
            NameType::Generic => GENERIC_LANGUAGES,
            NameType::Sephardic => SEPHARDIC_LANGUAGES,
        };
        Self {
            languages: tags.iter().map(|t| t.to_string()).collect(),
        }
    }

    /// Whether a tag belongs to this vocabulary.
    pub fn contains(&self, tag: &str) -> bool {
        self.languages.contains(tag)
    }

    /// Iterates the tags in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.languages.iter().map(String::as_str)
    }

    /// Number of tags in the vocabulary.
    pub fn len(&self) -> usize {
        self.languages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }

    /// The underlying tag set.
    pub fn as_set(&self) -> &BTreeSet<LanguageTag> {
        &self.languages
    }
}
