//! Guesser registry - one compiled guesser per name type
//!
//! Compiling a rule table means compiling every regex in it, which is the
//! expensive part of start-up. The registry front-loads that cost once and
//! hands out shared references afterwards, so callers never recompile a
//! table just to guess another name.

use nomen_core::{Languages, NameType};

use crate::{LanguageGuesser, Result};

/// Holds a ready-to-use [`LanguageGuesser`] for every [`NameType`].
///
/// Construction is explicit and fallible; once built, lookups are
/// infallible and the registry can be shared freely across threads.
#[derive(Debug, Clone)]
pub struct GuesserRegistry {
    ashkenazi: LanguageGuesser,
    generic: LanguageGuesser,
    sephardic: LanguageGuesser,
}

impl GuesserRegistry {
    /// Compile the built-in rule tables for all three name types.
    pub fn with_builtin_rules() -> Result<Self> {
        Ok(Self {
            ashkenazi: LanguageGuesser::load_builtin(
                NameType::Ashkenazi,
                Languages::for_name_type(NameType::Ashkenazi),
            )?,
            generic: LanguageGuesser::load_builtin(
                NameType::Generic,
                Languages::for_name_type(NameType::Generic),
            )?,
            sephardic: LanguageGuesser::load_builtin(
                NameType::Sephardic,
                Languages::for_name_type(NameType::Sephardic),
            )?,
        })
    }

    /// Look up the guesser for a name type.
    pub fn get(&self, name_type: NameType) -> &LanguageGuesser {
        match name_type {
            NameType::Ashkenazi => &self.ashkenazi,
            NameType::Generic => &self.generic,
            NameType::Sephardic => &self.sephardic,
        }
    }
}
