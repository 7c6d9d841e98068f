//! Core data types for name matching.

use serde::{Deserialize, Serialize};

/// A naming tradition with its own rule table and language vocabulary.
///
/// The name type selects which built-in rules and vocabulary the engine
/// loads, and which transcription branch a downstream consumer picks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NameType {
    /// Ashkenazi Jewish family names
    Ashkenazi,
    /// Family names of any origin
    Generic,
    /// Sephardic Jewish family names
    Sephardic,
}

impl NameType {
    /// Returns all name types in a consistent order
    pub fn all() -> &'static [NameType] {
        &[NameType::Ashkenazi, NameType::Generic, NameType::Sephardic]
    }

    /// Returns the display name for this name type
    pub fn display_name(&self) -> &'static str {
        match self {
            NameType::Ashkenazi => "Ashkenazi",
            NameType::Generic => "Generic",
            NameType::Sephardic => "Sephardic",
        }
    }

    /// Returns the short name used in CLI arguments and resource names
    pub fn cli_name(&self) -> &'static str {
        match self {
            NameType::Ashkenazi => "ash",
            NameType::Generic => "gen",
            NameType::Sephardic => "sep",
        }
    }

    /// Returns the description for this name type
    pub fn description(&self) -> &'static str {
        match self {
            NameType::Ashkenazi => "Ashkenazi Jewish family names",
            NameType::Generic => "Family names of any origin",
            NameType::Sephardic => "Sephardic Jewish family names",
        }
    }

    /// Parse from CLI string
    pub fn from_cli_name(s: &str) -> Option<Self> {
        Self::all().iter().find(|nt| nt.cli_name() == s).copied()
    }
}
