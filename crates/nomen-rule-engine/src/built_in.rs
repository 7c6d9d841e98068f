//! Built-in language-guessing rules embedded in the binary
//!
//! This module provides the default rule tables for the supported name
//! types. The tables are embedded at compile time via `include_str!()`
//! and parsed through the same loader path as external rule files, so
//! zero-config use needs no files on disk.

use nomen_core::NameType;

/// Ashkenazi language-guessing rules
pub const ASHKENAZI_RULES: &str = include_str!("built_in/ash_lang.txt");

/// Generic language-guessing rules
pub const GENERIC_RULES: &str = include_str!("built_in/gen_lang.txt");

/// Sephardic language-guessing rules
pub const SEPHARDIC_RULES: &str = include_str!("built_in/sep_lang.txt");

/// The embedded rule text for a name type
pub fn rules_text(name_type: NameType) -> &'static str {
    match name_type {
        NameType::Ashkenazi => ASHKENAZI_RULES,
        NameType::Generic => GENERIC_RULES,
        NameType::Sephardic => SEPHARDIC_RULES,
    }
}

/// A stable resource identifier for error messages about embedded rules
pub fn resource_name(name_type: NameType) -> String {
    format!("built-in:{}_lang.txt", name_type.cli_name())
}
