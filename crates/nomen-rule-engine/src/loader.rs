//! Line-oriented rule resource parsing
//!
//! Rule resources are UTF-8 text with one rule per logical line:
//!
//! ```text
//! pattern lang1+lang2 true
//! ```
//!
//! `//` starts an end-of-line comment. A line starting with `/*` opens a
//! block comment that discards everything up to the next line ending
//! with `*/`. Blank lines are skipped. Every remaining line must split
//! into exactly three whitespace-separated fields.
//!
//! Both the embedded rule tables and external rule files go through
//! [`parse_rules`], so they share one grammar and one set of checks.

use std::collections::BTreeSet;
use std::fs;
use std::io;
use std::path::Path;

use nomen_core::LanguageTag;
use tracing::debug;

use crate::constants::{
    BLOCK_COMMENT_END, BLOCK_COMMENT_START, LINE_COMMENT, MAX_RULE_FILE_SIZE,
};
use crate::rule::LangRule;
use crate::{Result, RuleError};

/// Parses rule text into compiled rules
///
/// `resource` identifies the text in error messages. A malformed line or
/// an unparseable pattern fails the whole parse; no partial rule list is
/// ever returned.
pub fn parse_rules(resource: &str, text: &str) -> Result<Vec<LangRule>> {
    let mut rules = Vec::new();
    let mut in_block_comment = false;

    for raw_line in text.lines() {
        if in_block_comment {
            // only a line ending with the closing marker leaves the block
            if raw_line.ends_with(BLOCK_COMMENT_END) {
                in_block_comment = false;
            }
            continue;
        }
        if raw_line.starts_with(BLOCK_COMMENT_START) {
            // the opening line never closes the block, even if it also
            // ends with the closing marker
            in_block_comment = true;
            continue;
        }

        let line = match raw_line.find(LINE_COMMENT) {
            Some(idx) => &raw_line[..idx],
            None => raw_line,
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let parts: Vec<&str> = line.split_whitespace().collect();
        if parts.len() != 3 {
            return Err(RuleError::MalformedLine {
                line: raw_line.to_string(),
                resource: resource.to_string(),
            });
        }

        let languages: BTreeSet<LanguageTag> =
            parts[1].split('+').map(|lang| lang.to_string()).collect();
        let accept_on_match = match parts[2] {
            "true" => true,
            "false" => false,
            flag => {
                return Err(RuleError::InvalidAcceptFlag {
                    flag: flag.to_string(),
                    line: raw_line.to_string(),
                    resource: resource.to_string(),
                });
            }
        };

        rules.push(LangRule::compile(
            parts[0],
            languages,
            accept_on_match,
            resource,
        )?);
    }

    debug!(resource, rule_count = rules.len(), "parsed language rules");
    Ok(rules)
}

/// Reads and parses a rule file from disk
///
/// The path doubles as the resource identifier in error messages. Files
/// larger than [`MAX_RULE_FILE_SIZE`] are rejected before reading.
pub fn load_rules_file(path: &Path) -> Result<Vec<LangRule>> {
    let resource = path.display().to_string();

    let metadata = fs::metadata(path).map_err(|source| RuleError::ResourceNotFound {
        resource: resource.clone(),
        source,
    })?;
    if metadata.len() > MAX_RULE_FILE_SIZE {
        return Err(RuleError::ResourceNotFound {
            resource,
            source: io::Error::new(
                io::ErrorKind::InvalidData,
                format!("file exceeds maximum size of {} bytes", MAX_RULE_FILE_SIZE),
            ),
        });
    }

    let text = fs::read_to_string(path).map_err(|source| RuleError::ResourceNotFound {
        resource: resource.clone(),
        source,
    })?;

    parse_rules(&resource, &text)
}
