//! Size limits and markers for rule resources
//!
//! Rule files are caller-supplied text, so loading applies hard limits:
//! a pattern that is too long, a regex that compiles into too large a
//! program, or an oversized file all fail the load.

/// Maximum size for rule files (1MB)
///
/// Rule resources are small text files; anything larger is a
/// misconfiguration and is rejected before reading.
pub const MAX_RULE_FILE_SIZE: u64 = 1_048_576; // 1MB

/// Maximum regex pattern length (500 characters)
///
/// Applied before compilation. The built-in rules stay far below this.
pub const MAX_REGEX_LENGTH: usize = 500;

/// Compiled regex size limit (10MB)
///
/// Applied during regex compilation via RegexBuilder.
pub const REGEX_SIZE_LIMIT: usize = 10_000_000; // 10MB

/// Regex DFA size limit (2MB)
///
/// Bounds the lazy DFA cache the regex engine may allocate per pattern.
pub const REGEX_DFA_SIZE_LIMIT: usize = 2_000_000; // 2MB

/// Marker starting an end-of-line comment in rule resources.
pub const LINE_COMMENT: &str = "//";

/// Marker opening a block comment when a line starts with it.
pub const BLOCK_COMMENT_START: &str = "/*";

/// Marker closing a block comment when a line ends with it.
pub const BLOCK_COMMENT_END: &str = "*/";
