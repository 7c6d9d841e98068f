//! Limit enforcement tests for nomen-rule-engine
//!
//! These tests verify protection against:
//! - Memory exhaustion via oversized rule files
//! - Overlong patterns in rule text
//! - Patterns whose compiled form would blow the regex size limits
//! - Slow matching on pathological patterns

use std::time::{Duration, Instant};

use nomen_rule_engine::{
    load_rules_file, parse_rules, RuleError, GENERIC_RULES, MAX_REGEX_LENGTH, MAX_RULE_FILE_SIZE,
};
use tempfile::TempDir;

#[test]
fn test_oversized_rules_file_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let rules_path = temp_dir.path().join("huge.txt");

    let oversized = vec![b'x'; MAX_RULE_FILE_SIZE as usize + 1];
    std::fs::write(&rules_path, oversized).unwrap();

    let err = load_rules_file(&rules_path).unwrap_err();
    assert!(matches!(err, RuleError::ResourceNotFound { .. }));
    assert!(err.to_string().contains("huge.txt"));
}

#[test]
fn test_overlong_pattern_rejected() {
    let pattern = "x".repeat(MAX_REGEX_LENGTH + 1);
    let err = parse_rules("test", &format!("{pattern} german true")).unwrap_err();

    match err {
        RuleError::InvalidPattern { reason, .. } => {
            assert!(reason.contains("length"), "unexpected reason: {reason}");
        }
        other => panic!("expected InvalidPattern, got {other:?}"),
    }
}

#[test]
fn test_exponential_size_pattern_rejected() {
    // Short to write, enormous to compile: 10^9 states
    let err = parse_rules("test", "(?:(?:x{1000}){1000}){1000} german true").unwrap_err();
    assert!(matches!(err, RuleError::InvalidPattern { .. }));
}

#[test]
fn test_nested_quantifiers_match_in_bounded_time() {
    // Would backtrack catastrophically in a backtracking engine
    let rules = parse_rules("test", "(a+)+b german true").unwrap();
    let input = "a".repeat(64);

    let start = Instant::now();
    let matched = rules[0].matches(&input);
    let elapsed = start.elapsed();

    assert!(!matched);
    assert!(
        elapsed < Duration::from_millis(100),
        "matching took too long: {elapsed:?}"
    );
}

#[test]
fn test_builtin_tables_fit_the_limits() {
    assert!((GENERIC_RULES.len() as u64) < MAX_RULE_FILE_SIZE);

    for rule in parse_rules("test", GENERIC_RULES).unwrap() {
        assert!(rule.pattern().len() <= MAX_REGEX_LENGTH);
    }
}
