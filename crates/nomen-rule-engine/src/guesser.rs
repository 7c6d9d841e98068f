//! The language guessing engine
//!
//! A guesser walks its rule table in order, narrowing a working copy of
//! the vocabulary. An accepting rule that matches intersects the working
//! set with its languages; a rejecting rule subtracts its languages.
//! Every rule runs; there is no early exit, because later rules keep
//! narrowing whatever earlier rules left over.

use std::collections::BTreeSet;
use std::path::Path;

use nomen_core::{LanguageSet, LanguageTag, Languages, NameType, ANY};

use crate::built_in;
use crate::loader;
use crate::rule::LangRule;
use crate::Result;

/// An immutable rule table bound to its vocabulary
///
/// Construction is the only fallible phase. A built guesser is frozen:
/// it can be shared across threads and queried concurrently without
/// locks.
#[derive(Debug, Clone)]
pub struct LanguageGuesser {
    rules: Vec<LangRule>,
    languages: Languages,
}

impl LanguageGuesser {
    /// Creates a guesser from already compiled rules
    pub fn new(rules: Vec<LangRule>, languages: Languages) -> Self {
        Self { rules, languages }
    }

    /// Loads the embedded rules for a name type
    pub fn load_builtin(name_type: NameType, languages: Languages) -> Result<Self> {
        let resource = built_in::resource_name(name_type);
        let rules = loader::parse_rules(&resource, built_in::rules_text(name_type))?;
        Ok(Self::new(rules, languages))
    }

    /// Loads rules from an external rule file
    pub fn load_from_path(path: &Path, languages: Languages) -> Result<Self> {
        let rules = loader::load_rules_file(path)?;
        Ok(Self::new(rules, languages))
    }

    /// The vocabulary this guesser narrows
    pub fn languages(&self) -> &Languages {
        &self.languages
    }

    /// Number of rules in the table
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Guesses the candidate languages of a word
    ///
    /// `text` is matched as given; callers lowercase it first, since the
    /// rule patterns assume lowercase input. Each matching rule narrows
    /// the working set, and a set narrowed down to nothing is reported
    /// as [`LanguageSet::Any`], never as [`LanguageSet::None`].
    pub fn guess_languages(&self, text: &str) -> LanguageSet {
        let mut candidates: BTreeSet<LanguageTag> = self.languages.as_set().clone();

        for rule in &self.rules {
            if rule.matches(text) {
                if rule.accept_on_match() {
                    candidates.retain(|lang| rule.languages().contains(lang));
                } else {
                    candidates.retain(|lang| !rule.languages().contains(lang));
                }
            }
        }

        match LanguageSet::from_set(candidates) {
            LanguageSet::None => LanguageSet::Any,
            set => set,
        }
    }

    /// Guesses the single language of a word
    ///
    /// Returns the sole candidate when [`Self::guess_languages`] narrows
    /// to exactly one language, otherwise the [`ANY`] sentinel.
    pub fn guess_language(&self, text: &str) -> LanguageTag {
        match self.guess_languages(text).single() {
            Some(lang) => lang.to_string(),
            None => ANY.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vocab(tags: &[&str]) -> Languages {
        Languages::new(tags.iter().map(|t| t.to_string()).collect())
    }

    fn langs(tags: &[&str]) -> BTreeSet<LanguageTag> {
        tags.iter().map(|t| t.to_string()).collect()
    }

    /// The worked example table: two accepting rules and one rejecting
    /// rule over a six-language vocabulary.
    fn sample_rules() -> Vec<LangRule> {
        vec![
            LangRule::compile("^sch", langs(&["german", "russian"]), true, "test").unwrap(),
            LangRule::compile("tz$", langs(&["german", "russian", "english"]), true, "test")
                .unwrap(),
            LangRule::compile("w", langs(&["french", "spanish", "polish"]), false, "test")
                .unwrap(),
        ]
    }

    fn sample_guesser() -> LanguageGuesser {
        LanguageGuesser::new(
            sample_rules(),
            vocab(&["german", "russian", "english", "french", "spanish", "polish"]),
        )
    }

    #[test]
    fn test_accept_rules_intersect() {
        let set = sample_guesser().guess_languages("schwartz");
        assert_eq!(
            set,
            LanguageSet::from_set(langs(&["german", "russian"]))
        );
    }

    #[test]
    fn test_later_accept_intersects_earlier_result() {
        let set = sample_guesser().guess_languages("fitz");
        assert_eq!(
            set,
            LanguageSet::from_set(langs(&["german", "russian", "english"]))
        );
    }

    #[test]
    fn test_reject_rules_subtract() {
        let set = sample_guesser().guess_languages("brown");
        assert_eq!(
            set,
            LanguageSet::from_set(langs(&["german", "russian", "english"]))
        );
    }

    #[test]
    fn test_no_match_leaves_full_vocabulary() {
        let guesser = sample_guesser();
        let set = guesser.guess_languages("durand");
        assert_eq!(
            set,
            LanguageSet::from_set(guesser.languages().as_set().clone())
        );
    }

    #[test]
    fn test_empty_input_is_valid() {
        let guesser = sample_guesser();
        let set = guesser.guess_languages("");
        assert_eq!(
            set,
            LanguageSet::from_set(guesser.languages().as_set().clone())
        );
        assert_eq!(guesser.guess_language(""), ANY);
    }

    #[test]
    fn test_contradictory_table_yields_any() {
        // the accept sets are disjoint, so any text matching both rules
        // narrows to nothing
        let rules = vec![
            LangRule::compile("a", langs(&["german"]), true, "test").unwrap(),
            LangRule::compile("b", langs(&["french"]), true, "test").unwrap(),
        ];
        let guesser = LanguageGuesser::new(rules, vocab(&["german", "french"]));
        assert_eq!(guesser.guess_languages("ab"), LanguageSet::Any);
    }

    #[test]
    fn test_rejecting_everything_yields_any() {
        let rules =
            vec![LangRule::compile("x", langs(&["german", "french"]), false, "test").unwrap()];
        let guesser = LanguageGuesser::new(rules, vocab(&["german", "french"]));
        assert_eq!(guesser.guess_languages("axe"), LanguageSet::Any);
    }

    #[test]
    fn test_guess_language_agrees_with_guess_languages() {
        let rules = vec![
            LangRule::compile("^sch", langs(&["german", "russian"]), true, "test").unwrap(),
            LangRule::compile("mann$", langs(&["german"]), true, "test").unwrap(),
        ];
        let guesser = LanguageGuesser::new(
            rules,
            vocab(&["german", "russian", "english"]),
        );

        // singleton: the tag itself
        assert!(guesser.guess_languages("schumann").is_singleton());
        assert_eq!(guesser.guess_language("schumann"), "german");

        // several candidates: the sentinel
        assert!(!guesser.guess_languages("schubert").is_singleton());
        assert_eq!(guesser.guess_language("schubert"), ANY);
    }

    #[test]
    fn test_guessing_is_deterministic() {
        let guesser = sample_guesser();
        let first = guesser.guess_languages("schwartz");
        for _ in 0..10 {
            assert_eq!(guesser.guess_languages("schwartz"), first);
        }
    }

    #[test]
    fn test_prefix_of_table_narrows_less() {
        // every rule can only shrink the working set, so a guesser built
        // from a prefix of the table keeps every candidate the full table
        // keeps
        let guesser = sample_guesser();
        let full = guesser.guess_languages("schwartz");

        for k in 0..=guesser.rule_count() {
            let prefix = LanguageGuesser::new(
                guesser.rules[..k].to_vec(),
                guesser.languages.clone(),
            );
            let wider = prefix.guess_languages("schwartz");
            if let LanguageSet::Some(kept) = &full {
                for lang in kept {
                    assert!(wider.contains(lang), "prefix of {k} rules dropped {lang}");
                }
            }
        }
    }

    #[test]
    fn test_results_stay_within_vocabulary() {
        // an accept rule naming tags outside the vocabulary cannot smuggle
        // them into the result
        let rules = vec![
            LangRule::compile("a", langs(&["german", "klingon"]), true, "test").unwrap(),
        ];
        let guesser = LanguageGuesser::new(rules, vocab(&["german", "french"]));
        let set = guesser.guess_languages("adler");
        assert_eq!(set, LanguageSet::from_set(langs(&["german"])));
        assert!(!set.contains("klingon"));
    }

    #[test]
    fn test_case_is_callers_concern() {
        // patterns assume lowercase input; unfolded text fails to match
        let guesser = sample_guesser();
        let folded = guesser.guess_languages("schwartz");
        let unfolded = guesser.guess_languages("SCHWARTZ");
        assert_ne!(folded, unfolded);
    }
}
