//! Output formatting for guess results.

use colored::*;
use nomen_core::{LanguageSet, ANY};
use nomen_rule_engine::LanguageGuesser;
use serde::Serialize;
use serde_json::json;

/// One guessed name, ready for printing.
#[derive(Debug, Serialize)]
pub struct Guess {
    /// The name as the caller spelled it
    pub name: String,
    /// The single guessed language, or "any" when several remain
    pub guess: String,
    /// Every remaining candidate language; empty when nothing concrete
    /// remains
    pub languages: Vec<String>,
}

impl Guess {
    /// Run the guesser over one name.
    ///
    /// The rule tables are written against lowercase text, so the name is
    /// lowercased before matching; the original spelling is kept for
    /// display.
    pub fn new(name: &str, guesser: &LanguageGuesser) -> Self {
        let set = guesser.guess_languages(&name.to_lowercase());
        let languages = match &set {
            LanguageSet::Some(langs) => langs.iter().cloned().collect(),
            _ => Vec::new(),
        };
        let guess = match set.single() {
            Some(lang) => lang.to_string(),
            None => ANY.to_string(),
        };

        Self {
            name: name.to_string(),
            guess,
            languages,
        }
    }
}

pub fn print_human(guesses: &[Guess]) {
    for g in guesses {
        let rendered = match g.languages.len() {
            0 => ANY.bright_black(),
            1 => g.guess.green(),
            _ => g.languages.join("+").cyan(),
        };
        println!("{}: {}", g.name.bold(), rendered);
    }
}

pub fn print_json(guesses: &[Guess]) {
    let json_result = json!({ "guesses": guesses });

    match serde_json::to_string_pretty(&json_result) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Error serializing results: {}", e),
    }
}
