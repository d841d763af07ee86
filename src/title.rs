// SPDX-FileCopyrightText: 2025 Hong Minhee <https://hongminhee.org/>
// SPDX-License-Identifier: GPL-3.0-or-later
//! Title case conversion.

use std::sync::LazyLock;

use regex::Regex;

use crate::engine::{ConversionOptions, Engine};
use crate::global::{GlobalConfig, GlobalOptions};
use crate::rules::Converter;

/// Words kept in lowercase unless they open the title.
pub const SMALL_WORDS: [&str; 10] = [
    "a", "an", "the", "to", "in", "on", "of", "from", "and", "with",
];

static SMALL_WORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!("(?i)^(?:{})$", SMALL_WORDS.join("|"))).expect("valid pattern")
});

/// Convert text to title case.
///
/// A lone word is simply capitalized: `"McCLANE"` becomes `"Mcclane"`, since
/// the name rules are not consulted for a single word.  Longer text runs
/// through the full conversion engine with one extra converter that lowers
/// [`SMALL_WORDS`] everywhere except in first position, so
/// `"lord of the rings"` becomes `"Lord of the Rings"`.
pub fn title_case(input: &str) -> String {
    title_case_with(input, &GlobalConfig::global().get())
}

/// [`title_case`] against an explicit set of global rules.
pub fn title_case_with(input: &str, globals: &GlobalOptions) -> String {
    let input = input.trim();
    if !input.contains(char::is_whitespace) {
        return capitalize(input);
    }

    let options = ConversionOptions {
        converters: vec![small_words()],
        ..ConversionOptions::default()
    };
    Engine::with_globals(&options, globals).convert(input)
}

/// Uppercase the first character and lowercase the rest.
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => {
            let mut result = first.to_uppercase().to_string();
            result.push_str(&chars.as_str().to_lowercase());
            result
        }
    }
}

fn small_words() -> Converter {
    Converter::from_regex(SMALL_WORD.clone(), |token, index| {
        if index > 0 {
            token.to_lowercase()
        } else {
            capitalize(token)
        }
    })
}
