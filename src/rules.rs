// SPDX-FileCopyrightText: 2025 Hong Minhee <https://hongminhee.org/>
// SPDX-License-Identifier: GPL-3.0-or-later
//! Ignore rules and converters.
//!
//! An [`IgnoreRule`] makes the engine emit a token unchanged.  A [`Converter`]
//! pairs a pattern with an operator that produces the replacement for any
//! token the pattern matches.  Both are immutable once built.

use std::fmt;
use std::sync::Arc;

use regex::Regex;

use crate::Error;
use crate::engine::Engine;

/// The transform half of a [`Converter`].
///
/// Called with the token, its position in the input, the output produced so
/// far for earlier tokens, and the effective rule set of the running engine.
pub type Operator = Arc<dyn Fn(&str, usize, &[String], &Engine) -> String + Send + Sync>;

/// What an [`IgnoreRule`] compares a token against.
#[derive(Debug, Clone)]
pub enum Matcher {
    /// A single word.
    Exact(String),
    /// Any one of several words.
    AnyOf(Vec<String>),
    /// A regular expression, tested anywhere in the token unless anchored.
    Pattern(Regex),
}

impl From<&str> for Matcher {
    fn from(word: &str) -> Self {
        Matcher::Exact(word.to_string())
    }
}

impl From<String> for Matcher {
    fn from(word: String) -> Self {
        Matcher::Exact(word)
    }
}

impl From<Vec<String>> for Matcher {
    fn from(words: Vec<String>) -> Self {
        Matcher::AnyOf(words)
    }
}

impl From<&[&str]> for Matcher {
    fn from(words: &[&str]) -> Self {
        Matcher::AnyOf(words.iter().map(|w| w.to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for Matcher {
    fn from(words: [&str; N]) -> Self {
        Matcher::from(&words[..])
    }
}

impl From<Regex> for Matcher {
    fn from(pattern: Regex) -> Self {
        Matcher::Pattern(pattern)
    }
}

/// A rule that leaves matching tokens exactly as they were written.
#[derive(Debug, Clone)]
pub struct IgnoreRule {
    matcher: Matcher,
    case_insensitive: bool,
}

impl IgnoreRule {
    /// Build a rule from any matcher.
    ///
    /// `case_insensitive` only affects word matchers; a regular expression
    /// carries its own flags, so it is ignored for [`Matcher::Pattern`].
    pub fn new(matcher: impl Into<Matcher>, case_insensitive: bool) -> Self {
        let matcher = matcher.into();
        let case_insensitive = case_insensitive && !matches!(matcher, Matcher::Pattern(_));
        Self {
            matcher,
            case_insensitive,
        }
    }

    /// Ignore tokens matching a regular expression.
    pub fn regex(pattern: &str) -> Result<Self, Error> {
        Ok(Self::from_regex(compile(pattern)?))
    }

    /// Ignore tokens matching an already compiled regular expression.
    pub fn from_regex(regex: Regex) -> Self {
        Self::new(regex, false)
    }

    /// Ignore tokens equal to the given word(s), respecting case.
    pub fn exact(words: impl Into<Matcher>) -> Self {
        Self::new(words, false)
    }

    /// Ignore tokens equal to the given word(s), ignoring case.
    pub fn insensitive(words: impl Into<Matcher>) -> Self {
        Self::new(words, true)
    }

    /// The matcher this rule was built from.
    pub fn matcher(&self) -> &Matcher {
        &self.matcher
    }

    /// Whether word comparisons ignore case.
    pub fn is_case_insensitive(&self) -> bool {
        self.case_insensitive
    }

    /// Check whether `token` should pass through untouched.
    pub fn matches(&self, token: &str) -> bool {
        match &self.matcher {
            Matcher::Exact(word) => self.equals(word, token),
            Matcher::AnyOf(words) => words.iter().any(|word| self.equals(word, token)),
            Matcher::Pattern(regex) => regex.is_match(token),
        }
    }

    fn equals(&self, word: &str, token: &str) -> bool {
        if self.case_insensitive {
            word.to_lowercase() == token.to_lowercase()
        } else {
            word == token
        }
    }
}

/// A pattern plus the operator that rewrites tokens matching it.
#[derive(Clone)]
pub struct Converter {
    pattern: Regex,
    operator: Operator,
}

impl Converter {
    /// Build a converter whose operator only needs the token and its position.
    pub fn new<F>(pattern: &str, operator: F) -> Result<Self, Error>
    where
        F: Fn(&str, usize) -> String + Send + Sync + 'static,
    {
        Ok(Self::from_regex(compile(pattern)?, operator))
    }

    /// Like [`Converter::new`], with a precompiled pattern.
    pub fn from_regex<F>(pattern: Regex, operator: F) -> Self
    where
        F: Fn(&str, usize) -> String + Send + Sync + 'static,
    {
        Self::contextual_regex(pattern, move |token, index, _, _| operator(token, index))
    }

    /// Build a converter whose operator also sees earlier output and the
    /// running engine.
    pub fn contextual<F>(pattern: &str, operator: F) -> Result<Self, Error>
    where
        F: Fn(&str, usize, &[String], &Engine) -> String + Send + Sync + 'static,
    {
        Ok(Self::contextual_regex(compile(pattern)?, operator))
    }

    /// Like [`Converter::contextual`], with a precompiled pattern.
    pub fn contextual_regex<F>(pattern: Regex, operator: F) -> Self
    where
        F: Fn(&str, usize, &[String], &Engine) -> String + Send + Sync + 'static,
    {
        Self {
            pattern,
            operator: Arc::new(operator),
        }
    }

    /// The pattern tokens are tested against.
    pub fn pattern(&self) -> &Regex {
        &self.pattern
    }

    /// Check whether this converter claims `token`.
    pub fn matches(&self, token: &str) -> bool {
        self.pattern.is_match(token)
    }

    /// Run the operator.
    pub fn apply(
        &self,
        token: &str,
        index: usize,
        accumulated: &[String],
        engine: &Engine,
    ) -> String {
        (self.operator)(token, index, accumulated, engine)
    }
}

impl fmt::Debug for Converter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Converter")
            .field("pattern", &self.pattern.as_str())
            .finish_non_exhaustive()
    }
}

fn compile(pattern: &str) -> Result<Regex, Error> {
    Regex::new(pattern).map_err(|e| Error::invalid_pattern(pattern, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ConversionOptions, GlobalOptions};

    #[test]
    fn test_exact_respects_case() {
        let rule = IgnoreRule::exact("iPhone");
        assert!(rule.matches("iPhone"));
        assert!(!rule.matches("iphone"));
    }

    #[test]
    fn test_insensitive_ignores_case() {
        let rule = IgnoreRule::insensitive("mixedcaseword");
        assert!(rule.matches("MIXEDcaseWord"));
        assert!(!rule.matches("mixedcase"));
    }

    #[test]
    fn test_word_set() {
        let rule = IgnoreRule::insensitive(["eBay", "iPod"]);
        assert!(rule.matches("EBAY"));
        assert!(rule.matches("ipod"));
        assert!(!rule.matches("ebays"));
    }

    #[test]
    fn test_regex_is_partial_unless_anchored() {
        let rule = IgnoreRule::regex("[0-9]").unwrap();
        assert!(rule.matches("abc1def"));
        let anchored = IgnoreRule::regex("^[0-9]+$").unwrap();
        assert!(!anchored.matches("abc1def"));
        assert!(anchored.matches("2024"));
    }

    #[test]
    fn test_regex_drops_case_flag() {
        let rule = IgnoreRule::new(Regex::new("^abc$").unwrap(), true);
        assert!(!rule.is_case_insensitive());
        assert!(!rule.matches("ABC"));
    }

    #[test]
    fn test_invalid_regex_fails_at_construction() {
        assert!(matches!(
            IgnoreRule::regex("[a-"),
            Err(Error::InvalidPattern { .. })
        ));
        assert!(Converter::new("(", |w, _| w.to_string()).is_err());
    }

    #[test]
    fn test_converter_apply() {
        let converter = Converter::new("^x", |w, i| format!("{w}{i}")).unwrap();
        let engine = Engine::with_globals(&ConversionOptions::default(), &GlobalOptions::default());
        assert!(converter.matches("xyz"));
        assert!(!converter.matches("yxz"));
        assert_eq!(converter.apply("xyz", 3, &[], &engine), "xyz3");
    }

    #[test]
    fn test_contextual_converter_sees_accumulated() {
        let converter =
            Converter::contextual(".", |w, _, acc: &[String], _| format!("{}:{w}", acc.len()))
                .unwrap();
        let engine = Engine::with_globals(&ConversionOptions::default(), &GlobalOptions::default());
        let acc = vec!["A".to_string(), "B".to_string()];
        assert_eq!(converter.apply("c", 2, &acc, &engine), "2:c");
    }

    #[test]
    fn test_converter_debug_shows_pattern() {
        let converter = Converter::new("^de", |w, _| w.to_string()).unwrap();
        assert!(format!("{converter:?}").contains("^de"));
    }
}
