// SPDX-FileCopyrightText: 2025 Hong Minhee <https://hongminhee.org/>
// SPDX-License-Identifier: GPL-3.0-or-later
//! Configuration documents for conversion options.
//!
//! Ignore rules and built-in converter switches can be described in TOML:
//!
//! ```toml
//! disable_default = ["roman_numerals"]
//!
//! [[ignore]]
//! exact = ["iPhone", "eBay"]
//!
//! [[ignore]]
//! regex = "^[A-Z]{2,}$"
//! ```
//!
//! Converters carry code, so they can only be added programmatically.

use serde::Deserialize;

use crate::Error;
use crate::defaults::DisableDefault;
use crate::engine::ConversionOptions;
use crate::rules::{IgnoreRule, Matcher};

/// A parsed configuration document.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// `true` to switch off every built-in converter, or a list of
    /// converter names (default: none).
    pub disable_default: DisableDefault,

    /// Ignore rules, in evaluation order.
    #[serde(rename = "ignore")]
    pub ignores: Vec<IgnoreConfig>,
}

/// One `[[ignore]]` entry.  Exactly one of `exact` and `regex` must be set.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct IgnoreConfig {
    /// A word or list of words to leave untouched.
    pub exact: Option<Words>,

    /// A regular expression; tokens it matches are left untouched.
    pub regex: Option<String>,

    /// Compare `exact` words ignoring case (default: false).
    pub case_insensitive: bool,
}

/// Either a single word or a list of words.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum Words {
    /// `exact = "eBay"`
    One(String),
    /// `exact = ["eBay", "iPhone"]`
    Many(Vec<String>),
}

impl From<Words> for Matcher {
    fn from(words: Words) -> Self {
        match words {
            Words::One(word) => Matcher::Exact(word),
            Words::Many(words) => Matcher::AnyOf(words),
        }
    }
}

impl IgnoreConfig {
    /// Build the ignore rule this entry describes.
    pub fn to_rule(&self) -> Result<IgnoreRule, Error> {
        match (&self.exact, &self.regex) {
            (Some(words), None) => Ok(IgnoreRule::new(words.clone(), self.case_insensitive)),
            (None, Some(pattern)) => IgnoreRule::regex(pattern),
            (Some(_), Some(_)) => Err(Error::InvalidRule(
                "ignore rule sets both `exact` and `regex`".to_string(),
            )),
            (None, None) => Err(Error::InvalidRule(
                "ignore rule needs either `exact` or `regex`".to_string(),
            )),
        }
    }
}

impl Config {
    /// Parse a configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, Error> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Build conversion options, compiling every rule.
    pub fn to_options(&self) -> Result<ConversionOptions, Error> {
        let ignores = self
            .ignores
            .iter()
            .map(IgnoreConfig::to_rule)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(ConversionOptions {
            ignores,
            converters: Vec::new(),
            disable_default: self.disable_default.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ConverterId;

    #[test]
    fn test_parse_empty_toml() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.disable_default, DisableDefault::None);
    }

    #[test]
    fn test_parse_disable_default_flag() {
        let config = Config::from_toml("disable_default = true").unwrap();
        assert_eq!(config.disable_default, DisableDefault::All);
        let config = Config::from_toml("disable_default = false").unwrap();
        assert_eq!(config.disable_default, DisableDefault::None);
    }

    #[test]
    fn test_parse_disable_default_list() {
        let config =
            Config::from_toml(r#"disable_default = ["roman_numerals", "apostrophe_prefix"]"#)
                .unwrap();
        assert_eq!(
            config.disable_default,
            DisableDefault::from([ConverterId::RomanNumerals, ConverterId::ApostrophePrefix])
        );
    }

    #[test]
    fn test_parse_unknown_converter_name() {
        let result = Config::from_toml(r#"disable_default = ["roman"]"#);
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_parse_ignores() {
        let config = Config::from_toml(
            r#"
[[ignore]]
exact = "eBay"

[[ignore]]
exact = ["iPhone", "iPad"]
case_insensitive = true

[[ignore]]
regex = "^[0-9]+$"
"#,
        )
        .unwrap();
        assert_eq!(config.ignores.len(), 3);
        assert_eq!(config.ignores[0].exact, Some(Words::One("eBay".to_string())));
        assert!(config.ignores[1].case_insensitive);
        assert_eq!(config.ignores[2].regex.as_deref(), Some("^[0-9]+$"));

        let options = config.to_options().unwrap();
        assert_eq!(options.ignores.len(), 3);
        assert!(options.ignores[0].matches("eBay"));
        assert!(!options.ignores[0].matches("EBAY"));
        assert!(options.ignores[1].matches("IPHONE"));
        assert!(options.ignores[2].matches("1999"));
    }

    #[test]
    fn test_ignore_needs_one_matcher() {
        let config = Config::from_toml("[[ignore]]\ncase_insensitive = true").unwrap();
        assert!(matches!(config.to_options(), Err(Error::InvalidRule(_))));

        let config = Config::from_toml("[[ignore]]\nexact = \"a\"\nregex = \"b\"").unwrap();
        assert!(matches!(config.to_options(), Err(Error::InvalidRule(_))));
    }

    #[test]
    fn test_invalid_regex() {
        let config = Config::from_toml("[[ignore]]\nregex = \"(\"").unwrap();
        assert!(matches!(
            config.to_options(),
            Err(Error::InvalidPattern { .. })
        ));
    }

    #[test]
    fn test_invalid_toml() {
        assert!(matches!(
            Config::from_toml("disable_default = "),
            Err(Error::Config(_))
        ));
    }
}
