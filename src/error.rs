// SPDX-FileCopyrightText: 2025 Hong Minhee <https://hongminhee.org/>
// SPDX-License-Identifier: GPL-3.0-or-later
//! Errors raised while building rules and options.
//!
//! Converting text never fails; only constructing the rules that drive the
//! conversion can.

use thiserror::Error;

/// Errors that can occur while constructing rules or loading configuration.
#[derive(Debug, Error)]
pub enum Error {
    /// A regular expression could not be compiled.
    #[error("invalid pattern '{pattern}': {source}")]
    InvalidPattern {
        /// The pattern as it was given.
        pattern: String,
        /// The underlying compile error.
        #[source]
        source: regex::Error,
    },

    /// A rule description is incomplete or contradictory.
    #[error("invalid rule: {0}")]
    InvalidRule(String),

    /// The TOML configuration could not be parsed.
    #[error("failed to parse configuration: {0}")]
    Config(#[from] toml::de::Error),
}

impl Error {
    pub(crate) fn invalid_pattern(pattern: &str, source: regex::Error) -> Self {
        Error::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_pattern_message() {
        let source = regex::Regex::new("(").unwrap_err();
        let err = Error::invalid_pattern("(", source);
        assert!(err.to_string().starts_with("invalid pattern '(':"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_invalid_rule_message() {
        let err = Error::InvalidRule("missing matcher".to_string());
        assert_eq!(err.to_string(), "invalid rule: missing matcher");
    }
}
