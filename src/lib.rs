// SPDX-FileCopyrightText: 2025 Hong Minhee <https://hongminhee.org/>
// SPDX-License-Identifier: GPL-3.0-or-later
//! Namecase fixes the capitalization of names and titles.
//!
//! Text typed in all capitals or all lowercase is converted word by word,
//! keeping the conventional spelling of irregular surnames: `McDonald`,
//! `MacIntosh`, `O'Neill`, `Saint-Claire`, and Roman numerals such as
//! `Henry VIII`.
//!
//! # Example
//!
//! ```
//! use namecase::{convert, title_case, ConversionOptions, ConverterId, IgnoreRule};
//!
//! let options = ConversionOptions::default();
//! assert_eq!(convert("macintosh MCDONALD", &options), "MacIntosh McDonald");
//! assert_eq!(title_case("lord of the rings"), "Lord of the Rings");
//!
//! let options = ConversionOptions::new()
//!     .ignore(IgnoreRule::exact("iPhone"))
//!     .disable_default([ConverterId::RomanNumerals]);
//! assert_eq!(convert("iPhone viii", &options), "iPhone Viii");
//! ```
//!
//! # Rule order
//!
//! For each token, ignore rules are tried first, then converters: the
//! caller's, then those in [`GlobalConfig::global`], then the built-ins
//! named by [`ConverterId`].  A token nothing claims is capitalized.

mod config;
mod defaults;
mod engine;
mod error;
mod global;
mod rules;
mod title;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use config::{Config, IgnoreConfig, Words};
pub use defaults::{ConverterId, DisableDefault};
pub use engine::{ConversionOptions, Engine};
pub use error::Error;
pub use global::{GlobalConfig, GlobalOptions};
pub use rules::{Converter, IgnoreRule, Matcher, Operator};
pub use title::{SMALL_WORDS, capitalize, title_case, title_case_with};

/// Fixes the capitalization of `input`.
///
/// The rules in `options` are merged with the current global options; see
/// [`Engine`] to reuse a merged rule set across many calls.
pub fn convert(input: &str, options: &ConversionOptions) -> String {
    Engine::new(options).convert(input)
}

/// Replaces the process-wide options read by [`convert`] and [`title_case`].
///
/// The previous value is discarded, not merged.
pub fn set_global_options(options: GlobalOptions) {
    GlobalConfig::global().set(options);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_empty_input() {
        let result = convert("", &ConversionOptions::default());
        assert_eq!(result, "");
    }

    #[test]
    fn test_convert_plain_name() {
        let result = convert("robbins", &ConversionOptions::default());
        assert_eq!(result, "Robbins");
    }
}
