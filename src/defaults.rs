// SPDX-FileCopyrightText: 2025 Hong Minhee <https://hongminhee.org/>
// SPDX-License-Identifier: GPL-3.0-or-later
//! Built-in converters for irregular English surnames and titles.
//!
//! These run after any caller-supplied converters, in the order of
//! [`ConverterId::ALL`].  Hyphenated tokens come first so that each half of
//! `d'arne-smith` reaches the apostrophe rule on its own.

use std::collections::BTreeSet;
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::rules::Converter;
use crate::title::capitalize;

static HYPHENATED: LazyLock<Regex> = LazyLock::new(|| Regex::new("-").expect("valid pattern"));

static MC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("(?i)^mc[a-z]+$").expect("valid pattern"));

static MAC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("(?i)^mac[a-z]+$").expect("valid pattern"));

static APOSTROPHE_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("(?i)^[ldo]'").expect("valid pattern"));

// Matches the empty string too; the engine never hands over an empty token.
static ROMAN_NUMERALS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new("(?i)^M*(?:CM|CD|D?C{0,3})(?:XC|XL|L?X{0,3})(?:IX|IV|V?I{0,3})$")
        .expect("valid pattern")
});

/// Identifies one of the built-in converters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConverterId {
    /// `saint-claire` → `Saint-Claire`; each part is converted on its own.
    Hyphenated,
    /// `mcclintock` → `McClintock`.
    Mc,
    /// `macintosh` → `MacIntosh`.
    Mac,
    /// `o'neill` → `O'Neill`, `d'artagnan` → `D'Artagnan`.
    ApostrophePrefix,
    /// `viii` → `VIII`.
    RomanNumerals,
}

impl ConverterId {
    /// Every built-in converter, in evaluation order.
    pub const ALL: [ConverterId; 5] = [
        ConverterId::Hyphenated,
        ConverterId::Mc,
        ConverterId::Mac,
        ConverterId::ApostrophePrefix,
        ConverterId::RomanNumerals,
    ];

    /// The snake_case name used in configuration files.
    pub fn name(self) -> &'static str {
        match self {
            ConverterId::Hyphenated => "hyphenated",
            ConverterId::Mc => "mc",
            ConverterId::Mac => "mac",
            ConverterId::ApostrophePrefix => "apostrophe_prefix",
            ConverterId::RomanNumerals => "roman_numerals",
        }
    }

    /// Build the converter this identifier names.
    pub fn converter(self) -> Converter {
        match self {
            ConverterId::Hyphenated => {
                Converter::contextual_regex(HYPHENATED.clone(), |token, _, _, engine| {
                    token
                        .split('-')
                        .map(|part| engine.convert(part.trim()))
                        .collect::<Vec<_>>()
                        .join("-")
                })
            }
            ConverterId::Mc => Converter::from_regex(MC.clone(), |token, _| prefixed(token, 2)),
            ConverterId::Mac => Converter::from_regex(MAC.clone(), |token, _| prefixed(token, 3)),
            ConverterId::ApostrophePrefix => {
                Converter::from_regex(APOSTROPHE_PREFIX.clone(), apostrophe_prefixed)
            }
            ConverterId::RomanNumerals => {
                Converter::from_regex(ROMAN_NUMERALS.clone(), |token, _| token.to_uppercase())
            }
        }
    }
}

impl fmt::Display for ConverterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Which built-in converters to switch off.
///
/// Only affects the built-ins; caller-supplied converters always run.
/// In configuration files this is either a boolean or a list of
/// [`ConverterId`] names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "DisableDefaultSetting")]
pub enum DisableDefault {
    /// Keep every built-in converter.
    #[default]
    None,
    /// Drop every built-in converter.
    All,
    /// Drop exactly the named converters.
    Only(BTreeSet<ConverterId>),
}

impl DisableDefault {
    /// Whether the converter `id` stays active.
    pub fn is_enabled(&self, id: ConverterId) -> bool {
        match self {
            DisableDefault::None => true,
            DisableDefault::All => false,
            DisableDefault::Only(disabled) => !disabled.contains(&id),
        }
    }

    /// The built-in converters that stay active, in evaluation order.
    pub fn converters(&self) -> Vec<Converter> {
        ConverterId::ALL
            .into_iter()
            .filter(|id| self.is_enabled(*id))
            .map(ConverterId::converter)
            .collect()
    }
}

impl From<bool> for DisableDefault {
    fn from(disable: bool) -> Self {
        if disable {
            DisableDefault::All
        } else {
            DisableDefault::None
        }
    }
}

impl From<Vec<ConverterId>> for DisableDefault {
    fn from(ids: Vec<ConverterId>) -> Self {
        DisableDefault::Only(ids.into_iter().collect())
    }
}

impl<const N: usize> From<[ConverterId; N]> for DisableDefault {
    fn from(ids: [ConverterId; N]) -> Self {
        DisableDefault::Only(ids.into_iter().collect())
    }
}

/// On-disk form of [`DisableDefault`]: `true`/`false` or a list of names.
#[derive(Deserialize)]
#[serde(untagged)]
enum DisableDefaultSetting {
    Flag(bool),
    List(Vec<ConverterId>),
}

impl From<DisableDefaultSetting> for DisableDefault {
    fn from(setting: DisableDefaultSetting) -> Self {
        match setting {
            DisableDefaultSetting::Flag(flag) => flag.into(),
            DisableDefaultSetting::List(ids) => ids.into(),
        }
    }
}

/// `mcdonald` with a prefix of 2 → `McDonald`.
fn prefixed(token: &str, prefix_len: usize) -> String {
    match (token.get(..prefix_len), token.get(prefix_len..)) {
        (Some(prefix), Some(rest)) => capitalize(prefix) + &capitalize(rest),
        _ => capitalize(token),
    }
}

/// `d'artagnan` → `D'Artagnan` as a first word, `d'Artagnan` elsewhere.
fn apostrophe_prefixed(token: &str, index: usize) -> String {
    let mut chars = token.chars();
    let (Some(initial), Some(_)) = (chars.next(), chars.next()) else {
        return capitalize(token);
    };
    let mut result = if index == 0 {
        initial.to_uppercase().to_string()
    } else {
        initial.to_lowercase().to_string()
    };
    result.push('\'');
    result.push_str(&capitalize(chars.as_str()));
    result
}
