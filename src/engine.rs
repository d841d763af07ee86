// SPDX-FileCopyrightText: 2025 Hong Minhee <https://hongminhee.org/>
// SPDX-License-Identifier: GPL-3.0-or-later
//! The word-by-word conversion engine.
//!
//! Every whitespace-separated token goes through the same pipeline:
//!
//!  1. ignore rules, which emit the token unchanged;
//!  2. converters (caller's, then global, then built-in), the first match
//!     producing the output;
//!  3. otherwise the token is capitalized.
//!
//! Outputs are joined with single spaces.

use tracing::{debug, trace};

use crate::defaults::DisableDefault;
use crate::global::{GlobalConfig, GlobalOptions};
use crate::rules::{Converter, IgnoreRule};
use crate::title::capitalize;

/// Per-call conversion options.
#[derive(Debug, Clone, Default)]
pub struct ConversionOptions {
    /// Tokens matching any of these are left untouched.  Tried in order,
    /// before the global ignore rules.
    pub ignores: Vec<IgnoreRule>,

    /// Tried in order, before global converters and the built-ins.
    pub converters: Vec<Converter>,

    /// Built-in converters to switch off (default: none).
    pub disable_default: DisableDefault,
}

impl ConversionOptions {
    /// Options with no rules of their own and every built-in enabled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an ignore rule.
    pub fn ignore(mut self, rule: IgnoreRule) -> Self {
        self.ignores.push(rule);
        self
    }

    /// Append a converter.
    pub fn converter(mut self, converter: Converter) -> Self {
        self.converters.push(converter);
        self
    }

    /// Set which built-in converters to switch off.
    pub fn disable_default(mut self, disable: impl Into<DisableDefault>) -> Self {
        self.disable_default = disable.into();
        self
    }
}

/// The effective rule set: caller options merged with the global ones.
///
/// Built once and reusable.  Converter operators receive the engine that
/// invoked them, so they can convert sub-parts of a token with the same
/// rules.
#[derive(Debug, Clone)]
pub struct Engine {
    ignores: Vec<IgnoreRule>,
    converters: Vec<Converter>,
}

impl Engine {
    /// Merge `options` with the current process-wide options.
    pub fn new(options: &ConversionOptions) -> Self {
        Self::with_globals(options, &GlobalConfig::global().get())
    }

    /// Merge `options` with an explicit set of global options.
    ///
    /// Local rules come first and so win by matching first; global rules
    /// are never removed.
    pub fn with_globals(options: &ConversionOptions, globals: &GlobalOptions) -> Self {
        let ignores: Vec<IgnoreRule> = options
            .ignores
            .iter()
            .chain(&globals.ignores)
            .cloned()
            .collect();
        let mut converters: Vec<Converter> = options
            .converters
            .iter()
            .chain(&globals.converters)
            .cloned()
            .collect();
        converters.extend(options.disable_default.converters());

        debug!(
            ignores = ignores.len(),
            converters = converters.len(),
            "built conversion engine"
        );
        Self {
            ignores,
            converters,
        }
    }

    /// The ignore rules in evaluation order.
    pub fn ignores(&self) -> &[IgnoreRule] {
        &self.ignores
    }

    /// The converters in evaluation order.
    pub fn converters(&self) -> &[Converter] {
        &self.converters
    }

    /// Convert `input` token by token.
    pub fn convert(&self, input: &str) -> String {
        let mut accumulated: Vec<String> = Vec::new();
        for (index, token) in input.split_whitespace().enumerate() {
            let output = self.convert_token(token, index, &accumulated);
            accumulated.push(output);
        }
        accumulated.join(" ")
    }

    fn convert_token(&self, token: &str, index: usize, accumulated: &[String]) -> String {
        if self.ignores.iter().any(|rule| rule.matches(token)) {
            trace!(token, index, "ignored");
            return token.to_string();
        }

        if let Some(converter) = self.converters.iter().find(|c| c.matches(token)) {
            trace!(token, index, pattern = converter.pattern().as_str(), "converted");
            return converter.apply(token, index, accumulated, self);
        }

        trace!(token, index, "capitalized");
        capitalize(token)
    }
}
