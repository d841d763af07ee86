// SPDX-FileCopyrightText: 2025 Hong Minhee <https://hongminhee.org/>
// SPDX-License-Identifier: GPL-3.0-or-later
//! WebAssembly bindings for namecase.
//!
//! This module provides JavaScript-friendly bindings for the converter.

use serde::Deserialize;
use wasm_bindgen::prelude::*;

use crate::config::{IgnoreConfig, Words};
use crate::{ConversionOptions, DisableDefault, Error};

/// JavaScript-friendly options struct.
///
/// All fields are optional and use camelCase naming for JavaScript conventions.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JsOptions {
    /// Ignore rules, tried in order.
    pub ignores: Vec<JsIgnore>,

    /// `true` to disable every built-in converter, or a list of names such as
    /// `"roman_numerals"` (default: none).
    pub disable_default: Option<DisableDefault>,
}

/// JavaScript-friendly ignore rule: `{ exact: "eBay" }` or `{ regex: "^X" }`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JsIgnore {
    /// A word or an array of words.
    pub exact: Option<Words>,

    /// A regular expression source.
    pub regex: Option<String>,

    /// Compare `exact` words ignoring case (default: false).
    pub case_insensitive: bool,
}

impl JsOptions {
    /// Convert JavaScript options to Rust options.
    fn to_options(&self) -> Result<ConversionOptions, Error> {
        let ignores = self
            .ignores
            .iter()
            .map(|ignore| {
                IgnoreConfig {
                    exact: ignore.exact.clone(),
                    regex: ignore.regex.clone(),
                    case_insensitive: ignore.case_insensitive,
                }
                .to_rule()
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(ConversionOptions {
            ignores,
            converters: Vec::new(),
            disable_default: self.disable_default.clone().unwrap_or_default(),
        })
    }
}

/// Fix the capitalization of a name.
///
/// # Arguments
///
/// * `input` - Text to convert
/// * `options` - Optional conversion options as a JavaScript object
#[wasm_bindgen]
pub fn convert(input: &str, options: JsValue) -> Result<String, JsError> {
    let js_opts: JsOptions = if options.is_undefined() || options.is_null() {
        JsOptions::default()
    } else {
        serde_wasm_bindgen::from_value(options).map_err(|e| JsError::new(&e.to_string()))?
    };

    let opts = js_opts
        .to_options()
        .map_err(|e| JsError::new(&e.to_string()))?;
    Ok(crate::convert(input, &opts))
}

/// Convert text to title case.
#[wasm_bindgen(js_name = titleCase)]
pub fn title_case(input: &str) -> String {
    crate::title_case(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ConverterId;

    #[test]
    fn test_js_options_default() {
        let opts = JsOptions::default().to_options().unwrap();
        assert!(opts.ignores.is_empty());
        assert_eq!(opts.disable_default, DisableDefault::None);
    }

    #[test]
    fn test_js_options_partial() {
        let js_opts = JsOptions {
            ignores: vec![JsIgnore {
                exact: Some(Words::Many(vec!["eBay".to_string()])),
                case_insensitive: true,
                ..Default::default()
            }],
            disable_default: Some(DisableDefault::from([ConverterId::Mc])),
        };
        let opts = js_opts.to_options().unwrap();
        assert!(opts.ignores[0].matches("EBAY"));
        assert!(!opts.disable_default.is_enabled(ConverterId::Mc));
    }

    #[test]
    fn test_js_ignore_without_matcher() {
        let js_opts = JsOptions {
            ignores: vec![JsIgnore::default()],
            disable_default: None,
        };
        assert!(js_opts.to_options().is_err());
    }
}
