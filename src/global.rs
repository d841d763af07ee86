// SPDX-FileCopyrightText: 2025 Hong Minhee <https://hongminhee.org/>
// SPDX-License-Identifier: GPL-3.0-or-later
//! Process-wide rules shared by every engine.
//!
//! [`GlobalConfig::global`] is read each time an [`Engine`](crate::Engine) is
//! built through [`Engine::new`](crate::Engine::new).  Writes replace the
//! whole value; nothing is merged.  Configure it once at startup if several
//! threads build engines concurrently.

use std::sync::{Arc, LazyLock, PoisonError, RwLock};

use crate::rules::{Converter, IgnoreRule};

/// Ignore rules and converters applied after every caller's own rules.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Evaluated after the caller's ignore rules.
    pub ignores: Vec<IgnoreRule>,
    /// Evaluated after the caller's converters, before the built-ins.
    pub converters: Vec<Converter>,
}

/// A replaceable slot holding [`GlobalOptions`].
///
/// The process-wide instance lives behind [`GlobalConfig::global`]; separate
/// instances can be created for tests or embedding.
#[derive(Debug, Default)]
pub struct GlobalConfig {
    slot: RwLock<Arc<GlobalOptions>>,
}

static GLOBAL: LazyLock<GlobalConfig> = LazyLock::new(GlobalConfig::default);

impl GlobalConfig {
    /// Create an empty slot.
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide slot.
    pub fn global() -> &'static GlobalConfig {
        &GLOBAL
    }

    /// Snapshot the current options.
    pub fn get(&self) -> Arc<GlobalOptions> {
        // The slot only ever holds a complete value.
        self.slot
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Replace the current options.
    pub fn set(&self, options: GlobalOptions) {
        tracing::debug!(
            ignores = options.ignores.len(),
            converters = options.converters.len(),
            "replacing global options"
        );
        *self.slot.write().unwrap_or_else(PoisonError::into_inner) = Arc::new(options);
    }

    /// Restore the empty state.
    pub fn reset(&self) {
        self.set(GlobalOptions::default());
    }
}
