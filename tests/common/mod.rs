//! Shared integration test helpers for argot.
//!
//! This module provides canonical factory functions used across the
//! `tests/` integration test suite: sample providers, a seeded in-memory
//! settings store, and fixed host/localization services.
//!
//! Note: Rust integration tests use `mod common;` (not `use`) to bring in
//! helpers from `tests/common/mod.rs`. The `#[allow(dead_code)]` attribute
//! suppresses warnings when only a subset of helpers are used per file.

#![allow(dead_code)]

use argot::config::{LanguageSettings, MemorySettingsStore, TongueMap};
use argot::providers::{ProviderDefinition, ProviderRegistry, StaticLanguageProvider};
use argot::{Argot, HostInfo, Localization};
use std::sync::Arc;

/// Fixed host metadata: system "chronicle" with one installed add-on.
pub struct TestHost;

impl HostInfo for TestHost {
    fn system_id(&self) -> String {
        "chronicle".to_string()
    }

    fn system_title(&self) -> String {
        "Chronicle".to_string()
    }

    fn module_title(&self, module_id: &str) -> Option<String> {
        (module_id == "tongues-extra").then(|| "Tongues Extra".to_string())
    }
}

/// Fixed localization catalog covering the keys the form and title
/// resolution reference; everything else echoes the key.
pub struct TestLocalization;

impl Localization for TestLocalization {
    fn localize(&self, key: &str) -> String {
        match key {
            "ARGOT.LanguageProvider.choices.native" => "Native support for".to_string(),
            "ARGOT.LanguageSettings.title" => "Language Settings".to_string(),
            "ARGOT.LanguageSettings.providerChangeWarning" => {
                "Unsaved language edits will be discarded.".to_string()
            }
            other => other.to_string(),
        }
    }

    fn format(&self, key: &str, params: &[(&str, &str)]) -> String {
        let template = match key {
            "ARGOT.LanguageProvider.choices.module" => "Provided by module {name}".to_string(),
            "ARGOT.LanguageProvider.choices.system" => "Provided by system {name}".to_string(),
            other => other.to_string(),
        };
        let mut out = template;
        for (name, value) in params {
            out = out.replace(&format!("{{{name}}}"), value);
        }
        out
    }
}

fn tongue_map(entries: &[(&str, &str)]) -> TongueMap {
    entries
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// The host system's own provider: three languages, three alphabets.
pub fn native_provider() -> StaticLanguageProvider {
    StaticLanguageProvider::new(ProviderDefinition {
        id: "native.chronicle".to_string(),
        tongues: tongue_map(&[
            ("common", "Common"),
            ("elvish", "Elvish"),
            ("dwarvish", "Dwarvish"),
        ]),
        original_tongues: tongue_map(&[
            ("common", "Signika"),
            ("elvish", "Tengwar"),
            ("dwarvish", "Dethek"),
        ]),
        alphabets: [
            ("Signika", "100% Signika"),
            ("Tengwar", "130% Tengwar"),
            ("Dethek", "120% Dethek"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect(),
    })
}

/// An add-on provider with a disjoint language set.
pub fn extra_provider() -> StaticLanguageProvider {
    StaticLanguageProvider::new(ProviderDefinition {
        id: "module.tongues-extra".to_string(),
        tongues: tongue_map(&[("binary", "Binary"), ("leet", "L33t")]),
        original_tongues: tongue_map(&[("binary", "Ones"), ("leet", "Zeros")]),
        alphabets: [("Ones", "100% Ones"), ("Zeros", "90% Zeros")]
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect(),
    })
}

/// A registry holding both sample providers, in that order.
pub fn sample_registry() -> ProviderRegistry {
    let mut registry = ProviderRegistry::new();
    registry.register(Box::new(native_provider()));
    registry.register(Box::new(extra_provider()));
    registry
}

/// Settings matching the native provider's defaults.
pub fn seeded_settings() -> LanguageSettings {
    let mut settings = LanguageSettings::default();
    settings.language_provider = "native.chronicle".to_string();
    settings.languages = tongue_map(&[
        ("common", "Signika"),
        ("elvish", "Tengwar"),
        ("dwarvish", "Dethek"),
    ]);
    settings.alphabets = [
        ("Signika", "100% Signika"),
        ("Tengwar", "130% Tengwar"),
        ("Dethek", "120% Dethek"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect();
    settings
}

/// A memory store seeded with the native provider's defaults.
pub fn seeded_store() -> Arc<MemorySettingsStore> {
    Arc::new(MemorySettingsStore::with_settings(seeded_settings()))
}

/// A fully wired core over the sample registry and a seeded memory store.
pub fn sample_argot(store: Arc<MemorySettingsStore>) -> Argot {
    Argot::new(
        sample_registry(),
        store,
        Arc::new(TestHost),
        Arc::new(TestLocalization),
    )
}
