//! Language provider trait and the definition-backed implementation.
//!
//! A language provider is a pluggable strategy supplying the set of in-game
//! languages (tongues) and the fonts (alphabets) used to render them.
//! Providers are registered at startup by the host system or by installed
//! add-ons; the settings form only ever sees them through the
//! [`LanguageProvider`] trait.

use argot_config::TongueMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A pluggable strategy supplying in-game languages and display fonts.
///
/// `tongues` maps language keys to user-facing display names; its entry
/// order is the display order. `original_tongues` is the immutable default
/// font assignment per language (same keys, same order) used as the
/// baseline whenever the provider's defaults are restored. `alphabets`
/// maps font keys to font-descriptor strings.
pub trait LanguageProvider: Send + Sync {
    /// Namespaced provider id, `<origin>.<name>` (e.g. `"native.chronicle"`).
    fn id(&self) -> &str;

    /// Language key to display name, in display order.
    fn tongues(&self) -> &TongueMap;

    /// Font key to font-descriptor string.
    fn alphabets(&self) -> &BTreeMap<String, String>;

    /// Immutable snapshot of the default font assignment per language.
    fn original_tongues(&self) -> &TongueMap;

    /// Regenerate the provider's alphabet and tongue defaults.
    ///
    /// Called before the provider's defaults are persisted as the new
    /// settings baseline, so implementations that derive their data from
    /// host state pick up the current values.
    fn load_alphabet(&mut self);
}

/// Serialized form of a provider's language and font data.
///
/// Add-ons register providers as JSON payloads in this shape.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProviderDefinition {
    /// Namespaced provider id, `<origin>.<name>`.
    pub id: String,

    /// Language key to display name, in display order.
    #[serde(default)]
    pub tongues: TongueMap,

    /// Default font key per language (same keys as `tongues`).
    #[serde(default)]
    pub original_tongues: TongueMap,

    /// Font key to font-descriptor string.
    #[serde(default)]
    pub alphabets: BTreeMap<String, String>,
}

/// A provider whose languages and fonts come from a static definition.
///
/// `load_alphabet` restores the definition's snapshot, which makes the
/// definition the provider's permanent default state.
#[derive(Debug, Clone)]
pub struct StaticLanguageProvider {
    definition: ProviderDefinition,
    tongues: TongueMap,
    alphabets: BTreeMap<String, String>,
}

impl StaticLanguageProvider {
    /// Create a provider from a definition.
    pub fn new(definition: ProviderDefinition) -> Self {
        let tongues = definition.tongues.clone();
        let alphabets = definition.alphabets.clone();
        Self {
            definition,
            tongues,
            alphabets,
        }
    }

    /// Parse a provider from its JSON definition payload.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let definition: ProviderDefinition = serde_json::from_str(json)?;
        Ok(Self::new(definition))
    }

    /// The definition this provider was built from.
    pub fn definition(&self) -> &ProviderDefinition {
        &self.definition
    }
}

impl LanguageProvider for StaticLanguageProvider {
    fn id(&self) -> &str {
        &self.definition.id
    }

    fn tongues(&self) -> &TongueMap {
        &self.tongues
    }

    fn alphabets(&self) -> &BTreeMap<String, String> {
        &self.alphabets
    }

    fn original_tongues(&self) -> &TongueMap {
        &self.definition.original_tongues
    }

    fn load_alphabet(&mut self) {
        self.tongues = self.definition.tongues.clone();
        self.alphabets = self.definition.alphabets.clone();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_definition() -> ProviderDefinition {
        let json = r#"{
            "id": "native.chronicle",
            "tongues": {
                "common": "Common",
                "elvish": "Elvish"
            },
            "original_tongues": {
                "common": "Signika",
                "elvish": "Tengwar"
            },
            "alphabets": {
                "Signika": "100% Signika",
                "Tengwar": "130% Tengwar"
            }
        }"#;
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn from_json_builds_working_provider() {
        let provider = StaticLanguageProvider::new(sample_definition());
        assert_eq!(provider.id(), "native.chronicle");
        assert_eq!(provider.tongues().get("elvish"), Some("Elvish"));
        assert_eq!(provider.original_tongues().get("elvish"), Some("Tengwar"));
        assert_eq!(
            provider.alphabets().get("Tengwar").map(String::as_str),
            Some("130% Tengwar")
        );
    }

    #[test]
    fn tongue_order_comes_from_the_definition() {
        let provider = StaticLanguageProvider::new(sample_definition());
        let keys: Vec<_> = provider.tongues().keys().collect();
        assert_eq!(keys, vec!["common", "elvish"]);
    }

    #[test]
    fn load_alphabet_restores_definition_snapshot() {
        let mut provider = StaticLanguageProvider::new(sample_definition());
        provider.alphabets.insert("Tengwar".into(), "90% Other".into());
        provider.tongues.insert("common", "Renamed");

        provider.load_alphabet();
        assert_eq!(
            provider.alphabets().get("Tengwar").map(String::as_str),
            Some("130% Tengwar")
        );
        assert_eq!(provider.tongues().get("common"), Some("Common"));
    }
}
