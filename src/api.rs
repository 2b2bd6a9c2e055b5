//! Add-on core: ties the provider registry, the settings store, and the
//! host services together.
//!
//! The hosting game runtime creates one [`Argot`] at startup, registers
//! the providers contributed by the system and installed add-ons, and
//! hands out settings forms from it. There are no globals; everything the
//! form needs travels through this struct's shared handles.

use argot_config::SettingsStore;
use argot_providers::{HostInfo, Localization, ProviderRegistry};
use argot_settings_ui::LanguageSettingsForm;
use parking_lot::RwLock;
use std::sync::Arc;

/// The language system core.
///
/// Owns the provider registry and the settings store, tracks the active
/// provider, and constructs settings forms wired to both.
pub struct Argot {
    registry: Arc<RwLock<ProviderRegistry>>,
    store: Arc<dyn SettingsStore>,
    host: Arc<dyn HostInfo>,
    i18n: Arc<dyn Localization>,
}

impl Argot {
    /// Create the core from a populated registry and the host services.
    ///
    /// The active provider is resolved from the persisted `language_provider`
    /// setting. A persisted id that is not registered (its add-on was
    /// uninstalled, say) falls back to the first registered provider with a
    /// logged warning; the persisted value is left alone until the user
    /// commits a change.
    pub fn new(
        mut registry: ProviderRegistry,
        store: Arc<dyn SettingsStore>,
        host: Arc<dyn HostInfo>,
        i18n: Arc<dyn Localization>,
    ) -> Self {
        let persisted = store.language_provider();
        let target = if registry.contains(&persisted) {
            Some(persisted)
        } else {
            let first = registry.ids().next().map(str::to_string);
            match &first {
                Some(first) => log::warn!(
                    "Persisted language provider {persisted} is not registered, falling back to {first}"
                ),
                None => log::warn!("No language providers registered"),
            }
            first
        };
        if let Some(id) = target
            && let Err(e) = registry.activate(&id)
        {
            log::warn!("Failed to activate language provider {id}: {e}");
        }

        Self {
            registry: Arc::new(RwLock::new(registry)),
            store,
            host,
            i18n,
        }
    }

    /// Shared handle to the provider registry.
    pub fn registry(&self) -> Arc<RwLock<ProviderRegistry>> {
        Arc::clone(&self.registry)
    }

    /// Shared handle to the settings store.
    pub fn store(&self) -> Arc<dyn SettingsStore> {
        Arc::clone(&self.store)
    }

    /// Id of the active provider, if any is registered.
    pub fn active_provider_id(&self) -> Option<String> {
        self.registry.read().active_id().map(str::to_string)
    }

    /// Swap the active provider to match the persisted setting.
    ///
    /// This is the activation hook the settings form relies on being
    /// available after it persists a provider switch; hosts also call it
    /// when the setting changes from elsewhere (another client, a world
    /// script). An unknown persisted id leaves the current activation in
    /// place with a logged warning.
    pub fn update_language_provider(&self) {
        let persisted = self.store.language_provider();
        let mut registry = self.registry.write();
        if registry.active_id() == Some(persisted.as_str()) {
            return;
        }
        if let Err(e) = registry.activate(&persisted) {
            log::warn!("Cannot activate persisted language provider: {e}");
        }
    }

    /// Construct a language settings form wired to this core.
    ///
    /// The form starts hidden; the host calls `open()` when the user asks
    /// for it and drives `show()` every frame.
    pub fn language_settings_form(&self) -> LanguageSettingsForm {
        LanguageSettingsForm::new(
            Arc::clone(&self.registry),
            Arc::clone(&self.store),
            Arc::clone(&self.host),
            Arc::clone(&self.i18n),
        )
    }
}
