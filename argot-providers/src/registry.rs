//! Registry of available language providers.
//!
//! Populated once at startup by the host system and installed add-ons,
//! then treated as immutable while a settings form is open. The registry
//! also tracks which provider is currently active; swapping the active
//! provider (`activate`) is the activation hook the settings form invokes
//! after persisting a provider switch.

use crate::provider::LanguageProvider;
use std::collections::HashMap;
use thiserror::Error;

/// Errors from registry lookups.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// No provider with the given id is registered.
    #[error("unknown language provider id: {0}")]
    UnknownProvider(String),
}

/// Holds all registered language providers in registration order, plus the
/// currently active one.
#[derive(Default)]
pub struct ProviderRegistry {
    /// All providers indexed by id
    providers: HashMap<String, Box<dyn LanguageProvider>>,

    /// Ordered list of provider ids for display
    order: Vec<String>,

    /// Id of the active provider
    active: Option<String>,
}

impl ProviderRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a provider.
    ///
    /// Re-registering an id replaces the provider in place; the id keeps
    /// its original position in the display order.
    pub fn register(&mut self, provider: Box<dyn LanguageProvider>) {
        let id = provider.id().to_string();
        if !self.order.contains(&id) {
            self.order.push(id.clone());
        }
        log::debug!("Registered language provider {id}");
        self.providers.insert(id, provider);
    }

    /// Get a provider by id.
    pub fn get(&self, id: &str) -> Option<&dyn LanguageProvider> {
        self.providers.get(id).map(|p| p.as_ref())
    }

    /// Get a mutable reference to a provider by id.
    pub fn get_mut(&mut self, id: &str) -> Option<&mut (dyn LanguageProvider + 'static)> {
        self.providers.get_mut(id).map(|p| p.as_mut())
    }

    /// Whether a provider with the given id is registered.
    pub fn contains(&self, id: &str) -> bool {
        self.providers.contains_key(id)
    }

    /// All providers in registration order.
    pub fn list(&self) -> Vec<&dyn LanguageProvider> {
        self.order
            .iter()
            .filter_map(|id| self.providers.get(id))
            .map(|p| p.as_ref())
            .collect()
    }

    /// Registered ids in registration order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// Number of registered providers.
    pub fn len(&self) -> usize {
        self.providers.len()
    }

    /// Whether no providers are registered.
    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    /// Make the provider with the given id the active one.
    pub fn activate(&mut self, id: &str) -> Result<(), ProviderError> {
        if !self.providers.contains_key(id) {
            return Err(ProviderError::UnknownProvider(id.to_string()));
        }
        log::info!("Activating language provider {id}");
        self.active = Some(id.to_string());
        Ok(())
    }

    /// Id of the active provider, if one has been activated.
    pub fn active_id(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// The active provider.
    pub fn active(&self) -> Option<&dyn LanguageProvider> {
        self.active.as_deref().and_then(|id| self.get(id))
    }

    /// Mutable reference to the active provider.
    pub fn active_mut(&mut self) -> Option<&mut (dyn LanguageProvider + 'static)> {
        let id = self.active.clone()?;
        self.get_mut(&id)
    }
}
