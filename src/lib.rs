//! argot: language-provider settings for virtual tabletop add-ons.
//!
//! A language provider is a pluggable strategy supplying a set of in-game
//! languages (tongues) and the fonts (alphabets) used to render them. This
//! crate ties the pieces together for a hosting game runtime:
//!
//! - [`config`]: the persisted settings document and store
//! - [`providers`]: the provider trait, startup registry, and display-title
//!   resolution
//! - [`settings_ui`]: the egui settings form
//! - [`Argot`]: the add-on core that owns the registry and store and hands
//!   out forms
//!
//! The host implements [`HostInfo`] and [`Localization`], registers its
//! providers, and drives the form from its UI loop:
//!
//! ```no_run
//! use argot::Argot;
//! use argot::config::MemorySettingsStore;
//! use argot::providers::{ProviderDefinition, ProviderRegistry, StaticLanguageProvider};
//! # struct Host;
//! # impl argot::HostInfo for Host {
//! #     fn system_id(&self) -> String { "chronicle".into() }
//! #     fn system_title(&self) -> String { "Chronicle".into() }
//! #     fn module_title(&self, _: &str) -> Option<String> { None }
//! # }
//! # struct I18n;
//! # impl argot::Localization for I18n {
//! #     fn localize(&self, key: &str) -> String { key.into() }
//! #     fn format(&self, key: &str, _: &[(&str, &str)]) -> String { key.into() }
//! # }
//!
//! let mut registry = ProviderRegistry::new();
//! registry.register(Box::new(StaticLanguageProvider::new(ProviderDefinition {
//!     id: "native.chronicle".to_string(),
//!     ..Default::default()
//! })));
//!
//! let argot = Argot::new(
//!     registry,
//!     std::sync::Arc::new(MemorySettingsStore::new()),
//!     std::sync::Arc::new(Host),
//!     std::sync::Arc::new(I18n),
//! );
//! let mut form = argot.language_settings_form();
//! form.open();
//! // each frame: if form.show(ctx) == FormAction::Close { /* hide window */ }
//! ```

pub mod api;

pub use api::Argot;

// Re-export the member crates under stable names
pub use argot_config as config;
pub use argot_providers as providers;
pub use argot_settings_ui as settings_ui;

// Re-export the types hosts touch most
pub use argot_config::{LanguageSettings, SettingsStore, TongueMap};
pub use argot_providers::{HostInfo, LanguageProvider, Localization, ProviderRegistry};
pub use argot_settings_ui::{FormAction, FormState, LanguageSettingsForm};
