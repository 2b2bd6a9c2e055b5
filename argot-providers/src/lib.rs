//! Language providers for the argot settings system.
//!
//! This crate provides the pluggable language-provider layer: the provider
//! trait and its definition-backed implementation, the startup registry
//! with active-provider tracking, display-title resolution for the
//! provider dropdown, and font-descriptor parsing for alphabet previews.
//! Host-side concerns (system/add-on metadata, localized strings) are
//! behind trait interfaces the hosting game runtime implements.

pub mod alphabet;
pub mod provider;
pub mod registry;
pub mod title;
pub mod traits;

// Re-export main types for convenience
pub use alphabet::FontDescriptor;
pub use provider::{LanguageProvider, ProviderDefinition, StaticLanguageProvider};
pub use registry::{ProviderError, ProviderRegistry};
pub use title::{CHOICES_KEY_PREFIX, ProviderIdParts, ProviderKind, classify, resolve_display_title};
pub use traits::{HostInfo, Localization};
