//! Persisted settings model for the argot language system.
//!
//! This crate provides the settings document, its on-disk persistence, and
//! the store abstraction the settings form talks to. It includes:
//!
//! - The persisted values: active provider id, per-language font
//!   assignments, and the alphabet (font descriptor) table
//! - An insertion-ordered map type, since the language list's display order
//!   is the stored entry order
//! - A `SettingsStore` trait with file-backed and in-memory implementations
//! - Typed error variants for settings I/O

pub mod defaults;
pub mod error;
pub mod settings;
pub mod store;
pub mod tongue_map;

// Re-export main types for convenience
pub use error::ConfigError;
pub use settings::LanguageSettings;
pub use store::{FileSettingsStore, MemorySettingsStore, SettingsStore};
pub use tongue_map::TongueMap;
