//! Language settings form for the argot settings system.
//!
//! This crate provides an egui-based settings form for picking the active
//! language provider and editing per-language font assignments. It is
//! decoupled from the hosting game runtime through the trait interfaces in
//! `argot-providers` (host metadata, localization) and `argot-config`
//! (settings store); the host supplies implementations and an egui
//! context, the form does the rest.

// Alphabet font registration (egui font definitions)
pub mod alphabet_fonts;
pub use alphabet_fonts::{AlphabetFont, install_alphabet_fonts};

// Localization catalog keys
pub mod keys;

// The form controller and its state machine
pub mod language_form;
pub use language_form::{
    FORM_HEIGHT, FORM_WIDTH, FormSelectionState, FormState, LanguageRow, LanguageSettingsForm,
    ProviderOption,
};

// Re-export types that form consumers need
pub use argot_config::{self as config, LanguageSettings, SettingsStore, TongueMap};
pub use argot_providers::{
    self as providers, FontDescriptor, HostInfo, LanguageProvider, Localization, ProviderRegistry,
};

/// Result of processing a form frame.
///
/// This enum bridges the settings form with the host application. The host
/// processes the action after each frame; commits have already gone through
/// the settings store by the time `Close` is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormAction {
    /// No action needed
    None,
    /// Close the form window (committed or dismissed)
    Close,
}
