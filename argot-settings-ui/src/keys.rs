//! Localization catalog keys used by the settings form.
//!
//! The hosting game runtime owns the catalog; the form only references
//! keys. A host without a translation for a key gets the key itself back
//! from its `Localization` implementation, so every label stays visible.

/// Window title of the language settings form.
pub const FORM_TITLE: &str = "ARGOT.LanguageSettings.title";

/// Label above the provider dropdown.
pub const PROVIDER_NAME: &str = "ARGOT.LanguageProvider.name";

/// Hint text under the provider dropdown.
pub const PROVIDER_HINT: &str = "ARGOT.LanguageProvider.hint";

/// Section label for the per-language rows.
pub const LANGUAGES_NAME: &str = "ARGOT.Languages.name";

/// Hint text for the per-language rows.
pub const LANGUAGES_HINT: &str = "ARGOT.Languages.hint";

/// Column label for the alphabet previews.
pub const ALPHABETS_NAME: &str = "ARGOT.Alphabets.name";

/// Warning shown while a provider switch is pending: unsaved per-language
/// edits will be discarded on save.
pub const PROVIDER_CHANGE_WARNING: &str = "ARGOT.LanguageSettings.providerChangeWarning";

/// Save button label.
pub const SAVE_BUTTON: &str = "ARGOT.LanguageSettings.save";

/// Reset-to-defaults button label.
pub const RESET_BUTTON: &str = "ARGOT.LanguageSettings.reset";
