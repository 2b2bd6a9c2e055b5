//! Trait definitions for host application dependencies.
//!
//! These traits define the interface between the language system and the
//! hosting game runtime. The host implements them to provide concrete
//! functionality: which game system is running, which add-ons are
//! installed, and how user-facing strings are localized.

/// Host system and add-on metadata.
///
/// Implemented by the hosting game runtime to resolve provider display
/// titles.
pub trait HostInfo: Send + Sync {
    /// Machine id of the hosting game system (e.g. `"chronicle"`).
    fn system_id(&self) -> String;

    /// User-facing title of the hosting game system.
    fn system_title(&self) -> String;

    /// User-facing title of an installed add-on, or `None` if the add-on
    /// is not installed.
    fn module_title(&self, module_id: &str) -> Option<String>;
}

/// Localized string lookup.
///
/// Implemented by the hosting game runtime. Treated as a pure lookup: a
/// missing key is not an error, implementations return the key itself so
/// the UI always has something to show.
pub trait Localization: Send + Sync {
    /// Look up a localized string by key, falling back to the key itself.
    fn localize(&self, key: &str) -> String;

    /// Look up a localized template by key and substitute `{name}`-style
    /// placeholders from `params`, falling back to the key itself.
    fn format(&self, key: &str, params: &[(&str, &str)]) -> String;
}
