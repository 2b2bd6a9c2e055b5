//! Typed error variants for the argot-config crate.
//!
//! Provides structured error types for settings I/O and validation.
//! These are used internally and exposed for library consumers who want to
//! match on specific failure modes instead of opaque `anyhow` strings.

use std::fmt;

/// Errors that can occur when loading or saving the language settings file.
///
/// These errors are produced internally by [`LanguageSettings::load_from_path`]
/// and [`LanguageSettings::save_to_path`], as well as by the file-backed
/// settings store.
///
/// For backward compatibility with callers that use `anyhow`, the public
/// entry points return `anyhow::Result`; `ConfigError` values are
/// automatically coerced via the `From` impl that `anyhow` provides for any
/// `std::error::Error`.
///
/// [`LanguageSettings::load_from_path`]: crate::LanguageSettings::load_from_path
/// [`LanguageSettings::save_to_path`]: crate::LanguageSettings::save_to_path
#[derive(Debug)]
pub enum ConfigError {
    /// An I/O error occurred reading or writing the settings file.
    Io(std::io::Error),

    /// The settings file contained invalid YAML that could not be parsed.
    Parse(serde_yaml_ng::Error),

    /// A field value failed semantic validation.
    ///
    /// The inner string describes which field is invalid and why.
    Validation(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "I/O error reading settings: {e}"),
            ConfigError::Parse(e) => write!(f, "YAML parse error in settings: {e}"),
            ConfigError::Validation(msg) => write!(f, "Settings validation error: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Parse(e) => Some(e),
            ConfigError::Validation(_) => None,
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<serde_yaml_ng::Error> for ConfigError {
    fn from(e: serde_yaml_ng::Error) -> Self {
        ConfigError::Parse(e)
    }
}
