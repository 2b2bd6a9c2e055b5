//! Default values for persisted language settings.

/// Settings file name inside the config directory.
pub const SETTINGS_FILE: &str = "languages.yaml";

/// Directory name under the platform config root.
pub const CONFIG_DIR_NAME: &str = "argot";

pub fn language_provider() -> String {
    // The built-in generic provider that every host system carries.
    "native".to_string()
}
