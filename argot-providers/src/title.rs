//! Provider id classification and display-title resolution.
//!
//! Provider ids are namespaced as `<origin>.<name>`. The origin prefix
//! decides how the option shown in the provider dropdown is titled: the
//! hosting system's own providers borrow the system title, add-on
//! providers borrow the add-on title, and anything else falls back to the
//! system title. Classification is a total function of the id string and
//! title resolution never fails; missing lookups degrade to the raw
//! suffix or key.

use crate::provider::LanguageProvider;
use crate::traits::{HostInfo, Localization};

/// Localization key prefix for the provider dropdown option labels.
pub const CHOICES_KEY_PREFIX: &str = "ARGOT.LanguageProvider.choices";

/// Origin classification of a provider id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderKind {
    /// Shipped with the hosting game system (`native.*`).
    Native,
    /// Supplied by an installed add-on (`module.*`).
    Module,
    /// Any other origin; treated as belonging to the hosting system.
    Other,
}

/// A provider id split at the first `.`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProviderIdParts<'a> {
    /// Origin classification of the prefix.
    pub kind: ProviderKind,
    /// The raw prefix text (the whole id when there is no dot).
    pub kind_text: &'a str,
    /// Everything after the first dot (empty when there is no dot).
    pub suffix: &'a str,
}

/// Split a provider id at the first `.` and classify its origin.
///
/// An id without a dot classifies with the whole id as the prefix and an
/// empty suffix (dot position = string length).
pub fn classify(id: &str) -> ProviderIdParts<'_> {
    let dot = id.find('.').unwrap_or(id.len());
    let kind_text = &id[..dot];
    let suffix = if dot < id.len() { &id[dot + 1..] } else { "" };
    let kind = match kind_text {
        "native" => ProviderKind::Native,
        "module" => ProviderKind::Module,
        _ => ProviderKind::Other,
    };
    ProviderIdParts {
        kind,
        kind_text,
        suffix,
    }
}

/// Resolve the dropdown display title for a provider.
///
/// - `native.*`: the system title when the suffix matches the host system
///   id, otherwise the suffix verbatim; prefixed with the localized
///   `native` label.
/// - `module.*`: the installed add-on's title (suffix verbatim when the
///   add-on is missing), substituted into the localized `module` template.
/// - anything else: the system title substituted into the localized
///   template for the raw prefix text.
pub fn resolve_display_title(
    provider: &dyn LanguageProvider,
    host: &dyn HostInfo,
    i18n: &dyn Localization,
) -> String {
    let parts = classify(provider.id());
    match parts.kind {
        ProviderKind::Native => {
            let title = if parts.suffix == host.system_id() {
                host.system_title()
            } else {
                parts.suffix.to_string()
            };
            let label = i18n.localize(&format!("{CHOICES_KEY_PREFIX}.native"));
            format!("{label} {title}").trim().to_string()
        }
        ProviderKind::Module => {
            let name = host.module_title(parts.suffix).unwrap_or_else(|| {
                log::warn!(
                    "Add-on {} for provider {} is not installed, using its id as title",
                    parts.suffix,
                    provider.id()
                );
                parts.suffix.to_string()
            });
            i18n.format(
                &format!("{CHOICES_KEY_PREFIX}.module"),
                &[("name", name.as_str())],
            )
        }
        ProviderKind::Other => {
            let name = host.system_title();
            i18n.format(
                &format!("{CHOICES_KEY_PREFIX}.{}", parts.kind_text),
                &[("name", name.as_str())],
            )
        }
    }
}
