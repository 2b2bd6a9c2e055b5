//! Language settings form.
//!
//! This module contains the `LanguageSettingsForm` controller and its
//! state machine. Lifecycle and commit logic live in `state.rs`, egui
//! rendering in `display.rs`.

use argot_config::SettingsStore;
use argot_providers::{HostInfo, Localization, ProviderRegistry};
use parking_lot::RwLock;
use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;

mod display;
mod state;

/// Lifecycle state of an open form.
///
/// `Viewing` shows the active provider's languages and fonts.
/// `ProviderPending` means the user highlighted a different provider in the
/// dropdown but has not saved yet; the per-language rows are hidden because
/// the new provider's language set is unknown until committed.
/// `Committed` is terminal; the form closes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormState {
    #[default]
    Viewing,
    ProviderPending,
    Committed,
}

/// One entry in the provider dropdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderOption {
    /// Namespaced provider id.
    pub id: String,
    /// Resolved display title.
    pub title: String,
    /// Whether this is the currently active provider.
    pub is_selected: bool,
}

/// One per-language row of the form.
///
/// Rows carry their language key explicitly so edits bind by stable
/// identifier, not by widget position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageRow {
    /// Stable language key (not shown to the user).
    pub key: String,
    /// User-facing language name.
    pub display_name: String,
    /// Draft font key assigned to this language.
    pub font: String,
}

/// Transient selection state owned by an open form instance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormSelectionState {
    /// Provider id the user has highlighted (not yet committed).
    pub selected_provider: String,
    /// Per-language rows in stored order.
    pub rows: Vec<LanguageRow>,
}

/// The language settings form controller.
///
/// Collaborators are injected at construction: the provider registry, the
/// settings store, and the host's metadata/localization services. The form
/// owns only its transient selection state; committed values always go
/// through the store.
pub struct LanguageSettingsForm {
    /// Whether the form window is currently visible.
    pub visible: bool,

    registry: Arc<RwLock<ProviderRegistry>>,
    store: Arc<dyn SettingsStore>,
    host: Arc<dyn HostInfo>,
    i18n: Arc<dyn Localization>,

    state: FormState,
    selection: FormSelectionState,

    /// Provider id that was active when the form was opened.
    active_provider: String,

    /// Dropdown options built at open time.
    providers: Vec<ProviderOption>,

    /// Active provider's alphabet table, snapshotted at open time for the
    /// font dropdown options and the row previews.
    alphabets: BTreeMap<String, String>,

    /// Font families registered with the egui context (see
    /// [`install_alphabet_fonts`](crate::install_alphabet_fonts)).
    /// Previews only apply a descriptor's family when it is in this set;
    /// unregistered families keep the size scale and fall back to the
    /// default font.
    registered_families: HashSet<String>,
}

/// Default window width, matching the original form dimensions.
pub const FORM_WIDTH: f32 = 600.0;

/// Default window height, matching the original form dimensions.
pub const FORM_HEIGHT: f32 = 680.0;
