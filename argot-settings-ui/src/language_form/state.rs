//! LanguageSettingsForm lifecycle and commit methods.

use argot_config::SettingsStore;
use argot_providers::{FontDescriptor, HostInfo, Localization, ProviderRegistry, resolve_display_title};
use parking_lot::RwLock;
use std::collections::BTreeMap;
use std::sync::Arc;

use super::{FormSelectionState, FormState, LanguageRow, LanguageSettingsForm, ProviderOption};

impl LanguageSettingsForm {
    /// Create a new form wired to its collaborators. The form starts
    /// hidden; call [`open`](Self::open) to populate and show it.
    pub fn new(
        registry: Arc<RwLock<ProviderRegistry>>,
        store: Arc<dyn SettingsStore>,
        host: Arc<dyn HostInfo>,
        i18n: Arc<dyn Localization>,
    ) -> Self {
        Self {
            visible: false,
            registry,
            store,
            host,
            i18n,
            state: FormState::default(),
            selection: FormSelectionState::default(),
            active_provider: String::new(),
            providers: Vec::new(),
            alphabets: BTreeMap::new(),
            registered_families: std::collections::HashSet::new(),
        }
    }

    /// Tell the form which font families are registered with the egui
    /// context, typically the return value of
    /// [`install_alphabet_fonts`](crate::install_alphabet_fonts). Previews
    /// only apply families from this set.
    pub fn set_registered_families(&mut self, families: std::collections::HashSet<String>) {
        self.registered_families = families;
    }

    /// Initialize the selection state from the persisted settings and show
    /// the form.
    pub fn open(&mut self) {
        let active_id = self.store.language_provider();
        let registry = self.registry.read();

        self.providers = registry
            .list()
            .iter()
            .map(|provider| ProviderOption {
                id: provider.id().to_string(),
                title: resolve_display_title(*provider, self.host.as_ref(), self.i18n.as_ref()),
                is_selected: provider.id() == active_id,
            })
            .collect();

        let active = registry.get(&active_id);
        self.alphabets = active
            .map(|provider| provider.alphabets().clone())
            .unwrap_or_else(|| {
                log::warn!("Active language provider {active_id} is not registered");
                self.store.alphabets()
            });

        self.selection = FormSelectionState {
            selected_provider: active_id.clone(),
            rows: self
                .store
                .languages()
                .iter()
                .map(|(key, font)| LanguageRow {
                    key: key.to_string(),
                    // The display name comes from the provider's tongue
                    // list; an entry the provider no longer knows shows its
                    // raw key.
                    display_name: active
                        .and_then(|p| p.tongues().get(key))
                        .unwrap_or(key)
                        .to_string(),
                    font: font.to_string(),
                })
                .collect(),
        };

        self.active_provider = active_id;
        self.state = FormState::Viewing;
        self.visible = true;
    }

    /// Current lifecycle state.
    pub fn state(&self) -> FormState {
        self.state
    }

    /// Dropdown options built at open time.
    pub fn provider_options(&self) -> &[ProviderOption] {
        &self.providers
    }

    /// The provider id the user currently has highlighted.
    pub fn selected_provider(&self) -> &str {
        &self.selection.selected_provider
    }

    /// Per-language rows in stored order.
    pub fn rows(&self) -> &[LanguageRow] {
        &self.selection.rows
    }

    /// Font keys offered by the font dropdowns, from the alphabet snapshot.
    pub fn font_choices(&self) -> impl Iterator<Item = &str> {
        self.alphabets.keys().map(String::as_str)
    }

    /// Whether the per-language rows are shown (hidden while a provider
    /// switch is pending).
    pub fn shows_language_rows(&self) -> bool {
        self.state == FormState::Viewing
    }

    /// Handle a provider dropdown change.
    ///
    /// Selecting any id other than the active one enters `ProviderPending`;
    /// re-selecting the active id returns to `Viewing`.
    pub fn select_provider(&mut self, new_id: &str) {
        if self.state == FormState::Committed {
            return;
        }
        self.selection.selected_provider = new_id.to_string();
        let next = if new_id == self.active_provider {
            FormState::Viewing
        } else {
            FormState::ProviderPending
        };
        if next != self.state {
            log::debug!("Language form: {:?} -> {next:?} (provider {new_id})", self.state);
            self.state = next;
        }
    }

    /// Update the draft font assignment for one language row.
    pub fn select_font(&mut self, row: usize, font_key: &str) {
        if let Some(row) = self.selection.rows.get_mut(row) {
            log::debug!("Language form: {} -> font {font_key}", row.key);
            row.font = font_key.to_string();
        }
    }

    /// Look up the parsed font descriptor for a font key.
    ///
    /// Returns `None` for a missing or unusable descriptor; the caller
    /// renders the preview unstyled in that case.
    pub fn font_descriptor(&self, font_key: &str) -> Option<FontDescriptor> {
        self.alphabets
            .get(font_key)
            .and_then(|descriptor| FontDescriptor::parse(descriptor))
    }

    /// Restore the active provider's defaults and close the form.
    ///
    /// Regenerates the provider's alphabet defaults and overwrites both
    /// persisted values with them, discarding any pending draft edits.
    /// Bypasses the submit path entirely.
    ///
    /// On a failed store write the form stays open and the error is
    /// returned; settings keep whatever the store last accepted.
    pub fn reset_to_defaults(&mut self) -> anyhow::Result<()> {
        let (alphabets, baseline) = {
            let mut registry = self.registry.write();
            let provider = registry
                .active_mut()
                .ok_or_else(|| anyhow::anyhow!("no active language provider to reset"))?;
            provider.load_alphabet();
            (provider.alphabets().clone(), provider.original_tongues().clone())
        };

        self.store.set_alphabets(&alphabets)?;
        self.store.set_languages(&baseline)?;

        self.state = FormState::Committed;
        self.visible = false;
        Ok(())
    }

    /// Commit the form.
    ///
    /// With a changed provider id: persists the new id, activates the
    /// provider (the registry swap happens after the id write and before
    /// its defaults are read), regenerates its defaults and persists them
    /// as the new baseline — any per-language edits made under the old
    /// provider are discarded. With an unchanged id: zips the draft font
    /// choices positionally into the stored language mapping and persists
    /// the merge.
    ///
    /// On a failed store write the form stays open and the error is
    /// returned.
    pub fn submit(&mut self) -> anyhow::Result<()> {
        let active_id = self.store.language_provider();
        let selected_id = self.selection.selected_provider.clone();

        if selected_id != active_id {
            self.store.set_language_provider(&selected_id)?;
            let (alphabets, baseline) = {
                let mut registry = self.registry.write();
                registry.activate(&selected_id)?;
                let provider = registry
                    .active_mut()
                    .ok_or_else(|| anyhow::anyhow!("activated provider {selected_id} disappeared"))?;
                provider.load_alphabet();
                (provider.alphabets().clone(), provider.original_tongues().clone())
            };
            self.store.set_alphabets(&alphabets)?;
            self.store.set_languages(&baseline)?;
        } else {
            let mut languages = self.store.languages();
            languages.assign_in_order(self.selection.rows.iter().map(|row| row.font.clone()));
            self.store.set_languages(&languages)?;
        }

        self.state = FormState::Committed;
        self.visible = false;
        Ok(())
    }
}
