//! Display methods for LanguageSettingsForm.
//!
//! Contains: show() and the per-language row rendering.

use egui::{Color32, Context, RichText, Window};

use crate::FormAction;
use crate::keys;

use super::{FORM_HEIGHT, FORM_WIDTH, FormState, LanguageSettingsForm};

impl LanguageSettingsForm {
    /// Render the form window.
    ///
    /// Returns [`FormAction::Close`] once the form has committed or the
    /// user dismissed it; the host hides the window in response. Commits
    /// happen inside this call (save and reset buttons), so a returned
    /// `Close` means the settings store is already up to date.
    pub fn show(&mut self, ctx: &Context) -> FormAction {
        if !self.visible {
            return FormAction::None;
        }

        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            // Dismiss without committing.
            self.visible = false;
            return FormAction::Close;
        }

        let mut open = true;
        Window::new(self.i18n.localize(keys::FORM_TITLE))
            .id(egui::Id::new("argot-language-form"))
            .resizable(true)
            .default_width(FORM_WIDTH)
            .default_height(FORM_HEIGHT)
            .open(&mut open)
            .show(ctx, |ui| {
                self.show_provider_selection(ui);
                ui.separator();

                if self.shows_language_rows() {
                    self.show_language_rows(ui);
                } else {
                    ui.label(
                        RichText::new(self.i18n.localize(keys::PROVIDER_CHANGE_WARNING))
                            .color(Color32::YELLOW),
                    );
                }

                ui.add_space(8.0);
                ui.separator();
                self.show_buttons(ui);
            });

        if !open {
            // Dismissed via the window's close control; nothing committed.
            self.visible = false;
            return FormAction::Close;
        }

        if self.state() == FormState::Committed {
            return FormAction::Close;
        }

        FormAction::None
    }

    fn show_provider_selection(&mut self, ui: &mut egui::Ui) {
        ui.label(RichText::new(self.i18n.localize(keys::PROVIDER_NAME)).strong());
        ui.label(
            RichText::new(self.i18n.localize(keys::PROVIDER_HINT))
                .small()
                .color(Color32::GRAY),
        );

        let selected_title = self
            .providers
            .iter()
            .find(|option| option.id == self.selection.selected_provider)
            .map(|option| option.title.clone())
            .unwrap_or_else(|| self.selection.selected_provider.clone());

        let mut selected = self.selection.selected_provider.clone();
        egui::ComboBox::from_id_salt("argot-language-provider")
            .width(300.0)
            .selected_text(selected_title)
            .show_ui(ui, |ui| {
                for option in &self.providers {
                    ui.selectable_value(&mut selected, option.id.clone(), &option.title);
                }
            });

        if selected != self.selection.selected_provider {
            self.select_provider(&selected);
        }
    }

    fn show_language_rows(&mut self, ui: &mut egui::Ui) {
        ui.label(RichText::new(self.i18n.localize(keys::LANGUAGES_NAME)).strong());
        ui.label(
            RichText::new(self.i18n.localize(keys::LANGUAGES_HINT))
                .small()
                .color(Color32::GRAY),
        );
        ui.add_space(4.0);

        let mut font_changes: Vec<(usize, String)> = Vec::new();

        egui::ScrollArea::vertical().show(ui, |ui| {
            egui::Grid::new("argot-languages-grid")
                .num_columns(3)
                .spacing([12.0, 6.0])
                .striped(true)
                .show(ui, |ui| {
                    ui.label("");
                    ui.label("");
                    ui.label(
                        RichText::new(self.i18n.localize(keys::ALPHABETS_NAME))
                            .small()
                            .color(Color32::GRAY),
                    );
                    ui.end_row();

                    for (index, row) in self.selection.rows.iter().enumerate() {
                        ui.label(&row.display_name);

                        let mut selected = row.font.clone();
                        // Rows are keyed by language key, not widget
                        // position, so reordering cannot mismatch edits.
                        egui::ComboBox::from_id_salt(("argot-font-select", row.key.as_str()))
                            .width(200.0)
                            .selected_text(selected.clone())
                            .show_ui(ui, |ui| {
                                for font in self.font_choices() {
                                    ui.selectable_value(&mut selected, font.to_string(), font);
                                }
                            });
                        if selected != row.font {
                            font_changes.push((index, selected));
                        }

                        ui.label(self.preview_text(ui, row));
                        ui.end_row();
                    }
                });
        });

        for (index, font) in font_changes {
            self.select_font(index, &font);
        }
    }

    /// Style a row's preview from its draft font.
    ///
    /// A missing or unusable descriptor leaves the text unstyled, and a
    /// descriptor family that is not registered with egui still applies
    /// the size scale.
    fn preview_text(&self, ui: &egui::Ui, row: &super::LanguageRow) -> RichText {
        let mut text = RichText::new(row.display_name.clone());
        if let Some(descriptor) = self.font_descriptor(&row.font) {
            let size = egui::TextStyle::Body.resolve(ui.style()).size * descriptor.scale_factor();
            if self.registered_families.contains(&descriptor.family) {
                let family = egui::FontFamily::Name(descriptor.family.clone().into());
                text = text.font(egui::FontId::new(size, family));
            } else {
                text = text.size(size);
            }
        }
        text
    }

    fn show_buttons(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            if ui.button(self.i18n.localize(keys::SAVE_BUTTON)).clicked()
                && let Err(e) = self.submit()
            {
                log::warn!("Failed to save language settings: {e:#}");
            }

            ui.add_space(10.0);

            if ui.button(self.i18n.localize(keys::RESET_BUTTON)).clicked()
                && let Err(e) = self.reset_to_defaults()
            {
                log::warn!("Failed to reset language settings: {e:#}");
            }
        });
    }
}
