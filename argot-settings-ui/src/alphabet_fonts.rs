//! Alphabet font registration for egui.
//!
//! Providers describe alphabets as `"<scale>% <family>"` strings; for the
//! row previews to actually render in those families, the font data has to
//! be registered with the egui context under the family names the
//! descriptors use. The host collects the font files its providers need
//! and registers them once per context. Families that are never registered
//! degrade gracefully: previews keep the descriptor's size scale but fall
//! back to the default font.

/// A font file to register under an alphabet family name.
pub struct AlphabetFont {
    /// Family name as referenced by font-descriptor strings.
    pub family: String,
    /// Raw font file contents (TTF/OTF).
    pub data: Vec<u8>,
}

impl AlphabetFont {
    /// Create an alphabet font entry.
    pub fn new(family: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            family: family.into(),
            data,
        }
    }
}

/// Register alphabet fonts with an egui context.
///
/// Call once after creating the `egui::Context`, before the first frame
/// that shows the form. Each font becomes its own named family so a
/// descriptor like `"130% Tengwar"` resolves to the registered data, and
/// is also appended as a last fallback of the Proportional family so
/// stray alphabet codepoints elsewhere in the UI still render.
///
/// Returns the set of registered family names; hand it to
/// [`LanguageSettingsForm::set_registered_families`] so the row previews
/// know which families they may use.
///
/// [`LanguageSettingsForm::set_registered_families`]: crate::LanguageSettingsForm::set_registered_families
pub fn install_alphabet_fonts(
    ctx: &egui::Context,
    alphabet_fonts: Vec<AlphabetFont>,
) -> std::collections::HashSet<String> {
    let mut registered = std::collections::HashSet::new();
    if alphabet_fonts.is_empty() {
        return registered;
    }

    let mut fonts = egui::FontDefinitions::default();
    for font in alphabet_fonts {
        log::debug!("Registering alphabet font family {}", font.family);
        fonts.font_data.insert(
            font.family.clone(),
            egui::FontData::from_owned(font.data).into(),
        );
        fonts
            .families
            .entry(egui::FontFamily::Name(font.family.clone().into()))
            .or_default()
            .insert(0, font.family.clone());
        fonts
            .families
            .entry(egui::FontFamily::Proportional)
            .or_default()
            .push(font.family.clone());
        registered.insert(font.family);
    }
    ctx.set_fonts(fonts);
    registered
}
