mod common;

use argot::{FormState, SettingsStore};
use common::{sample_argot, seeded_store};

#[test]
fn test_core_resolves_active_provider_from_store() {
    let store = seeded_store();
    let argot = sample_argot(store);
    assert_eq!(argot.active_provider_id().as_deref(), Some("native.chronicle"));
}

#[test]
fn test_core_falls_back_when_persisted_provider_is_unknown() {
    let store = seeded_store();
    store.set_language_provider("module.uninstalled").unwrap();

    let argot = sample_argot(store.clone());
    // First registered provider wins; the persisted value is untouched.
    assert_eq!(argot.active_provider_id().as_deref(), Some("native.chronicle"));
    assert_eq!(store.language_provider(), "module.uninstalled");
}

#[test]
fn test_update_language_provider_follows_the_store() {
    let store = seeded_store();
    let argot = sample_argot(store.clone());

    store.set_language_provider("module.tongues-extra").unwrap();
    argot.update_language_provider();
    assert_eq!(
        argot.active_provider_id().as_deref(),
        Some("module.tongues-extra")
    );
}

#[test]
fn test_open_form_shows_current_state() {
    let store = seeded_store();
    let argot = sample_argot(store);

    let mut form = argot.language_settings_form();
    form.open();

    assert_eq!(form.state(), FormState::Viewing);
    assert_eq!(form.selected_provider(), "native.chronicle");
    assert_eq!(form.provider_options().len(), 2);
    assert_eq!(form.rows().len(), 3);
    assert!(form.shows_language_rows());
}

#[test]
fn test_provider_dropdown_round_trip() {
    let store = seeded_store();
    let argot = sample_argot(store);
    let mut form = argot.language_settings_form();
    form.open();

    form.select_provider("module.tongues-extra");
    assert_eq!(form.state(), FormState::ProviderPending);
    assert!(!form.shows_language_rows());

    form.select_provider("native.chronicle");
    assert_eq!(form.state(), FormState::Viewing);
    assert!(form.shows_language_rows());
}

#[test]
fn test_submit_same_provider_merges_positionally() {
    let store = seeded_store();
    let argot = sample_argot(store.clone());
    let mut form = argot.language_settings_form();
    form.open();

    form.select_font(1, "Dethek");
    form.submit().unwrap();

    let languages = store.snapshot().languages;
    let entries: Vec<_> = languages.iter().collect();
    assert_eq!(
        entries,
        vec![
            ("common", "Signika"),
            ("elvish", "Dethek"),
            ("dwarvish", "Dethek"),
        ]
    );
    assert_eq!(form.state(), FormState::Committed);
}

#[test]
fn test_submit_provider_switch_installs_fresh_defaults() {
    let store = seeded_store();
    let argot = sample_argot(store.clone());
    let mut form = argot.language_settings_form();
    form.open();

    form.select_provider("module.tongues-extra");
    form.submit().unwrap();

    let snapshot = store.snapshot();
    assert_eq!(snapshot.language_provider, "module.tongues-extra");

    // The new provider's defaults replace both settings wholesale; none of
    // the old provider's assignments survive.
    let entries: Vec<_> = snapshot.languages.iter().collect();
    assert_eq!(entries, vec![("binary", "Ones"), ("leet", "Zeros")]);
    let fonts: Vec<_> = snapshot.alphabets.keys().map(String::as_str).collect();
    assert_eq!(fonts, vec!["Ones", "Zeros"]);

    // The registry swapped to the committed provider.
    assert_eq!(
        argot.active_provider_id().as_deref(),
        Some("module.tongues-extra")
    );
}

#[test]
fn test_reset_overwrites_drafts_and_closes() {
    let store = seeded_store();
    let argot = sample_argot(store.clone());
    let mut form = argot.language_settings_form();
    form.open();

    form.select_font(0, "Tengwar");
    form.select_font(2, "Tengwar");
    form.reset_to_defaults().unwrap();

    assert_eq!(form.state(), FormState::Committed);
    assert!(!form.visible);

    let snapshot = store.snapshot();
    let entries: Vec<_> = snapshot.languages.iter().collect();
    assert_eq!(
        entries,
        vec![
            ("common", "Signika"),
            ("elvish", "Tengwar"),
            ("dwarvish", "Dethek"),
        ]
    );
}

#[test]
fn test_rejected_write_blocks_the_close() {
    let store = seeded_store();
    let argot = sample_argot(store.clone());
    let mut form = argot.language_settings_form();
    form.open();

    store.set_fail_writes(true);
    form.select_provider("module.tongues-extra");
    assert!(form.submit().is_err());
    assert_ne!(form.state(), FormState::Committed);
    assert!(form.visible);
}
