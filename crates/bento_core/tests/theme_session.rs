use bento_core::db::open_db_in_memory;
use bento_core::{KeyValueStore, SessionContext, SqliteKeyValueStore, Theme, ThemeService};

#[test]
fn missing_or_unknown_theme_defaults_to_dark() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteKeyValueStore::new(&conn);

    let session = SessionContext::new();
    let themes = ThemeService::load(store, "theme", session.clone());
    assert_eq!(themes.theme(), Theme::Dark);

    store.set("theme", "Light").unwrap();
    let themes = ThemeService::load(store, "theme", session.clone());
    assert_eq!(session.theme(), Theme::Dark);
    assert_eq!(themes.theme(), Theme::Dark);
}

#[test]
fn load_writes_resolved_theme_back() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteKeyValueStore::new(&conn);

    ThemeService::load(store, "theme", SessionContext::new());
    assert_eq!(store.get("theme").unwrap().as_deref(), Some("dark"));

    store.set("theme", "Light").unwrap();
    ThemeService::load(store, "theme", SessionContext::new());
    assert_eq!(store.get("theme").unwrap().as_deref(), Some("dark"));

    store.set("theme", "light").unwrap();
    let themes = ThemeService::load(store, "theme", SessionContext::new());
    assert_eq!(themes.theme(), Theme::Light);
    assert_eq!(store.get("theme").unwrap().as_deref(), Some("light"));
}

#[test]
fn theme_changes_are_persisted_and_shared() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteKeyValueStore::new(&conn);
    let session = SessionContext::new();
    let navbar = session.clone();

    let themes = ThemeService::load(store, "theme", session);
    assert_eq!(themes.toggle_theme().unwrap(), Theme::Light);
    assert_eq!(navbar.theme(), Theme::Light);
    assert_eq!(store.get("theme").unwrap().as_deref(), Some("light"));

    let next_session = SessionContext::new();
    let reloaded = ThemeService::load(store, "theme", next_session.clone());
    assert_eq!(reloaded.theme(), Theme::Light);

    reloaded.set_theme(Theme::Dark).unwrap();
    assert_eq!(next_session.theme(), Theme::Dark);
    assert_eq!(store.get("theme").unwrap().as_deref(), Some("dark"));
}
