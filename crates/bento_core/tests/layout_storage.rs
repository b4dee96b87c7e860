use bento_core::db::open_db_in_memory;
use bento_core::{
    GridItem, KeyValueStore, KvLayoutRepository, Layout, LayoutRepository, RepoError,
    SqliteKeyValueStore, TileSize,
};

fn layout(ids: &[&str]) -> Layout {
    Layout::from_canonical(
        ids.iter()
            .map(|id| {
                GridItem::new(*id, id.to_uppercase(), format!("/{id}"))
                    .unwrap()
                    .with_size(TileSize::Small)
            })
            .collect(),
    )
    .unwrap()
}

#[test]
fn set_overwrites_and_remove_reports_presence() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteKeyValueStore::new(&conn);

    assert_eq!(store.get("theme").unwrap(), None);
    store.set("theme", "dark").unwrap();
    store.set("theme", "light").unwrap();
    assert_eq!(store.get("theme").unwrap().as_deref(), Some("light"));

    assert!(store.remove("theme").unwrap());
    assert!(!store.remove("theme").unwrap());
    assert_eq!(store.get("theme").unwrap(), None);
}

#[test]
fn save_writes_full_snapshots_and_load_returns_order() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteKeyValueStore::new(&conn);
    let repo = KvLayoutRepository::with_default_key(store);

    let mut layout = layout(&["a", "b", "c"]);
    layout.move_item(2, 0);
    repo.save_layout(&layout).unwrap();

    let raw = store.get(repo.key()).unwrap().unwrap();
    let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(json[0]["id"], "c");
    assert_eq!(json[0]["title"], "C");
    assert_eq!(json[0]["size"], "small");

    let order = repo.load_order().unwrap().unwrap();
    assert_eq!(order, vec!["c", "a", "b"]);
}

#[test]
fn load_ignores_unknown_fields() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteKeyValueStore::new(&conn);
    let repo = KvLayoutRepository::new(store, "custom-key");

    store
        .set(
            "custom-key",
            r#"[{"id":"b","className":"bento-item-wide","icon":{"$$typeof":1}},{"id":"a"}]"#,
        )
        .unwrap();

    assert_eq!(repo.load_order().unwrap().unwrap(), vec!["b", "a"]);
}

#[test]
fn load_rejects_values_that_are_not_id_arrays() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteKeyValueStore::new(&conn);
    let repo = KvLayoutRepository::with_default_key(store);

    for raw in [
        r#"[{"id":"a"},{"id":"b""#,
        r#"{"id":"a"}"#,
        r#"[{"title":"A"}]"#,
        r#"[{"id":7}]"#,
        "not json",
    ] {
        store.set(repo.key(), raw).unwrap();
        let err = repo.load_order().unwrap_err();
        assert!(
            matches!(&err, RepoError::Decode { key, .. } if key == "bento-layout"),
            "unexpected result for {raw}: {err}"
        );
    }
}

#[test]
fn clear_removes_saved_layout() {
    let conn = open_db_in_memory().unwrap();
    let repo = KvLayoutRepository::with_default_key(SqliteKeyValueStore::new(&conn));

    repo.save_layout(&layout(&["a"])).unwrap();
    assert!(repo.clear_layout().unwrap());
    assert_eq!(repo.load_order().unwrap(), None);
}
