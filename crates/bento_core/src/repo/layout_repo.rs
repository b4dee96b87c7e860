//! Persisted layout order.
//!
//! # Responsibility
//! - Save full item snapshots under the layout key.
//! - Load back only the id order through a schema-checked decode.
//!
//! # Invariants
//! - Unknown or stale fields in stored entries are ignored.
//! - A stored value that is not an array of `{ "id": string }` objects is a
//!   `RepoError::Decode`, never a partial order.

use super::kv_repo::KeyValueStore;
use super::{RepoError, RepoResult};
use crate::model::grid_item::ItemId;
use crate::model::layout::Layout;
use serde::Deserialize;

/// Storage key used when no configuration overrides it.
pub const DEFAULT_LAYOUT_KEY: &str = "bento-layout";

/// Only the identity of a stored entry is read back.
#[derive(Debug, Deserialize)]
struct PersistedEntry {
    id: ItemId,
}

/// Repository interface for the user's custom tile order.
pub trait LayoutRepository {
    /// Returns the stored id order, or `None` when nothing is stored.
    fn load_order(&self) -> RepoResult<Option<Vec<ItemId>>>;
    /// Overwrites the stored layout with `layout`.
    fn save_layout(&self, layout: &Layout) -> RepoResult<()>;
    /// Removes the stored layout. Returns whether one was present.
    fn clear_layout(&self) -> RepoResult<bool>;
}

/// Layout repository that stores JSON under one key of a key-value store.
#[derive(Debug, Clone)]
pub struct KvLayoutRepository<S: KeyValueStore> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> KvLayoutRepository<S> {
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn with_default_key(store: S) -> Self {
        Self::new(store, DEFAULT_LAYOUT_KEY)
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}

impl<S: KeyValueStore> LayoutRepository for KvLayoutRepository<S> {
    fn load_order(&self) -> RepoResult<Option<Vec<ItemId>>> {
        let Some(raw) = self.store.get(&self.key)? else {
            return Ok(None);
        };
        let entries: Vec<PersistedEntry> =
            serde_json::from_str(&raw).map_err(|source| RepoError::Decode {
                key: self.key.clone(),
                source,
            })?;
        Ok(Some(entries.into_iter().map(|entry| entry.id).collect()))
    }

    fn save_layout(&self, layout: &Layout) -> RepoResult<()> {
        let raw = serde_json::to_string(layout.items()).map_err(RepoError::Encode)?;
        self.store.set(&self.key, &raw)
    }

    fn clear_layout(&self) -> RepoResult<bool> {
        self.store.remove(&self.key)
    }
}
