//! Core logic for the editable bento-grid dashboard.
//! This crate owns layout invariants; hosts only render and forward input.

pub mod catalog;
pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use config::EngineConfig;
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::grid_item::{GridItem, GridItemValidationError, ItemId, TileSize};
pub use model::layout::{Layout, LayoutValidationError, ReorderError};
pub use model::theme::Theme;
pub use repo::kv_repo::{KeyValueStore, SqliteKeyValueStore};
pub use repo::layout_repo::{KvLayoutRepository, LayoutRepository};
pub use repo::{RepoError, RepoResult};
pub use service::layout_engine::{
    LayoutEngine, MalformedPersistedLayout, RestoreSource, TransitionKind, TransitionState,
    TriggerOutcome,
};
pub use service::notify::{Notice, NoticeLevel, Notifier};
pub use service::session::SessionContext;
pub use service::theme_service::ThemeService;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
