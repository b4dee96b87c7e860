//! Persisted light/dark theme preference.
//!
//! # Invariants
//! - The session theme and the stored value change together.
//! - A missing or unknown stored value means dark.
//! - Loading writes the resolved theme back, so storage holds `light` or
//!   `dark` once a session has started.

use crate::model::theme::Theme;
use crate::repo::kv_repo::KeyValueStore;
use crate::repo::RepoResult;
use crate::service::session::SessionContext;
use log::{info, warn};

/// Storage key used when no configuration overrides it.
pub const DEFAULT_THEME_KEY: &str = "theme";

/// Keeps the session theme in sync with storage.
pub struct ThemeService<S: KeyValueStore> {
    store: S,
    key: String,
    session: SessionContext,
}

impl<S: KeyValueStore> ThemeService<S> {
    /// Reads the stored theme into `session` and writes the resolved value back.
    ///
    /// Storage failures are logged; a failed read leaves the default theme.
    pub fn load(store: S, key: impl Into<String>, session: SessionContext) -> Self {
        let key = key.into();
        let theme = match store.get(&key) {
            Ok(value) => Theme::from_stored(value.as_deref()),
            Err(err) => {
                warn!("event=theme_load module=theme status=fallback error={err}");
                Theme::default()
            }
        };
        if let Err(err) = store.set(&key, theme.as_str()) {
            warn!("event=theme_load module=theme status=write_failed error={err}");
        }
        session.set_theme(theme);
        Self {
            store,
            key,
            session,
        }
    }

    pub fn theme(&self) -> Theme {
        self.session.theme()
    }

    pub fn set_theme(&self, theme: Theme) -> RepoResult<()> {
        self.store.set(&self.key, theme.as_str())?;
        self.session.set_theme(theme);
        info!(
            "event=theme_set module=theme status=ok theme={}",
            theme.as_str()
        );
        Ok(())
    }

    /// Flips between light and dark and returns the new theme.
    pub fn toggle_theme(&self) -> RepoResult<Theme> {
        let next = self.theme().toggled();
        self.set_theme(next)?;
        Ok(next)
    }
}
