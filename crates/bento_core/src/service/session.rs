//! Shared per-session UI flags.
//!
//! # Responsibility
//! - Hold the edit-mode flag and theme read by several UI regions.
//! - Make every consumer take an explicit handle instead of reaching for a
//!   module-level singleton.
//!
//! # Invariants
//! - All clones of one `SessionContext` observe the same state.
//! - Only the layout engine changes the edit-mode flag. Other regions file a
//!   request that the engine applies, so leaving edit mode always commits.
//! - The session ends when the last handle is dropped.
//! - Handles are not `Send`; the session lives on the UI thread.

use crate::model::theme::Theme;
use log::info;
use std::cell::Cell;
use std::rc::Rc;

#[derive(Debug)]
struct SessionState {
    editing_layout: Cell<bool>,
    edit_request: Cell<Option<bool>>,
    theme: Cell<Theme>,
}

impl Drop for SessionState {
    fn drop(&mut self) {
        info!("event=session_end module=session status=ok");
    }
}

/// Cloneable handle to the session's shared UI flags.
#[derive(Debug, Clone)]
pub struct SessionContext {
    inner: Rc<SessionState>,
}

impl SessionContext {
    /// Starts a session with edit mode off and the default theme.
    pub fn new() -> Self {
        info!("event=session_start module=session status=ok");
        Self {
            inner: Rc::new(SessionState {
                editing_layout: Cell::new(false),
                edit_request: Cell::new(None),
                theme: Cell::new(Theme::default()),
            }),
        }
    }

    pub fn is_editing_layout(&self) -> bool {
        self.inner.editing_layout.get()
    }

    /// Asks the layout engine to enter or leave edit mode.
    ///
    /// The flag changes when the engine applies the request on its next
    /// operation or `sync`. A later request replaces an unapplied one.
    pub fn request_editing_layout(&self, editing: bool) {
        self.inner.edit_request.set(Some(editing));
    }

    pub(crate) fn take_edit_request(&self) -> Option<bool> {
        self.inner.edit_request.take()
    }

    pub(crate) fn set_editing_layout(&self, editing: bool) {
        self.inner.editing_layout.set(editing);
    }

    pub fn theme(&self) -> Theme {
        self.inner.theme.get()
    }

    pub fn set_theme(&self, theme: Theme) {
        self.inner.theme.set(theme);
    }

    /// Returns whether both handles belong to the same session.
    pub fn same_session(&self, other: &SessionContext) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl Default for SessionContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::SessionContext;
    use crate::model::theme::Theme;

    #[test]
    fn clones_share_flags() {
        let session = SessionContext::new();
        let toggle_control = session.clone();

        toggle_control.set_editing_layout(true);
        toggle_control.set_theme(Theme::Light);

        assert!(session.is_editing_layout());
        assert_eq!(session.take_edit_request(), None);
        assert_eq!(session.theme(), Theme::Light);
        assert!(session.same_session(&toggle_control));
        assert!(!session.same_session(&SessionContext::new()));
    }

    #[test]
    fn edit_requests_leave_flag_alone_until_taken() {
        let session = SessionContext::new();
        let toggle_control = session.clone();

        toggle_control.request_editing_layout(true);
        toggle_control.request_editing_layout(false);

        assert!(!session.is_editing_layout());
        assert_eq!(session.take_edit_request(), Some(false));
        assert_eq!(session.take_edit_request(), None);
    }
}
