//! Acknowledgment sink for short-lived UI notices.
//!
//! Notices are fire-and-forget: the engine never waits for or reacts to
//! their dismissal.

/// Severity of a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Info,
}

/// One toast-style acknowledgment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
    /// Opaque icon handle for the renderer.
    pub icon: Option<String>,
}

impl Notice {
    pub fn success(message: impl Into<String>, icon: &str) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
            icon: Some(icon.to_string()),
        }
    }

    pub fn info(message: impl Into<String>, icon: &str) -> Self {
        Self {
            level: NoticeLevel::Info,
            message: message.into(),
            icon: Some(icon.to_string()),
        }
    }
}

/// Receiver of notices, usually a toast display.
pub trait Notifier {
    fn notify(&self, notice: Notice);
}

impl<F: Fn(Notice)> Notifier for F {
    fn notify(&self, notice: Notice) {
        self(notice)
    }
}
