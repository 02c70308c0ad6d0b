//! User-facing notifications.
//!
//! Every cart and checkout outcome that the user should hear about is turned
//! into a [`Notice`]; each view layer decides how to show it.

/// Whether a notice reports success or failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    /// The operation went through.
    Success,

    /// The operation failed and nothing changed.
    Failure,
}

/// A message for the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    /// Outcome of the operation
    pub level: NoticeLevel,

    /// Message text
    pub message: String,
}

impl Notice {
    /// A success notice.
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    /// A failure notice.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Failure,
            message: message.into(),
        }
    }

    /// Whether this notice reports a failure.
    pub fn is_failure(&self) -> bool {
        self.level == NoticeLevel::Failure
    }
}

/// Shows notices to the user.
pub trait Notifier {
    /// Show a notice. Implementations may block until acknowledged.
    fn notify(&self, notice: &Notice);
}
