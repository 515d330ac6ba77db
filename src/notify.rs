use crate::errors::ReviewError;

pub const MSG_ADDED: &str = "Review added successfully!";
pub const MSG_UPDATED: &str = "Review updated successfully!";
pub const MSG_DELETED: &str = "Review deleted!";
pub const MSG_VANISHED: &str = "That review no longer exists.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
    Info,
}

impl NotificationKind {
    pub fn css_class(self) -> &'static str {
        match self {
            NotificationKind::Success => "toast toast-success",
            NotificationKind::Error => "toast toast-error",
            NotificationKind::Info => "toast toast-info",
        }
    }
}

/// Message for the user produced by a board action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self { kind: NotificationKind::Success, message: message.into() }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { kind: NotificationKind::Error, message: message.into() }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self { kind: NotificationKind::Info, message: message.into() }
    }
}

impl From<&ReviewError> for Notification {
    fn from(err: &ReviewError) -> Self {
        match err {
            ReviewError::NotFound { .. } => Notification::error(MSG_VANISHED),
            other => Notification::error(other.to_string()),
        }
    }
}
