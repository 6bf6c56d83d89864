use serde::{Deserialize, Serialize};

/// Severity of a toast notification.
///
/// Codes outside the known set are kept as [`NotificationKind::Other`]: they
/// keep their literal class name but use the info icon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum NotificationKind {
    Success,
    Error,
    Warning,
    Info,
    Other(String),
}

impl NotificationKind {
    pub fn parse(code: &str) -> Self {
        match code {
            "success" => NotificationKind::Success,
            "error" => NotificationKind::Error,
            "warning" => NotificationKind::Warning,
            "info" => NotificationKind::Info,
            other => NotificationKind::Other(other.to_string()),
        }
    }

    pub fn css_class(&self) -> &str {
        match self {
            NotificationKind::Success => "success",
            NotificationKind::Error => "error",
            NotificationKind::Warning => "warning",
            NotificationKind::Info => "info",
            NotificationKind::Other(code) => code,
        }
    }

    /// Bootstrap icon name (without the `bi-` prefix).
    pub fn icon(&self) -> &'static str {
        match self {
            NotificationKind::Success => "check-lg",
            NotificationKind::Error => "x-lg",
            NotificationKind::Warning => "exclamation-triangle",
            NotificationKind::Info | NotificationKind::Other(_) => "info-circle",
        }
    }
}

/// Transient user-facing message. Never persisted, never deduplicated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    /// Milliseconds since the epoch; stamped when the notification is queued.
    pub created_at_ms: u64,
}

impl Notification {
    pub fn new(kind: NotificationKind, title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            message: message.into(),
            created_at_ms: 0,
        }
    }

    pub fn success(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(NotificationKind::Success, title, message)
    }

    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(NotificationKind::Error, title, message)
    }

    pub fn warning(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(NotificationKind::Warning, title, message)
    }

    pub fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(NotificationKind::Info, title, message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_kinds_have_own_icons() {
        assert_eq!(NotificationKind::parse("success").icon(), "check-lg");
        assert_eq!(NotificationKind::parse("error").icon(), "x-lg");
        assert_eq!(
            NotificationKind::parse("warning").icon(),
            "exclamation-triangle"
        );
        assert_eq!(NotificationKind::parse("info").icon(), "info-circle");
    }

    #[test]
    fn test_unknown_kind_keeps_class_and_uses_info_icon() {
        let kind = NotificationKind::parse("danger");
        assert_eq!(kind, NotificationKind::Other("danger".into()));
        assert_eq!(kind.css_class(), "danger");
        assert_eq!(kind.icon(), "info-circle");
    }
}
