use serde::{Deserialize, Serialize};

/// Severity of a toast notification.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToastKind {
    /// Completed action.
    Success,
    /// Failed action.
    Error,
    /// Neutral information.
    #[default]
    Info,
}

impl ToastKind {
    /// Returns the icon class for the toast.
    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            Self::Success => "pi-check-circle",
            Self::Error => "pi-times-circle",
            Self::Info => "pi-info-circle",
        }
    }

    /// Returns the stable severity name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Info => "info",
        }
    }
}

/// Message shown in a toast.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Toast {
    /// Message text.
    pub message: String,
    /// Severity.
    pub kind: ToastKind,
}

impl Toast {
    /// Creates a toast message.
    #[must_use]
    pub fn new(message: impl Into<String>, kind: ToastKind) -> Self {
        Self {
            message: message.into(),
            kind,
        }
    }

    /// Returns the icon class for the toast severity.
    #[must_use]
    pub fn icon(&self) -> &'static str {
        self.kind.icon()
    }
}
