use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastKind {
    Success,
    Error,
    Warning,
    Info,
}

impl ToastKind {
    /// CSS modifier class, e.g. `toast success`
    pub fn as_str(&self) -> &'static str {
        match self {
            ToastKind::Success => "success",
            ToastKind::Error => "error",
            ToastKind::Warning => "warning",
            ToastKind::Info => "info",
        }
    }

    /// Font Awesome icon name
    pub fn icon(&self) -> &'static str {
        match self {
            ToastKind::Success => "check-circle",
            ToastKind::Error => "exclamation-circle",
            ToastKind::Warning => "exclamation-triangle",
            ToastKind::Info => "info-circle",
        }
    }
}

/// A transient notification. The view removes it after `duration_ms`.
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: Uuid,
    pub message: String,
    pub kind: ToastKind,
    pub duration_ms: u32,
}

impl Toast {
    pub fn new(message: impl Into<String>, kind: ToastKind, duration_ms: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            message: message.into(),
            kind,
            duration_ms,
        }
    }
}
