//! Upload/reset feedback line shown under the drop zone.

/// Single current status; every new operation overwrites it.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadStatus {
    pub text: String,
    pub kind: StatusKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Idle,
    Loading,
    Success,
    Error,
}

impl StatusKind {
    pub fn css_class(&self) -> &'static str {
        match self {
            StatusKind::Idle => "status-msg",
            StatusKind::Loading => "status-msg loading",
            StatusKind::Success => "status-msg success",
            StatusKind::Error => "status-msg error",
        }
    }
}

impl UploadStatus {
    pub fn idle() -> Self {
        Self {
            text: String::new(),
            kind: StatusKind::Idle,
        }
    }

    pub fn loading(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: StatusKind::Loading,
        }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: StatusKind::Success,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: StatusKind::Error,
        }
    }
}

impl Default for UploadStatus {
    fn default() -> Self {
        Self::idle()
    }
}
