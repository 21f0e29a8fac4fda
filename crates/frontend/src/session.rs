//! Per-page-load session identity.

use uuid::Uuid;

/// Opaque token correlating this page's queries to backend-held chat history.
///
/// Generated once when the app context is built and never replaced for the
/// life of the page. Uniqueness only needs to hold at single-user scale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionId(String);

impl SessionId {
    pub fn generate() -> Self {
        Self(format!("session-{}", Uuid::new_v4().simple()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
