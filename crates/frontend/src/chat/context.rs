//! Application-level state shared by the chat, upload and reset surfaces.

use leptos::prelude::*;

use crate::chat::status::UploadStatus;
use crate::chat::store::ChatLog;
use crate::session::SessionId;

/// Owned app state, provided once at the root via `provide_context` so every
/// component works against the same log and status line.
#[derive(Clone)]
pub struct ChatContext {
    /// Immutable for the life of the page.
    pub session: SessionId,
    pub log: RwSignal<ChatLog>,
    pub status: RwSignal<UploadStatus>,
    pub drag_over: RwSignal<bool>,
    pub input: RwSignal<String>,
}

impl ChatContext {
    pub fn new() -> Self {
        Self {
            session: SessionId::generate(),
            log: RwSignal::new(ChatLog::with_greeting()),
            status: RwSignal::new(UploadStatus::idle()),
            drag_over: RwSignal::new(false),
            input: RwSignal::new(String::new()),
        }
    }
}

pub fn use_chat_context() -> ChatContext {
    expect_context::<ChatContext>()
}
