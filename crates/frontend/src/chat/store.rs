//! Conversation log: the single source of truth for what the chat pane shows.
//!
//! Pure data, no DOM and no signals, so the whole message lifecycle can be
//! unit tested on the host target.

use contracts::chat::SourceRef;

pub const GREETING_TEXT: &str =
    "Hello! Upload a document and I'll answer questions about it.";
pub const RESET_TEXT: &str = "Memory cleared! Upload a new document to start over.";
pub const THINKING_TEXT: &str = "Thinking...";
pub const ANSWER_ERROR_TEXT: &str = "Sorry, I encountered an error processing your request.";
pub const NETWORK_ERROR_TEXT: &str = "Network error. Please check your connection.";

/// Trim the raw input into a sendable question. Empty or whitespace-only
/// input yields `None`: nothing is sent and the input field stays as typed.
pub fn prepare_question(input: &str) -> Option<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Who authored a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Bot,
}

/// Identity of a log entry. Only consulted when removing the transient
/// "Thinking..." placeholder; ordinary messages keep theirs unused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MessageId(u64);

impl MessageId {
    pub fn value(&self) -> u64 {
        self.0
    }
}

/// One conversational turn.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatMessage {
    pub id: MessageId,
    pub role: Role,
    pub text: String,
    pub sources: Vec<SourceRef>,
    pub confidence: Option<String>,
    /// True only for the removable loading placeholder.
    pub pending: bool,
}

/// Append-only conversation log with deletion-by-id for placeholders.
/// Entries stay in insertion order; nothing ever reorders them.
#[derive(Debug, Clone)]
pub struct ChatLog {
    entries: Vec<ChatMessage>,
    next_id: u64,
}

impl ChatLog {
    /// Empty log, for tests and composition.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 0,
        }
    }

    /// Log seeded with the opening bot greeting, as shown on page load.
    pub fn with_greeting() -> Self {
        let mut log = Self::new();
        log.push_bot(GREETING_TEXT);
        log
    }

    pub fn entries(&self) -> &[ChatMessage] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn push(&mut self, role: Role, text: String, sources: Vec<SourceRef>, confidence: Option<String>, pending: bool) -> MessageId {
        let id = MessageId(self.next_id);
        self.next_id += 1;
        self.entries.push(ChatMessage {
            id,
            role,
            text,
            sources,
            confidence,
            pending,
        });
        id
    }

    pub fn push_user(&mut self, text: impl Into<String>) -> MessageId {
        self.push(Role::User, text.into(), Vec::new(), None, false)
    }

    pub fn push_bot(&mut self, text: impl Into<String>) -> MessageId {
        self.push(Role::Bot, text.into(), Vec::new(), None, false)
    }

    /// Bot answer carrying the backend's citations and confidence label.
    pub fn push_answer(
        &mut self,
        text: impl Into<String>,
        sources: Vec<SourceRef>,
        confidence: Option<String>,
    ) -> MessageId {
        self.push(Role::Bot, text.into(), sources, confidence, false)
    }

    /// Insert the transient "Thinking..." entry and hand back its id so the
    /// owning request can remove it when it settles.
    pub fn push_placeholder(&mut self) -> MessageId {
        self.push(Role::Bot, THINKING_TEXT.to_string(), Vec::new(), None, true)
    }

    /// Remove the entry with `id`, if still present. Unknown ids are a no-op,
    /// so settling the same request twice cannot disturb the log.
    pub fn remove(&mut self, id: MessageId) {
        self.entries.retain(|m| m.id != id);
    }

    /// Discard the whole conversation, leaving only the post-reset greeting.
    pub fn reset_to_greeting(&mut self) {
        self.entries.clear();
        self.push_bot(RESET_TEXT);
    }
}

impl Default for ChatLog {
    fn default() -> Self {
        Self::with_greeting()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prepare_question_trims_and_rejects_blank() {
        assert_eq!(prepare_question(""), None);
        assert_eq!(prepare_question("   \t  "), None);
        assert_eq!(
            prepare_question("  What is the revenue?  ").as_deref(),
            Some("What is the revenue?")
        );
    }

    #[test]
    fn blank_send_leaves_log_untouched() {
        let mut log = ChatLog::with_greeting();
        let before = log.clone();

        // The send path only touches the log once the input survives trimming.
        for input in ["", "   ", "\t\n"] {
            if let Some(question) = prepare_question(input) {
                log.push_user(question);
                log.push_placeholder();
            }
        }
        assert_eq!(log.entries(), before.entries());
    }

    #[test]
    fn starts_with_greeting() {
        let log = ChatLog::with_greeting();
        assert_eq!(log.len(), 1);
        assert_eq!(log.entries()[0].role, Role::Bot);
        assert_eq!(log.entries()[0].text, GREETING_TEXT);
        assert!(!log.entries()[0].pending);
    }

    #[test]
    fn preserves_insertion_order() {
        let mut log = ChatLog::new();
        log.push_user("first");
        log.push_bot("second");
        log.push_user("third");
        let texts: Vec<_> = log.entries().iter().map(|m| m.text.as_str()).collect();
        assert_eq!(texts, vec!["first", "second", "third"]);
    }

    #[test]
    fn ids_are_unique_and_monotonic() {
        let mut log = ChatLog::new();
        let a = log.push_user("a");
        let b = log.push_placeholder();
        let c = log.push_bot("c");
        assert!(a.value() < b.value() && b.value() < c.value());
    }

    #[test]
    fn placeholder_is_pending_bot_entry() {
        let mut log = ChatLog::new();
        let id = log.push_placeholder();
        let entry = log.entries().last().unwrap();
        assert_eq!(entry.id, id);
        assert_eq!(entry.role, Role::Bot);
        assert_eq!(entry.text, THINKING_TEXT);
        assert!(entry.pending);
    }

    #[test]
    fn remove_deletes_only_the_named_entry() {
        let mut log = ChatLog::new();
        log.push_user("question");
        let placeholder = log.push_placeholder();
        log.push_bot("answer");
        log.remove(placeholder);
        assert_eq!(log.len(), 2);
        assert!(log.entries().iter().all(|m| !m.pending));
    }

    #[test]
    fn remove_unknown_id_is_noop() {
        let mut log = ChatLog::new();
        log.push_user("question");
        let placeholder = log.push_placeholder();
        log.remove(placeholder);
        log.remove(placeholder);
        assert_eq!(log.len(), 1);
    }

    #[test]
    fn concurrent_placeholders_settle_independently() {
        let mut log = ChatLog::new();
        log.push_user("q1");
        let p1 = log.push_placeholder();
        log.push_user("q2");
        let p2 = log.push_placeholder();

        // Second request settles first.
        log.remove(p2);
        log.push_answer("a2", Vec::new(), None);
        assert!(log.entries().iter().any(|m| m.id == p1 && m.pending));

        log.remove(p1);
        log.push_answer("a1", Vec::new(), None);
        assert!(log.entries().iter().all(|m| !m.pending));
        let texts: Vec<_> = log.entries().iter().map(|m| m.text.as_str()).collect();
        assert_eq!(texts, vec!["q1", "q2", "a2", "a1"]);
    }

    #[test]
    fn answer_keeps_sources_and_confidence() {
        let mut log = ChatLog::new();
        log.push_answer(
            "Revenue grew 12%.",
            vec![SourceRef {
                source: "report.pdf".into(),
                text: "Revenue grew...".into(),
            }],
            Some("High".into()),
        );
        let entry = log.entries().last().unwrap();
        assert_eq!(entry.sources.len(), 1);
        assert_eq!(entry.confidence.as_deref(), Some("High"));
    }

    #[test]
    fn reset_discards_everything_but_the_reset_notice() {
        let mut log = ChatLog::with_greeting();
        log.push_user("question");
        log.push_answer("answer", Vec::new(), None);
        log.reset_to_greeting();
        assert_eq!(log.len(), 1);
        let entry = &log.entries()[0];
        assert_eq!(entry.role, Role::Bot);
        assert_eq!(entry.text, RESET_TEXT);
        assert!(!entry.pending);
    }
}
