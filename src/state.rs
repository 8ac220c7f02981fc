use crate::types::{ChatMessage, ThemeMode};

/// Identifies one in-flight round trip and the typing indicator it owns.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PendingId(u64);

/// Everything the widget renders. Messages are append-only.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct WidgetState {
    messages: Vec<ChatMessage>,
    pending: Vec<PendingId>,
    next_pending: u64,
    pub draft: String,
    pub theme: ThemeMode,
    pub use_document_context: bool,
    pub server_online: Option<bool>,
}

impl WidgetState {
    pub fn new(theme: ThemeMode) -> Self {
        Self {
            theme,
            ..Self::default()
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn pending(&self) -> &[PendingId] {
        &self.pending
    }

    pub fn is_typing(&self) -> bool {
        !self.pending.is_empty()
    }

    pub fn push_message(&mut self, message: ChatMessage) {
        self.messages.push(message);
    }

    /// Registers a round trip; its indicator stays up until [`settle`](Self::settle).
    pub fn begin_round_trip(&mut self) -> PendingId {
        let id = PendingId(self.next_pending);
        self.next_pending += 1;
        self.pending.push(id);
        id
    }

    /// Drops the indicator of `id` and appends the bot reply.
    pub fn settle(&mut self, id: PendingId, reply: impl Into<String>) {
        self.pending.retain(|pending| *pending != id);
        self.messages.push(ChatMessage::assistant(reply));
    }

    /// Accepts a user submission. Returns the trimmed text, or `None` for blank input.
    pub fn accept_submission(&mut self, text: &str) -> Option<String> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return None;
        }
        self.messages.push(ChatMessage::user(trimmed));
        self.draft.clear();
        Some(trimmed.to_string())
    }

    pub fn toggle_theme(&mut self) -> ThemeMode {
        self.theme = self.theme.toggled();
        self.theme
    }

    pub fn clear_transcript(&mut self) {
        self.messages.clear();
    }
}
