use std::rc::Rc;

use yew::prelude::*;

use crate::models::{ConversationSummary, Message, Sender, SendMessageResponse};

/// Transcript + history state for the chat screen.
///
/// Invariants:
/// - `messages` always belongs to `current_chat_id`; switching
///   conversations replaces the transcript wholesale, never merges.
/// - every mutation is replace-or-untouched; a failed operation leaves
///   the previous state byte-for-byte intact.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct ChatStore {
    pub messages: Vec<Message>,
    pub history: Vec<ConversationSummary>,
    pub current_chat_id: Option<String>,
    /// Advisory send-in-flight flag; the UI disables the input on it,
    /// the store itself does not reject concurrent sends.
    pub pending: bool,
    /// Bumped whenever the active conversation context changes, so
    /// responses issued against an older context can be discarded.
    pub generation: u64,
}

impl ChatStore {
    /// Optimistic insert. Returns `false` (and changes nothing) for
    /// empty or whitespace-only input.
    pub fn push_user_message(&mut self, text: &str) -> bool {
        if text.trim().is_empty() {
            return false;
        }
        self.messages.push(Message::user(text.to_string()));
        self.pending = true;
        true
    }

    /// Apply a successful send. Adopts the backend-allocated id when no
    /// conversation was active; returns whether the history list needs
    /// a refresh because of that.
    pub fn apply_send_success(&mut self, response: &SendMessageResponse) -> bool {
        self.pending = false;
        let mut needs_refresh = false;
        if self.current_chat_id.is_none() {
            if let Some(id) = &response.id {
                self.current_chat_id = Some(id.clone());
                needs_refresh = true;
            }
        }
        self.messages
            .push(Message::assistant(clean_response(&response.response)));
        needs_refresh
    }

    /// Failed send: the optimistic user message stays (the user retries
    /// by resending); only the in-flight flag is cleared.
    pub fn apply_send_failure(&mut self) {
        self.pending = false;
    }

    /// Wholesale transcript replacement for a loaded conversation.
    pub fn replace_transcript(&mut self, id: String, messages: Vec<Message>) {
        self.messages = messages
            .into_iter()
            .map(|mut message| {
                if message.sender == Sender::Assistant {
                    message.content = clean_response(&message.content);
                }
                message
            })
            .collect();
        self.current_chat_id = Some(id);
        self.generation += 1;
    }

    /// New, unsaved conversation; the first send creates it server-side.
    pub fn start_new(&mut self) {
        self.messages.clear();
        self.current_chat_id = None;
        self.generation += 1;
    }

    /// Clears the transcript when the deleted conversation was the
    /// active one. Returns whether it was.
    pub fn clear_if_active(&mut self, id: &str) -> bool {
        if self.current_chat_id.as_deref() == Some(id) {
            self.messages.clear();
            self.current_chat_id = None;
            self.generation += 1;
            true
        } else {
            false
        }
    }

    pub fn replace_history(&mut self, history: Vec<ConversationSummary>) {
        self.history = history;
    }

    /// Case-insensitive substring filter over titles. Pure: the stored
    /// list is untouched, relative order is preserved, an empty term
    /// yields everything.
    pub fn filtered_history(&self, term: &str) -> Vec<ConversationSummary> {
        if term.is_empty() {
            return self.history.clone();
        }
        let needle = term.to_lowercase();
        self.history
            .iter()
            .filter(|chat| chat.title.to_lowercase().contains(&needle))
            .cloned()
            .collect()
    }

    pub fn is_current(&self, generation: u64) -> bool {
        self.generation == generation
    }
}

/// Strips the code-fence wrapper some assistant responses arrive in
/// (```` ```html … ``` ````). Presentation-adjacent normalization, not
/// a security control; HTML sanitization happens at render time.
pub fn clean_response(raw: &str) -> String {
    let trimmed = raw.trim();
    let trimmed = trimmed
        .strip_prefix("```html")
        .or_else(|| trimmed.strip_prefix("```"))
        .unwrap_or(trimmed);
    let trimmed = trimmed.strip_suffix("```").unwrap_or(trimmed);
    trimmed.trim().to_string()
}

/// State transitions, dispatched by `ChatHandle`. Completions carry the
/// generation they were issued under; a mismatch on arrival means the
/// user has navigated away since, and the result is dropped.
pub enum ChatAction {
    HistoryLoaded(Vec<ConversationSummary>),
    TranscriptLoaded {
        id: String,
        messages: Vec<Message>,
        generation: u64,
    },
    UserMessage(String),
    SendSucceeded {
        response: SendMessageResponse,
        generation: u64,
    },
    SendFailed,
    NewConversation,
    ConversationDeleted(String),
}

impl Reducible for ChatStore {
    type Action = ChatAction;

    fn reduce(self: Rc<Self>, action: ChatAction) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            ChatAction::HistoryLoaded(history) => next.replace_history(history),
            ChatAction::TranscriptLoaded {
                id,
                messages,
                generation,
            } => {
                if next.is_current(generation) {
                    next.replace_transcript(id, messages);
                } else {
                    log::info!("🗑️ Discarding stale transcript for {}", id);
                }
            }
            ChatAction::UserMessage(text) => {
                next.push_user_message(&text);
            }
            ChatAction::SendSucceeded {
                response,
                generation,
            } => {
                if next.is_current(generation) {
                    next.apply_send_success(&response);
                } else {
                    // The user switched conversations while the send
                    // was in flight; drop the reply, keep nothing.
                    log::info!("🗑️ Discarding stale assistant reply");
                    next.apply_send_failure();
                }
            }
            ChatAction::SendFailed => next.apply_send_failure(),
            ChatAction::NewConversation => next.start_new(),
            ChatAction::ConversationDeleted(id) => {
                next.clear_if_active(&id);
            }
        }
        next.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn summary(id: &str, title: &str) -> ConversationSummary {
        ConversationSummary {
            id: id.to_string(),
            title: title.to_string(),
            updated_at: Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
        }
    }

    #[test]
    fn blank_input_is_a_no_op() {
        let mut store = ChatStore::default();
        let before = store.clone();

        assert!(!store.push_user_message(""));
        assert!(!store.push_user_message("   "));
        assert!(!store.push_user_message("\n\t "));
        assert_eq!(store, before);
    }

    #[test]
    fn send_scenario_with_new_conversation() {
        let mut store = ChatStore::default();

        // Optimistic insert is visible before any response exists
        assert!(store.push_user_message("Hello"));
        assert!(store.pending);
        assert_eq!(store.messages.len(), 1);
        assert_eq!(store.messages[0].content, "Hello");
        assert_eq!(store.messages[0].sender, Sender::User);

        let response = SendMessageResponse {
            id: Some("c1".to_string()),
            response: "Hi!".to_string(),
        };
        let needs_refresh = store.apply_send_success(&response);

        assert!(needs_refresh, "new conversation must trigger a history refresh");
        assert_eq!(store.current_chat_id.as_deref(), Some("c1"));
        assert!(!store.pending);
        assert_eq!(store.messages.len(), 2);
        assert_eq!(store.messages[1].content, "Hi!");
        assert_eq!(store.messages[1].sender, Sender::Assistant);
    }

    #[test]
    fn send_into_existing_conversation_keeps_id() {
        let mut store = ChatStore::default();
        store.replace_transcript("c1".to_string(), vec![]);

        store.push_user_message("again");
        let response = SendMessageResponse {
            id: Some("c1".to_string()),
            response: "sure".to_string(),
        };
        let needs_refresh = store.apply_send_success(&response);

        assert!(!needs_refresh);
        assert_eq!(store.current_chat_id.as_deref(), Some("c1"));
    }

    #[test]
    fn failed_send_keeps_optimistic_message() {
        let mut store = ChatStore::default();
        store.push_user_message("Hello");
        store.apply_send_failure();

        assert!(!store.pending);
        assert_eq!(store.messages.len(), 1);
        assert_eq!(store.messages[0].content, "Hello");
    }

    #[test]
    fn replace_transcript_is_wholesale_and_strips_fences() {
        let mut store = ChatStore::default();
        store.push_user_message("old");

        store.replace_transcript(
            "c2".to_string(),
            vec![
                Message::user("question".to_string()),
                Message::assistant("```html\n<p>answer</p>\n```".to_string()),
            ],
        );

        assert_eq!(store.current_chat_id.as_deref(), Some("c2"));
        assert_eq!(store.messages.len(), 2);
        assert_eq!(store.messages[1].content, "<p>answer</p>");
    }

    #[test]
    fn clean_response_handles_fence_variants() {
        assert_eq!(clean_response("```html\n<b>hi</b>\n```"), "<b>hi</b>");
        assert_eq!(clean_response("```\nplain\n```"), "plain");
        assert_eq!(clean_response("  no fences  "), "no fences");
        assert_eq!(clean_response(""), "");
    }

    #[test]
    fn filter_preserves_order_and_ignores_case() {
        let mut store = ChatStore::default();
        store.replace_history(vec![
            summary("c1", "Rust borrow checker"),
            summary("c2", "Dinner ideas"),
            summary("c3", "rustlings exercises"),
        ]);

        let all = store.filtered_history("");
        assert_eq!(all, store.history);

        let filtered = store.filtered_history("RUST");
        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered[0].id, "c1");
        assert_eq!(filtered[1].id, "c3");

        // The stored list is untouched
        assert_eq!(store.history.len(), 3);

        assert!(store.filtered_history("zzz").is_empty());
    }

    #[test]
    fn deleting_the_active_conversation_clears_the_transcript() {
        let mut store = ChatStore::default();
        store.replace_transcript("c1".to_string(), vec![Message::user("hey".to_string())]);

        assert!(store.clear_if_active("c1"));
        assert!(store.messages.is_empty());
        assert!(store.current_chat_id.is_none());
    }

    #[test]
    fn deleting_another_conversation_leaves_the_transcript_alone() {
        let mut store = ChatStore::default();
        store.replace_transcript("c1".to_string(), vec![Message::user("hey".to_string())]);

        assert!(!store.clear_if_active("c2"));
        assert_eq!(store.messages.len(), 1);
        assert_eq!(store.current_chat_id.as_deref(), Some("c1"));
    }

    #[test]
    fn navigation_bumps_the_generation() {
        let mut store = ChatStore::default();
        let g0 = store.generation;

        store.replace_transcript("c1".to_string(), vec![]);
        assert!(store.generation > g0);

        let g1 = store.generation;
        store.start_new();
        assert!(store.generation > g1);

        // Sends do not navigate
        let g2 = store.generation;
        store.push_user_message("hi");
        assert_eq!(store.generation, g2);
    }

    #[test]
    fn stale_send_completion_is_discarded() {
        let store = Rc::new(ChatStore::default());

        // Send issued against generation 0...
        let store = store.reduce(ChatAction::UserMessage("Hello".to_string()));
        let issued_generation = store.generation;

        // ...then the user starts a new conversation while it is in flight
        let store = store.reduce(ChatAction::NewConversation);

        let store = store.reduce(ChatAction::SendSucceeded {
            response: SendMessageResponse {
                id: Some("c9".to_string()),
                response: "too late".to_string(),
            },
            generation: issued_generation,
        });

        // No id adoption, no appended reply, pending cleared
        assert!(store.current_chat_id.is_none());
        assert!(store.messages.is_empty());
        assert!(!store.pending);
    }

    #[test]
    fn stale_transcript_load_is_discarded() {
        let store = Rc::new(ChatStore::default());

        let issued_generation = store.generation;
        let store = store.reduce(ChatAction::TranscriptLoaded {
            id: "c1".to_string(),
            messages: vec![Message::user("first".to_string())],
            generation: issued_generation,
        });

        // A load issued before that replacement arrives afterwards
        let store = store.reduce(ChatAction::TranscriptLoaded {
            id: "c0".to_string(),
            messages: vec![Message::user("stale".to_string())],
            generation: issued_generation,
        });

        assert_eq!(store.current_chat_id.as_deref(), Some("c1"));
        assert_eq!(store.messages[0].content, "first");
    }

    #[test]
    fn delete_then_refresh_round_trip() {
        let store = Rc::new(ChatStore::default());
        let store = store.reduce(ChatAction::HistoryLoaded(vec![
            summary("c1", "one"),
            summary("c2", "two"),
        ]));

        let store = store.reduce(ChatAction::ConversationDeleted("c1".to_string()));
        // The follow-up history fetch returns the list without c1
        let store = store.reduce(ChatAction::HistoryLoaded(vec![summary("c2", "two")]));

        assert!(store.history.iter().all(|chat| chat.id != "c1"));
    }
}
