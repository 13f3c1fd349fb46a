use yew::prelude::*;

use crate::services::chat_service;
use crate::stores::{ChatAction, ChatStore};
use crate::utils::{notify_error, notify_success};

/// Clonable handle to the chat transcript state.
///
/// Unlike the session, chat operations report their own failures as
/// notifications and always leave the store replace-or-untouched.
#[derive(Clone, PartialEq)]
pub struct ChatHandle {
    state: UseReducerHandle<ChatStore>,
    token: Option<String>,
}

impl ChatHandle {
    pub fn store(&self) -> &ChatStore {
        &self.state
    }

    fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Wholesale history refresh; on error the previous list stays.
    pub async fn fetch_history(&self) {
        let Some(token) = self.token() else { return };
        match chat_service::fetch_history(token).await {
            Ok(history) => {
                log::info!("📋 Chat history loaded: {} conversations", history.len());
                self.state.dispatch(ChatAction::HistoryLoaded(history));
            }
            Err(e) => {
                log::error!("❌ Error fetching chat history: {}", e);
                notify_error("Failed to fetch chat history");
            }
        }
    }

    /// Replaces the transcript with the fetched conversation; on error
    /// the displayed transcript is left untouched.
    pub async fn load_conversation(&self, id: &str) {
        let Some(token) = self.token() else { return };
        let generation = self.state.generation;
        match chat_service::load_chat(token, id).await {
            Ok(messages) => {
                self.state.dispatch(ChatAction::TranscriptLoaded {
                    id: id.to_string(),
                    messages,
                    generation,
                });
            }
            Err(e) => {
                log::error!("❌ Error loading chat {}: {}", id, e);
                notify_error("Failed to load chat");
            }
        }
    }

    /// Local only; the first sent message creates the conversation
    /// server-side.
    pub fn start_new(&self) {
        self.state.dispatch(ChatAction::NewConversation);
    }

    pub async fn send_message(&self, text: &str) {
        // Empty/whitespace input: no state change, no network call
        if text.trim().is_empty() {
            return;
        }
        let Some(token) = self.token().map(str::to_string) else {
            return;
        };

        let chat_id = self.state.current_chat_id.clone();
        let generation = self.state.generation;

        // Optimistic insert, observable before the request goes out
        self.state.dispatch(ChatAction::UserMessage(text.to_string()));

        match chat_service::send_message(&token, text, chat_id.as_deref()).await {
            Ok(response) => {
                let was_new = chat_id.is_none();
                self.state.dispatch(ChatAction::SendSucceeded {
                    response,
                    generation,
                });
                if was_new {
                    // Make the freshly created conversation show up in
                    // the history panel
                    self.fetch_history().await;
                }
            }
            Err(e) => {
                log::error!("❌ Error sending message: {}", e);
                self.state.dispatch(ChatAction::SendFailed);
                notify_error("Failed to send message. Please try again.");
            }
        }
    }

    pub async fn delete_conversation(&self, id: &str) {
        let Some(token) = self.token() else { return };
        match chat_service::delete_chat(token, id).await {
            Ok(()) => {
                self.state
                    .dispatch(ChatAction::ConversationDeleted(id.to_string()));
                self.fetch_history().await;
                notify_success("Chat deleted successfully");
            }
            Err(e) => {
                log::error!("❌ Error deleting chat {}: {}", id, e);
                notify_error("Failed to delete chat");
            }
        }
    }
}

#[hook]
pub fn use_chat(token: Option<String>) -> ChatHandle {
    let state = use_reducer(ChatStore::default);
    let handle = ChatHandle { state, token };

    // Load the history panel once the token is known
    {
        let handle = handle.clone();
        use_effect_with(handle.token.clone(), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                handle.fetch_history().await;
            });
            || ()
        });
    }

    handle
}
