use web_sys::HtmlInputElement;
use yew::prelude::*;

use super::ChatResponse;
use crate::hooks::{use_chat, SessionHandle};
use crate::models::{ConversationSummary, Sender};

#[derive(Properties, PartialEq)]
pub struct ChatScreenProps {
    pub on_show_profile: Callback<()>,
    pub on_logout: Callback<()>,
}

#[function_component(ChatScreen)]
pub fn chat_screen(props: &ChatScreenProps) -> Html {
    let session = use_context::<SessionHandle>().expect("session context missing");
    let chat = use_chat(session.store().token.clone());

    let input = use_state(String::new);
    let search_term = use_state(String::new);

    // Keep the newest message in view
    {
        let message_count = chat.store().messages.len();
        use_effect_with(message_count, move |_| {
            if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                if let Some(end) = document.get_element_by_id("messages-end") {
                    end.scroll_into_view();
                }
            }
            || ()
        });
    }

    let on_input = {
        let input = input.clone();
        Callback::from(move |e: InputEvent| {
            let value = e.target_unchecked_into::<HtmlInputElement>().value();
            input.set(value);
        })
    };

    let on_search = {
        let search_term = search_term.clone();
        Callback::from(move |e: InputEvent| {
            let value = e.target_unchecked_into::<HtmlInputElement>().value();
            search_term.set(value);
        })
    };

    let on_submit = {
        let input = input.clone();
        let chat = chat.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let text = (*input).clone();
            input.set(String::new());
            let chat = chat.clone();
            wasm_bindgen_futures::spawn_local(async move {
                chat.send_message(&text).await;
            });
        })
    };

    let on_new_chat = {
        let chat = chat.clone();
        Callback::from(move |_: MouseEvent| chat.start_new())
    };

    let filtered = chat.store().filtered_history(&search_term);
    let messages = chat.store().messages.clone();
    let pending = chat.store().pending;
    let current_chat_id = chat.store().current_chat_id.clone();
    let user_name = session
        .store()
        .user
        .as_ref()
        .map(|user| user.name.clone())
        .unwrap_or_default();

    html! {
        <div class="chat-layout">
            <aside class="sidebar">
                <button class="new-chat" onclick={on_new_chat}>{"+ New Chat"}</button>
                <input
                    type="text"
                    class="history-search"
                    placeholder="Search chats..."
                    value={(*search_term).clone()}
                    oninput={on_search}
                />
                <div class="history-list">
                    if filtered.is_empty() {
                        <p class="history-empty">
                            { if search_term.is_empty() {
                                "No chat history"
                            } else {
                                "No chats found"
                            }}
                        </p>
                    } else {
                        { for filtered.iter().map(|summary| {
                            history_row(&chat, summary, current_chat_id.as_deref())
                        })}
                    }
                </div>
            </aside>

            <main class="chat-main">
                <header class="chat-header">
                    <h1>{"Chat Assistant"}</h1>
                    <div class="chat-header-actions">
                        <span class="chat-user">{user_name}</span>
                        <button onclick={props.on_show_profile.reform(|_: MouseEvent| ())}>
                            {"Profile"}
                        </button>
                        <button onclick={props.on_logout.reform(|_: MouseEvent| ())}>
                            {"Logout"}
                        </button>
                    </div>
                </header>

                <div class="messages">
                    { for messages.iter().map(|message| {
                        let side = match message.sender {
                            Sender::User => "user",
                            Sender::Assistant => "assistant",
                        };
                        html! {
                            <div class={classes!("message", side)}>
                                <div class="bubble">
                                    { match message.sender {
                                        Sender::User => html! { message.content.clone() },
                                        Sender::Assistant => html! {
                                            <ChatResponse content={message.content.clone()} />
                                        },
                                    }}
                                    <div class="timestamp">
                                        { message.timestamp.format("%H:%M").to_string() }
                                    </div>
                                </div>
                            </div>
                        }
                    })}
                    if pending {
                        <div class="message assistant">
                            <div class="bubble typing">{"AI is typing..."}</div>
                        </div>
                    }
                    <div id="messages-end"></div>
                </div>

                <form class="composer" onsubmit={on_submit}>
                    <input
                        type="text"
                        placeholder="Type your message..."
                        value={(*input).clone()}
                        oninput={on_input}
                        disabled={pending}
                    />
                    <button type="submit" class="primary" disabled={pending}>
                        {"Send"}
                    </button>
                </form>
            </main>
        </div>
    }
}

fn history_row(
    chat: &crate::hooks::ChatHandle,
    summary: &ConversationSummary,
    current_chat_id: Option<&str>,
) -> Html {
    let on_open = {
        let chat = chat.clone();
        let id = summary.id.clone();
        Callback::from(move |_: MouseEvent| {
            let chat = chat.clone();
            let id = id.clone();
            wasm_bindgen_futures::spawn_local(async move {
                chat.load_conversation(&id).await;
            });
        })
    };

    let on_delete = {
        let chat = chat.clone();
        let id = summary.id.clone();
        Callback::from(move |e: MouseEvent| {
            // Don't also open the conversation being deleted
            e.stop_propagation();
            let chat = chat.clone();
            let id = id.clone();
            wasm_bindgen_futures::spawn_local(async move {
                chat.delete_conversation(&id).await;
            });
        })
    };

    let active = current_chat_id == Some(summary.id.as_str());

    html! {
        <div
            class={classes!("history-row", active.then_some("active"))}
            onclick={on_open}
        >
            <div class="history-row-body">
                <div class="history-row-title">{ summary.title.clone() }</div>
                <div class="history-row-date">
                    { summary.updated_at.format("%b %-d, %Y").to_string() }
                </div>
            </div>
            <button class="history-row-delete" title="Delete chat" onclick={on_delete}>
                {"🗑"}
            </button>
        </div>
    }
}
