use crate::chatbot::ChatActions;
use crate::conversation::RenderedEntry;
use crate::input::MAX_MESSAGE_CHARS;
use crate::knowledge::QUICK_ACTIONS;
use crate::responder::Responder;
use crate::types::Role;
use crate::ui::{AppChatbot, SignalPresenter};
use dioxus::events::Key;
use dioxus::prelude::*;

fn avatar_icon(role: Role) -> &'static str {
    match role {
        Role::User => "fas fa-user",
        Role::Assistant => "fas fa-robot",
    }
}

#[component]
pub fn ChatView(chatbot: Signal<AppChatbot>, presenter: SignalPresenter) -> Element {
    let mut input = use_signal(String::new);
    let mut chatbot = chatbot;

    // The write borrow on the chatbot is released before awaiting the reply.
    let mut send_message = move |text: String| {
        let pending = match chatbot.with_mut(|bot| bot.begin_send(&text)) {
            Ok(pending) => pending,
            Err(reason) => {
                tracing::debug!(?reason, "send ignored");
                return;
            }
        };
        input.set(String::new());
        let responder = chatbot.peek().responder();
        spawn(async move {
            let reply = responder.respond(&pending.message).await;
            chatbot.with_mut(|bot| bot.finish_send(&reply));
        });
    };

    let entries = presenter.entries;
    let typing = presenter.typing;
    let send_enabled = presenter.send_enabled;
    let char_count = presenter.char_count;
    let count = char_count();
    let count_label = count.label();
    let count_style = format!("color: {};", count.color());

    rsx! {
        div { class: "chat-container",
            div { id: "chatMessages", class: "chat-messages",
                for (i, entry) in entries().into_iter().enumerate() {
                    MessageBubble { key: "{i}", entry }
                }
                if typing() {
                    div { id: "typingIndicator", class: "typing-indicator",
                        div { class: "message-avatar", i { class: "fas fa-robot" } }
                        div { class: "typing-dots",
                            span {}
                            span {}
                            span {}
                        }
                    }
                }
            }

            div { class: "quick-actions",
                for action in QUICK_ACTIONS.iter() {
                    button {
                        class: "quick-action-btn",
                        r#type: "button",
                        disabled: !send_enabled(),
                        onclick: move |_| send_message(action.question.to_string()),
                        "{action.label}"
                    }
                }
            }

            form { class: "input-area",
                div { class: "input-wrapper",
                    textarea {
                        id: "messageInput",
                        rows: "1",
                        maxlength: "{MAX_MESSAGE_CHARS}",
                        placeholder: "Ask me about PROJ-BLE...",
                        value: "{input}",
                        oninput: move |ev| {
                            let value = ev.value();
                            chatbot.with_mut(|bot| bot.on_input_changed(&value));
                            input.set(value);
                        },
                        onkeydown: move |ev| {
                            if ev.key() == Key::Enter && !ev.modifiers().shift() {
                                ev.prevent_default();
                                send_message(input());
                            }
                        },
                        autofocus: true,
                    }
                    span {
                        id: "characterCount",
                        class: "character-count",
                        style: "{count_style}",
                        "{count_label}"
                    }
                    button {
                        id: "sendButton",
                        class: "btn btn-primary",
                        r#type: "button",
                        disabled: !send_enabled() || input().trim().is_empty(),
                        onclick: move |_| send_message(input()),
                        "Send"
                    }
                }
            }
        }
    }
}

#[component]
fn MessageBubble(entry: RenderedEntry) -> Element {
    let text_class = if entry.is_error() {
        "message-text message-error"
    } else {
        "message-text"
    };
    rsx! {
        div { class: format_args!("message {}", entry.role.css_class()),
            div { class: "message-avatar", i { class: avatar_icon(entry.role) } }
            div { class: "message-content",
                div { class: text_class, dangerous_inner_html: "{entry.html}" }
                div { class: "message-time", "{entry.time_label}" }
            }
        }
    }
}
