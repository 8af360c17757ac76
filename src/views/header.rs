use crate::chatbot::ChatActions;
use crate::ui::{AppChatbot, SignalPresenter};
use dioxus::prelude::*;

#[component]
pub fn HeaderBar(chatbot: Signal<AppChatbot>, presenter: SignalPresenter) -> Element {
    let mut chatbot = chatbot;
    let status = presenter.status;
    let theme = presenter.theme;
    let report = status();
    let dot_style = report.style();

    rsx! {
        div { class: "header",
            div { class: "header-content",
                div { class: "brand",
                    h1 { class: "brand-title", "PROJ-BLE Assistant" }
                    div { class: "status",
                        span { id: "statusDot", class: "status-dot", style: "{dot_style}" }
                        span { id: "statusText", class: "status-text", "{report.label}" }
                    }
                }
                div { class: "header-actions",
                    button {
                        class: "btn btn-ghost",
                        r#type: "button",
                        title: "Clear chat",
                        onclick: move |_| chatbot.with_mut(|bot| bot.on_clear()),
                        "Clear"
                    }
                    label { class: "theme-toggle", title: "Toggle theme",
                        input {
                            id: "themeToggle",
                            r#type: "checkbox",
                            checked: theme().is_dark(),
                            onchange: move |_| {
                                chatbot.with_mut(|bot| {
                                    let checked = !bot.theme().is_dark();
                                    bot.on_toggle_theme(checked).ok();
                                });
                            },
                        }
                        span { class: "toggle-slider" }
                    }
                }
            }
        }
    }
}
