use crate::chatbot::Chatbot;
use crate::config::ChatConfig;
use crate::conversation::{Presenter, RenderedEntry};
use crate::input::CharacterCount;
use crate::responder::{Responder, build_responder};
use crate::status::StatusReport;
use crate::theme::{TRANSITION_CSS, theme_definition};
use crate::types::ThemeMode;
use crate::views::{ChatView, HeaderBar};
use dioxus::prelude::*;
use std::time::Duration;

#[cfg(not(target_arch = "wasm32"))]
use crate::storage::FileStore as PreferenceStore;
#[cfg(target_arch = "wasm32")]
use crate::storage::MemoryStore as PreferenceStore;

const SCROLL_SCRIPT: &str = r#"
const list = document.getElementById('chatMessages');
if (list) { list.scrollTop = list.scrollHeight; }
"#;

pub type AppChatbot = Chatbot<SignalPresenter, PreferenceStore>;

#[cfg(not(target_arch = "wasm32"))]
fn preference_store(config: &ChatConfig) -> PreferenceStore {
    PreferenceStore::new(config.data_dir.clone())
}

#[cfg(target_arch = "wasm32")]
fn preference_store(_config: &ChatConfig) -> PreferenceStore {
    PreferenceStore::new()
}

/// Presenter backed by component signals.
#[derive(Clone, Copy, PartialEq)]
pub struct SignalPresenter {
    pub entries: Signal<Vec<RenderedEntry>>,
    pub typing: Signal<bool>,
    pub send_enabled: Signal<bool>,
    pub status: Signal<StatusReport>,
    pub theme: Signal<ThemeMode>,
    pub transitioning: Signal<bool>,
    pub char_count: Signal<CharacterCount>,
}

impl Presenter for SignalPresenter {
    fn append_entry(&mut self, entry: &RenderedEntry) {
        self.entries.with_mut(|entries| entries.push(entry.clone()));
    }

    fn truncate_to_welcome(&mut self) {
        self.entries.with_mut(|entries| entries.truncate(1));
    }

    fn set_typing(&mut self, visible: bool) {
        self.typing.set(visible);
    }

    fn set_send_enabled(&mut self, enabled: bool) {
        self.send_enabled.set(enabled);
    }

    fn schedule_scroll(&mut self, after: Duration) {
        spawn(async move {
            tokio::time::sleep(after).await;
            let _ = document::eval(SCROLL_SCRIPT);
        });
    }

    fn set_status(&mut self, report: &StatusReport) {
        self.status.set(report.clone());
    }

    fn apply_theme(&mut self, mode: ThemeMode, transition: Duration) {
        self.theme.set(mode);
        self.transitioning.set(true);
        let mut flag = self.transitioning;
        spawn(async move {
            tokio::time::sleep(transition).await;
            flag.set(false);
        });
    }

    fn set_character_count(&mut self, count: CharacterCount) {
        self.char_count.set(count);
    }
}

#[component]
pub fn App() -> Element {
    let config = use_context::<ChatConfig>();
    let presenter = SignalPresenter {
        entries: use_signal(Vec::new),
        typing: use_signal(|| false),
        send_enabled: use_signal(|| true),
        status: use_signal(StatusReport::default),
        theme: use_signal(ThemeMode::default),
        transitioning: use_signal(|| false),
        char_count: use_signal(CharacterCount::default),
    };
    let chatbot = use_signal(|| {
        Chatbot::new(
            build_responder(&config),
            presenter,
            preference_store(&config),
        )
    });

    use_status_probe(chatbot);

    let theme = presenter.theme;
    let transitioning = presenter.transitioning;
    let root_class = if transitioning() {
        "app theme-transition"
    } else {
        "app"
    };

    rsx! {
        ThemeStyles { theme }
        div { class: root_class, "data-theme": theme().as_str(),
            HeaderBar { chatbot, presenter }
            ChatView { chatbot, presenter }
        }
    }
}

fn use_status_probe(chatbot: Signal<AppChatbot>) {
    use_hook(move || {
        let responder = chatbot.peek().responder();
        let mut chatbot = chatbot;
        spawn(async move {
            let report = responder.probe().await;
            chatbot.with_mut(|bot| bot.apply_probe(&report));
        });
    });
}

#[component]
fn ThemeStyles(theme: Signal<ThemeMode>) -> Element {
    let definition = theme_definition(theme());
    rsx! {
        style { dangerous_inner_html: "{definition.css}" }
        style { dangerous_inner_html: "{TRANSITION_CSS}" }
    }
}
