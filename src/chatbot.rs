use crate::conversation::{ConversationView, Presenter};
use crate::error::StorageError;
use crate::input::CharacterCount;
use crate::knowledge::WELCOME_MESSAGE;
use crate::responder::{Reply, Responder};
use crate::status::StatusReport;
use crate::storage::KeyValueStore;
use crate::theme::{THEME_TRANSITION, ThemeStore};
use crate::types::{MessageKind, Role, ThemeMode};
use async_trait::async_trait;
use std::sync::Arc;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IgnoreReason {
    EmptyInput,
    Busy,
}

#[derive(Clone, Debug, PartialEq)]
pub enum SendOutcome {
    Ignored(IgnoreReason),
    Replied(Reply),
}

/// A message that passed the gate and is waiting for its reply.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingSend {
    pub message: String,
}

/// Event entry points a UI binds its controls to.
#[async_trait(?Send)]
pub trait ChatActions {
    async fn on_send(&mut self, text: &str) -> SendOutcome;

    async fn on_quick_action(&mut self, question: &str) -> SendOutcome {
        self.on_send(question).await
    }

    fn on_toggle_theme(&mut self, checked: bool) -> Result<ThemeMode, StorageError>;

    fn on_clear(&mut self);

    fn on_input_changed(&mut self, text: &str);
}

/// Owns one responder, the transcript and the theme preference.
pub struct Chatbot<P: Presenter, S: KeyValueStore> {
    responder: Arc<dyn Responder>,
    view: ConversationView<P>,
    theme: ThemeStore<S>,
}

impl<P: Presenter, S: KeyValueStore> Chatbot<P, S> {
    pub fn new(responder: Arc<dyn Responder>, presenter: P, store: S) -> Self {
        let theme = ThemeStore::load(store);
        let mut view = ConversationView::new(presenter, WELCOME_MESSAGE);
        let presenter = view.presenter_mut();
        presenter.apply_theme(theme.mode(), THEME_TRANSITION);
        presenter.set_character_count(CharacterCount::default());
        Self {
            responder,
            view,
            theme,
        }
    }

    /// Show the startup probe result on the status indicator.
    pub fn apply_probe(&mut self, report: &StatusReport) {
        tracing::info!(status = ?report.status, label = report.label, "chat ready");
        self.apply_status(report);
    }

    pub fn responder(&self) -> Arc<dyn Responder> {
        Arc::clone(&self.responder)
    }

    pub fn apply_status(&mut self, report: &StatusReport) {
        self.view.presenter_mut().set_status(report);
    }

    /// Gate a send: render the user message and go busy, or refuse.
    pub fn begin_send(&mut self, text: &str) -> Result<PendingSend, IgnoreReason> {
        let message = text.trim();
        if message.is_empty() {
            return Err(IgnoreReason::EmptyInput);
        }
        if self.view.is_busy() {
            tracing::debug!("send ignored while a reply is pending");
            return Err(IgnoreReason::Busy);
        }

        self.view.append_message(message, Role::User, MessageKind::Normal);
        self.view.remember(Role::User, message);
        self.view
            .presenter_mut()
            .set_character_count(CharacterCount::default());
        self.view.show_typing();

        Ok(PendingSend {
            message: message.to_string(),
        })
    }

    /// Render the reply for the pending send and go idle again.
    pub fn finish_send(&mut self, reply: &Reply) {
        self.view.append_message(&reply.content, Role::Assistant, reply.kind);
        if reply.record {
            self.view.remember(Role::Assistant, &reply.content);
        }
        if let Some(report) = &reply.status {
            self.apply_status(report);
        }
        self.view.hide_typing();
    }

    pub fn theme(&self) -> ThemeMode {
        self.theme.mode()
    }

    pub fn view(&self) -> &ConversationView<P> {
        &self.view
    }

    pub fn presenter(&self) -> &P {
        self.view.presenter()
    }

    pub fn into_store(self) -> S {
        self.theme.into_store()
    }
}

#[async_trait(?Send)]
impl<P: Presenter, S: KeyValueStore> ChatActions for Chatbot<P, S> {
    async fn on_send(&mut self, text: &str) -> SendOutcome {
        let pending = match self.begin_send(text) {
            Ok(pending) => pending,
            Err(reason) => return SendOutcome::Ignored(reason),
        };
        let reply = self.responder.respond(&pending.message).await;
        self.finish_send(&reply);
        SendOutcome::Replied(reply)
    }

    fn on_toggle_theme(&mut self, checked: bool) -> Result<ThemeMode, StorageError> {
        let result = self.theme.toggle(checked);
        if let Err(err) = &result {
            tracing::warn!(error = %err, "theme preference not saved");
        }
        let mode = self.theme.mode();
        self.view
            .presenter_mut()
            .apply_theme(mode, THEME_TRANSITION);
        result
    }

    fn on_clear(&mut self) {
        self.view.clear();
    }

    fn on_input_changed(&mut self, text: &str) {
        self.view
            .presenter_mut()
            .set_character_count(CharacterCount::of(text));
    }
}
