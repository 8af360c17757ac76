//! Transcript rendering and the busy/typing state.
//!
//! The view never touches UI elements itself. Everything visible goes through
//! a [`Presenter`], so the Dioxus front end and the test doubles share one
//! code path.

use crate::input::CharacterCount;
use crate::markup::{format_error, format_message};
use crate::status::StatusReport;
use crate::types::{ChatMessage, MessageKind, Role, ThemeMode};
use std::time::Duration;
use time::{OffsetDateTime, UtcOffset, format_description::FormatItem, macros::format_description};

/// Delay before scrolling so the new bubble has been laid out.
pub const SCROLL_SETTLE_DELAY: Duration = Duration::from_millis(100);

const MESSAGE_TIME_FORMAT: &[FormatItem<'static>] =
    format_description!("[hour repr:12 padding:zero]:[minute padding:zero] [period case:upper]");

/// One bubble ready for display.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderedEntry {
    pub role: Role,
    pub kind: MessageKind,
    pub html: String,
    pub time_label: String,
}

impl RenderedEntry {
    pub fn render(content: &str, role: Role, kind: MessageKind, at: OffsetDateTime) -> Self {
        let html = match kind {
            MessageKind::Error => format_error(content),
            MessageKind::Normal => format_message(content),
        };
        Self {
            role,
            kind,
            html,
            time_label: local_time_label(at),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self.kind, MessageKind::Error)
    }
}

/// Everything the chat core needs from the UI layer.
pub trait Presenter {
    fn append_entry(&mut self, entry: &RenderedEntry);
    /// Drop every rendered entry after the welcome entry.
    fn truncate_to_welcome(&mut self);
    fn set_typing(&mut self, visible: bool);
    fn set_send_enabled(&mut self, enabled: bool);
    /// Scroll to the newest entry once `after` has elapsed.
    fn schedule_scroll(&mut self, after: Duration);
    fn set_status(&mut self, report: &StatusReport);
    /// Switch theme and keep the transition class on for `transition`.
    fn apply_theme(&mut self, mode: ThemeMode, transition: Duration);
    fn set_character_count(&mut self, count: CharacterCount);
}

pub fn format_clock(datetime: OffsetDateTime) -> String {
    datetime.format(MESSAGE_TIME_FORMAT).unwrap_or_default()
}

/// `hh:mm AM` in the local zone, or UTC when the offset is unknown.
pub fn local_time_label(timestamp: OffsetDateTime) -> String {
    let mut datetime = timestamp;
    if let Ok(offset) = UtcOffset::current_local_offset() {
        datetime = datetime.to_offset(offset);
    }
    format_clock(datetime)
}

pub struct ConversationView<P: Presenter> {
    presenter: P,
    history: Vec<ChatMessage>,
    rendered: usize,
    busy: bool,
}

impl<P: Presenter> ConversationView<P> {
    /// Render the welcome entry and start idle.
    pub fn new(mut presenter: P, welcome: &str) -> Self {
        let entry = RenderedEntry::render(
            welcome,
            Role::Assistant,
            MessageKind::Normal,
            OffsetDateTime::now_utc(),
        );
        presenter.append_entry(&entry);
        presenter.set_typing(false);
        presenter.set_send_enabled(true);
        Self {
            presenter,
            history: Vec::new(),
            rendered: 1,
            busy: false,
        }
    }

    pub fn append_message(
        &mut self,
        content: &str,
        role: Role,
        kind: MessageKind,
    ) -> RenderedEntry {
        let entry = RenderedEntry::render(content, role, kind, OffsetDateTime::now_utc());
        self.presenter.append_entry(&entry);
        self.rendered += 1;
        self.presenter.schedule_scroll(SCROLL_SETTLE_DELAY);
        entry
    }

    /// Record a message in the in-memory history.
    pub fn remember(&mut self, role: Role, content: &str) {
        self.history.push(ChatMessage::new(role, content));
    }

    pub fn show_typing(&mut self) {
        self.busy = true;
        self.presenter.set_typing(true);
        self.presenter.set_send_enabled(false);
        self.presenter.schedule_scroll(SCROLL_SETTLE_DELAY);
    }

    pub fn hide_typing(&mut self) {
        self.busy = false;
        self.presenter.set_typing(false);
        self.presenter.set_send_enabled(true);
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn clear(&mut self) {
        self.presenter.truncate_to_welcome();
        self.rendered = 1;
        self.history.clear();
    }

    pub fn history(&self) -> &[ChatMessage] {
        &self.history
    }

    /// Rendered entries, welcome included.
    pub fn rendered_len(&self) -> usize {
        self.rendered
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }
}
