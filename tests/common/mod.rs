#![allow(dead_code)]

use async_trait::async_trait;
use projble::conversation::{Presenter, RenderedEntry};
use projble::input::CharacterCount;
use projble::responder::{Reply, Responder};
use projble::status::StatusReport;
use projble::types::ThemeMode;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

/// Presenter that remembers everything it was told.
#[derive(Default)]
pub struct RecordingPresenter {
    pub entries: Vec<RenderedEntry>,
    pub typing: bool,
    pub send_enabled: bool,
    pub scrolls: usize,
    pub statuses: Vec<StatusReport>,
    pub themes: Vec<(ThemeMode, Duration)>,
    pub char_count: CharacterCount,
}

impl RecordingPresenter {
    pub fn last_status(&self) -> Option<&StatusReport> {
        self.statuses.last()
    }

    pub fn last_entry(&self) -> &RenderedEntry {
        self.entries.last().expect("no entries rendered")
    }
}

impl Presenter for RecordingPresenter {
    fn append_entry(&mut self, entry: &RenderedEntry) {
        self.entries.push(entry.clone());
    }

    fn truncate_to_welcome(&mut self) {
        self.entries.truncate(1);
    }

    fn set_typing(&mut self, visible: bool) {
        self.typing = visible;
    }

    fn set_send_enabled(&mut self, enabled: bool) {
        self.send_enabled = enabled;
    }

    fn schedule_scroll(&mut self, _after: Duration) {
        self.scrolls += 1;
    }

    fn set_status(&mut self, report: &StatusReport) {
        self.statuses.push(report.clone());
    }

    fn apply_theme(&mut self, mode: ThemeMode, transition: Duration) {
        self.themes.push((mode, transition));
    }

    fn set_character_count(&mut self, count: CharacterCount) {
        self.char_count = count;
    }
}

/// Responder that counts calls and echoes the message back.
#[derive(Default)]
pub struct CountingResponder {
    calls: AtomicUsize,
    seen: Mutex<Vec<String>>,
}

impl CountingResponder {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn seen(&self) -> Vec<String> {
        self.seen.lock().unwrap().clone()
    }
}

#[async_trait]
impl Responder for CountingResponder {
    async fn respond(&self, message: &str) -> Reply {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.seen.lock().unwrap().push(message.to_string());
        Reply::normal(format!("echo: {message}"))
    }

    async fn probe(&self) -> StatusReport {
        StatusReport::ready()
    }
}
