use crate::error::StorageError;
use crate::storage::KeyValueStore;
use crate::types::ThemeMode;
use std::time::Duration;

pub const THEME_STORAGE_KEY: &str = "projble-theme";

/// How long the `theme-transition` class stays on the body after a switch.
pub const THEME_TRANSITION: Duration = Duration::from_millis(300);

/// Persisted light/dark preference.
pub struct ThemeStore<S: KeyValueStore> {
    store: S,
    mode: ThemeMode,
}

impl<S: KeyValueStore> ThemeStore<S> {
    /// Read the saved preference, falling back to light.
    pub fn load(store: S) -> Self {
        let mode = match store.get(THEME_STORAGE_KEY) {
            Some(raw) => ThemeMode::parse(&raw).unwrap_or_else(|| {
                tracing::warn!(value = %raw.trim(), "ignoring unknown saved theme");
                ThemeMode::Light
            }),
            None => ThemeMode::Light,
        };
        Self { store, mode }
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    /// Apply the toggle switch state (checked means dark) and persist it.
    ///
    /// The in-memory mode changes even when the write fails.
    pub fn toggle(&mut self, checked: bool) -> Result<ThemeMode, StorageError> {
        self.mode = ThemeMode::from_checked(checked);
        self.store.set(THEME_STORAGE_KEY, self.mode.as_str())?;
        Ok(self.mode)
    }

    pub fn into_store(self) -> S {
        self.store
    }
}

pub struct ThemeDefinition {
    pub css: &'static str,
    pub toggle_checked: bool,
}

pub fn theme_definition(mode: ThemeMode) -> ThemeDefinition {
    match mode {
        ThemeMode::Light => ThemeDefinition {
            css: LIGHT_THEME,
            toggle_checked: false,
        },
        ThemeMode::Dark => ThemeDefinition {
            css: DARK_THEME,
            toggle_checked: true,
        },
    }
}

/// Shared rule enabling colour transitions while a switch is in flight.
pub const TRANSITION_CSS: &str = r#"
.theme-transition * {
    transition: background-color 0.3s ease, color 0.3s ease, border-color 0.3s ease !important;
}
@media (prefers-reduced-motion: reduce) {
    * {
        animation-duration: 0.01ms !important;
        animation-iteration-count: 1 !important;
        transition-duration: 0.01ms !important;
    }
}
"#;

const LIGHT_THEME: &str = r#"
:root {
    --bg-primary: #f4f7fb;
    --glass-bg: rgba(255, 255, 255, 0.7);
    --glass-border: rgba(255, 255, 255, 0.4);
    --text-primary: #1f2937;
    --text-muted: #6b7280;
    --user-bubble: #4f46e5;
    --user-text: #ffffff;
    --bot-bubble: rgba(255, 255, 255, 0.85);
    --bot-text: #1f2937;
    --shadow: rgba(31, 41, 55, 0.12);
    --status-online: #10b981;
    --status-warning: #f59e0b;
    --status-offline: #ef4444;
}
body { background: var(--bg-primary); color: var(--text-primary); }
.user-message .message-text { background: var(--user-bubble); color: var(--user-text); }
.bot-message .message-text { background: var(--bot-bubble); color: var(--bot-text); }
"#;

const DARK_THEME: &str = r#"
:root {
    --bg-primary: #0f172a;
    --glass-bg: rgba(15, 23, 42, 0.7);
    --glass-border: rgba(148, 163, 184, 0.2);
    --text-primary: #e2e8f0;
    --text-muted: #94a3b8;
    --user-bubble: #6366f1;
    --user-text: #ffffff;
    --bot-bubble: rgba(30, 41, 59, 0.85);
    --bot-text: #e2e8f0;
    --shadow: rgba(0, 0, 0, 0.45);
    --status-online: #34d399;
    --status-warning: #fbbf24;
    --status-offline: #f87171;
}
body { background: var(--bg-primary); color: var(--text-primary); }
.user-message .message-text { background: var(--user-bubble); color: var(--user-text); }
.bot-message .message-text { background: var(--bot-bubble); color: var(--bot-text); }
"#;
