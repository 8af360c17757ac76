//! Integration tests for the chat controller
//!
//! Covers send gating, transcript bookkeeping, clearing and theme toggling
//! through the same entry points the UI uses.

mod common;

use common::{CountingResponder, RecordingPresenter};
use projble::chatbot::{ChatActions, Chatbot, IgnoreReason, SendOutcome};
use projble::knowledge::{KNOWLEDGE_BASE, Topic};
use projble::responder::{LocalResponder, Responder};
use projble::status::StatusReport;
use projble::storage::MemoryStore;
use projble::theme::THEME_TRANSITION;
use projble::types::{MessageKind, Role, ThemeMode};
use std::sync::Arc;

fn counting_bot() -> (Arc<CountingResponder>, Chatbot<RecordingPresenter, MemoryStore>) {
    let responder = Arc::new(CountingResponder::default());
    let bot = Chatbot::new(
        responder.clone(),
        RecordingPresenter::default(),
        MemoryStore::new(),
    );
    (responder, bot)
}

mod send_tests {
    use super::*;

    #[tokio::test]
    async fn test_send_renders_user_and_reply() {
        let (responder, mut bot) = counting_bot();

        let outcome = bot.on_send("  What is blended learning?  ").await;

        assert!(matches!(outcome, SendOutcome::Replied(_)));
        assert_eq!(
            responder.seen(),
            vec!["What is blended learning?".to_string()]
        );

        let entries = &bot.presenter().entries;
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[1].role, Role::User);
        assert_eq!(entries[1].html, "What is blended learning?");
        assert_eq!(entries[2].role, Role::Assistant);
        assert_eq!(entries[2].html, "echo: What is blended learning?");

        let history = bot.view().history();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].role, Role::User);
        assert_eq!(history[1].role, Role::Assistant);
        assert!(!bot.view().is_busy());
        assert!(bot.presenter().send_enabled);
    }

    #[tokio::test]
    async fn test_blank_input_is_ignored() {
        let (responder, mut bot) = counting_bot();

        for blank in ["", "   ", "\n\t "] {
            assert_eq!(
                bot.on_send(blank).await,
                SendOutcome::Ignored(IgnoreReason::EmptyInput)
            );
        }

        assert_eq!(responder.calls(), 0);
        assert_eq!(bot.presenter().entries.len(), 1);
        assert!(bot.view().history().is_empty());
    }

    #[tokio::test]
    async fn test_second_send_while_pending_is_rejected() {
        let (responder, mut bot) = counting_bot();

        let pending = bot.begin_send("first").expect("first send accepted");
        assert!(bot.view().is_busy());
        assert!(bot.presenter().typing);
        assert!(!bot.presenter().send_enabled);

        assert_eq!(bot.begin_send("second"), Err(IgnoreReason::Busy));
        assert_eq!(
            bot.on_send("third").await,
            SendOutcome::Ignored(IgnoreReason::Busy)
        );
        assert_eq!(
            bot.on_quick_action("What is PROJ-BLE's mission?").await,
            SendOutcome::Ignored(IgnoreReason::Busy)
        );
        assert_eq!(responder.calls(), 0);

        let reply = bot.responder().respond(&pending.message).await;
        bot.finish_send(&reply);
        assert_eq!(responder.calls(), 1);
        assert!(!bot.view().is_busy());

        assert!(matches!(bot.on_send("fourth").await, SendOutcome::Replied(_)));
        assert_eq!(responder.calls(), 2);
        assert_eq!(
            responder.seen(),
            vec!["first".to_string(), "fourth".to_string()]
        );
    }

    #[tokio::test]
    async fn test_accepted_send_resets_character_count() {
        let (_, mut bot) = counting_bot();
        bot.on_input_changed("hello there");
        assert_eq!(bot.presenter().char_count.label(), "11/500");

        bot.on_send("hello there").await;
        assert_eq!(bot.presenter().char_count.label(), "0/500");
    }

    #[tokio::test]
    async fn test_local_responder_quick_action() {
        let mut bot = Chatbot::new(
            Arc::new(LocalResponder::instant()),
            RecordingPresenter::default(),
            MemoryStore::new(),
        );

        let outcome = bot.on_quick_action("What are PROJ-BLE's core values?").await;

        let values = KNOWLEDGE_BASE
            .iter()
            .find(|entry| entry.topic == Topic::Values)
            .unwrap();
        match outcome {
            SendOutcome::Replied(reply) => {
                assert_eq!(reply.content, values.answer);
                assert_eq!(reply.kind, MessageKind::Normal);
            }
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_startup_probe_reports_ready_for_local_responder() {
        let mut bot = Chatbot::new(
            Arc::new(LocalResponder::instant()),
            RecordingPresenter::default(),
            MemoryStore::new(),
        );
        let report = bot.responder().probe().await;
        bot.apply_probe(&report);
        assert_eq!(bot.presenter().last_status(), Some(&StatusReport::ready()));
    }
}

mod clear_tests {
    use super::*;

    #[tokio::test]
    async fn test_clear_keeps_only_welcome() {
        let (_, mut bot) = counting_bot();
        for n in 0..4 {
            bot.on_send(&format!("question {n}")).await;
        }
        assert_eq!(bot.presenter().entries.len(), 9);

        bot.on_clear();

        assert_eq!(bot.presenter().entries.len(), 1);
        assert_eq!(bot.view().rendered_len(), 1);
        assert!(bot.view().history().is_empty());
        assert!(bot.presenter().entries[0].html.contains("PROJ-BLE"));
    }

    #[test]
    fn test_clear_on_fresh_transcript() {
        let (_, mut bot) = counting_bot();
        bot.on_clear();
        assert_eq!(bot.presenter().entries.len(), 1);
    }
}

mod theme_tests {
    use super::*;

    #[test]
    fn test_initial_theme_is_applied() {
        let (_, bot) = counting_bot();
        assert_eq!(bot.theme(), ThemeMode::Light);
        assert_eq!(
            bot.presenter().themes,
            vec![(ThemeMode::Light, THEME_TRANSITION)]
        );
    }

    #[test]
    fn test_toggle_persists_across_reload() {
        let (responder, mut bot) = counting_bot();
        assert_eq!(bot.on_toggle_theme(true).unwrap(), ThemeMode::Dark);
        assert_eq!(
            bot.presenter().themes.last(),
            Some(&(ThemeMode::Dark, THEME_TRANSITION))
        );

        let store = bot.into_store();
        let reloaded = Chatbot::new(responder, RecordingPresenter::default(), store);
        assert_eq!(reloaded.theme(), ThemeMode::Dark);
        assert_eq!(reloaded.presenter().themes[0].0, ThemeMode::Dark);
    }
}
