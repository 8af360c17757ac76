//! Chat widget core for the PROJ-BLE website.
//!
//! The [`chatbot::Chatbot`] owns a [`responder::Responder`], the
//! conversation view and the theme preference. UI layers implement
//! [`conversation::Presenter`] and call the [`chatbot::ChatActions`] entry
//! points; the optional Dioxus front end in `ui` does exactly that.

pub mod chatbot;
pub mod config;
pub mod conversation;
pub mod error;
pub mod input;
pub mod knowledge;
pub mod markup;
pub mod responder;
pub mod status;
pub mod storage;
pub mod theme;
pub mod types;

#[cfg(feature = "dioxus")]
pub mod ui;
#[cfg(feature = "dioxus")]
pub mod views;
