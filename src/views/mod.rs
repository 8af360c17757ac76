pub mod chat;
pub mod header;

pub use chat::ChatView;
pub use header::HeaderBar;
