//! Optional cover-letter generation via a chat-completion API.

pub mod client;
pub mod handlers;
pub mod prompts;
