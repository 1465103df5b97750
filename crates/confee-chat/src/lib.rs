//! confee-chat: Conversation controller and session lifecycle
//!
//! This crate owns the client-side state of a chat: the message history,
//! the live session id, and the busy flag, and it turns every transport
//! outcome into exactly one assistant message.

pub mod controller;
pub mod conversation;
pub mod events;
pub mod failure;
pub mod handle;
pub mod message;
pub mod prompts;
pub mod session;

pub use controller::ConversationController;
pub use conversation::Conversation;
pub use events::{ChatEvent, SessionChangeReason};
pub use failure::Failure;
pub use handle::ChatHandle;
pub use message::{Message, Role};
pub use prompts::{PromptCategory, SuggestedPrompt, find_prompt, suggested_prompts};
pub use session::{SessionId, SessionManager};
