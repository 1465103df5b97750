//! Controller event types

use serde::{Deserialize, Serialize};

use crate::failure::Failure;
use crate::message::Message;
use crate::session::SessionId;

/// Why the live session id changed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionChangeReason {
    /// The server returned a different id in a successful reply
    Server,
    /// The server reported the session expired; a new id was generated
    Expired,
}

/// Events emitted by the conversation controller
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ChatEvent {
    /// A message was appended to the history
    MessageAppended { message: Message },

    /// The busy flag changed
    BusyChanged { busy: bool },

    /// The transport call failed; the rendered error message follows
    TurnFailed { failure: Failure },

    /// The live session id was replaced
    SessionChanged {
        session_id: SessionId,
        reason: SessionChangeReason,
    },

    /// History was cleared and a new session started
    ConversationReset { session_id: SessionId },
}
