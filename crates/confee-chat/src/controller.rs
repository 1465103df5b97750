//! Conversation controller: owns the history and runs each turn.

use std::sync::Arc;

use confee_api::{ChatRequest, Transport};
use tokio::sync::broadcast;

use crate::{
    conversation::Conversation,
    events::{ChatEvent, SessionChangeReason},
    failure::Failure,
    handle::{BusyGuard, ChatHandle},
    message::Message,
    session::{SessionId, SessionManager},
};

/// Drives turns against a [`Transport`] and keeps the history and session
/// id consistent with their outcomes.
///
/// `submit` and `reset` take `&mut self`, so turns are serialized by
/// ownership. Other tasks observe progress through [`subscribe`](Self::subscribe)
/// and [`handle`](Self::handle).
pub struct ConversationController {
    conversation: Conversation,
    session: SessionManager,
    transport: Arc<dyn Transport>,
    event_tx: broadcast::Sender<ChatEvent>,
    handle: ChatHandle,
}

impl ConversationController {
    /// Create a controller with a fresh session
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self::with_session(transport, SessionManager::new())
    }

    /// Create a controller with a given session manager
    pub fn with_session(transport: Arc<dyn Transport>, session: SessionManager) -> Self {
        let (event_tx, _) = broadcast::channel(256);
        Self {
            conversation: Conversation::default(),
            session,
            transport,
            event_tx,
            handle: ChatHandle::new(),
        }
    }

    /// Subscribe to controller events
    pub fn subscribe(&self) -> broadcast::Receiver<ChatEvent> {
        self.event_tx.subscribe()
    }

    /// Get a cloneable handle for observing the busy flag
    pub fn handle(&self) -> ChatHandle {
        self.handle.clone()
    }

    pub fn conversation(&self) -> &Conversation {
        &self.conversation
    }

    pub fn messages(&self) -> &[Message] {
        self.conversation.messages()
    }

    /// The session id the next turn will be sent with
    pub fn session_id(&self) -> &SessionId {
        self.session.current_session_id()
    }

    pub fn is_busy(&self) -> bool {
        self.handle.is_busy()
    }

    /// Run one turn.
    ///
    /// Whitespace-only input is ignored. Otherwise exactly one user message
    /// and one assistant message are appended; failures are rendered into
    /// the assistant message and never returned.
    pub async fn submit(&mut self, text: &str) {
        let text = text.trim();
        if text.is_empty() {
            return;
        }

        self.append(Message::user(text));
        let _busy = BusyGuard::engage(self.handle.clone(), self.event_tx.clone());

        let request = ChatRequest::new(text, self.session.current_session_id().as_str());
        match self.transport.send(&request).await {
            Ok(reply) => {
                self.adopt_server_session(reply.session_id);
                self.append(Message::assistant(reply.response));
            }
            Err(err) => {
                let failure = Failure::classify(&err);
                tracing::warn!(
                    "Chat turn failed ({}) in session {}: {}",
                    failure.kind(),
                    request.session_id,
                    err
                );
                let text = failure.to_string();
                let invalidates_session = failure.invalidates_session();
                self.emit(ChatEvent::TurnFailed { failure });
                if invalidates_session {
                    let session_id = self.session.regenerate();
                    self.emit(ChatEvent::SessionChanged {
                        session_id,
                        reason: SessionChangeReason::Expired,
                    });
                }
                self.append(Message::assistant(text));
            }
        }
    }

    /// Start a new conversation: clear history, drop the busy flag and
    /// regenerate the session id, together.
    ///
    /// Must not be called while a turn is in flight; render surfaces should
    /// disable their reset action while [`is_busy`](Self::is_busy) is true.
    pub fn reset(&mut self) -> SessionId {
        self.conversation.clear();
        if self.handle.set_busy(false) {
            self.emit(ChatEvent::BusyChanged { busy: false });
        }
        let session_id = self.session.reset_for_new_conversation();
        self.emit(ChatEvent::ConversationReset {
            session_id: session_id.clone(),
        });
        session_id
    }

    fn adopt_server_session(&mut self, session_id: String) {
        if session_id.is_empty() {
            tracing::warn!(
                "Reply carried an empty session id, keeping {}",
                self.session.current_session_id()
            );
            return;
        }
        let session_id = SessionId::from(session_id);
        if self.session.adopt(session_id.clone()) {
            self.emit(ChatEvent::SessionChanged {
                session_id,
                reason: SessionChangeReason::Server,
            });
        }
    }

    fn append(&mut self, message: Message) {
        self.conversation.push(message.clone());
        self.emit(ChatEvent::MessageAppended { message });
    }

    fn emit(&self, event: ChatEvent) {
        let _ = self.event_tx.send(event);
    }
}
