//! Session identity: the live server-side conversation id and its lifecycle.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Opaque token correlating client turns into one server-side conversation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(String);

impl SessionId {
    /// Generate a fresh id.
    ///
    /// Format is `<uuid-v4>-<8 hex chars>`, 45 characters in total. The backend
    /// rejects runtime session ids shorter than 33 characters, so a bare
    /// simple-format uuid is not enough.
    pub fn generate() -> Self {
        let suffix = Uuid::new_v4().simple().to_string();
        Self(format!("{}-{}", Uuid::new_v4(), &suffix[..8]))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for SessionId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for SessionId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for SessionId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Owns the single live [`SessionId`].
///
/// An id exists from construction on. It is only ever replaced wholesale:
/// by [`regenerate`](Self::regenerate) on session-invalidating failures and
/// resets, or by [`adopt`](Self::adopt) when the server hands back its own.
#[derive(Debug, Clone)]
pub struct SessionManager {
    current: SessionId,
}

impl SessionManager {
    /// Create a manager with a freshly generated id
    pub fn new() -> Self {
        Self {
            current: SessionId::generate(),
        }
    }

    /// Create a manager continuing a known session
    pub fn with_session_id(id: impl Into<SessionId>) -> Self {
        Self { current: id.into() }
    }

    /// The live session id
    pub fn current_session_id(&self) -> &SessionId {
        &self.current
    }

    /// Replace the live id with a newly generated one and return it
    pub fn regenerate(&mut self) -> SessionId {
        self.current = SessionId::generate();
        tracing::debug!("Regenerated session id: {}", self.current);
        self.current.clone()
    }

    /// Start over for a new conversation
    pub fn reset_for_new_conversation(&mut self) -> SessionId {
        self.regenerate()
    }

    /// Overwrite the live id with one supplied by the server.
    /// Returns `true` if the id changed.
    pub fn adopt(&mut self, id: SessionId) -> bool {
        if id == self.current {
            return false;
        }
        tracing::debug!("Adopting server session id: {}", id);
        self.current = id;
        true
    }
}

impl Default for SessionManager {
    fn default() -> Self {
        Self::new()
    }
}
