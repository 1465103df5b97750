//! Conversation history: the ordered, append-only list of messages.

use crate::message::{Message, Role};

/// Conversation history for one session. Insertion order is display order.
#[derive(Debug, Clone, Default)]
pub struct Conversation {
    messages: Vec<Message>,
}

impl Conversation {
    /// All messages, oldest first
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Most recent message with the given role
    pub fn last_by(&self, role: Role) -> Option<&Message> {
        self.messages.iter().rev().find(|m| m.role() == role)
    }

    /// Number of messages with the given role
    pub fn count(&self, role: Role) -> usize {
        self.messages.iter().filter(|m| m.role() == role).count()
    }

    pub(crate) fn push(&mut self, message: Message) {
        self.messages.push(message);
    }

    pub(crate) fn clear(&mut self) {
        self.messages.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_preserves_order() {
        let mut c = Conversation::default();
        c.push(Message::user("q1"));
        c.push(Message::assistant("a1"));
        c.push(Message::user("q2"));

        let contents: Vec<&str> = c.messages().iter().map(|m| m.content()).collect();
        assert_eq!(contents, ["q1", "a1", "q2"]);
        assert_eq!(c.count(Role::User), 2);
        assert_eq!(c.last_by(Role::Assistant).map(|m| m.content()), Some("a1"));
    }

    #[test]
    fn test_clear_empties_history() {
        let mut c = Conversation::default();
        c.push(Message::user("q1"));
        c.clear();
        assert!(c.is_empty());
        assert!(c.last_by(Role::User).is_none());
    }
}
