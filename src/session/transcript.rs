//! Append-only message transcript

use std::fmt;

/// Who produced a transcript entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Bot,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::User => f.write_str("user"),
            Role::Bot => f.write_str("bot"),
        }
    }
}

/// One transcript entry. Fields are private so an entry cannot change after
/// it is created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    role: Role,
    content: String,
}

impl Message {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn bot(content: impl Into<String>) -> Self {
        Self {
            role: Role::Bot,
            content: content.into(),
        }
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

/// Ordered sequence of messages for one session
///
/// There is no removal or reordering API: display order is insertion order.
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    messages: Vec<Message>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, message: Message) {
        tracing::trace!(role = %message.role, index = self.messages.len(), "Transcript append");
        self.messages.push(message);
    }

    pub fn all(&self) -> &[Message] {
        &self.messages
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_preserves_insertion_order() {
        let mut transcript = Transcript::new();
        transcript.append(Message::user("Weather in Paris?"));
        transcript.append(Message::bot("Sunny, 21°C"));
        transcript.append(Message::user("And Oslo?"));

        let roles: Vec<_> = transcript.all().iter().map(Message::role).collect();
        assert_eq!(roles, vec![Role::User, Role::Bot, Role::User]);
        assert_eq!(transcript.all()[1].content(), "Sunny, 21°C");
        assert_eq!(transcript.last().map(Message::content), Some("And Oslo?"));
    }

    #[test]
    fn test_empty_transcript() {
        let transcript = Transcript::new();
        assert!(transcript.is_empty());
        assert_eq!(transcript.len(), 0);
        assert!(transcript.last().is_none());
    }

    #[test]
    fn test_content_kept_verbatim() {
        let msg = Message::user("  padded  ");
        assert_eq!(msg.content(), "  padded  ");
        assert_eq!(msg.role(), Role::User);
    }
}
