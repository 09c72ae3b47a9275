//! Message types for conversation history.

use crate::Role;
use serde::{Deserialize, Serialize};

/// One text turn in a conversation.
///
/// # Examples
///
/// ```
/// use ideablog_core::{Message, Role};
///
/// let message = Message::user("<draft>hello</draft>");
/// assert_eq!(message.role, Role::User);
/// assert_eq!(message.content, "<draft>hello</draft>");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Message {
    /// The role of the message sender
    pub role: Role,
    /// The text of the turn
    pub content: String,
}

impl Message {
    /// Create a message with an explicit role.
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    /// Create a system message.
    pub fn system(content: impl Into<String>) -> Self {
        Self::new(Role::System, content)
    }

    /// Create a user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }

    /// Create an assistant (model) message.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Role::Assistant, content)
    }
}
