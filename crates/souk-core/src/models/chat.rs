//! Chat model definition and related functionality.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::ChatKind;

/// A conversation in the chat list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Chat {
    /// Unique identifier for the chat
    pub id: String,

    /// Direct or group conversation
    #[serde(rename = "type", default)]
    pub kind: ChatKind,

    /// Contact or group name
    pub name: String,

    /// Avatar URL
    pub avatar: String,

    /// Preview of the most recent message
    pub last_message: String,

    /// When the most recent message was sent (UTC)
    pub timestamp: Timestamp,

    /// Messages not yet read
    #[serde(default)]
    pub unread_count: u32,

    /// Product shared in this conversation, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shared_product: Option<String>,
}

impl Chat {
    /// Whether this chat is a one-to-one conversation.
    pub fn is_direct(&self) -> bool {
        self.kind == ChatKind::Direct
    }

    /// First word of the chat name, used on member chips.
    pub fn first_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or(&self.name)
    }
}
