//! Enumerations for chat kinds, item conditions and navigation tabs.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Whether a chat is a one-to-one conversation or a group.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ChatKind {
    /// One-to-one conversation with a single contact
    #[default]
    Direct,

    /// Conversation with several members
    Group,
}

impl FromStr for ChatKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "direct" => Ok(ChatKind::Direct),
            "group" => Ok(ChatKind::Group),
            _ => Err(format!("Invalid chat kind: {s}")),
        }
    }
}

impl ChatKind {
    /// Convert to the catalog string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            ChatKind::Direct => "direct",
            ChatKind::Group => "group",
        }
    }
}

/// Physical condition of an item offered for sale.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Condition {
    /// Never used
    #[default]
    New,

    /// Used, no visible wear
    LikeNew,

    /// Used, minor wear
    Good,

    /// Used, noticeable wear
    Fair,
}

impl FromStr for Condition {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "new" => Ok(Condition::New),
            "like-new" | "like_new" | "likenew" => Ok(Condition::LikeNew),
            "good" => Ok(Condition::Good),
            "fair" => Ok(Condition::Fair),
            _ => Err(format!("Invalid condition: {s}")),
        }
    }
}

impl Condition {
    /// All conditions in the order they are offered to sellers.
    pub const ALL: [Condition; 4] = [
        Condition::New,
        Condition::LikeNew,
        Condition::Good,
        Condition::Fair,
    ];

    /// Convert to the catalog string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Condition::New => "new",
            Condition::LikeNew => "like-new",
            Condition::Good => "good",
            Condition::Fair => "fair",
        }
    }

    /// Human readable label.
    ///
    /// ```rust
    /// use souk_core::models::Condition;
    ///
    /// assert_eq!(Condition::LikeNew.label(), "Like New");
    /// ```
    pub fn label(&self) -> &'static str {
        match self {
            Condition::New => "New",
            Condition::LikeNew => "Like New",
            Condition::Good => "Good",
            Condition::Fair => "Fair",
        }
    }
}

/// Top-level tabs of the application shell.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum TabId {
    #[default]
    Chats,
    Marketplace,
    Profile,
}

impl TabId {
    /// Tabs in navigation bar order.
    pub const ALL: [TabId; 3] = [TabId::Chats, TabId::Marketplace, TabId::Profile];

    /// Short label shown under the tab icon.
    pub fn label(&self) -> &'static str {
        match self {
            TabId::Chats => "Chats",
            TabId::Marketplace => "Market",
            TabId::Profile => "Profile",
        }
    }

    /// Glyph shown for the tab.
    pub fn glyph(&self) -> &'static str {
        match self {
            TabId::Chats => "💬",
            TabId::Marketplace => "🛍",
            TabId::Profile => "👤",
        }
    }
}
