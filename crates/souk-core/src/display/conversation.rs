//! The conversation view of a single chat.

use std::fmt;

use super::datetime::RelativeTime;
use crate::models::{Chat, ChatKind, Product};

/// A chat header followed by its messages.
///
/// Only the last message is known, so the thread is that message, preceded
/// by the shared product card when the chat has one.
#[derive(Debug, Clone)]
pub struct Conversation {
    pub chat: Chat,
    pub shared_product: Option<Product>,
}

impl fmt::Display for Conversation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let chat = &self.chat;
        writeln!(f, "# {}", chat.name)?;
        writeln!(f)?;
        match chat.kind {
            ChatKind::Direct => writeln!(f, "Online")?,
            ChatKind::Group => writeln!(f, "Group chat")?,
        }
        writeln!(f)?;
        writeln!(f, "---")?;
        writeln!(f)?;

        if let Some(product) = &self.shared_product {
            writeln!(f, "> Hey! Check out this product I found:")?;
            writeln!(f)?;
            write!(f, "{product}")?;
        }

        writeln!(f, "**{}** · {}", chat.first_name(), RelativeTime(&chat.timestamp))?;
        writeln!(f)?;
        writeln!(f, "{}", chat.last_message)
    }
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;

    use super::*;
    use crate::models::Seller;

    fn chat() -> Chat {
        Chat {
            id: "1".to_string(),
            kind: ChatKind::Direct,
            name: "Sarah Johnson".to_string(),
            avatar: String::new(),
            last_message: "Is it still available?".to_string(),
            timestamp: Timestamp::from_second(1_700_000_000).unwrap(),
            unread_count: 2,
            shared_product: Some("p1".to_string()),
        }
    }

    #[test]
    fn test_conversation_with_shared_product() {
        let conversation = Conversation {
            chat: chat(),
            shared_product: Some(Product {
                id: "p1".to_string(),
                title: "Headphones".to_string(),
                price: 89.99,
                currency: "USD".to_string(),
                image: String::new(),
                rating: 4.7,
                review_count: 10,
                category: "electronics".to_string(),
                seller: Seller {
                    name: "TechStore".to_string(),
                    avatar: String::new(),
                },
            }),
        };
        let output = conversation.to_string();
        assert!(output.starts_with("# Sarah Johnson\n\nOnline"));
        assert!(output.contains("### Headphones (ID: p1)"));
        assert!(output.contains("**Sarah** · "));
        assert!(output.ends_with("Is it still available?\n"));
    }

    #[test]
    fn test_conversation_without_product() {
        let mut chat = chat();
        chat.kind = ChatKind::Group;
        let output = Conversation {
            chat,
            shared_product: None,
        }
        .to_string();
        assert!(output.contains("Group chat"));
        assert!(!output.contains("Check out this product"));
    }
}
