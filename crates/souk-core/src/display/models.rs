//! Display implementations for domain models.
//!
//! Everything renders as markdown so the CLI can hand it straight to the
//! terminal renderer. Model definitions stay in [`crate::models`].

use std::fmt;

use super::datetime::RelativeTime;
use crate::models::{
    Category, CategoryIcon, Chat, ChatKind, Condition, Group, Listing, Product, Profile, TabId,
};

impl fmt::Display for ChatKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl fmt::Display for CategoryIcon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

impl fmt::Display for TabId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.glyph(), self.label())
    }
}

/// An amount with its currency, `$12.50` for dollars and `12.50 EUR` for
/// everything else.
pub struct Price<'a> {
    pub amount: f64,
    pub currency: &'a str,
}

impl<'a> Price<'a> {
    pub fn of(product: &'a Product) -> Self {
        Self {
            amount: product.price,
            currency: &product.currency,
        }
    }
}

impl fmt::Display for Price<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.currency == "USD" {
            write!(f, "${:.2}", self.amount)
        } else {
            write!(f, "{:.2} {}", self.amount, self.currency)
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "- {} **{}** (`{}`)", self.icon, self.label, self.id)
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "### {} (ID: {})", self.title, self.id)?;
        writeln!(f)?;
        writeln!(f, "- Price: {}", Price::of(self))?;
        if self.review_count > 0 {
            writeln!(f, "- Rating: ★ {:.1} ({})", self.rating, self.review_count)?;
        } else {
            writeln!(f, "- Rating: no reviews yet")?;
        }
        writeln!(f, "- Seller: {}", self.seller.name)?;
        writeln!(f)
    }
}

impl fmt::Display for Chat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let marker = match self.kind {
            ChatKind::Direct => "",
            ChatKind::Group => "👥 ",
        };
        write!(
            f,
            "### {marker}{} (ID: {}) · {}",
            self.name,
            self.id,
            RelativeTime(&self.timestamp)
        )?;
        if self.unread_count > 0 {
            write!(f, " · **{} unread**", self.unread_count)?;
        }
        writeln!(f)?;
        writeln!(f)?;
        writeln!(f, "{}", self.last_message)?;
        writeln!(f)
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}", self.name)?;
        writeln!(f)?;
        writeln!(f, "Seller since {}", self.member_since)?;
        writeln!(f)?;
        writeln!(f, "| Sold | Rating | Buyers |")?;
        writeln!(f, "|------|--------|--------|")?;
        writeln!(
            f,
            "| {} | {:.1} | {} |",
            self.sold, self.rating, self.buyers
        )?;
        writeln!(f)?;
        writeln!(f, "- My Listings ({})", self.listings)?;
        writeln!(f, "- Favorites ({})", self.favorites)?;
        writeln!(f, "- Reviews ({})", self.reviews)?;
        writeln!(f, "- Settings")
    }
}

impl fmt::Display for Listing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let product = &self.product;
        writeln!(f, "## {} (ID: {})", product.title, product.id)?;
        writeln!(f)?;
        writeln!(f, "- Price: {}", Price::of(product))?;
        writeln!(f, "- Category: {}", product.category)?;
        writeln!(f, "- Condition: {}", self.condition)?;
        writeln!(f, "- Photos: {}", self.photos.len())?;
        writeln!(f, "- Cover: {}", product.image)?;

        if let Some(description) = &self.description {
            writeln!(f)?;
            writeln!(f, "{description}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## 👥 {} (ID: {})", self.name, self.id)?;
        writeln!(f)?;
        writeln!(f, "{} members: {}", self.member_ids.len(), self.member_ids.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;

    use super::*;
    use crate::models::Seller;

    fn product() -> Product {
        Product {
            id: "p1".to_string(),
            title: "Vintage Camera".to_string(),
            price: 120.0,
            currency: "USD".to_string(),
            image: "cam.jpg".to_string(),
            rating: 4.5,
            review_count: 18,
            category: "electronics".to_string(),
            seller: Seller {
                name: "Sarah Johnson".to_string(),
                avatar: "s.png".to_string(),
            },
        }
    }

    #[test]
    fn test_price_display() {
        assert_eq!(Price { amount: 89.9, currency: "USD" }.to_string(), "$89.90");
        assert_eq!(Price { amount: 5.0, currency: "EUR" }.to_string(), "5.00 EUR");
    }

    #[test]
    fn test_product_card() {
        let output = product().to_string();
        assert!(output.starts_with("### Vintage Camera (ID: p1)"));
        assert!(output.contains("- Price: $120.00"));
        assert!(output.contains("- Rating: ★ 4.5 (18)"));
        assert!(output.contains("- Seller: Sarah Johnson"));

        let mut unrated = product();
        unrated.review_count = 0;
        assert!(unrated.to_string().contains("no reviews yet"));
    }

    #[test]
    fn test_chat_item() {
        let mut chat = Chat {
            id: "2".to_string(),
            kind: ChatKind::Group,
            name: "Weekend Hikers".to_string(),
            avatar: "h.png".to_string(),
            last_message: "Trail at 8?".to_string(),
            timestamp: Timestamp::from_second(1_600_000_000).unwrap(),
            unread_count: 4,
            shared_product: None,
        };
        let output = chat.to_string();
        assert!(output.contains("### 👥 Weekend Hikers (ID: 2)"));
        assert!(output.contains("**4 unread**"));
        assert!(output.contains("Trail at 8?"));

        chat.unread_count = 0;
        chat.kind = ChatKind::Direct;
        let output = chat.to_string();
        assert!(!output.contains("unread"));
        assert!(!output.contains("👥"));
    }

    #[test]
    fn test_category_and_tab() {
        assert_eq!(Category::all().to_string(), "- ▦ **All** (`all`)\n");
        assert_eq!(TabId::Profile.to_string(), format!("{} Profile", TabId::Profile.glyph()));
    }

    #[test]
    fn test_listing_and_group() {
        let listing = Listing {
            product: product(),
            condition: Condition::LikeNew,
            description: Some("Works great".to_string()),
            photos: vec!["cam.jpg".to_string(), "back.jpg".to_string()],
        };
        let output = listing.to_string();
        assert!(output.contains("- Condition: Like New"));
        assert!(output.contains("- Photos: 2"));
        assert!(output.ends_with("Works great\n"));

        let group = Group {
            id: "group-1".to_string(),
            name: "Trip".to_string(),
            member_ids: vec!["1".to_string(), "3".to_string()],
        };
        assert!(group.to_string().contains("2 members: 1, 3"));
    }
}
