//! Marketplace categories and their icons.

use serde::{Deserialize, Serialize};

/// Id of the sentinel category that matches every product.
pub const ALL_CATEGORY_ID: &str = "all";

/// Closed set of category icons.
///
/// Icons are parsed from their kebab-case tag when the catalog is loaded; an
/// unknown tag is a deserialization error rather than a silent fallback.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum CategoryIcon {
    Grid,
    Smartphone,
    Shirt,
    Home,
    Dumbbell,
    BookOpen,
    Car,
    #[serde(rename = "gamepad-2")]
    Gamepad2,
}

impl CategoryIcon {
    /// Terminal glyph for the icon.
    pub fn glyph(&self) -> &'static str {
        match self {
            CategoryIcon::Grid => "▦",
            CategoryIcon::Smartphone => "📱",
            CategoryIcon::Shirt => "👕",
            CategoryIcon::Home => "🏠",
            CategoryIcon::Dumbbell => "🏋",
            CategoryIcon::BookOpen => "📖",
            CategoryIcon::Car => "🚗",
            CategoryIcon::Gamepad2 => "🎮",
        }
    }

    /// Catalog tag of the icon.
    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryIcon::Grid => "grid",
            CategoryIcon::Smartphone => "smartphone",
            CategoryIcon::Shirt => "shirt",
            CategoryIcon::Home => "home",
            CategoryIcon::Dumbbell => "dumbbell",
            CategoryIcon::BookOpen => "book-open",
            CategoryIcon::Car => "car",
            CategoryIcon::Gamepad2 => "gamepad-2",
        }
    }
}

/// A marketplace category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    /// Unique identifier, e.g. `electronics`
    pub id: String,

    /// Label shown in the category carousel
    pub label: String,

    /// Icon shown next to the label
    pub icon: CategoryIcon,
}

impl Category {
    /// The "all" sentinel category.
    pub fn all() -> Self {
        Self {
            id: ALL_CATEGORY_ID.to_string(),
            label: "All".to_string(),
            icon: CategoryIcon::Grid,
        }
    }

    /// Whether this is the "all" sentinel.
    pub fn is_all(&self) -> bool {
        self.id == ALL_CATEGORY_ID
    }
}
