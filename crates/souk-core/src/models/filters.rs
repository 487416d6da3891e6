//! Filter types for narrowing chat and product lists.

use std::str::FromStr;

use super::{category::ALL_CATEGORY_ID, Chat, Product};

/// Anything that can be narrowed by a [`FilterState`].
pub trait Filterable {
    /// Text matched against the search string.
    fn display_text(&self) -> &str;

    /// Category tag, `None` for items that only match the "all" category.
    fn category(&self) -> Option<&str> {
        None
    }
}

impl Filterable for Product {
    fn display_text(&self) -> &str {
        &self.title
    }

    fn category(&self) -> Option<&str> {
        Some(&self.category)
    }
}

impl Filterable for Chat {
    fn display_text(&self) -> &str {
        &self.name
    }
}

/// Category half of a [`FilterState`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    /// The "all" sentinel
    #[default]
    All,

    /// Only items tagged with this category id
    Only(String),
}

impl CategoryFilter {
    /// Whether an item with the given category tag passes.
    pub fn matches(&self, category: Option<&str>) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(id) => category == Some(id.as_str()),
        }
    }

    /// The id as shown to the user, `all` for the sentinel.
    pub fn as_str(&self) -> &str {
        match self {
            CategoryFilter::All => ALL_CATEGORY_ID,
            CategoryFilter::Only(id) => id,
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = String;

    /// Parses a category id. Membership in the catalog is checked by
    /// [`crate::Catalog::category_filter`], not here.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = s.trim();
        if id.is_empty() {
            Err("Category id must not be empty".to_string())
        } else if id.eq_ignore_ascii_case(ALL_CATEGORY_ID) {
            Ok(CategoryFilter::All)
        } else {
            Ok(CategoryFilter::Only(id.to_string()))
        }
    }
}

/// Search text plus category selection.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterState {
    /// Case-insensitive substring to look for in the item's display text
    pub search_text: String,

    pub category: CategoryFilter,
}

impl FilterState {
    /// Filter on search text only.
    pub fn search(text: impl Into<String>) -> Self {
        Self {
            search_text: text.into(),
            category: CategoryFilter::All,
        }
    }

    /// Replace the category selection.
    pub fn with_category(mut self, category: CategoryFilter) -> Self {
        self.category = category;
        self
    }

    /// Build a reusable matcher; the search text is lowercased once.
    pub fn matcher(&self) -> FilterMatcher<'_> {
        FilterMatcher {
            needle: self.search_text.to_lowercase(),
            category: &self.category,
        }
    }

    /// Whether a single item passes both predicates.
    ///
    /// ```rust
    /// use souk_core::models::{CategoryFilter, Filterable, FilterState};
    ///
    /// struct Item(&'static str, &'static str);
    /// impl Filterable for Item {
    ///     fn display_text(&self) -> &str { self.0 }
    ///     fn category(&self) -> Option<&str> { Some(self.1) }
    /// }
    ///
    /// let filter = FilterState::search("HEAD")
    ///     .with_category(CategoryFilter::Only("electronics".into()));
    /// assert!(filter.matches(&Item("Wireless Headphones", "electronics")));
    /// assert!(!filter.matches(&Item("Headband", "fashion")));
    /// ```
    pub fn matches<T: Filterable + ?Sized>(&self, item: &T) -> bool {
        self.matcher().matches(item)
    }
}

/// A [`FilterState`] prepared for testing many items.
pub struct FilterMatcher<'a> {
    needle: String,
    category: &'a CategoryFilter,
}

impl FilterMatcher<'_> {
    pub fn matches<T: Filterable + ?Sized>(&self, item: &T) -> bool {
        self.category.matches(item.category())
            && item.display_text().to_lowercase().contains(&self.needle)
    }
}
