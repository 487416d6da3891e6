//! Collection wrapper types for displaying groups of domain objects.
//!
//! This module provides wrapper types that format collections of domain objects
//! with consistent structure and empty collection handling.

use std::fmt;

use crate::{
    models::{Category, Chat, Product},
    paging::ListFilterPaginator,
};

/// The loaded window of a product grid.
///
/// Owns copies of the visible products so it can outlive the paginator that
/// produced it.
///
/// # Examples
///
/// ```rust
/// use std::num::NonZeroUsize;
///
/// use souk_core::{
///     display::ProductPage,
///     models::{Product, Seller},
///     paging::ListFilterPaginator,
/// };
///
/// let products: Vec<Product> = (1..=3)
///     .map(|n| Product {
///         id: format!("p{n}"),
///         title: format!("Item {n}"),
///         price: 10.0,
///         currency: "USD".to_string(),
///         image: String::new(),
///         rating: 0.0,
///         review_count: 0,
///         category: "books".to_string(),
///         seller: Seller { name: "Ana".to_string(), avatar: String::new() },
///     })
///     .collect();
///
/// let paginator = ListFilterPaginator::new(&products, NonZeroUsize::new(2).unwrap());
/// let page = ProductPage::from_paginator(&paginator);
/// assert_eq!(page.products.len(), 2);
/// assert!(page.has_more);
/// assert!(format!("{page}").contains("Showing 2 of 3"));
/// ```
#[derive(Debug, Clone)]
pub struct ProductPage {
    pub products: Vec<Product>,
    /// Pages loaded so far, starting at 1
    pub page_index: usize,
    /// Products matching the filter, loaded or not
    pub match_count: usize,
    pub has_more: bool,
}

impl ProductPage {
    pub fn from_paginator(paginator: &ListFilterPaginator<'_, Product>) -> Self {
        Self {
            products: paginator.visible().iter().map(|p| (*p).clone()).collect(),
            page_index: paginator.page_index(),
            match_count: paginator.match_count(),
            has_more: paginator.has_more(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }
}

impl fmt::Display for ProductPage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.products.is_empty() {
            return writeln!(f, "No products found.");
        }

        for product in &self.products {
            write!(f, "{product}")?;
        }

        if self.has_more {
            writeln!(
                f,
                "_Showing {} of {}. Load more with `--pages {}`._",
                self.products.len(),
                self.match_count,
                self.page_index + 1
            )
        } else {
            writeln!(f, "_End of results ({} products)._", self.products.len())
        }
    }
}

/// Newtype wrapper for displaying the chat list.
pub struct ChatSummaries(pub Vec<Chat>);

impl ChatSummaries {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Chat> {
        self.0.iter()
    }
}

impl fmt::Display for ChatSummaries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No chats found.")
        } else {
            for chat in &self.0 {
                write!(f, "{chat}")?;
            }
            Ok(())
        }
    }
}

/// The category carousel, with the selected category highlighted.
pub struct Categories {
    pub categories: Vec<Category>,
    /// Id of the selected category
    pub active: String,
}

impl fmt::Display for Categories {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.categories.is_empty() {
            return writeln!(f, "No categories found.");
        }
        for category in &self.categories {
            if category.id == self.active {
                writeln!(
                    f,
                    "- {} **{}** (`{}`) ◀",
                    category.icon, category.label, category.id
                )?;
            } else {
                write!(f, "{category}")?;
            }
        }
        Ok(())
    }
}

/// Direct contacts available to the group wizard.
pub struct Contacts(pub Vec<Chat>);

impl fmt::Display for Contacts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No contacts found.");
        }
        for contact in &self.0 {
            writeln!(f, "- {} (`{}`)", contact.name, contact.id)?;
        }
        Ok(())
    }
}
