//! The read-only data set every view renders from.
//!
//! A [`Catalog`] holds the categories, products, chats and profile of the
//! app. It is built once from a JSON document, validated, and then only ever
//! borrowed: paginators and wizards take slices of it at construction time
//! instead of reaching for shared globals.
//!
//! # Document format
//!
//! ```json
//! {
//!   "profile":    { "name": "...", "avatar": "...", "memberSince": 2024, ... },
//!   "categories": [ { "id": "electronics", "label": "Electronics", "icon": "smartphone" } ],
//!   "products":   [ { "id": "p1", "title": "...", "price": 89.99, "category": "electronics", ... } ],
//!   "chats":      [ { "id": "c1", "type": "direct", "name": "...", "timestamp": "2024-05-01T10:00:00Z", ... } ]
//! }
//! ```
//!
//! The `all` category may be omitted; it is inserted at the front when
//! missing.

use std::{collections::HashSet, fs, path::Path, str::FromStr};

use log::info;
use serde::Deserialize;

use crate::{
    error::{Result, SoukError},
    models::{Category, CategoryFilter, Chat, Product, Profile},
};

/// Catalog compiled into the library, used when no file is configured.
pub const BUNDLED_CATALOG: &str = include_str!("../../data/catalog.json");

#[derive(Debug, Deserialize)]
struct CatalogDocument {
    profile: Profile,
    #[serde(default)]
    categories: Vec<Category>,
    #[serde(default)]
    products: Vec<Product>,
    #[serde(default)]
    chats: Vec<Chat>,
}

/// Validated, read-only collections.
#[derive(Debug, Clone)]
pub struct Catalog {
    profile: Profile,
    categories: Vec<Category>,
    products: Vec<Product>,
    chats: Vec<Chat>,
}

impl Catalog {
    /// Builds a catalog from in-memory collections.
    ///
    /// # Errors
    ///
    /// Returns `SoukError::InvalidInput` when ids repeat within a collection,
    /// a product names an unknown category or the `all` category, or a chat
    /// shares a product that does not exist.
    pub fn new(
        profile: Profile,
        mut categories: Vec<Category>,
        products: Vec<Product>,
        chats: Vec<Chat>,
    ) -> Result<Self> {
        if !categories.iter().any(Category::is_all) {
            categories.insert(0, Category::all());
        }

        ensure_unique("categories", categories.iter().map(|c| c.id.as_str()))?;
        ensure_unique("products", products.iter().map(|p| p.id.as_str()))?;
        ensure_unique("chats", chats.iter().map(|c| c.id.as_str()))?;

        for product in &products {
            let known = categories
                .iter()
                .any(|c| !c.is_all() && c.id == product.category);
            if !known {
                return Err(SoukError::invalid_input("products").with_reason(format!(
                    "product '{}' has unknown category '{}'",
                    product.id, product.category
                )));
            }
        }

        for chat in &chats {
            if let Some(shared) = &chat.shared_product {
                if !products.iter().any(|p| &p.id == shared) {
                    return Err(SoukError::invalid_input("chats").with_reason(format!(
                        "chat '{}' shares unknown product '{shared}'",
                        chat.id
                    )));
                }
            }
        }

        Ok(Self {
            profile,
            categories,
            products,
            chats,
        })
    }

    /// Parses and validates a catalog document.
    ///
    /// # Errors
    ///
    /// Returns `SoukError::Serialization` for malformed JSON (including
    /// unknown category icons) and the validation errors of [`Catalog::new`].
    pub fn from_json(json: &str) -> Result<Self> {
        let document: CatalogDocument = serde_json::from_str(json)?;
        Self::new(
            document.profile,
            document.categories,
            document.products,
            document.chats,
        )
    }

    /// Reads a catalog document from disk.
    ///
    /// # Errors
    ///
    /// Returns `SoukError::FileSystem` if the file cannot be read, otherwise
    /// the errors of [`Catalog::from_json`].
    pub fn from_path(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path).map_err(|e| SoukError::FileSystem {
            path: path.to_path_buf(),
            source: e,
        })?;
        let catalog = Self::from_json(&json)?;
        info!(
            "Loaded catalog from {} ({} products, {} chats)",
            path.display(),
            catalog.products.len(),
            catalog.chats.len()
        );
        Ok(catalog)
    }

    /// The catalog compiled into the library.
    ///
    /// # Errors
    ///
    /// Only fails if the bundled document itself is broken.
    pub fn bundled() -> Result<Self> {
        Self::from_json(BUNDLED_CATALOG)
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    /// All categories, `all` first.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Categories a product can be listed under.
    pub fn sellable_categories(&self) -> impl Iterator<Item = &Category> {
        self.categories.iter().filter(|c| !c.is_all())
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn chats(&self) -> &[Chat] {
        &self.chats
    }

    /// Direct chats, the contacts a group can be built from.
    pub fn contacts(&self) -> impl Iterator<Item = &Chat> {
        self.chats.iter().filter(|c| c.is_direct())
    }

    pub fn category(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    pub fn product(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn chat(&self, id: &str) -> Option<&Chat> {
        self.chats.iter().find(|c| c.id == id)
    }

    /// Resolves a user-supplied category id into a filter.
    ///
    /// # Errors
    ///
    /// Returns `SoukError::UnknownCategory` if the id is not in the catalog.
    pub fn category_filter(&self, id: &str) -> Result<CategoryFilter> {
        let filter = CategoryFilter::from_str(id)
            .map_err(|reason| SoukError::invalid_input("category").with_reason(reason))?;
        match &filter {
            CategoryFilter::Only(id) if self.category(id).is_none() => {
                Err(SoukError::UnknownCategory { id: id.clone() })
            }
            _ => Ok(filter),
        }
    }

    /// Sum of unread messages across all chats.
    pub fn total_unread(&self) -> u32 {
        self.chats
            .iter()
            .fold(0u32, |total, c| total.saturating_add(c.unread_count))
    }
}

fn ensure_unique<'a>(field: &str, ids: impl Iterator<Item = &'a str>) -> Result<()> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(SoukError::invalid_input(field).with_reason(format!("duplicate id '{id}'")));
        }
    }
    Ok(())
}
