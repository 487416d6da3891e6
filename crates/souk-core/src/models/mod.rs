//! Data models for chats, products and the records wizards produce.
//!
//! This module contains the core domain models of the Souk marketplace.
//! Display implementations for these models are located in
//! [`crate::display::models`] to keep data structures separate from
//! presentation logic.
//!
//! All catalog models derive `serde` traits with camelCase field names so a
//! catalog document can be read straight into them:
//!
//! ```rust
//! use souk_core::models::{CategoryIcon, Product};
//!
//! let product: Product = serde_json::from_str(
//!     r#"{
//!         "id": "p1",
//!         "title": "Wireless Headphones",
//!         "price": 89.99,
//!         "image": "https://example.com/p1.jpg",
//!         "rating": 4.5,
//!         "reviewCount": 120,
//!         "category": "electronics",
//!         "seller": { "name": "TechStore", "avatar": "https://example.com/t.png" }
//!     }"#,
//! )
//! .unwrap();
//! assert_eq!(product.currency, "USD");
//! assert_eq!(product.review_count, 120);
//! # let _ = CategoryIcon::Grid;
//! ```

pub mod category;
pub mod chat;
pub mod filters;
pub mod product;
pub mod profile;
pub mod records;
pub mod status;


pub use category::{Category, CategoryIcon, ALL_CATEGORY_ID};
pub use chat::Chat;
pub use filters::{CategoryFilter, FilterMatcher, FilterState, Filterable};
pub use product::{Product, Seller};
pub use profile::Profile;
pub use records::{Group, Listing};
pub use status::{ChatKind, Condition, TabId};
