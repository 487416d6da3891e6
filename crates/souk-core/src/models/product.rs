//! Product model definition and related functionality.

use serde::{Deserialize, Serialize};

/// Person or shop offering a product.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Seller {
    pub name: String,
    pub avatar: String,
}

/// A product listed on the marketplace.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique identifier for the product
    pub id: String,

    /// Title shown on the product card
    pub title: String,

    /// Asking price in `currency`
    pub price: f64,

    /// ISO currency code
    #[serde(default = "default_currency")]
    pub currency: String,

    /// Cover image URL
    pub image: String,

    /// Average rating, 0 when unrated
    #[serde(default)]
    pub rating: f32,

    /// Number of reviews behind `rating`
    #[serde(default)]
    pub review_count: u32,

    /// Id of the category this product belongs to
    pub category: String,

    /// Who is selling
    pub seller: Seller,
}

pub(crate) fn default_currency() -> String {
    "USD".to_string()
}
