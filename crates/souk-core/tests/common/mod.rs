#![allow(dead_code)]

use std::fs;

use serde_json::{json, Value};
use souk_core::{Marketplace, MarketplaceBuilder};
use tempfile::TempDir;

/// A product in `category`, numbered `n`.
pub fn product(n: usize, category: &str) -> Value {
    json!({
        "id": format!("p{n}"),
        "title": format!("Item {n}"),
        "price": 10.0 + n as f64,
        "image": format!("https://img.example.com/p{n}.jpg"),
        "rating": 4.0,
        "reviewCount": n,
        "category": category,
        "seller": { "name": "Shop", "avatar": "https://img.example.com/shop.png" }
    })
}

/// A chat with `id`; `kind` is `direct` or `group`.
pub fn chat(id: &str, kind: &str, name: &str, unread: u32) -> Value {
    json!({
        "id": id,
        "type": kind,
        "name": name,
        "avatar": "https://img.example.com/avatar.png",
        "lastMessage": "See you soon",
        "timestamp": "2025-06-01T10:00:00Z",
        "unreadCount": unread
    })
}

/// Ten products, seven of them electronics, and three chats: direct
/// contacts `u1` and `u2` plus group `g1`.
pub fn catalog_document() -> Value {
    let products: Vec<_> = (1..=10)
        .map(|n| product(n, if n <= 7 { "electronics" } else { "books" }))
        .collect();
    json!({
        "profile": { "name": "Test Seller", "avatar": "a.png", "memberSince": 2023 },
        "categories": [
            { "id": "electronics", "label": "Electronics", "icon": "smartphone" },
            { "id": "books", "label": "Books", "icon": "book-open" }
        ],
        "products": products,
        "chats": [
            chat("u1", "direct", "Uma One", 60),
            chat("u2", "direct", "Ugo Two", 50),
            chat("g1", "group", "Gang", 0)
        ]
    })
}

/// Writes `document` to a temp dir and builds a marketplace from it.
pub fn create_test_marketplace_with(document: &Value) -> (TempDir, Marketplace) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("catalog.json");
    fs::write(&path, document.to_string()).expect("Failed to write catalog");
    let marketplace = MarketplaceBuilder::new()
        .with_catalog_path(Some(&path))
        .build()
        .expect("Failed to create marketplace");
    (temp_dir, marketplace)
}

/// Marketplace over [`catalog_document`].
pub fn create_test_marketplace() -> (TempDir, Marketplace) {
    create_test_marketplace_with(&catalog_document())
}
