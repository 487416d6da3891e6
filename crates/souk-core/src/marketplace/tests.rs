//! Tests for the marketplace module.

use std::fs;

use tempfile::TempDir;

use super::*;
use crate::{
    models::Condition,
    params::{BrowseProducts, CreateGroup, Id, ListChats, SellProduct},
    wizard::ListingStep,
};

fn bundled() -> Marketplace {
    MarketplaceBuilder::new()
        .without_xdg()
        .build()
        .expect("Failed to build marketplace")
}

fn sell_params() -> SellProduct {
    SellProduct {
        photos: vec!["front.jpg".to_string(), "back.jpg".to_string()],
        title: "  Road Bike  ".to_string(),
        price: "250".to_string(),
        category: "sports".to_string(),
        condition: Condition::Good,
        description: Some("Barely ridden".to_string()),
    }
}

#[test]
fn test_builder_defaults_to_bundled_catalog() {
    let marketplace = bundled();
    assert_eq!(marketplace.source(), &CatalogSource::Bundled);
    assert_eq!(marketplace.catalog().products().len(), 14);
    assert_eq!(marketplace.total_unread(), 23);
}

#[test]
fn test_builder_reads_catalog_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("catalog.json");
    let trimmed = crate::catalog::BUNDLED_CATALOG.replace("Jamie Walker", "Robin Park");
    fs::write(&path, trimmed).expect("Failed to write catalog");

    let marketplace = MarketplaceBuilder::new()
        .with_catalog_path(Some(&path))
        .build()
        .expect("Failed to build marketplace");
    assert_eq!(marketplace.source(), &CatalogSource::File(path));
    assert_eq!(marketplace.profile().name, "Robin Park");
}

#[test]
fn test_builder_missing_file_fails() {
    let result = MarketplaceBuilder::new()
        .with_catalog_path(Some("/no/such/catalog.json"))
        .build();
    assert!(matches!(result, Err(SoukError::FileSystem { .. })));
}

#[test]
fn test_browse_first_page() {
    let page = bundled()
        .browse_products(&BrowseProducts::default())
        .expect("Failed to browse");
    assert_eq!(page.len(), 6);
    assert_eq!(page.match_count, 14);
    assert!(page.has_more);
    assert_eq!(page.products[0].id, "p1");
}

#[test]
fn test_browse_loads_requested_pages_and_stops_when_exhausted() {
    let marketplace = bundled();
    let page = marketplace
        .browse_products(&BrowseProducts {
            pages: 2,
            ..Default::default()
        })
        .unwrap();
    assert_eq!(page.len(), 12);
    assert!(page.has_more);

    let page = marketplace
        .browse_products(&BrowseProducts {
            pages: 10,
            ..Default::default()
        })
        .unwrap();
    assert_eq!(page.len(), 14);
    assert_eq!(page.page_index, 3);
    assert!(!page.has_more);
}

#[test]
fn test_browse_category_and_search() {
    let marketplace = bundled();
    let page = marketplace
        .browse_products(&BrowseProducts {
            category: "electronics".to_string(),
            ..Default::default()
        })
        .unwrap();
    assert_eq!(page.len(), 6);
    assert!(!page.has_more);
    assert!(page.products.iter().all(|p| p.category == "electronics"));

    let page = marketplace
        .browse_products(&BrowseProducts {
            search: "WIRELESS".to_string(),
            category: "electronics".to_string(),
            ..Default::default()
        })
        .unwrap();
    let ids: Vec<_> = page.products.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, ["p1"]);
}

#[test]
fn test_browse_rejects_bad_params() {
    let marketplace = bundled();
    let zero_size = marketplace.browse_products(&BrowseProducts {
        page_size: 0,
        ..Default::default()
    });
    assert!(matches!(zero_size, Err(SoukError::InvalidInput { ref field, .. }) if field == "page_size"));

    let zero_pages = marketplace.browse_products(&BrowseProducts {
        pages: 0,
        ..Default::default()
    });
    assert!(matches!(zero_pages, Err(SoukError::InvalidInput { ref field, .. }) if field == "pages"));

    let unknown = marketplace.browse_products(&BrowseProducts {
        category: "garden".to_string(),
        ..Default::default()
    });
    assert!(matches!(unknown, Err(SoukError::UnknownCategory { .. })));
}

#[test]
fn test_list_chats_filters_by_name() {
    let marketplace = bundled();
    assert_eq!(marketplace.list_chats(&ListChats::default()).len(), 8);

    let chats = marketplace.list_chats(&ListChats {
        search: "JOHN".to_string(),
    });
    let names: Vec<_> = chats.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, ["Sarah Johnson"]);
}

#[test]
fn test_show_chat_resolves_shared_product() {
    let marketplace = bundled();
    let conversation = marketplace
        .show_chat(&Id { id: "1".to_string() })
        .unwrap();
    assert_eq!(conversation.chat.name, "Sarah Johnson");
    assert_eq!(conversation.shared_product.map(|p| p.id), Some("p1".to_string()));

    let conversation = marketplace
        .show_chat(&Id { id: "3".to_string() })
        .unwrap();
    assert!(conversation.shared_product.is_none());

    let missing = marketplace.show_chat(&Id { id: "99".to_string() });
    assert!(matches!(missing, Err(SoukError::ChatNotFound { ref id }) if id == "99"));
}

#[test]
fn test_contacts_exclude_groups() {
    let contacts = bundled().contacts();
    assert_eq!(contacts.0.len(), 6);
    assert!(contacts.0.iter().all(|c| c.is_direct()));
}

#[test]
fn test_categories_highlight() {
    let marketplace = bundled();
    let categories = marketplace.categories("books").unwrap();
    assert_eq!(categories.active, "books");
    assert_eq!(categories.categories.len(), 8);
    assert!(marketplace.categories("garden").is_err());
}

#[test]
fn test_sell_product() {
    let listing = bundled().sell_product(&sell_params()).unwrap();
    assert!(listing.product.id.starts_with("user-"));
    assert_eq!(listing.product.title, "Road Bike");
    assert_eq!(listing.product.price, 250.0);
    assert_eq!(listing.product.image, "front.jpg");
    assert_eq!(listing.product.seller.name, "Jamie Walker");
    assert_eq!(listing.condition, Condition::Good);
    assert_eq!(listing.description.as_deref(), Some("Barely ridden"));
}

#[test]
fn test_sell_product_reports_failing_step() {
    let marketplace = bundled();

    let no_photos = marketplace.sell_product(&SellProduct {
        photos: vec![],
        ..sell_params()
    });
    assert!(matches!(
        no_photos,
        Err(SoukError::WizardIncomplete { ref step, .. }) if step == "photos"
    ));

    let no_price = marketplace.sell_product(&SellProduct {
        price: "  ".to_string(),
        ..sell_params()
    });
    let err = no_price.unwrap_err();
    assert_eq!(
        err.to_string(),
        format!("Cannot continue past the '{}' step: a price is required", ListingStep::Details)
    );

    let all = marketplace.sell_product(&SellProduct {
        category: "all".to_string(),
        ..sell_params()
    });
    assert!(matches!(all, Err(SoukError::WizardIncomplete { .. })));

    let unknown = marketplace.sell_product(&SellProduct {
        category: "garden".to_string(),
        ..sell_params()
    });
    assert!(matches!(unknown, Err(SoukError::UnknownCategory { .. })));
}

#[test]
fn test_sell_product_coerces_bad_price() {
    let listing = bundled()
        .sell_product(&SellProduct {
            price: "free".to_string(),
            ..sell_params()
        })
        .unwrap();
    assert_eq!(listing.product.price, 0.0);
}

#[test]
fn test_create_group() {
    let group = bundled()
        .create_group(&CreateGroup {
            members: vec!["1".to_string(), "3".to_string()],
            name: " Weekend trip ".to_string(),
        })
        .unwrap();
    assert!(group.id.starts_with("group-"));
    assert_eq!(group.name, "Weekend trip");
    assert_eq!(group.member_ids, ["1", "3"]);
}

#[test]
fn test_create_group_errors() {
    let marketplace = bundled();

    let unknown = marketplace.create_group(&CreateGroup {
        members: vec!["42".to_string()],
        name: "X".to_string(),
    });
    assert!(matches!(unknown, Err(SoukError::ChatNotFound { .. })));

    let group_member = marketplace.create_group(&CreateGroup {
        members: vec!["2".to_string()],
        name: "X".to_string(),
    });
    assert!(matches!(group_member, Err(SoukError::InvalidInput { .. })));

    let no_members = marketplace.create_group(&CreateGroup {
        members: vec![],
        name: "X".to_string(),
    });
    assert!(matches!(
        no_members,
        Err(SoukError::WizardIncomplete { ref step, .. }) if step == "select"
    ));

    let no_name = marketplace.create_group(&CreateGroup {
        members: vec!["1".to_string()],
        name: "   ".to_string(),
    });
    assert!(matches!(
        no_name,
        Err(SoukError::WizardIncomplete { ref reason, .. }) if reason == "the group needs a name"
    ));
}

#[test]
fn test_tab_bar_uses_total_unread() {
    let bar = bundled().tab_bar(TabId::Chats);
    assert_eq!(bar.unread, 23);
    assert!(bar.to_string().contains("Chats (23)"));
}
