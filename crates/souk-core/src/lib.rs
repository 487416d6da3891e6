//! Core library for the Souk chat and marketplace application.
//!
//! The crate is built around two independent logic units that only ever
//! borrow read-only data handed to them at construction:
//!
//! - [`paging::ListFilterPaginator`] filters a collection by search text and
//!   category and exposes a growing window of it, one page at a time.
//! - [`wizard::WizardFlow`] walks a multi-step form with per-step gates and
//!   emits one record per successful submit. It drives the listing wizard
//!   and the group wizard.
//!
//! Around them sit the data [`models`], the validated [`catalog`] they are
//! loaded into, the [`marketplace`] facade interface layers talk to, and the
//! markdown [`display`] wrappers used for output.
//!
//! # Quick Start
//!
//! ```rust
//! use souk_core::{
//!     params::{BrowseProducts, SellProduct},
//!     MarketplaceBuilder,
//! };
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let marketplace = MarketplaceBuilder::new().without_xdg().build()?;
//!
//! // The first page of the product grid
//! let page = marketplace.browse_products(&BrowseProducts::default())?;
//! println!("{page}");
//!
//! // List a product in one go
//! let listing = marketplace.sell_product(&SellProduct {
//!     photos: vec!["https://example.com/bike.jpg".to_string()],
//!     title: "Road Bike".to_string(),
//!     price: "250".to_string(),
//!     category: "sports".to_string(),
//!     ..Default::default()
//! })?;
//! assert_eq!(listing.product.price, 250.0);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod catalog;
pub mod display;
pub mod error;
pub mod marketplace;
pub mod models;
pub mod params;
pub mod paging;
pub mod wizard;

// Re-export commonly used types
pub use catalog::Catalog;
pub use display::{
    Categories, ChatSummaries, Contacts, Conversation, CreateResult, OperationStatus, ProductPage,
    TabBar, UnreadBadge,
};
pub use error::{Result, SoukError};
pub use marketplace::{CatalogSource, Marketplace, MarketplaceBuilder};
pub use models::{
    Category, CategoryFilter, CategoryIcon, Chat, ChatKind, Condition, FilterState, Filterable,
    Group, Listing, Product, Profile, Seller, TabId,
};
pub use paging::{ListFilterPaginator, PageState, DEFAULT_PAGE_SIZE};
pub use params::{BrowseProducts, CreateGroup, Id, ListChats, SellProduct};
pub use wizard::{GroupWizard, ListingWizard, WizardFlow, WizardSpec, WizardState};
