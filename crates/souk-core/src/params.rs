//! Parameter structures for Souk operations
//!
//! This module contains shared parameter structures that can be used across
//! different interfaces (the CLI today, anything else later) without
//! framework-specific derives. Interface layers define their own argument
//! types and convert into these.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │  Core Params    │    │   Marketplace   │
//! │  (clap derives) │───▶│ (serde derives) │───▶│    handlers     │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ```ignore
//! // In the CLI
//! #[derive(Args)]
//! pub struct BrowseArgs {
//!     #[arg(short, long)]
//!     pub search: Option<String>,
//! }
//!
//! impl From<BrowseArgs> for BrowseProducts {
//!     fn from(val: BrowseArgs) -> Self {
//!         BrowseProducts { search: val.search.unwrap_or_default(), ..Default::default() }
//!     }
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::models::Condition;

/// Generic parameters for operations requiring just an ID.
///
/// Used for showing a single chat or product.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Id {
    /// The ID of the resource to operate on
    pub id: String,
}

/// Parameters for listing chats.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListChats {
    /// Case-insensitive substring of the chat name
    #[serde(default)]
    pub search: String,
}

/// Parameters for browsing the marketplace grid.
///
/// `pages` simulates the user scrolling the loader into view `pages - 1`
/// times after the first page is shown.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrowseProducts {
    /// Case-insensitive substring of the product title
    #[serde(default)]
    pub search: String,
    /// Category id, `all` for every category
    #[serde(default = "default_category")]
    pub category: String,
    /// Number of pages to load, at least 1
    #[serde(default = "default_pages")]
    pub pages: usize,
    /// Items per page, at least 1
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

impl Default for BrowseProducts {
    fn default() -> Self {
        Self {
            search: String::new(),
            category: default_category(),
            pages: default_pages(),
            page_size: default_page_size(),
        }
    }
}

fn default_category() -> String {
    crate::models::ALL_CATEGORY_ID.to_string()
}

fn default_pages() -> usize {
    1
}

fn default_page_size() -> usize {
    crate::paging::DEFAULT_PAGE_SIZE.get()
}

/// Parameters for listing a product in one go.
///
/// Each field feeds the matching step of the listing wizard.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SellProduct {
    /// Photo URLs, first one is the cover
    #[serde(default)]
    pub photos: Vec<String>,
    pub title: String,
    /// Price as typed; unparsable input lists at 0
    pub price: String,
    pub category: String,
    #[serde(default)]
    pub condition: Condition,
    pub description: Option<String>,
}

/// Parameters for creating a group chat in one go.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateGroup {
    /// Chat ids of direct contacts
    pub members: Vec<String>,
    pub name: String,
}
