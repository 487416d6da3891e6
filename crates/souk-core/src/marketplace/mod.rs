//! High-level marketplace API over a loaded catalog.
//!
//! [`Marketplace`] is what interface layers talk to. It owns the
//! [`Catalog`] and hands out the two logic units bound to it: paginators
//! over products and wizards for listings and groups. Every handler takes a
//! [`params`](crate::params) struct and returns a display wrapper or a model.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │    Handlers     │    │  Logic units    │    │    Catalog      │
//! │ (chat_handlers, │───▶│ (paging,        │───▶│  (read-only)    │
//! │  market_handlers│    │  wizard)        │    │                 │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Submodules
//!
//! - [`builder`]: resolves the catalog source and builds a [`Marketplace`]
//! - [`chat_handlers`]: chat list, conversation view, contacts and groups
//! - [`market_handlers`]: product grid, categories, profile and listings
//!
//! # Usage
//!
//! ```rust
//! use souk_core::{params::BrowseProducts, MarketplaceBuilder};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let marketplace = MarketplaceBuilder::new().without_xdg().build()?;
//!
//! let page = marketplace.browse_products(&BrowseProducts {
//!     category: "electronics".to_string(),
//!     ..Default::default()
//! })?;
//! assert!(page.products.iter().all(|p| p.category == "electronics"));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

use std::{fmt, path::PathBuf};

use crate::{
    catalog::Catalog,
    display::TabBar,
    error::{Result, SoukError},
    models::TabId,
    wizard::{WizardFlow, WizardSpec},
};

pub mod builder;
pub mod chat_handlers;
pub mod market_handlers;

#[cfg(test)]
mod tests;

pub use builder::{MarketplaceBuilder, CATALOG_FILE_NAME};

/// Where the catalog of a [`Marketplace`] came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    File(PathBuf),
    Bundled,
    /// Handed over with [`Marketplace::from_catalog`]
    InMemory,
}

impl fmt::Display for CatalogSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogSource::File(path) => write!(f, "catalog {}", path.display()),
            CatalogSource::Bundled => write!(f, "bundled catalog"),
            CatalogSource::InMemory => write!(f, "in-memory catalog"),
        }
    }
}

/// Main interface for browsing chats and the marketplace.
#[derive(Debug, Clone)]
pub struct Marketplace {
    pub(crate) catalog: Catalog,
    source: CatalogSource,
}

impl Marketplace {
    pub(crate) fn new(catalog: Catalog, source: CatalogSource) -> Self {
        Self { catalog, source }
    }

    /// Wraps an already loaded catalog.
    pub fn from_catalog(catalog: Catalog) -> Self {
        Self::new(catalog, CatalogSource::InMemory)
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn source(&self) -> &CatalogSource {
        &self.source
    }

    /// Sum of unread messages, shown on the chats tab.
    pub fn total_unread(&self) -> u32 {
        self.catalog.total_unread()
    }

    /// The bottom navigation with `active` highlighted.
    pub fn tab_bar(&self, active: TabId) -> TabBar {
        TabBar {
            active,
            unread: self.total_unread(),
        }
    }
}

/// Error for a wizard that refused to move on.
///
/// Names the first step whose gate fails, so a refused submit on the last
/// step still points at the earlier step that needs fixing.
fn refusal<W: WizardSpec>(flow: &WizardFlow<W>) -> SoukError {
    let failing = flow
        .steps()
        .iter()
        .find_map(|step| flow.spec().explain(*step, flow.draft()).map(|why| (*step, why)));

    match (failing, flow.current().step()) {
        (Some((step, reason)), _) => SoukError::wizard_incomplete(step).with_reason(reason),
        (None, Some(step)) => {
            SoukError::wizard_incomplete(step).with_reason("the wizard is not on its last step")
        }
        (None, None) => SoukError::wizard_incomplete("submitted")
            .with_reason("the wizard was already submitted"),
    }
}

/// Advances or reports why the gate refused.
fn advance<W: WizardSpec>(flow: &mut WizardFlow<W>) -> Result<()> {
    if flow.advance() {
        Ok(())
    } else {
        Err(refusal(flow))
    }
}

/// Submits or reports the first failing gate.
fn submit<W: WizardSpec>(flow: &mut WizardFlow<W>) -> Result<W::Record> {
    match flow.submit() {
        Some(record) => Ok(record),
        None => Err(refusal(flow)),
    }
}
