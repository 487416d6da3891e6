//! Product grid, category and listing handlers for the Marketplace.

use std::num::NonZeroUsize;

use log::{debug, info};

use super::{advance, submit, Marketplace};
use crate::{
    display::{Categories, ProductPage},
    error::{Result, SoukError},
    models::{FilterState, Listing, Product, Profile, ALL_CATEGORY_ID},
    paging::ListFilterPaginator,
    params::{BrowseProducts, Id, SellProduct},
    wizard::{ListingPatch, ListingWizard, WizardFlow},
};

impl Marketplace {
    /// A paginator over every product, showing the first page.
    pub fn paginator(&self, page_size: NonZeroUsize) -> ListFilterPaginator<'_, Product> {
        ListFilterPaginator::new(self.catalog.products(), page_size)
    }

    /// Filters the product grid and loads `params.pages` pages of it.
    ///
    /// Loading stops early once every match is visible.
    ///
    /// # Errors
    ///
    /// Returns `SoukError::InvalidInput` for a zero page count or page size
    /// and `SoukError::UnknownCategory` for a category not in the catalog.
    pub fn browse_products(&self, params: &BrowseProducts) -> Result<ProductPage> {
        let page_size = NonZeroUsize::new(params.page_size).ok_or_else(|| {
            SoukError::invalid_input("page_size").with_reason("must be at least 1")
        })?;
        if params.pages == 0 {
            return Err(SoukError::invalid_input("pages").with_reason("must be at least 1"));
        }
        let category = self.catalog.category_filter(&params.category)?;

        let mut paginator = self.paginator(page_size);
        paginator.set_filter(FilterState::search(params.search.as_str()).with_category(category));
        for _ in 1..params.pages {
            if !paginator.load_more() {
                debug!("All {} matches loaded", paginator.match_count());
                break;
            }
        }

        Ok(ProductPage::from_paginator(&paginator))
    }

    /// Looks up a product by id.
    ///
    /// # Errors
    ///
    /// Returns `SoukError::ProductNotFound` for an unknown id.
    pub fn product(&self, params: &Id) -> Result<&Product> {
        self.catalog
            .product(&params.id)
            .ok_or_else(|| SoukError::ProductNotFound {
                id: params.id.clone(),
            })
    }

    /// The category carousel with `active` highlighted.
    ///
    /// # Errors
    ///
    /// Returns `SoukError::UnknownCategory` if `active` is not in the catalog.
    pub fn categories(&self, active: &str) -> Result<Categories> {
        let active = self.catalog.category_filter(active)?;
        Ok(Categories {
            categories: self.catalog.categories().to_vec(),
            active: active.as_str().to_string(),
        })
    }

    pub fn profile(&self) -> &Profile {
        self.catalog.profile()
    }

    /// A fresh listing wizard selling as the profile owner.
    ///
    /// # Errors
    ///
    /// Never fails for the built-in wizard; the `Result` comes from
    /// [`WizardFlow::new`].
    pub fn listing_wizard(&self) -> Result<WizardFlow<ListingWizard<'_>>> {
        WizardFlow::new(ListingWizard::new(
            self.catalog.categories(),
            self.catalog.profile().as_seller(),
        ))
    }

    /// Runs the listing wizard in one go.
    ///
    /// Photos beyond the limit and duplicates are dropped the way the
    /// interactive wizard drops them. The listing is not added to the
    /// catalog.
    ///
    /// # Errors
    ///
    /// Returns `SoukError::UnknownCategory` for a category not in the
    /// catalog and `SoukError::WizardIncomplete` naming the first step
    /// whose requirements are not met.
    pub fn sell_product(&self, params: &SellProduct) -> Result<Listing> {
        if params.category != ALL_CATEGORY_ID && self.catalog.category(&params.category).is_none() {
            return Err(SoukError::UnknownCategory {
                id: params.category.clone(),
            });
        }

        let mut flow = self.listing_wizard()?;
        flow.update(ListingPatch::default().photos(params.photos.iter()));
        advance(&mut flow)?;

        let mut details = ListingPatch::default()
            .title(params.title.as_str())
            .price(params.price.as_str())
            .category(params.category.as_str())
            .condition(params.condition);
        if let Some(description) = &params.description {
            details = details.description(description.as_str());
        }
        flow.update(details);
        advance(&mut flow)?;

        let listing = submit(&mut flow)?;
        info!(
            "Listed {} '{}' at {:.2}",
            listing.product.id, listing.product.title, listing.product.price
        );
        Ok(listing)
    }
}
