//! The "sell a product" wizard: photos, details, review.

use std::fmt;

use crate::models::{Category, Condition, Listing, Product, Seller};

use super::{generate_id, WizardSpec};

/// Most photos a listing can carry.
pub const MAX_PHOTOS: usize = 6;

/// Longest accepted title, in characters.
pub const MAX_TITLE_LEN: usize = 80;

/// Longest accepted description, in characters.
pub const MAX_DESCRIPTION_LEN: usize = 500;

/// Steps of the listing wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingStep {
    Photos,
    Details,
    Review,
}

impl ListingStep {
    pub const ALL: [ListingStep; 3] = [ListingStep::Photos, ListingStep::Details, ListingStep::Review];

    pub fn label(&self) -> &'static str {
        match self {
            ListingStep::Photos => "Photos",
            ListingStep::Details => "Details",
            ListingStep::Review => "Review",
        }
    }
}

impl fmt::Display for ListingStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ListingStep::Photos => "photos",
            ListingStep::Details => "details",
            ListingStep::Review => "review",
        };
        f.write_str(name)
    }
}

/// Input collected while listing a product.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListingDraft {
    /// Photo URLs; the first one is the cover
    pub photos: Vec<String>,
    pub title: String,
    /// Price exactly as typed
    pub price: String,
    pub category: Option<String>,
    pub condition: Condition,
    pub description: String,
}

impl ListingDraft {
    /// Appends a photo. Duplicates and photos past [`MAX_PHOTOS`] are ignored.
    pub fn add_photo(&mut self, url: impl Into<String>) -> bool {
        let url = url.into();
        if self.photos.len() >= MAX_PHOTOS || self.photos.contains(&url) {
            return false;
        }
        self.photos.push(url);
        true
    }

    /// Removes the photo at `index`, if any.
    pub fn remove_photo(&mut self, index: usize) -> Option<String> {
        (index < self.photos.len()).then(|| self.photos.remove(index))
    }

    /// Cover image, the first photo.
    pub fn cover(&self) -> Option<&str> {
        self.photos.first().map(String::as_str)
    }

    /// Price as a number, see [`parse_price`].
    pub fn price_value(&self) -> f64 {
        parse_price(&self.price)
    }
}

/// Partial update of a [`ListingDraft`].
///
/// Fields left `None` keep their draft value. Within one patch, `photos`
/// replaces the list first, then `remove_photo`, then each of `add_photos`
/// in order.
#[derive(Debug, Clone, Default)]
pub struct ListingPatch {
    pub photos: Option<Vec<String>>,
    pub add_photos: Vec<String>,
    pub remove_photo: Option<usize>,
    pub title: Option<String>,
    pub price: Option<String>,
    /// Empty string clears the selection
    pub category: Option<String>,
    pub condition: Option<Condition>,
    pub description: Option<String>,
}

impl ListingPatch {
    pub fn photos<I, S>(mut self, photos: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.photos = Some(photos.into_iter().map(Into::into).collect());
        self
    }

    pub fn add_photo(mut self, url: impl Into<String>) -> Self {
        self.add_photos.push(url.into());
        self
    }

    pub fn remove_photo(mut self, index: usize) -> Self {
        self.remove_photo = Some(index);
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn price(mut self, price: impl Into<String>) -> Self {
        self.price = Some(price.into());
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn condition(mut self, condition: Condition) -> Self {
        self.condition = Some(condition);
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Parses a typed price the lenient way a browser number field does.
///
/// The leading decimal number of the input is used and anything after it is
/// ignored. Input without a leading number, non-finite values and negative
/// values all become `0.0`.
///
/// ```rust
/// use souk_core::wizard::parse_price;
///
/// assert_eq!(parse_price("89.99"), 89.99);
/// assert_eq!(parse_price(" 12abc"), 12.0);
/// assert_eq!(parse_price("abc"), 0.0);
/// assert_eq!(parse_price(""), 0.0);
/// ```
pub fn parse_price(raw: &str) -> f64 {
    let input = raw.trim_start();
    let bytes = input.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;
    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }
    if int_digits == 0 && frac_digits == 0 {
        return 0.0;
    }
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end.min(bytes.len())..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    match input[..end].parse::<f64>() {
        Ok(value) if value.is_finite() && value > 0.0 => value,
        _ => 0.0,
    }
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

/// Listing wizard bound to the catalog's sellable categories and the
/// signed-in seller.
#[derive(Debug, Clone)]
pub struct ListingWizard<'a> {
    categories: Vec<&'a Category>,
    seller: Seller,
}

impl<'a> ListingWizard<'a> {
    /// `categories` may include the "all" sentinel; it is never sellable.
    pub fn new(categories: &'a [Category], seller: Seller) -> Self {
        Self {
            categories: categories.iter().filter(|c| !c.is_all()).collect(),
            seller,
        }
    }

    /// Categories a product can be listed under.
    pub fn categories(&self) -> &[&'a Category] {
        &self.categories
    }

    pub fn seller(&self) -> &Seller {
        &self.seller
    }

    fn is_sellable(&self, id: &str) -> bool {
        self.categories.iter().any(|c| c.id == id)
    }
}

impl WizardSpec for ListingWizard<'_> {
    type Step = ListingStep;
    type Draft = ListingDraft;
    type Patch = ListingPatch;
    type Record = Listing;

    fn steps(&self) -> &'static [ListingStep] {
        &ListingStep::ALL
    }

    fn can_advance(&self, step: ListingStep, draft: &ListingDraft) -> bool {
        self.explain(step, draft).is_none()
    }

    fn explain(&self, step: ListingStep, draft: &ListingDraft) -> Option<String> {
        match step {
            ListingStep::Photos if draft.photos.is_empty() => {
                Some("add at least one photo".to_string())
            }
            ListingStep::Details if draft.title.trim().is_empty() => {
                Some("a title is required".to_string())
            }
            ListingStep::Details if draft.price.trim().is_empty() => {
                Some("a price is required".to_string())
            }
            ListingStep::Details => match draft.category.as_deref() {
                None => Some("pick a category".to_string()),
                Some(id) if !self.is_sellable(id) => {
                    Some(format!("'{id}' is not a sellable category"))
                }
                Some(_) => None,
            },
            _ => None,
        }
    }

    fn apply(&self, draft: &mut ListingDraft, patch: ListingPatch) {
        if let Some(photos) = patch.photos {
            draft.photos.clear();
            for photo in photos {
                draft.add_photo(photo);
            }
        }
        if let Some(index) = patch.remove_photo {
            draft.remove_photo(index);
        }
        for url in patch.add_photos {
            draft.add_photo(url);
        }
        if let Some(title) = patch.title {
            draft.title = truncate_chars(title, MAX_TITLE_LEN);
        }
        if let Some(price) = patch.price {
            draft.price = price;
        }
        if let Some(category) = patch.category {
            let category = category.trim();
            draft.category = (!category.is_empty()).then(|| category.to_string());
        }
        if let Some(condition) = patch.condition {
            draft.condition = condition;
        }
        if let Some(description) = patch.description {
            draft.description = truncate_chars(description, MAX_DESCRIPTION_LEN);
        }
    }

    fn finalize(&self, draft: &ListingDraft) -> Listing {
        let description = draft.description.trim();
        Listing {
            product: Product {
                id: generate_id("user"),
                title: draft.title.trim().to_string(),
                price: draft.price_value(),
                currency: crate::models::product::default_currency(),
                image: draft.cover().unwrap_or_default().to_string(),
                rating: 0.0,
                review_count: 0,
                category: draft.category.clone().unwrap_or_default(),
                seller: self.seller.clone(),
            },
            condition: draft.condition,
            description: (!description.is_empty()).then(|| description.to_string()),
            photos: draft.photos.clone(),
        }
    }
}

fn truncate_chars(mut text: String, max: usize) -> String {
    if let Some((index, _)) = text.char_indices().nth(max) {
        text.truncate(index);
    }
    text
}
