//! Records produced by completed wizards.

use serde::{Deserialize, Serialize};

use super::{Condition, Product};

/// A product listing produced by the sell wizard.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Listing {
    /// The product as it appears on the marketplace
    pub product: Product,

    pub condition: Condition,

    /// Seller's description, `None` when left blank
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// All photos in upload order; the first one is the cover
    pub photos: Vec<String>,
}

/// A group chat produced by the group wizard.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    pub id: String,
    pub name: String,

    /// Chat ids of the members, in selection order
    pub member_ids: Vec<String>,
}
