//! Profile of the signed-in user.

use serde::{Deserialize, Serialize};

use super::Seller;

/// Seller profile shown on the profile tab.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub name: String,
    pub avatar: String,

    /// Year the user started selling
    pub member_since: i16,

    #[serde(default)]
    pub sold: u32,
    #[serde(default)]
    pub rating: f32,
    #[serde(default)]
    pub buyers: u32,

    #[serde(default)]
    pub listings: u32,
    #[serde(default)]
    pub favorites: u32,
    #[serde(default)]
    pub reviews: u32,
}

impl Profile {
    /// The profile acting as a seller on new listings.
    pub fn as_seller(&self) -> Seller {
        Seller {
            name: self.name.clone(),
            avatar: self.avatar.clone(),
        }
    }
}
