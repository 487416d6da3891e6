//! Result wrapper types for displaying operation outcomes.

use std::fmt;

use crate::models::{Group, Listing};

/// Wrapper type for displaying the record a completed wizard produced.
///
/// # Examples
///
/// ```rust
/// use souk_core::{display::CreateResult, models::Group};
///
/// let group = Group {
///     id: "group-1718000000000".to_string(),
///     name: "Weekend trip".to_string(),
///     member_ids: vec!["1".to_string(), "3".to_string()],
/// };
///
/// let output = CreateResult::new(group).to_string();
/// assert!(output.starts_with("Created group with ID: group-1718000000000"));
/// ```
pub struct CreateResult<T> {
    pub resource: T,
}

impl<T> CreateResult<T> {
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for CreateResult<Listing> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Listed product with ID: {}", self.resource.product.id)?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

impl fmt::Display for CreateResult<Group> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Created group with ID: {}", self.resource.id)?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}
