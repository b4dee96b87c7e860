//! Grid tile descriptor.
//!
//! # Responsibility
//! - Define the canonical record rendered as one bento tile.
//! - Validate identity before a tile enters a layout.
//!
//! # Invariants
//! - `id` is non-blank, assigned at definition time and never changes.
//! - Presentational fields (`icon`, `size`, `display_color`) never affect
//!   ordering behavior.

use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Stable identifier of a tile.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type ItemId = String;

/// Visual span of a tile in the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TileSize {
    /// Spans two grid columns.
    Large,
    #[default]
    Medium,
    Small,
}

/// Validation errors for a single tile descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridItemValidationError {
    /// `id` is empty or whitespace only.
    BlankId,
}

impl Display for GridItemValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankId => write!(f, "grid item id must not be blank"),
        }
    }
}

impl Error for GridItemValidationError {}

/// One tile of the bento dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GridItem {
    /// Stable identity used for ordering and persistence.
    pub id: ItemId,
    pub title: String,
    pub description: String,
    /// Opaque icon handle resolved by the renderer.
    pub icon: String,
    /// Navigation target handed to the router on activation.
    pub destination: String,
    pub size: TileSize,
    /// Opaque styling token resolved by the renderer.
    pub display_color: String,
}

impl GridItem {
    /// Creates a medium tile with empty presentational fields.
    ///
    /// # Errors
    /// - Returns `BlankId` when `id` is empty after trim.
    pub fn new(
        id: impl Into<ItemId>,
        title: impl Into<String>,
        destination: impl Into<String>,
    ) -> Result<Self, GridItemValidationError> {
        let item = Self {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            icon: String::new(),
            destination: destination.into(),
            size: TileSize::default(),
            display_color: String::new(),
        };
        item.validate()?;
        Ok(item)
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = icon.into();
        self
    }

    pub fn with_size(mut self, size: TileSize) -> Self {
        self.size = size;
        self
    }

    pub fn with_display_color(mut self, color: impl Into<String>) -> Self {
        self.display_color = color.into();
        self
    }

    /// Checks identity invariants.
    pub fn validate(&self) -> Result<(), GridItemValidationError> {
        if self.id.trim().is_empty() {
            return Err(GridItemValidationError::BlankId);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{GridItem, GridItemValidationError, TileSize};

    #[test]
    fn new_rejects_blank_id() {
        let err = GridItem::new("  ", "MAP", "/map").unwrap_err();
        assert_eq!(err, GridItemValidationError::BlankId);
    }

    #[test]
    fn serialization_uses_camel_case_and_lowercase_size() {
        let item = GridItem::new("food-map", "FOOD MAP", "/map")
            .unwrap()
            .with_size(TileSize::Large)
            .with_display_color("ff-blue");

        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["id"], "food-map");
        assert_eq!(json["size"], "large");
        assert_eq!(json["displayColor"], "ff-blue");
    }
}
