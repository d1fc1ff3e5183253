//! Item Drafts
//!
//! In-progress, unsaved form values for the add and edit panels. Drafts hold
//! the quantity as raw text; it is only parsed at submission time.

use serde::Serialize;

use crate::error::InventoryError;
use crate::models::{Category, Item};

/// Unsaved field values backing one form
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ItemDraft {
    pub name: String,
    pub quantity: String,
    pub category: Category,
}

/// Validated draft fields, ready to submit
///
/// Serializes with the service's field names (`source` for category).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DraftFields {
    pub name: String,
    pub quantity: u32,
    #[serde(rename = "source")]
    pub category: Category,
}

impl ItemDraft {
    /// Seed a draft from a committed item (edit panel)
    pub fn from_item(item: &Item) -> Self {
        Self {
            name: item.name.clone(),
            quantity: item.quantity.to_string(),
            category: item.category,
        }
    }

    pub fn set_name(&mut self, name: String) {
        self.name = name;
    }

    pub fn set_quantity(&mut self, quantity: String) {
        self.quantity = quantity;
    }

    pub fn set_category(&mut self, category: Category) {
        self.category = category;
    }

    /// Back to the empty, category-default values
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Parse and check the draft; on success the caller may submit the
    /// returned fields, on failure the draft stays untouched for correction
    pub fn validate(&self) -> Result<DraftFields, InventoryError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(InventoryError::validation("item name cannot be empty"));
        }

        let quantity: u32 = self
            .quantity
            .trim()
            .parse()
            .map_err(|_| InventoryError::validation("quantity must be a non-negative whole number"))?;

        Ok(DraftFields {
            name: name.to_string(),
            quantity,
            category: self.category,
        })
    }
}
