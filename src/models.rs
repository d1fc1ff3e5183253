//! Inventory Models
//!
//! Data structures matching the remote inventory service.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Server-assigned item identifier, durable across the item lifecycle
pub type ItemId = u32;

/// Item category, a closed set with a fixed display order
///
/// The wire format uses the historical field name `source` with lowercase
/// values (see [`Item`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    Prailgekai,
    Garsas,
    Laidai,
    Irankiai,
}

/// Display order for the active list, first to last
pub const CATEGORY_ORDER: [Category; 4] = [
    Category::Prailgekai,
    Category::Garsas,
    Category::Laidai,
    Category::Irankiai,
];

impl Category {
    /// Index within [`CATEGORY_ORDER`]; lower sorts first
    pub fn rank(&self) -> usize {
        match self {
            Category::Prailgekai => 0,
            Category::Garsas => 1,
            Category::Laidai => 2,
            Category::Irankiai => 3,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Prailgekai => "prailgekai",
            Category::Garsas => "garsas",
            Category::Laidai => "laidai",
            Category::Irankiai => "irankiai",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "garsas" => Category::Garsas,
            "laidai" => Category::Laidai,
            "irankiai" => Category::Irankiai,
            _ => Category::Prailgekai,
        }
    }

    /// Human-facing label for `<select>` options
    pub fn label(&self) -> &'static str {
        match self {
            Category::Prailgekai => "prailgekai",
            Category::Garsas => "Garsas",
            Category::Laidai => "Laidai",
            Category::Irankiai => "Įrankiai",
        }
    }
}

/// A single inventory record (matches the service payload)
///
/// `deleted_at` is present exactly when the item sits in the deleted list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub quantity: u32,
    #[serde(rename = "source")]
    pub category: Category,
    #[serde(rename = "deletedAt", default, skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_category_rank_matches_display_order() {
        for (idx, category) in CATEGORY_ORDER.iter().enumerate() {
            assert_eq!(category.rank(), idx);
        }
    }

    #[test]
    fn test_category_str_round_trip() {
        for category in CATEGORY_ORDER {
            assert_eq!(Category::from_str(category.as_str()), category);
        }
        // Unknown strings fall back to the default category
        assert_eq!(Category::from_str("nope"), Category::Prailgekai);
    }

    #[test]
    fn test_item_wire_format() {
        let item = Item {
            id: 7,
            name: "Kabelis".to_string(),
            quantity: 5,
            category: Category::Laidai,
            deleted_at: None,
        };

        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["source"], "laidai");
        assert!(json.get("deletedAt").is_none());

        let parsed: Item = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, item);
    }

    #[test]
    fn test_deleted_item_wire_format() {
        let deleted_at = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap();
        let json = serde_json::json!({
            "id": 3,
            "name": "Mikrofonas",
            "quantity": 2,
            "source": "garsas",
            "deletedAt": deleted_at.to_rfc3339(),
        });

        let parsed: Item = serde_json::from_value(json).unwrap();
        assert_eq!(parsed.category, Category::Garsas);
        assert_eq!(parsed.deleted_at, Some(deleted_at));
    }
}
