use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};
use thiserror::Error;

/// A dish or drink as stored in the local menu table.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuItem {
    /// Assigned by the store on insert; stable for the lifetime of the database.
    pub id: i64,
    pub title: String,
    pub description: String,
    pub price: Decimal,
    pub category: String,
    pub image_url: String,
}

impl MenuItem {
    /// Price as printed on a menu card, e.g. `$12.99`.
    pub fn price_label(&self) -> String {
        format!("${}", self.price)
    }
}

/// A menu entry as delivered by the remote menu document.
///
/// Carries no id: ids belong to the local store.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RemoteMenuItem {
    pub title: String,
    pub description: String,
    #[serde(deserialize_with = "price_from_text_or_number")]
    pub price: Decimal,
    pub category: String,
    #[serde(rename = "image")]
    pub image_url: String,
}

/// Body of the remote menu endpoint: `{ "menu": [ ... ] }`.
#[derive(Debug, Deserialize)]
pub struct MenuDocument {
    pub menu: Vec<RemoteMenuItem>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawPrice {
    Text(String),
    Number(serde_json::Number),
}

fn price_from_text_or_number<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    let text = match RawPrice::deserialize(deserializer)? {
        RawPrice::Text(text) => text,
        RawPrice::Number(number) => number.to_string(),
    };
    let text = text.trim();
    Decimal::from_str(text)
        .or_else(|_| Decimal::from_scientific(text))
        .map_err(|e| serde::de::Error::custom(format!("invalid price {text:?}: {e}")))
}

/// Category choices offered to the user. Not derived from the stored data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MenuCategory {
    Starters,
    Mains,
    Desserts,
    Drinks,
    #[default]
    All,
}

#[derive(Debug, Clone, Error, PartialEq)]
#[error("Unknown menu category: {0}")]
pub struct UnknownCategory(pub String);

impl MenuCategory {
    /// Display order of the category selector.
    pub const CHOICES: [MenuCategory; 5] = [
        MenuCategory::Starters,
        MenuCategory::Mains,
        MenuCategory::Desserts,
        MenuCategory::Drinks,
        MenuCategory::All,
    ];

    pub fn label(self) -> &'static str {
        match self {
            MenuCategory::Starters => "starters",
            MenuCategory::Mains => "mains",
            MenuCategory::Desserts => "desserts",
            MenuCategory::Drinks => "drinks",
            MenuCategory::All => "All",
        }
    }

    /// Whether an item filed under `category` belongs to this selection.
    pub fn matches(self, category: &str) -> bool {
        match self {
            MenuCategory::All => true,
            selected => category == selected.label(),
        }
    }
}

impl fmt::Display for MenuCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for MenuCategory {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MenuCategory::CHOICES
            .into_iter()
            .find(|choice| choice.label() == s)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}
