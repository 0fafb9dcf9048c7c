use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::menu::entities::variant::VariantRef;

/// A menu category as stored in the document store. An empty `variants` list
/// means the category applies to every variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Category {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub items: Vec<Item>,
    #[serde(default)]
    pub variants: Vec<VariantRef>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Item {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
    #[serde(default)]
    pub allergens: Vec<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub variants: Vec<VariantRef>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Ingredient {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
}

impl Category {
    pub fn is_untagged(&self) -> bool {
        self.variants.is_empty()
    }

    pub fn references(&self, variant_id: &str) -> bool {
        self.variants.iter().any(|v| v.id == variant_id)
    }
}

impl Item {
    pub fn is_untagged(&self) -> bool {
        self.variants.is_empty()
    }

    pub fn references(&self, variant_id: &str) -> bool {
        self.variants.iter().any(|v| v.id == variant_id)
    }
}
