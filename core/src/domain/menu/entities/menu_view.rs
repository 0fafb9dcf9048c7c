use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::menu::entities::category::Category;

/// A materialized, self-contained menu: the unit returned to callers and fed
/// to the assistant. Categories carry the filtered item subsets but are
/// otherwise identical to the source documents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MenuView {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub categories: Vec<Category>,
}
