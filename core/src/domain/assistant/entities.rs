use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::menu::entities::Ingredient;

/// Upper bound on dish names accepted from the model; longer replies are
/// truncated during validation.
pub const MAX_SUGGESTED_DISHES: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum QuestionType {
    #[serde(rename = "single-selection")]
    SingleSelection,
    #[serde(rename = "multi-selection")]
    MultiSelection,
    #[serde(rename = "open-text")]
    OpenText,
}

/// One clarifying preference question generated from a menu view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Question {
    pub question: String,
    #[serde(rename = "type")]
    pub question_type: QuestionType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub possible_answers: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct QuestionList {
    pub questions: Vec<Question>,
}

/// A suggested dish resolved back to its full menu record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SuggestedDish {
    pub id: String,
    pub name: String,
    pub description: String,
    pub ingredients: Vec<Ingredient>,
    pub allergens: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    pub category_id: String,
    pub category_name: String,
}

/// Validated suggestion result: the model's dish names plus the matching
/// menu records. Names the menu does not contain stay in `suggested_dishes`
/// but have no `dishes` counterpart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DishSuggestion {
    pub suggested_dishes: Vec<String>,
    pub dishes: Vec<SuggestedDish>,
}
