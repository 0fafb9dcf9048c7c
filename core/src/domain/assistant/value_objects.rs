use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone)]
pub struct GenerateQuestionsInput {
    pub merchant_id: String,
    pub menu_id: Option<String>,
    pub language: String,
}

#[derive(Debug, Clone)]
pub struct SuggestDishesInput {
    pub merchant_id: String,
    pub menu_id: Option<String>,
    pub language: Option<String>,
    pub preferences: UserPreferences,
}

/// The caller's answers to previously generated questions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UserPreferences {
    #[serde(default)]
    pub preferences: Vec<PreferenceAnswer>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PreferenceAnswer {
    pub question: String,
    pub answer: String,
}

/// A dish flattened out of a menu view for prompt assembly.
#[derive(Debug, Clone, PartialEq)]
pub struct DishSummary {
    pub id: String,
    pub name: String,
    pub description: String,
    pub ingredients: Vec<String>,
    pub allergens: Vec<String>,
    pub price: Option<f64>,
    pub category: String,
}
