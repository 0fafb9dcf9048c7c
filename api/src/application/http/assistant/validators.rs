use piatto_core::domain::assistant::value_objects::UserPreferences;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct GenerateQuestionsRequest {
    #[validate(length(min = 1, message = "merchant_id must not be empty"))]
    pub merchant_id: String,

    pub menu_id: Option<String>,

    #[validate(length(
        min = 2,
        max = 64,
        message = "language must be between 2 and 64 characters"
    ))]
    pub language: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct SuggestDishesRequest {
    #[validate(length(min = 1, message = "merchant_id must not be empty"))]
    pub merchant_id: String,

    pub menu_id: Option<String>,

    pub language: Option<String>,

    #[serde(default)]
    pub user_preferences: UserPreferences,
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn empty_merchant_id_fails_validation() {
        let request = GenerateQuestionsRequest {
            merchant_id: String::new(),
            menu_id: None,
            language: "en".to_string(),
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn user_preferences_default_to_empty_when_absent() {
        let request: SuggestDishesRequest =
            serde_json::from_str(r#"{"merchant_id":"m1"}"#).unwrap();
        assert!(request.user_preferences.preferences.is_empty());
        assert!(request.validate().is_ok());
    }
}
