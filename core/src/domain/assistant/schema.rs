use serde_json::json;

use crate::domain::assistant::entities::MAX_SUGGESTED_DISHES;

/// Returns the JSON schema the model's question reply must conform to
pub fn question_list_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "questions": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "question": { "type": "string" },
                        "type": {
                            "type": "string",
                            "enum": ["single-selection", "multi-selection", "open-text"]
                        },
                        "possible_answers": {
                            "type": "array",
                            "items": { "type": "string" }
                        }
                    },
                    "required": ["question", "type"]
                }
            }
        },
        "required": ["questions"]
    })
}

/// Returns the JSON schema the model's suggestion reply must conform to
pub fn dish_suggestion_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "suggested_dishes": {
                "type": "array",
                "items": { "type": "string" },
                "maxItems": MAX_SUGGESTED_DISHES
            }
        },
        "required": ["suggested_dishes"]
    })
}
