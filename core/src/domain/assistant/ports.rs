use std::future::Future;

use crate::domain::{
    assistant::{
        entities::{DishSuggestion, QuestionList},
        value_objects::{GenerateQuestionsInput, SuggestDishesInput},
    },
    common::entities::app_errors::CoreError,
};

/// Client trait for the text-generation service
#[cfg_attr(test, mockall::automock)]
pub trait LlmClient: Send + Sync {
    fn generate_with_text(
        &self,
        prompt: String,
        response_schema: serde_json::Value,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}

/// Service trait for the menu-aware assistant
#[cfg_attr(test, mockall::automock)]
pub trait AssistantService: Send + Sync {
    fn generate_questions(
        &self,
        input: GenerateQuestionsInput,
    ) -> impl Future<Output = Result<QuestionList, CoreError>> + Send;

    fn suggest_dishes(
        &self,
        input: SuggestDishesInput,
    ) -> impl Future<Output = Result<DishSuggestion, CoreError>> + Send;
}
