use crate::domain::{
    assistant::{
        entities::{DishSuggestion, MAX_SUGGESTED_DISHES, QuestionList},
        helpers::{flatten_menu, match_suggested_dishes},
        ports::{AssistantService, LlmClient},
        prompts::{questions_prompt, suggestions_prompt},
        schema::{dish_suggestion_schema, question_list_schema},
        value_objects::{GenerateQuestionsInput, SuggestDishesInput},
    },
    common::{entities::app_errors::CoreError, services::Service},
    menu::{
        ports::{MenuService, MenuStoreRepository},
        value_objects::GetMenuViewInput,
    },
};

use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct SuggestedDishNames {
    suggested_dishes: Vec<String>,
}

impl<MS, LLM> AssistantService for Service<MS, LLM>
where
    MS: MenuStoreRepository,
    LLM: LlmClient,
{
    async fn generate_questions(
        &self,
        input: GenerateQuestionsInput,
    ) -> Result<QuestionList, CoreError> {
        // 1. Fetch and select the menu view
        let view = self
            .get_menu_view(GetMenuViewInput {
                merchant_id: input.merchant_id,
                menu_id: input.menu_id,
            })
            .await?;

        // 2. Flatten the view and assemble the prompt
        let dishes = flatten_menu(&view);
        let prompt = questions_prompt(&dishes, &input.language);
        tracing::debug!(menu_id = %view.id, dishes = dishes.len(), "generating preference questions");

        // 3. Call the model and validate its reply
        let raw = self
            .llm_client
            .generate_with_text(prompt, question_list_schema())
            .await?;

        parse_question_list(&raw)
    }

    async fn suggest_dishes(&self, input: SuggestDishesInput) -> Result<DishSuggestion, CoreError> {
        let view = self
            .get_menu_view(GetMenuViewInput {
                merchant_id: input.merchant_id,
                menu_id: input.menu_id,
            })
            .await?;

        let dishes = flatten_menu(&view);
        let prompt = suggestions_prompt(&dishes, &input.preferences, input.language.as_deref());
        tracing::debug!(menu_id = %view.id, dishes = dishes.len(), "suggesting dishes");

        let raw = self
            .llm_client
            .generate_with_text(prompt, dish_suggestion_schema())
            .await?;

        let names = parse_suggested_names(&raw)?;
        let matched = match_suggested_dishes(&view, &names);

        Ok(DishSuggestion {
            suggested_dishes: names,
            dishes: matched,
        })
    }
}

fn parse_question_list(raw: &str) -> Result<QuestionList, CoreError> {
    let value: serde_json::Value = serde_json::from_str(raw).map_err(|e| {
        tracing::error!("model reply is not valid JSON: {}", e);
        CoreError::SchemaValidation("model reply is not valid JSON".to_string())
    })?;

    serde_json::from_value(value).map_err(|e| {
        tracing::error!("model reply does not match the question schema: {}", e);
        CoreError::SchemaValidation(format!("model reply does not match the question schema: {e}"))
    })
}

fn parse_suggested_names(raw: &str) -> Result<Vec<String>, CoreError> {
    let value: serde_json::Value = serde_json::from_str(raw).map_err(|e| {
        tracing::error!("model reply is not valid JSON: {}", e);
        CoreError::SchemaValidation("model reply is not valid JSON".to_string())
    })?;

    let mut names: SuggestedDishNames = serde_json::from_value(value).map_err(|e| {
        tracing::error!("model reply does not match the suggestion schema: {}", e);
        CoreError::SchemaValidation(format!(
            "model reply does not match the suggestion schema: {e}"
        ))
    })?;

    if names.suggested_dishes.is_empty() {
        return Err(CoreError::SchemaValidation(
            "model returned no suggested dishes".to_string(),
        ));
    }
    names.suggested_dishes.truncate(MAX_SUGGESTED_DISHES);
    Ok(names.suggested_dishes)
}
