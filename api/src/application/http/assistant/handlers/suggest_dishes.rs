use axum::extract::State;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    assistant::validators::SuggestDishesRequest,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};
use piatto_core::domain::assistant::{
    entities::DishSuggestion, ports::AssistantService, value_objects::SuggestDishesInput,
};

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SuggestDishesResponse {
    #[serde(flatten)]
    pub data: DishSuggestion,
}

#[utoipa::path(
    post,
    path = "/suggest-dishes",
    tag = "assistant",
    summary = "Suggest dishes from the menu",
    description = "Suggests dishes from the selected menu view that match the user's answers",
    responses(
        (status = 200, body = SuggestDishesResponse)
    ),
    request_body = SuggestDishesRequest
)]
pub async fn suggest_dishes(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<SuggestDishesRequest>,
) -> Result<Response<SuggestDishesResponse>, ApiError> {
    let suggestion = state
        .service
        .suggest_dishes(SuggestDishesInput {
            merchant_id: payload.merchant_id,
            menu_id: payload.menu_id,
            language: payload.language,
            preferences: payload.user_preferences,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(SuggestDishesResponse { data: suggestion }))
}
