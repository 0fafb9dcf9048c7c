use axum::extract::State;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    assistant::validators::GenerateQuestionsRequest,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};
use piatto_core::domain::assistant::{
    entities::QuestionList, ports::AssistantService, value_objects::GenerateQuestionsInput,
};

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GenerateQuestionsResponse {
    #[serde(flatten)]
    pub data: QuestionList,
}

#[utoipa::path(
    post,
    path = "/generate-questions",
    tag = "assistant",
    summary = "Generate clarifying preference questions",
    description = "Generates 3 preference questions from the selected menu view",
    responses(
        (status = 200, body = GenerateQuestionsResponse)
    ),
    request_body = GenerateQuestionsRequest
)]
pub async fn generate_questions(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<GenerateQuestionsRequest>,
) -> Result<Response<GenerateQuestionsResponse>, ApiError> {
    let questions = state
        .service
        .generate_questions(GenerateQuestionsInput {
            merchant_id: payload.merchant_id,
            menu_id: payload.menu_id,
            language: payload.language,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GenerateQuestionsResponse { data: questions }))
}
