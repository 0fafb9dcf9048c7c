use axum::{Router, routing::post};
use utoipa::OpenApi;

use super::handlers::{
    generate_questions::{__path_generate_questions, generate_questions},
    suggest_dishes::{__path_suggest_dishes, suggest_dishes},
};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(generate_questions, suggest_dishes))]
pub struct AssistantApiDoc;

pub fn assistant_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/generate-questions", state.args.server.root_path),
            post(generate_questions),
        )
        .route(
            &format!("{}/suggest-dishes", state.args.server.root_path),
            post(suggest_dishes),
        )
}
