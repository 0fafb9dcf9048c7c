use axum::extract::{Path, State};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};
use piatto_core::domain::menu::{
    entities::MenuView, ports::MenuService, value_objects::GetMenuViewInput,
};

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GetMenuViewResponse {
    pub data: MenuView,
}

#[utoipa::path(
    get,
    path = "/merchants/{merchant_id}/menus/{menu_id}",
    tag = "menu",
    summary = "Fetch one resolved menu view",
    responses(
        (status = 200, body = GetMenuViewResponse)
    ),
    params(
        ("merchant_id" = String, Path, description = "Merchant identifier"),
        ("menu_id" = String, Path, description = "Menu view identifier (variant id)"),
    )
)]
pub async fn get_menu_view(
    Path((merchant_id, menu_id)): Path<(String, String)>,
    State(state): State<AppState>,
) -> Result<Response<GetMenuViewResponse>, ApiError> {
    let view = state
        .service
        .get_menu_view(GetMenuViewInput {
            merchant_id,
            menu_id: Some(menu_id),
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetMenuViewResponse { data: view }))
}
