use axum::extract::{Path, State};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};
use piatto_core::domain::menu::{
    entities::MenuView, ports::MenuService, value_objects::GetMenuViewsInput,
};

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GetMenuViewsResponse {
    pub data: Vec<MenuView>,
}

#[utoipa::path(
    get,
    path = "/merchants/{merchant_id}/menus",
    tag = "menu",
    summary = "List resolved menu views",
    description = "Resolves the merchant's categories into one menu view per active variant",
    responses(
        (status = 200, body = GetMenuViewsResponse)
    ),
    params(
        ("merchant_id" = String, Path, description = "Merchant identifier"),
    )
)]
pub async fn get_menu_views(
    Path(merchant_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Response<GetMenuViewsResponse>, ApiError> {
    let views = state
        .service
        .get_menu_views(GetMenuViewsInput { merchant_id })
        .await
        .map_err(ApiError::from)?;

    if views.is_empty() {
        return Err(ApiError::NotFound("Menu not found".to_string()));
    }

    Ok(Response::OK(GetMenuViewsResponse { data: views }))
}
