use axum::{Router, routing::get};
use utoipa::OpenApi;

use super::handlers::{
    get_menu_view::{__path_get_menu_view, get_menu_view},
    get_menu_views::{__path_get_menu_views, get_menu_views},
};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(get_menu_views, get_menu_view))]
pub struct MenuApiDoc;

pub fn menu_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!(
                "{}/merchants/{{merchant_id}}/menus",
                state.args.server.root_path
            ),
            get(get_menu_views),
        )
        .route(
            &format!(
                "{}/merchants/{{merchant_id}}/menus/{{menu_id}}",
                state.args.server.root_path
            ),
            get(get_menu_view),
        )
}
