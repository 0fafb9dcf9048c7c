use utoipa::OpenApi;

use crate::application::http::{
    assistant::router::AssistantApiDoc, menu::router::MenuApiDoc,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Piatto API"
    ),
    nest(
        (path = {""}, api = MenuApiDoc),
        (path = {""}, api = AssistantApiDoc),
    )
)]
pub struct ApiDoc;
