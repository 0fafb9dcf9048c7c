use axum::{
    Json,
    extract::{FromRequest, Request},
    http::StatusCode,
    response::IntoResponse,
};
use serde::{Serialize, de::DeserializeOwned};
use utoipa::ToSchema;
use validator::Validate;

use piatto_core::domain::common::entities::app_errors::CoreError;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    SchemaValidation(String),

    #[error("{0}")]
    UpstreamFailure(String),

    #[error("{0}")]
    InternalServerError(String),
}

/// Wire shape of every failure: an error message plus optional details,
/// never a stack trace.
#[derive(Debug, Serialize, ToSchema)]
pub struct ApiErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::MerchantNotFound | CoreError::MenuNotFound | CoreError::MenuViewNotFound => {
                ApiError::NotFound(err.to_string())
            }
            CoreError::ExternalService(details) => ApiError::UpstreamFailure(details),
            CoreError::SchemaValidation(details) => ApiError::SchemaValidation(details),
            CoreError::Internal(details) => ApiError::InternalServerError(details),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, error, details) = match self {
            ApiError::NotFound(error) => (StatusCode::NOT_FOUND, error, None),
            ApiError::BadRequest(error) => (StatusCode::BAD_REQUEST, error, None),
            ApiError::SchemaValidation(details) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "Schema validation failed".to_string(),
                Some(details),
            ),
            ApiError::UpstreamFailure(details) => (
                StatusCode::BAD_GATEWAY,
                "Upstream model failure".to_string(),
                Some(details),
            ),
            ApiError::InternalServerError(details) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
                Some(details),
            ),
        };

        (status, Json(ApiErrorBody { error, details })).into_response()
    }
}

/// JSON extractor that runs `validator` rules before the handler sees the
/// payload.
pub struct ValidateJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidateJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| ApiError::BadRequest(e.body_text()))?;

        value
            .validate()
            .map_err(|e| ApiError::BadRequest(e.to_string()))?;

        Ok(ValidateJson(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn core_not_found_variants_map_to_404() {
        for err in [
            CoreError::MerchantNotFound,
            CoreError::MenuNotFound,
            CoreError::MenuViewNotFound,
        ] {
            let response = ApiError::from(err).into_response();
            assert_eq!(response.status(), StatusCode::NOT_FOUND);
        }
    }

    #[test]
    fn upstream_and_validation_failures_keep_their_status_codes() {
        let upstream = ApiError::from(CoreError::ExternalService("boom".to_string()));
        assert_eq!(upstream.into_response().status(), StatusCode::BAD_GATEWAY);

        let schema = ApiError::from(CoreError::SchemaValidation("bad".to_string()));
        assert_eq!(
            schema.into_response().status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
    }
}
