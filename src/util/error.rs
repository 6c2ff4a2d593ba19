use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

use super::response::{ApiResponse, ResponseBuilder};
use crate::domain::UnknownCategory;
use crate::repository::DirectoryError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    BusinessError(#[from] BusinessError),
    #[error(transparent)]
    ExternalError(#[from] ExternalError),
}

#[derive(Debug, Error)]
pub enum BusinessError {
    #[error(transparent)]
    Location(#[from] LocationError),
    #[error("Validation failed")]
    Validation(Vec<ValidationField>),
}

/// Conditions a location route reports instead of rendering a page.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LocationError {
    #[error("Unknown location category: {0}")]
    UnknownCategory(String),
    #[error("Malformed location slug: {0}")]
    InvalidSlug(String),
    #[error("Name has no URL-safe form: {0}")]
    Unrepresentable(String),
}

impl LocationError {
    fn code(&self) -> i32 {
        match self {
            LocationError::UnknownCategory(_) => 4401,
            LocationError::InvalidSlug(_) => 4402,
            LocationError::Unrepresentable(_) => 4403,
        }
    }

    fn status(&self) -> StatusCode {
        match self {
            LocationError::UnknownCategory(_) | LocationError::InvalidSlug(_) => {
                StatusCode::NOT_FOUND
            }
            LocationError::Unrepresentable(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

impl From<UnknownCategory> for LocationError {
    fn from(err: UnknownCategory) -> Self {
        LocationError::UnknownCategory(err.0)
    }
}

impl From<LocationError> for AppError {
    fn from(err: LocationError) -> Self {
        AppError::from(BusinessError::from(err))
    }
}

#[derive(Debug, Error)]
pub enum ExternalError {
    #[error(transparent)]
    Directory(#[from] DirectoryError),
}

impl From<DirectoryError> for AppError {
    fn from(err: DirectoryError) -> Self {
        AppError::from(ExternalError::from(err))
    }
}

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct ValidationField {
    pub field: String,
    pub message: String,
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::BusinessError(BusinessError::Location(err)) => err.status(),
            AppError::BusinessError(BusinessError::Validation(_)) => StatusCode::BAD_REQUEST,
            AppError::ExternalError(_) => StatusCode::BAD_GATEWAY,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let trace_id = ResponseBuilder::current_trace_id();
        let mut response = HttpResponse::build(self.status_code());
        match self {
            AppError::BusinessError(BusinessError::Validation(fields)) => {
                let mut body: ApiResponse<Vec<ValidationField>> =
                    ApiResponse::error_with_trace(4001, "Validation failed", trace_id);
                body.data = Some(fields.clone());
                response.json(body)
            }
            AppError::BusinessError(BusinessError::Location(err)) => response.json(
                ApiResponse::<serde_json::Value>::error_with_trace(err.code(), err.to_string(), trace_id),
            ),
            AppError::ExternalError(err) => {
                tracing::error!(error = %err, "external dependency failed");
                response.json(ApiResponse::<serde_json::Value>::error_with_trace(
                    5020,
                    "Upstream service error",
                    trace_id,
                ))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;

    #[actix_rt::test]
    async fn invalid_slug_maps_to_not_found() {
        let error = AppError::from(LocationError::InvalidSlug("New York".into()));
        let response = error.error_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = to_bytes(response.into_body()).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["code"], 4402);
        assert_eq!(json["message"], "Malformed location slug: New York");
        assert!(json["data"].is_null());
        assert!(json["traceId"].is_string());
        assert!(json["timestamp"].is_number());
    }

    #[actix_rt::test]
    async fn unrepresentable_name_maps_to_unprocessable() {
        let error = AppError::from(LocationError::Unrepresentable("???".into()));
        let response = error.error_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let body = to_bytes(response.into_body()).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["code"], 4403);
    }

    #[actix_rt::test]
    async fn validation_error_returns_fields() {
        let fields = vec![ValidationField {
            field: "names".into(),
            message: "required".into(),
        }];
        let error = AppError::from(BusinessError::Validation(fields.clone()));
        let response = error.error_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = to_bytes(response.into_body()).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["code"], 4001);
        let data = json["data"].as_array().expect("data array");
        assert_eq!(data[0]["field"], "names");
        assert_eq!(data[0]["message"], "required");
    }

    #[actix_rt::test]
    async fn directory_failure_hides_details() {
        let error = AppError::from(DirectoryError::Unavailable("timeout".into()));
        let response = error.error_response();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);

        let body = to_bytes(response.into_body()).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["code"], 5020);
        assert_eq!(json["message"], "Upstream service error");
    }

    #[test]
    fn unknown_category_converts() {
        let err = LocationError::from(UnknownCategory("region".into()));
        assert_eq!(err, LocationError::UnknownCategory("region".into()));
    }
}
