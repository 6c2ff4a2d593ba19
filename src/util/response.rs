use actix_web::HttpResponse;
use chrono::Utc;
use serde::Serialize;
use uuid::Uuid;

/// JSON envelope shared by every endpoint.
#[derive(Serialize)]
pub struct ApiResponse<T>
where
    T: Serialize,
{
    pub code: i32,
    pub message: String,
    pub data: Option<T>,
    #[serde(rename = "traceId")]
    pub trace_id: String,
    pub timestamp: i64,
}

impl<T> ApiResponse<T>
where
    T: Serialize,
{
    pub fn success_with_trace(data: T, trace_id: String) -> Self {
        Self {
            code: 2000,
            message: "OK".to_string(),
            data: Some(data),
            trace_id,
            timestamp: Utc::now().timestamp_millis(),
        }
    }

    pub fn error_with_trace(code: i32, message: impl Into<String>, trace_id: String) -> Self {
        Self {
            code,
            message: message.into(),
            data: None,
            trace_id,
            timestamp: Utc::now().timestamp_millis(),
        }
    }
}

pub struct ResponseBuilder;

impl ResponseBuilder {
    pub fn ok<T>(data: T) -> Result<HttpResponse, crate::util::AppError>
    where
        T: Serialize,
    {
        let body = ApiResponse::success_with_trace(data, Self::current_trace_id());
        Ok(HttpResponse::Ok().json(body))
    }

    /// Request id of the running request, or a fresh UUID outside one.
    pub(crate) fn current_trace_id() -> String {
        REQUEST_ID
            .try_with(|id| id.clone())
            .unwrap_or_else(|_| Uuid::new_v4().to_string())
    }
}

tokio::task_local! {
    pub static REQUEST_ID: String;
}
