use actix_web::HttpResponse;
use serde::Serialize;

use crate::util::{AppError, ResponseBuilder};

#[derive(Serialize)]
struct HealthStatus {
    status: &'static str,
    service: &'static str,
    version: &'static str,
}

pub async fn health_check() -> Result<HttpResponse, AppError> {
    ResponseBuilder::ok(HealthStatus {
        status: "healthy",
        service: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
    })
}
