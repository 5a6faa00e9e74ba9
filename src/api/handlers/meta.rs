use axum::{response::IntoResponse, Json};
use crate::api::dtos::responses::ServiceMetadata;

pub async fn service_metadata() -> impl IntoResponse {
    Json(ServiceMetadata {
        service: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
    })
}
