use askama::Template;
use axum::{
    response::{Html, IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::error::{AppError, Result};

#[derive(Template)]
#[template(path = "index.html")]
struct IndexTemplate {
    version: &'static str,
}

pub async fn index() -> Result<Response> {
    let template = IndexTemplate {
        version: env!("CARGO_PKG_VERSION"),
    };

    Ok(Html(
        template
            .render()
            .map_err(|e| AppError::Internal(e.to_string()))?,
    )
    .into_response())
}

#[derive(Serialize)]
pub struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}
