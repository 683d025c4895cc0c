//! HTTP request handlers

use axum::{
    Json,
    body::Bytes,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use serde_json::Value;
use thiserror::Error;

use crate::types::{ErrorResponse, FormatRequest, FormatResponse, HealthResponse};

/// Ways a formatting request can fail.
#[derive(Debug, Error)]
pub enum FormatError {
    /// The body is not a JSON object carrying `latex_code`.
    #[error("No LaTeX code provided")]
    MissingCode,
    /// The request was well-formed enough to attempt, but formatting failed.
    #[error("Error formatting code: {0}")]
    Formatting(String),
}

impl FormatError {
    pub fn status(&self) -> StatusCode {
        match self {
            FormatError::MissingCode => StatusCode::BAD_REQUEST,
            FormatError::Formatting(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for FormatError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            error: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}

const INDEX_HTML: &str = include_str!("../static/index.html");

/// Formatter page
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// `POST /format`
pub async fn format_latex(body: Bytes) -> Result<Json<FormatResponse>, FormatError> {
    match handle_format(&body).await {
        Ok(response) => Ok(Json(response)),
        Err(err) => {
            log::warn!("format request rejected: {}", err);
            Err(err)
        }
    }
}

/// Decodes `body`, formats it on the blocking pool and builds the response.
pub async fn handle_format(body: &[u8]) -> Result<FormatResponse, FormatError> {
    let request = parse_request(body)?;
    let options = request.options();
    let lines = request.latex_code.split('\n').count();

    let formatted_code =
        tokio::task::spawn_blocking(move || texfmt_core::format(&request.latex_code, &options))
            .await
            .map_err(|e| FormatError::Formatting(e.to_string()))?;

    log::debug!("formatted {} line(s)", lines);
    Ok(FormatResponse { formatted_code })
}

/// A body that is not a JSON object, or lacks `latex_code`, is a missing-code
/// error. Fields of the wrong type are a formatting error.
pub fn parse_request(body: &[u8]) -> Result<FormatRequest, FormatError> {
    let value: Value = serde_json::from_slice(body).map_err(|_| FormatError::MissingCode)?;

    match &value {
        Value::Object(map) if map.contains_key("latex_code") => {}
        _ => return Err(FormatError::MissingCode),
    }

    serde_json::from_value(value).map_err(|e| FormatError::Formatting(e.to_string()))
}
