//! Errores del dominio y su traducción a respuestas HTTP `{ "error": ... }`.

use std::path::PathBuf;

use arrow::error::ArrowError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Fallos al cargar el dataset de reseñas.
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("{} not found. Please ensure the file is in the server directory.", .0.display())]
    NotFound(PathBuf),

    #[error("CSV must contain a column named \"{0}\"")]
    MissingColumn(&'static str),

    #[error("I/O error reading dataset: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV parse error: {0}")]
    Csv(#[from] ArrowError),
}

/// Errores visibles por el cliente. Ninguno tumba el proceso.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Validation(String),

    #[error("An error occurred during processing: {0}")]
    Processing(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Processing(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<DatasetError> for ApiError {
    fn from(err: DatasetError) -> Self {
        match err {
            DatasetError::NotFound(_) => ApiError::NotFound(err.to_string()),
            DatasetError::MissingColumn(_) => ApiError::Validation(err.to_string()),
            DatasetError::Io(_) | DatasetError::Csv(_) => ApiError::Processing(err.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({ "error": self.to_string() }))).into_response()
    }
}
