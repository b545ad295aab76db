// src/error.rs

use actix_web::{http::header::ContentType, http::StatusCode, HttpResponse, ResponseError};
use repositories::RepositoryError;
use thiserror::Error;

use crate::pages::{NOT_FOUND_PAGE, SERVER_ERROR_PAGE};

#[derive(Debug, Error)]
pub enum AppError {
    #[error("not found")]
    NotFound,
    #[error(transparent)]
    Repository(RepositoryError),
    #[error("template error: {0}")]
    Template(#[from] tera::Error),
}

impl From<RepositoryError> for AppError {
    fn from(e: RepositoryError) -> Self {
        match e {
            RepositoryError::NotFound => AppError::NotFound,
            other => AppError::Repository(other),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = match self {
            AppError::NotFound => NOT_FOUND_PAGE,
            other => {
                tracing::error!(error = %other, "request failed");
                SERVER_ERROR_PAGE
            }
        };
        HttpResponse::build(self.status_code())
            .content_type(ContentType::html())
            .body(body)
    }
}
