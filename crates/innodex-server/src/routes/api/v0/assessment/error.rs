use crate::routes::error::{ErrorData, ErrorDataProvider, GetStatusCode, error_to_axum_response, internal_errors_exposed};
use axum::response::{IntoResponse, Response};
use innodex_core::error::ScoreError;
use sea_orm::DbErr;
use serde::Serialize;
use serde_json::json;
use std::error::Error as StdError;
use thiserror::Error;
use utoipa::ToSchema;

#[derive(Debug, Error)]
pub(crate) enum Error {
    #[error("{0}")]
    Validation(String),
    #[error("unknown question ids: {0:?}")]
    UnknownQuestions(Vec<i32>),
    #[error("assessment not found")]
    NotFound,
    #[error(transparent)]
    Db(#[from] DbErr),
    #[error(transparent)]
    Score(#[from] ScoreError),
    #[error(transparent)]
    Conversion(#[from] innodex_model_tools::error::Error),
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub(crate) enum ErrorType {
    InvalidRequest,
    UnknownQuestion,
    NotFound,
    Internal,
}

impl GetStatusCode for ErrorType {
    fn status_code(&self) -> http::StatusCode {
        match self {
            Self::InvalidRequest | Self::UnknownQuestion => http::StatusCode::BAD_REQUEST,
            Self::NotFound => http::StatusCode::NOT_FOUND,
            Self::Internal => http::StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl GetStatusCode for Error {
    fn status_code(&self) -> http::StatusCode {
        match self {
            Self::Validation(_) | Self::UnknownQuestions(_) => http::StatusCode::BAD_REQUEST,
            Self::NotFound => http::StatusCode::NOT_FOUND,
            Self::Db(_) | Self::Score(_) | Self::Conversion(_) => http::StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl ErrorDataProvider<ErrorType> for Error {
    fn error_data(self) -> Option<ErrorData<ErrorType>> {
        let error_data = match self {
            Self::Validation(description) => ErrorData::new(ErrorType::InvalidRequest, description),
            Self::UnknownQuestions(ids) => {
                let description = format!("unknown question ids: {ids:?}");
                ErrorData::new(ErrorType::UnknownQuestion, description).with_data("questionIds", json!(ids))
            }
            Self::NotFound => ErrorData::new(ErrorType::NotFound, "assessment not found"),
            Self::Db(_) | Self::Score(_) | Self::Conversion(_) => internal_error_data(&self, internal_errors_exposed()),
        };
        Some(error_data)
    }
}

/// Logs `error` and describes it to the client only when `expose` is set.
fn internal_error_data(error: &Error, expose: bool) -> ErrorData<ErrorType> {
    tracing::error!(error = error as &dyn StdError, "internal error");
    if expose {
        ErrorData::new(ErrorType::Internal, error.to_string())
    } else {
        ErrorData::new(ErrorType::Internal, "internal server error")
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        error_to_axum_response(self)
    }
}
