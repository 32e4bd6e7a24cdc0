use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::validation::ValidationProblem;

#[derive(Debug)]
pub enum AppError {
    NotFound,
    Validation(ValidationProblem),
    // body that could not be read as a json payload
    Rejected(JsonRejection),
    Internal(anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::NotFound => StatusCode::NOT_FOUND.into_response(),
            AppError::Validation(problem) => problem.into_response(),
            AppError::Rejected(rejection) => {
                (StatusCode::BAD_REQUEST, rejection.body_text()).into_response()
            }
            AppError::Internal(err) => {
                tracing::error!("internal error: {:#}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Something went wrong: {}", err),
                )
                    .into_response()
            }
        }
    }
}

// lets handlers use `?` on storage results
impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        AppError::Internal(err.into())
    }
}
