use std::collections::BTreeMap;

use axum::{
    async_trait,
    extract::{FromRequest, Request},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::{error::AppError, models::NewTodo};

pub const DUE_DATE_IN_PAST: &str = "Cannot have due date in the past.";
pub const ALREADY_COMPLETED: &str = "Cannot add completed todo.";

/// Field keyed validation errors, rendered as a problem details document.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ValidationProblem {
    pub errors: BTreeMap<String, Vec<String>>,
}
impl ValidationProblem {
    pub fn add(&mut self, field: &str, message: &str) {
        self.errors
            .entry(field.to_string())
            .or_default()
            .push(message.to_string());
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }
}

impl IntoResponse for ValidationProblem {
    fn into_response(self) -> Response {
        let body = serde_json::json!({
            "type": "https://tools.ietf.org/html/rfc9110#section-15.5.1",
            "title": "One or more validation errors occurred.",
            "status": StatusCode::BAD_REQUEST.as_u16(),
            "errors": self.errors,
        });
        (
            StatusCode::BAD_REQUEST,
            [(header::CONTENT_TYPE, "application/problem+json")],
            body.to_string(),
        )
            .into_response()
    }
}

// every check runs, failures are collected rather than short-circuited
pub fn validate_new_todo(todo: &NewTodo, now: DateTime<Utc>) -> Result<(), ValidationProblem> {
    let mut problem = ValidationProblem::default();
    if todo.due_date < now {
        problem.add("DueDate", DUE_DATE_IN_PAST);
    }
    if todo.is_completed {
        problem.add("IsCompleted", ALREADY_COMPLETED);
    }

    if problem.is_empty() {
        Ok(())
    } else {
        Err(problem)
    }
}

/// A `POST /todos` body that passed [`validate_new_todo`].
#[derive(Debug)]
pub struct ValidatedTodo(pub NewTodo);

#[async_trait]
impl<S> FromRequest<S> for ValidatedTodo
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(todo) = Json::<NewTodo>::from_request(req, state)
            .await
            .map_err(AppError::Rejected)?;
        validate_new_todo(&todo, Utc::now()).map_err(AppError::Validation)?;
        Ok(ValidatedTodo(todo))
    }
}
