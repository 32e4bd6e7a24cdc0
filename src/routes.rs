use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    error::AppError,
    models::Todo,
    validation::ValidatedTodo,
    AppState,
};

pub async fn list_todos(State(state): State<AppState>) -> Result<Json<Vec<Todo>>, AppError> {
    let store = state.read().await;
    Ok(Json(store.get_all()?))
}

pub async fn get_todo(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<Todo>, AppError> {
    let store = state.read().await;
    store.get_by_id(id)?.map(Json).ok_or(AppError::NotFound)
}

pub async fn create_todo(
    State(state): State<AppState>,
    ValidatedTodo(new): ValidatedTodo,
) -> Result<impl IntoResponse, AppError> {
    let mut store = state.write().await;
    let id = store.next_id()?;
    let todo = store.add(Todo::from_new(id, new))?;
    let location = format!("/todos/{}", todo.id);
    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(todo)))
}

pub async fn toggle_todo(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<Todo>, AppError> {
    let mut store = state.write().await;
    let mut todo = store.get_by_id(id)?.ok_or(AppError::NotFound)?;
    todo.toggle();
    store.update(todo)?.map(Json).ok_or(AppError::NotFound)
}

// 204 whether or not the todo existed
pub async fn delete_todo(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<StatusCode, AppError> {
    let mut store = state.write().await;
    store.delete_by_id(id)?;
    Ok(StatusCode::NO_CONTENT)
}
