pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod redirect;
pub mod repository;
pub mod routes;
pub mod validation;

use std::sync::Arc;

use anyhow::Result;
use axum::{middleware::from_fn, routing::get, Router};
use config::Config;
use repository::{DbTaskStore, TaskStore};
use tokio::{
    net::TcpListener,
    sync::{RwLock, RwLockReadGuard, RwLockWriteGuard},
};

// === App State ===
#[derive(Clone)]
pub struct AppState {
    store: Arc<RwLock<Box<dyn TaskStore>>>,
}
impl AppState {
    fn new() -> Result<Self> {
        Ok(Self::with_store(DbTaskStore::new()?))
    }

    pub fn with_store(store: impl TaskStore + 'static) -> Self {
        let store: Box<dyn TaskStore> = Box::new(store);
        Self {
            store: Arc::new(RwLock::new(store)),
        }
    }

    // borrow immutable state
    async fn read(&self) -> RwLockReadGuard<'_, Box<dyn TaskStore>> {
        self.store.read().await
    }
    // borrow mutable state, writers are serialized
    async fn write(&self) -> RwLockWriteGuard<'_, Box<dyn TaskStore>> {
        self.store.write().await
    }
}

pub fn app(state: AppState) -> Router {
    let todos = Router::new()
        .route("/todos", get(routes::list_todos).post(routes::create_todo))
        .route(
            "/todos/:id",
            get(routes::get_todo)
                .patch(routes::toggle_todo)
                .delete(routes::delete_todo),
        )
        .layer(from_fn(middleware::log_request));

    // redirects are answered before the logging layer sees the request
    Router::new()
        .merge(redirect::legacy_routes())
        .merge(todos)
        .with_state(state)
}

#[tokio::main]
async fn main() -> Result<()> {
    // initialize tracing
    tracing_subscriber::fmt::init();

    let config = Config::from_env()?;
    let state = AppState::new()?;
    let app = app(state);

    let listener = TcpListener::bind(config.bind_addr()).await?;
    tracing::info!("Listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
