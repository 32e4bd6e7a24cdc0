use axum::{http::Uri, response::Redirect, routing::any, Router};

const LEGACY_PREFIX: &str = "/tasks";
const CURRENT_PREFIX: &str = "/todos";

// legacy `tasks` urls are permanently moved under `todos`
pub fn legacy_routes<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route(LEGACY_PREFIX, any(redirect_legacy))
        .route("/tasks/:first/:second", any(redirect_legacy))
}

async fn redirect_legacy(uri: Uri) -> Redirect {
    let mut target = rewrite(uri.path());
    if let Some(query) = uri.query() {
        target.push('?');
        target.push_str(query);
    }
    Redirect::permanent(&target)
}

// the raw path stays percent-encoded, so it is always a valid header value
fn rewrite(path: &str) -> String {
    match path.strip_prefix(LEGACY_PREFIX) {
        Some(rest) => format!("{}{}", CURRENT_PREFIX, rest),
        None => path.to_owned(),
    }
}
