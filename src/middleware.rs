use axum::{extract::Request, middleware::Next, response::Response};
use chrono::{SecondsFormat, Utc};

/// Wraps every todo request in a "Started." / "Finished." pair of log lines.
pub async fn log_request(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_owned();

    tracing::info!(
        %method,
        %path,
        at = %Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        "Started."
    );
    let response = next.run(request).await;
    tracing::info!(
        %method,
        %path,
        at = %Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        status = response.status().as_u16(),
        "Finished."
    );

    response
}
