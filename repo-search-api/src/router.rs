use std::any::Any;

use axum::{
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use tower_http::{
    catch_panic::CatchPanicLayer,
    trace::{DefaultMakeSpan, TraceLayer},
};

use crate::{app_state::AppState, routes};

pub fn create(app_state: AppState) -> Router<()> {
    Router::new()
        .route("/", get(|| async { "Hello, little World!" }))
        .nest("/api/repositories", routes::repositories::router())
        .with_state(app_state)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http().make_span_with(DefaultMakeSpan::default()))
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s
    } else {
        "unknown panic"
    };
    tracing::error!("Request handler panicked: {}", detail);

    routes::ApiError::internal().into_response()
}
