pub mod form;
pub mod handlers;
pub mod route;

use crate::AppState;
use axum::{
    Router,
    body::Bytes,
    extract::{FromRequest, Request, State},
    response::{IntoResponse, Response},
    routing::any,
};
use http::StatusCode;

const NOT_FOUND_BODY: &str = "404 page not found";
const BODY_FIELD: &str = "body";

// `/` and every path outside the verb prefixes get the greeting, whatever the method
pub fn wiki_router() -> Router<AppState> {
    Router::new()
        .route("/", any(handlers::home_handler))
        .fallback(dispatch_handler)
}

async fn dispatch_handler(State(state): State<AppState>, request: Request) -> Response {
    let path = request.uri().path().to_owned();

    if !state.routes.owns(&path) {
        return handlers::home_handler().await.into_response();
    }

    let Some((verb, title)) = state.routes.classify(&path) else {
        tracing::debug!(path = %path, "no route matched");
        return (StatusCode::NOT_FOUND, NOT_FOUND_BODY).into_response();
    };
    tracing::debug!(verb = %verb, title = %title, "route matched");

    if !verb.allows(request.method()) {
        return StatusCode::METHOD_NOT_ALLOWED.into_response();
    }

    match verb {
        route::Verb::View => handlers::view(&state, title).await,
        route::Verb::Edit => handlers::edit(&state, title).await,
        route::Verb::Save => {
            if !form::is_urlencoded(request.headers()) {
                return StatusCode::UNSUPPORTED_MEDIA_TYPE.into_response();
            }
            match Bytes::from_request(request, &state).await {
                // a missing field saves an empty page
                Ok(raw) => {
                    let body = form::field(&raw, BODY_FIELD).unwrap_or_default();
                    handlers::save(&state, title, body).await
                }
                Err(rejection) => rejection.into_response(),
            }
        }
        route::Verb::Delete => handlers::delete(&state, title).await,
    }
}
