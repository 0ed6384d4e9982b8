use crate::domain::{Page, Title};
use crate::render::{EDIT_TEMPLATE, VIEW_TEMPLATE};
use crate::AppState;
use axum::response::{IntoResponse, Response};
use http::{header, StatusCode};

pub const HOME_GREETING: &str = "welcome to wiki home";

pub async fn home_handler() -> &'static str {
    HOME_GREETING
}

pub async fn view(state: &AppState, title: Title) -> Response {
    tracing::debug!(title = %title, "view requested");

    match state.store.load(&title).await {
        Ok(page) => state.renderer.render(VIEW_TEMPLATE, &page),
        Err(e) => {
            tracing::debug!(title = %title, error = %e, "page unavailable, redirecting to editor");
            found(&format!("/edit/{title}"))
        }
    }
}

pub async fn edit(state: &AppState, title: Title) -> Response {
    let page = match state.store.load(&title).await {
        Ok(page) => page,
        Err(e) => {
            tracing::debug!(title = %title, error = %e, "starting a blank page");
            Page::empty(title)
        }
    };

    state.renderer.render(EDIT_TEMPLATE, &page)
}

pub async fn save(state: &AppState, title: Title, body: Vec<u8>) -> Response {
    let page = Page::new(title, body);

    match state.store.save(&page).await {
        Ok(()) => found(&format!("/view/{}", page.title)),
        Err(e) => e.into_response(),
    }
}

// deleting a page that does not exist is still a successful delete
pub async fn delete(state: &AppState, title: Title) -> Response {
    match state.store.delete(&title).await {
        Ok(()) => found("/"),
        Err(e) if e.is_not_found() => {
            tracing::debug!(title = %title, "delete of missing page");
            found("/")
        }
        Err(e) => e.into_response(),
    }
}

// 302, which axum's Redirect helpers do not offer
pub fn found(location: &str) -> Response {
    (StatusCode::FOUND, [(header::LOCATION, location.to_owned())]).into_response()
}
