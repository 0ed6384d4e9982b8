use crate::domain::Title;
use crate::features::pages::route::PathRouter;
use crate::io::PageStore;
use crate::render::TemplateRenderer;
use crate::AppState;
use axum::response::Response;
use std::path::PathBuf;
use std::sync::Arc;

mod unit_local_page_store;

// the templates shipped with the repo, so the tests render what users see
pub fn templates_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("templates")
}

pub fn title(raw: &str) -> Title {
    Title::parse(raw).expect("test titles are alphanumeric")
}

pub fn test_state(store: impl PageStore + 'static) -> AppState {
    AppState {
        store: Arc::new(store),
        renderer: Arc::new(
            TemplateRenderer::from_dir(&templates_dir()).expect("shipped templates compile"),
        ),
        routes: Arc::new(PathRouter::new().expect("route pattern compiles")),
    }
}

pub async fn body_text(response: Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}
