use crate::config::WikiConfig;
use crate::features::pages::route::PathRouter;
use crate::io::PageStore;
use crate::io::local::LocalPageStore;
use crate::render::TemplateRenderer;
use anyhow::Context;
use axum::Router;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

pub mod config;
mod domain;
mod features;
mod io;
mod render;

#[cfg(test)]
mod tests;

// everything here is built once in main and only read afterwards
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn PageStore>,
    pub renderer: Arc<TemplateRenderer>,
    pub routes: Arc<PathRouter>,
}

pub fn build_app(state: AppState) -> Router {
    features::pages::wiki_router()
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // determine environment variables
    dotenv::dotenv().ok();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = WikiConfig::from_env();

    // a template that fails to compile keeps the server from starting
    let renderer = TemplateRenderer::from_dir(&config.templates_dir)?;
    tracing::info!(templates_dir = %config.templates_dir.display(), "Templates compiled");

    let store = LocalPageStore::open(&config.pages_dir)
        .await
        .with_context(|| {
            format!(
                "Unable to create pages directory {}",
                config.pages_dir.display()
            )
        })?;
    tracing::info!(pages_dir = %store.root_path().display(), "Page store ready");

    let state = AppState {
        store: Arc::new(store),
        renderer: Arc::new(renderer),
        routes: Arc::new(PathRouter::new()?),
    };

    let app = build_app(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.bind_addr))?;
    tracing::info!(address = %config.bind_addr, "Server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received, stopping server...");
}
