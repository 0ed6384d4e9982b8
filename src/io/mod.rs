use crate::domain::{Page, Title};
use async_trait::async_trait;
use axum::response::{IntoResponse, Response};
use http::StatusCode;
use thiserror::Error;

pub mod local;

// storage behind the handlers. implementations must be shareable between
// request tasks; the filesystem one lives in "local.rs"
#[async_trait]
pub trait PageStore: Send + Sync {
    async fn load(&self, title: &Title) -> Result<Page, PageError>;
    async fn save(&self, page: &Page) -> Result<(), PageError>;
    async fn delete(&self, title: &Title) -> Result<(), PageError>;
}

#[derive(Debug, Error)]
pub enum PageError {
    #[error("page {title} not found")]
    NotFound {
        title: Title,
        #[source]
        source: std::io::Error,
    },
    #[error("page {title}: {source}")]
    Io {
        title: Title,
        #[source]
        source: std::io::Error,
    },
}

impl PageError {
    pub fn from_io(title: &Title, source: std::io::Error) -> Self {
        let title = title.clone();
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::NotFound { title, source }
        } else {
            Self::Io { title, source }
        }
    }

    // for writes, where a missing path means a missing directory, not a missing page
    pub fn io(title: &Title, source: std::io::Error) -> Self {
        Self::Io {
            title: title.clone(),
            source,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

// handlers only let save and delete failures escape, and those are server errors
impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "page store operation failed");
        (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()).into_response()
    }
}
