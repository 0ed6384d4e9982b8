use crate::domain::{Page, Title};
use crate::io::{PageError, PageStore};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;

const PAGE_EXTENSION: &str = "txt";
#[cfg(unix)]
const PAGE_FILE_MODE: u32 = 0o600;

/// Stores every page as `<root>/<title>.txt`.
pub struct LocalPageStore {
    root_path: PathBuf,
}

impl LocalPageStore {
    pub fn new(root_path: impl Into<PathBuf>) -> Self {
        Self {
            root_path: root_path.into(),
        }
    }

    /// Like [`LocalPageStore::new`], but creates the directory first.
    pub async fn open(root_path: impl Into<PathBuf>) -> std::io::Result<Self> {
        let store = Self::new(root_path);
        fs::create_dir_all(&store.root_path).await?;
        Ok(store)
    }

    pub fn root_path(&self) -> &Path {
        &self.root_path
    }

    pub fn page_path(&self, title: &Title) -> PathBuf {
        self.root_path
            .join(format!("{}.{}", title.as_str(), PAGE_EXTENSION))
    }
}

#[async_trait]
impl PageStore for LocalPageStore {
    async fn load(&self, title: &Title) -> Result<Page, PageError> {
        let body = fs::read(self.page_path(title))
            .await
            .map_err(|e| PageError::from_io(title, e))?;

        Ok(Page::new(title.clone(), body))
    }

    async fn save(&self, page: &Page) -> Result<(), PageError> {
        let path = self.page_path(&page.title);

        let mut options = fs::OpenOptions::new();
        options.write(true).create(true).truncate(true);
        // only applied when the file is created, existing files keep their mode
        #[cfg(unix)]
        options.mode(PAGE_FILE_MODE);

        let mut file = options
            .open(&path)
            .await
            .map_err(|e| PageError::io(&page.title, e))?;

        file.write_all(&page.body)
            .await
            .map_err(|e| PageError::io(&page.title, e))?;
        file.flush()
            .await
            .map_err(|e| PageError::io(&page.title, e))?;

        tracing::debug!(title = %page.title, path = %path.display(), "saved page");
        Ok(())
    }

    async fn delete(&self, title: &Title) -> Result<(), PageError> {
        fs::remove_file(self.page_path(title))
            .await
            .map_err(|e| PageError::from_io(title, e))?;

        tracing::debug!(title = %title, "deleted page");
        Ok(())
    }
}
