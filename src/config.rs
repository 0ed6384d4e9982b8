use std::path::PathBuf;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8765";
const DEFAULT_PAGES_DIR: &str = "doc";
const DEFAULT_TEMPLATES_DIR: &str = "templates";

#[derive(Clone, Debug)]
pub struct WikiConfig {
    pub bind_addr: String,
    pub pages_dir: PathBuf,
    pub templates_dir: PathBuf,
}

impl WikiConfig {
    pub fn from_env() -> Self {
        let bind_addr =
            std::env::var("WIKI_BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());

        let pages_dir = PathBuf::from(
            std::env::var("WIKI_PAGES_DIR").unwrap_or_else(|_| DEFAULT_PAGES_DIR.to_string()),
        );

        let templates_dir = PathBuf::from(
            std::env::var("WIKI_TEMPLATES_DIR")
                .unwrap_or_else(|_| DEFAULT_TEMPLATES_DIR.to_string()),
        );

        Self {
            bind_addr,
            pages_dir,
            templates_dir,
        }
    }
}
