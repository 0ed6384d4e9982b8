use crate::domain::Title;
use anyhow::{Context, Result};
use derive_more::derive::Display;
use http::Method;
use regex::Regex;

const ROUTE_PATTERN: &str = r"^/(view|edit|save|delete)/([a-zA-Z0-9]+)$";
const VERB_PREFIXES: [&str; 4] = ["/view/", "/edit/", "/save/", "/delete/"];

/// The action a wiki path asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Verb {
    #[display("view")]
    View,
    #[display("edit")]
    Edit,
    #[display("save")]
    Save,
    #[display("delete")]
    Delete,
}

impl Verb {
    fn from_segment(segment: &str) -> Option<Self> {
        match segment {
            "view" => Some(Self::View),
            "edit" => Some(Self::Edit),
            "save" => Some(Self::Save),
            "delete" => Some(Self::Delete),
            _ => None,
        }
    }

    pub fn allows(self, method: &Method) -> bool {
        match self {
            Self::View | Self::Edit => method == Method::GET,
            Self::Save => method == Method::POST,
            Self::Delete => method == Method::GET || method == Method::POST,
        }
    }
}

/// Classifies request paths as `/<verb>/<title>`.
pub struct PathRouter {
    pattern: Regex,
}

impl PathRouter {
    pub fn new() -> Result<Self> {
        let pattern = Regex::new(ROUTE_PATTERN).context("Failed to compile route pattern")?;
        Ok(Self { pattern })
    }

    /// Whether `path` lies under one of the verb prefixes. Those paths either
    /// match the pattern or are a 404; everything else belongs to the home page.
    pub fn owns(&self, path: &str) -> bool {
        VERB_PREFIXES.iter().any(|prefix| path.starts_with(prefix))
    }

    pub fn classify(&self, path: &str) -> Option<(Verb, Title)> {
        let captures = self.pattern.captures(path)?;
        let verb = Verb::from_segment(captures.get(1)?.as_str())?;
        // the pattern and Title agree on the allowed characters, so this only fails if they drift apart
        let title = Title::parse(captures.get(2)?.as_str()).ok()?;
        Some((verb, title))
    }
}
