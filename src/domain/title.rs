use derive_more::derive::Display;
use std::str::FromStr;
use thiserror::Error;

/// A page title, restricted to `[a-zA-Z0-9]+`.
///
/// Titles become filename components without escaping, so the only way to
/// build one is through [`Title::parse`]. Anything that reaches the page
/// store has already passed this check.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Display)]
#[display("{_0}")]
pub struct Title(String);

#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid page title {0:?}: titles must be one or more ASCII letters or digits")]
pub struct InvalidTitle(pub String);

impl Title {
    pub fn parse(raw: &str) -> Result<Self, InvalidTitle> {
        if !raw.is_empty() && raw.chars().all(|c| c.is_ascii_alphanumeric()) {
            Ok(Self(raw.to_owned()))
        } else {
            Err(InvalidTitle(raw.to_owned()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Title {
    type Err = InvalidTitle;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for Title {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
