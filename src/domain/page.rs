use crate::domain::Title;

/// One wiki article. Built fresh for every request, never cached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub title: Title,
    pub body: Vec<u8>,
}

impl Page {
    pub fn new(title: Title, body: impl Into<Vec<u8>>) -> Self {
        Self {
            title,
            body: body.into(),
        }
    }

    // a page that has never been saved, shown by the edit form
    pub fn empty(title: Title) -> Self {
        Self {
            title,
            body: Vec::new(),
        }
    }
}
