use crate::domain::Page;
use anyhow::{Context as _, Result};
use axum::response::{Html, IntoResponse, Response};
use http::StatusCode;
use serde::Serialize;
use std::borrow::Cow;
use std::path::Path;
use tera::{Context, Tera};

pub const VIEW_TEMPLATE: &str = "view";
pub const EDIT_TEMPLATE: &str = "edit";

const TEMPLATE_SUFFIX: &str = ".html";

/// Page fields as the templates see them.
#[derive(Serialize)]
struct PageView<'a> {
    title: &'a str,
    body: Cow<'a, str>,
}

impl<'a> From<&'a Page> for PageView<'a> {
    fn from(page: &'a Page) -> Self {
        Self {
            title: page.title.as_str(),
            body: String::from_utf8_lossy(&page.body),
        }
    }
}

/// The compiled `view` and `edit` templates.
///
/// Built once at startup and shared read-only between requests. Template
/// names end in `.html`, so tera escapes every value it interpolates,
/// including the raw page body.
pub struct TemplateRenderer {
    tera: Tera,
}

impl TemplateRenderer {
    /// Compiles `view.html` and `edit.html` from `templates_dir`.
    pub fn from_dir(templates_dir: &Path) -> Result<Self> {
        let files = [VIEW_TEMPLATE, EDIT_TEMPLATE]
            .iter()
            .map(|name| {
                let file_name = format!("{name}{TEMPLATE_SUFFIX}");
                (templates_dir.join(&file_name), Some(file_name))
            })
            .collect::<Vec<_>>();

        let mut tera = Tera::default();
        tera.add_template_files(files).with_context(|| {
            format!(
                "Failed to compile templates in {}",
                templates_dir.display()
            )
        })?;

        Ok(Self { tera })
    }

    pub fn render_to_string(&self, template_name: &str, page: &Page) -> Result<String> {
        let template = format!("{template_name}{TEMPLATE_SUFFIX}");
        let context = Context::from_serialize(PageView::from(page))
            .context("Failed to build template context")?;

        let html = self.tera.render(&template, &context)?;
        Ok(html)
    }

    /// Renders `page` through `template_name`, or a 500 carrying the error text.
    pub fn render(&self, template_name: &str, page: &Page) -> Response {
        match self.render_to_string(template_name, page) {
            Ok(html) => Html(html).into_response(),
            Err(e) => {
                // {:#} keeps tera's cause chain, the top level alone only names the template
                let message = format!("{e:#}");
                tracing::error!(
                    template = template_name,
                    title = %page.title,
                    error = %message,
                    "failed to render template"
                );
                (StatusCode::INTERNAL_SERVER_ERROR, message).into_response()
            }
        }
    }
}
