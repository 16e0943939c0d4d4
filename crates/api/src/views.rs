//! Server-rendered HTML pages.
//!
//! Templates live in `templates/` and are compiled into the binary. The
//! registry is built once on first use; a template that fails to parse is a
//! build defect, so registration panics.

use std::sync::LazyLock;

use axum::http::StatusCode;
use axum::response::Html;
use handlebars::{handlebars_helper, Handlebars};
use serde::Serialize;
use serde_json::{json, Value};

use crate::error::{AppError, AppResult};

const PARTIALS: &[(&str, &str)] = &[
    ("header", include_str!("../templates/partials/header.hbs")),
    ("footer", include_str!("../templates/partials/footer.hbs")),
    ("project_fields", include_str!("../templates/partials/project_fields.hbs")),
];

const TEMPLATES: &[(&str, &str)] = &[
    ("index", include_str!("../templates/index.hbs")),
    ("project_new", include_str!("../templates/project_new.hbs")),
    ("project_edit", include_str!("../templates/project_edit.hbs")),
    ("project_show", include_str!("../templates/project_show.hbs")),
    ("error", include_str!("../templates/error.hbs")),
];

static REGISTRY: LazyLock<Handlebars<'static>> = LazyLock::new(build_registry);

fn build_registry() -> Handlebars<'static> {
    let mut handlebars = Handlebars::new();

    // `{{#if}}` treats 0 as false; `exists` only rejects null.
    handlebars_helper!(exists: |v: Value| !v.is_null());
    handlebars.register_helper("exists", Box::new(exists));

    for (name, source) in PARTIALS {
        handlebars
            .register_partial(name, *source)
            .unwrap_or_else(|e| panic!("Invalid partial '{name}': {e}"));
    }
    for (name, source) in TEMPLATES {
        handlebars
            .register_template_string(name, *source)
            .unwrap_or_else(|e| panic!("Invalid template '{name}': {e}"));
    }

    handlebars
}

/// Render a named page template with `data` as its context.
pub fn render<T: Serialize>(name: &str, data: &T) -> AppResult<Html<String>> {
    REGISTRY
        .render(name, data)
        .map(Html)
        .map_err(|e| AppError::InternalError(format!("Failed to render '{name}': {e}")))
}

/// Render the error page. Falls back to a bare page if the template itself
/// fails, since this runs while already handling an error.
pub fn render_error_page(status: StatusCode, code: &str, message: &str) -> Html<String> {
    let data = json!({
        "status": status.as_u16(),
        "reason": status.canonical_reason().unwrap_or("Error"),
        "code": code,
        "message": message,
    });

    match REGISTRY.render("error", &data) {
        Ok(page) => Html(page),
        Err(e) => {
            tracing::error!(error = %e, "Failed to render error page");
            Html(format!(
                "<!doctype html><title>{status}</title><h1>{status}</h1><p>{}</p>",
                handlebars::html_escape(message)
            ))
        }
    }
}
