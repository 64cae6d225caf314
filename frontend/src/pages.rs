//! HTML pages rendered with Tera.
//!
//! Templates are compiled into the binary. Their `.html` names switch on
//! Tera's autoescaping, so product text is always escaped.

use product_client::{Product, ProductForm};
use serde::Serialize;
use tera::{Context, Tera};
use tracing::debug;

const TEMPLATES: [(&str, &str); 6] = [
    ("base.html", include_str!("../templates/base.html")),
    ("catalog.html", include_str!("../templates/catalog.html")),
    ("detail.html", include_str!("../templates/detail.html")),
    ("form.html", include_str!("../templates/form.html")),
    ("not_found.html", include_str!("../templates/not_found.html")),
    ("unavailable.html", include_str!("../templates/unavailable.html")),
];

/// Everything the create and edit form needs.
#[derive(Debug, Serialize)]
pub struct FormView<'a> {
    pub heading: &'static str,
    pub submit_label: &'static str,
    pub action: String,
    pub cancel_href: String,
    pub form: &'a ProductForm,
    pub error: Option<String>,
}

impl<'a> FormView<'a> {
    pub fn create(form: &'a ProductForm) -> Self {
        Self {
            heading: "New product",
            submit_label: "Create product",
            action: "/products/new".to_owned(),
            cancel_href: "/products".to_owned(),
            form,
            error: None,
        }
    }

    pub fn edit(product_id: &str, form: &'a ProductForm) -> Self {
        let detail_href = format!("/products/{product_id}");
        Self {
            heading: "Edit product",
            submit_label: "Save changes",
            action: format!("{detail_href}/edit"),
            cancel_href: detail_href,
            form,
            error: None,
        }
    }

    #[must_use]
    pub fn with_error(mut self, message: impl Into<String>) -> Self {
        self.error = Some(message.into());
        self
    }
}

/// Compiled page templates.
#[derive(Debug)]
pub struct Pages {
    tera: Tera,
}

impl Pages {
    /// # Errors
    ///
    /// Returns a [`tera::Error`] when a template fails to parse.
    pub fn new() -> Result<Self, tera::Error> {
        let mut tera = Tera::default();
        tera.add_raw_templates(TEMPLATES)?;
        debug!(count = TEMPLATES.len(), "page templates loaded");
        Ok(Self { tera })
    }

    /// Catalogue grid; an empty slice renders the empty-state message.
    pub fn catalog(&self, products: &[Product]) -> Result<String, tera::Error> {
        let mut context = Context::new();
        context.insert("products", products);
        self.tera.render("catalog.html", &context)
    }

    pub fn detail(&self, product: &Product, error: Option<&str>) -> Result<String, tera::Error> {
        let mut context = Context::new();
        context.insert("product", product);
        context.insert("error", &error);
        self.tera.render("detail.html", &context)
    }

    pub fn form(&self, view: &FormView<'_>) -> Result<String, tera::Error> {
        self.tera.render("form.html", &Context::from_serialize(view)?)
    }

    pub fn not_found(&self) -> Result<String, tera::Error> {
        self.tera.render("not_found.html", &Context::new())
    }

    /// Shown when the API could not say whether a product still exists.
    pub fn unavailable(&self, message: &str) -> Result<String, tera::Error> {
        let mut context = Context::new();
        context.insert("message", message);
        self.tera.render("unavailable.html", &context)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn pages() -> Pages {
        Pages::new().expect("templates compile")
    }

    fn product(name: &str) -> Product {
        serde_json::from_value(serde_json::json!({
            "id": "0b5e8a52-6f4e-4d8c-9a43-1f7c2d3e4b5a",
            "name": name,
            "description": null,
            "price": 9.99,
            "image": "http://x/y.png",
            "createdAt": "2025-06-01T10:00:00Z",
            "updatedAt": "2025-06-01T10:00:00Z"
        }))
        .expect("valid product JSON")
    }

    #[rstest]
    fn catalog_escapes_product_text(pages: Pages) {
        let html = pages
            .catalog(&[product("<script>alert(1)</script>")])
            .expect("render");
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<script>alert(1)</script>"));
        assert!(html.contains("/products/0b5e8a52-6f4e-4d8c-9a43-1f7c2d3e4b5a"));
    }

    #[rstest]
    fn empty_catalog_shows_message(pages: Pages) {
        let html = pages.catalog(&[]).expect("render");
        assert!(html.contains("No products to show yet."));
    }

    #[rstest]
    fn detail_shows_inline_error(pages: Pages) {
        let html = pages
            .detail(&product("Widget"), Some("Could not delete"))
            .expect("render");
        assert!(html.contains("Could not delete"));
        assert!(html.contains("No description"));
    }

    #[rstest]
    fn edit_form_is_prefilled(pages: Pages) {
        let form = ProductForm::from(&product("Widget"));
        let view = FormView::edit("abc", &form).with_error("name taken");
        let html = pages.form(&view).expect("render");
        assert!(html.contains(r#"value="Widget""#));
        assert!(html.contains(r#"value="9.99""#));
        assert!(html.contains("name taken"));
    }

    #[rstest]
    fn not_found_links_to_catalog(pages: Pages) {
        let html = pages.not_found().expect("render");
        assert!(html.contains("Product not found"));
        assert!(html.contains(r#"href="/products""#));
    }

    #[rstest]
    fn unavailable_shows_message_and_escapes_it(pages: Pages) {
        let html = pages
            .unavailable("Could not delete <b>now</b>")
            .expect("render");
        assert!(html.contains("Product unavailable"));
        assert!(html.contains("Could not delete &lt;b&gt;now&lt;&#x2F;b&gt;"));
        assert!(html.contains(r#"href="/products""#));
    }
}
