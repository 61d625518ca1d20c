//! Server-rendered HTML templates.
//!
//! Deliberately minimal markup: a shared layout plus one body per template.
//! The template name is carried on `<main data-template="...">` so rendered
//! pages are observable from the outside.

use axum::response::Html;

use shopfront_catalog::{Product, ProductDraft, ValidationErrors};
use shopfront_core::Entity;

use crate::app::controller::{product_path, products_path, Page};

pub fn render(page: &Page) -> Html<String> {
    let (title, body) = match page {
        Page::Index { products } => ("Products".to_string(), index_body(products)),
        Page::Show { product } => (product.title().to_string(), show_body(product)),
        Page::New { product, errors } => ("New product".to_string(), new_body(product, errors)),
        Page::Edit { product, errors } => ("Edit product".to_string(), edit_body(product, errors)),
    };

    Html(layout(&title, page.template(), &body))
}

fn layout(title: &str, template: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head><meta charset=\"utf-8\"><title>{}</title></head>\n\
         <body>\n<main data-template=\"{}\">\n{}\n</main>\n</body>\n</html>\n",
        escape_html(title),
        escape_html(template),
        body
    )
}

fn index_body(products: &[Product]) -> String {
    let mut items = String::new();
    for product in products {
        items.push_str(&format!(
            "<li><a href=\"{}\">{}</a></li>\n",
            product_path(*product.id()),
            escape_html(product.title())
        ));
    }

    format!(
        "<h1>Products</h1>\n<ul class=\"products\">\n{}</ul>\n\
         <a href=\"{}/new\">New product</a>\n",
        items,
        products_path()
    )
}

fn show_body(product: &Product) -> String {
    let mut rows = String::new();
    for (key, value) in product.extra() {
        rows.push_str(&format!(
            "<dt>{}</dt><dd>{}</dd>\n",
            escape_html(key),
            escape_html(value)
        ));
    }

    format!(
        "<h1>{}</h1>\n<dl>\n{}</dl>\n\
         <a href=\"{}/edit\">Edit</a>\n\
         <a href=\"{}\" data-method=\"delete\">Delete</a>\n\
         <a href=\"{}\">Back</a>\n",
        escape_html(product.title()),
        rows,
        product_path(*product.id()),
        product_path(*product.id()),
        products_path()
    )
}

fn new_body(draft: &ProductDraft, errors: &ValidationErrors) -> String {
    format!(
        "<h1>New product</h1>\n{}{}",
        errors_fragment(errors),
        form_fragment(&products_path(), None, draft.title.as_deref().unwrap_or(""))
    )
}

fn edit_body(product: &Product, errors: &ValidationErrors) -> String {
    format!(
        "<h1>Edit product</h1>\n{}{}",
        errors_fragment(errors),
        form_fragment(
            &product_path(*product.id()),
            Some("put"),
            product.title()
        )
    )
}

fn errors_fragment(errors: &ValidationErrors) -> String {
    if errors.is_empty() {
        return String::new();
    }

    let mut items = String::new();
    for error in errors.iter() {
        items.push_str(&format!(
            "<li>{} {}</li>\n",
            escape_html(&error.field),
            escape_html(&error.message)
        ));
    }

    format!("<ul class=\"errors\">\n{items}</ul>\n")
}

fn form_fragment(action: &str, method_override: Option<&str>, title_value: &str) -> String {
    let override_field = match method_override {
        Some(method) => format!(
            "<input type=\"hidden\" name=\"_method\" value=\"{}\">\n",
            escape_html(method)
        ),
        None => String::new(),
    };

    format!(
        "<form action=\"{}\" method=\"post\">\n{}\
         <label for=\"title\">Title</label>\n\
         <input type=\"text\" id=\"title\" name=\"title\" value=\"{}\">\n\
         <button type=\"submit\">Save</button>\n</form>\n",
        escape_html(action),
        override_field,
        escape_html(title_value)
    )
}

pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
