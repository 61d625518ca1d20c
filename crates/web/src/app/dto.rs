//! Form payload mapping onto domain types.
//!
//! Product forms arrive as loose `application/x-www-form-urlencoded` maps;
//! the `title` key is the one attribute the domain knows about, every other
//! visible key is carried as a generic attribute.

use std::collections::BTreeMap;

use shopfront_catalog::{ProductDraft, ProductPatch};

/// Keys starting with `_` are form plumbing (e.g. `_method`), not attributes.
fn is_form_plumbing(key: &str) -> bool {
    key.starts_with('_')
}

fn split_attributes(
    mut form: BTreeMap<String, String>,
) -> (Option<String>, BTreeMap<String, String>) {
    let title = form.remove("title");
    form.retain(|key, _| !is_form_plumbing(key));
    (title, form)
}

pub fn draft_from_form(form: BTreeMap<String, String>) -> ProductDraft {
    let (title, extra) = split_attributes(form);
    ProductDraft { title, extra }
}

pub fn patch_from_form(form: BTreeMap<String, String>) -> ProductPatch {
    let (title, extra) = split_attributes(form);
    ProductPatch { title, extra }
}
