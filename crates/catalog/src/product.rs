use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use shopfront_core::{Entity, ProductId};

/// A single field-level validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl ValidationError {
    pub fn blank(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: "can't be blank".to_string(),
        }
    }
}

impl core::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} {}", self.field, self.message)
    }
}

/// Accumulated validation failures for one submission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationErrors(Vec<ValidationError>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, error: ValidationError) {
        self.0.push(error);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ValidationError> {
        self.0.iter()
    }
}

impl core::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let mut first = true;
        for error in &self.0 {
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "{error}")?;
            first = false;
        }
        Ok(())
    }
}

/// Transient product: submitted attributes with no identity yet.
///
/// This is what a form submission or a `new` page works with before the
/// store has accepted it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductDraft {
    pub title: Option<String>,
    pub extra: BTreeMap<String, String>,
}

impl ProductDraft {
    pub fn validate(&self) -> ValidationErrors {
        title_errors(self.title.as_deref())
    }
}

/// Partial attribute replacement for an existing product.
///
/// Absent fields leave the stored values untouched; `extra` entries are
/// upserted per key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductPatch {
    pub title: Option<String>,
    pub extra: BTreeMap<String, String>,
}

/// Persisted product record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    id: ProductId,
    title: String,
    extra: BTreeMap<String, String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Product {
    /// Promote a draft to a persisted record with a fresh identity.
    ///
    /// Fails without side effects when the draft is invalid.
    pub fn from_draft(draft: &ProductDraft, now: DateTime<Utc>) -> Result<Self, ValidationErrors> {
        let errors = draft.validate();
        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(Self {
            id: ProductId::new(),
            title: draft.title.clone().unwrap_or_default(),
            extra: draft.extra.clone(),
            created_at: now,
            updated_at: now,
        })
    }

    /// Apply a patch, returning the patched record.
    ///
    /// The receiver is untouched; callers decide whether to commit the
    /// result. Fails when the patched state is invalid.
    pub fn with_patch(
        &self,
        patch: &ProductPatch,
        now: DateTime<Utc>,
    ) -> Result<Self, ValidationErrors> {
        let mut next = self.clone();
        if let Some(title) = &patch.title {
            next.title = title.clone();
        }
        for (key, value) in &patch.extra {
            next.extra.insert(key.clone(), value.clone());
        }

        let errors = title_errors(Some(&next.title));
        if !errors.is_empty() {
            return Err(errors);
        }

        next.updated_at = now;
        Ok(next)
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn extra(&self) -> &BTreeMap<String, String> {
        &self.extra
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &ProductId {
        &self.id
    }
}

fn title_errors(title: Option<&str>) -> ValidationErrors {
    let mut errors = ValidationErrors::new();
    match title {
        Some(t) if !t.trim().is_empty() => {}
        _ => errors.push(ValidationError::blank("title")),
    }
    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(title: &str) -> ProductDraft {
        ProductDraft {
            title: Some(title.to_string()),
            extra: BTreeMap::new(),
        }
    }

    #[test]
    fn draft_with_title_is_valid() {
        assert!(draft("Widget").validate().is_empty());
    }

    #[test]
    fn draft_without_title_is_invalid() {
        let errors = ProductDraft::default().validate();
        assert_eq!(errors.len(), 1);
        let error = errors.iter().next().unwrap();
        assert_eq!(error.field, "title");
        assert_eq!(error.message, "can't be blank");
    }

    #[test]
    fn draft_with_blank_title_is_invalid() {
        assert!(!draft("   ").validate().is_empty());
    }

    #[test]
    fn from_draft_stamps_identity_and_timestamps() {
        let now = Utc::now();
        let mut d = draft("Widget");
        d.extra.insert("color".to_string(), "red".to_string());

        let product = Product::from_draft(&d, now).unwrap();
        assert_eq!(product.title(), "Widget");
        assert_eq!(product.extra().get("color").map(String::as_str), Some("red"));
        assert_eq!(product.created_at(), now);
        assert_eq!(product.updated_at(), now);
    }

    #[test]
    fn from_draft_rejects_invalid_draft() {
        let err = Product::from_draft(&ProductDraft::default(), Utc::now()).unwrap_err();
        assert_eq!(err.len(), 1);
    }

    #[test]
    fn two_drafts_get_distinct_identities() {
        let now = Utc::now();
        let a = Product::from_draft(&draft("Widget"), now).unwrap();
        let b = Product::from_draft(&draft("Widget"), now).unwrap();
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn patch_replaces_title_and_refreshes_updated_at() {
        let created = Utc::now();
        let product = Product::from_draft(&draft("Widget"), created).unwrap();

        let later = created + chrono::Duration::seconds(10);
        let patch = ProductPatch {
            title: Some("valid updated title".to_string()),
            extra: BTreeMap::new(),
        };
        let updated = product.with_patch(&patch, later).unwrap();

        assert_eq!(updated.title(), "valid updated title");
        assert_eq!(updated.id(), product.id());
        assert_eq!(updated.created_at(), created);
        assert_eq!(updated.updated_at(), later);
    }

    #[test]
    fn patch_without_title_keeps_stored_title() {
        let product = Product::from_draft(&draft("Widget"), Utc::now()).unwrap();

        let mut patch = ProductPatch::default();
        patch.extra.insert("size".to_string(), "large".to_string());
        let updated = product.with_patch(&patch, Utc::now()).unwrap();

        assert_eq!(updated.title(), "Widget");
        assert_eq!(updated.extra().get("size").map(String::as_str), Some("large"));
    }

    #[test]
    fn patch_to_blank_title_fails_and_leaves_receiver_untouched() {
        let product = Product::from_draft(&draft("Widget"), Utc::now()).unwrap();

        let patch = ProductPatch {
            title: Some(String::new()),
            extra: BTreeMap::new(),
        };
        let err = product.with_patch(&patch, Utc::now()).unwrap_err();
        assert!(!err.is_empty());
        assert_eq!(product.title(), "Widget");
    }

    #[test]
    fn patch_upserts_extra_per_key() {
        let mut d = draft("Widget");
        d.extra.insert("color".to_string(), "red".to_string());
        d.extra.insert("size".to_string(), "small".to_string());
        let product = Product::from_draft(&d, Utc::now()).unwrap();

        let mut patch = ProductPatch::default();
        patch.extra.insert("color".to_string(), "blue".to_string());
        let updated = product.with_patch(&patch, Utc::now()).unwrap();

        assert_eq!(updated.extra().get("color").map(String::as_str), Some("blue"));
        assert_eq!(updated.extra().get("size").map(String::as_str), Some("small"));
    }
}
