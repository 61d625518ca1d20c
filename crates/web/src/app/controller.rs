//! Products resource controller.
//!
//! Holds the render/redirect decisions for the seven resource operations,
//! independent of HTTP plumbing so the behavior is testable without a
//! running server.

use shopfront_catalog::{
    Product, ProductDraft, ProductPatch, ProductRepository, StoreError, ValidationErrors,
};
use shopfront_core::{Entity, ProductId};

/// A page to render, with everything the template needs assigned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Page {
    Index {
        products: Vec<Product>,
    },
    Show {
        product: Product,
    },
    New {
        product: ProductDraft,
        errors: ValidationErrors,
    },
    Edit {
        product: Product,
        errors: ValidationErrors,
    },
}

impl Page {
    pub fn template(&self) -> &'static str {
        match self {
            Page::Index { .. } => "products/index",
            Page::Show { .. } => "products/show",
            Page::New { .. } => "products/new",
            Page::Edit { .. } => "products/edit",
        }
    }

    pub fn has_errors(&self) -> bool {
        match self {
            Page::Index { .. } | Page::Show { .. } => false,
            Page::New { errors, .. } | Page::Edit { errors, .. } => !errors.is_empty(),
        }
    }
}

/// Outcome of a controller operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControllerResponse {
    Render { page: Page },
    Redirect { location: String },
    NotFound,
}

impl ControllerResponse {
    fn render(page: Page) -> Self {
        Self::Render { page }
    }

    fn redirect(location: impl Into<String>) -> Self {
        Self::Redirect {
            location: location.into(),
        }
    }
}

pub fn products_path() -> String {
    "/products".to_string()
}

pub fn product_path(id: ProductId) -> String {
    format!("/products/{id}")
}

pub struct ProductsController<R: ProductRepository> {
    repo: R,
}

impl<R: ProductRepository> ProductsController<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// GET /products
    pub fn index(&self) -> ControllerResponse {
        ControllerResponse::render(Page::Index {
            products: self.repo.list(),
        })
    }

    /// GET /products/:id
    pub fn show(&self, id: ProductId) -> ControllerResponse {
        match self.repo.find(id) {
            Some(product) => ControllerResponse::render(Page::Show { product }),
            None => ControllerResponse::NotFound,
        }
    }

    /// GET /products/new
    pub fn new_form(&self) -> ControllerResponse {
        ControllerResponse::render(Page::New {
            product: ProductDraft::default(),
            errors: ValidationErrors::new(),
        })
    }

    /// POST /products
    ///
    /// Rejected submissions re-render the form with the submitted draft so
    /// nothing the retailer typed is lost.
    pub fn create(&self, draft: ProductDraft) -> ControllerResponse {
        match self.repo.insert(&draft) {
            Ok(product) => ControllerResponse::redirect(product_path(*product.id())),
            Err(StoreError::Validation(errors)) => {
                ControllerResponse::render(Page::New {
                    product: draft,
                    errors,
                })
            }
            Err(StoreError::NotFound) => ControllerResponse::NotFound,
        }
    }

    /// GET /products/:id/edit
    pub fn edit(&self, id: ProductId) -> ControllerResponse {
        match self.repo.find(id) {
            Some(product) => ControllerResponse::render(Page::Edit {
                product,
                errors: ValidationErrors::new(),
            }),
            None => ControllerResponse::NotFound,
        }
    }

    /// PUT /products/:id
    ///
    /// A rejected patch re-renders the edit form over the stored record,
    /// which the store has left untouched.
    pub fn update(&self, id: ProductId, patch: ProductPatch) -> ControllerResponse {
        match self.repo.update(id, &patch) {
            Ok(product) => ControllerResponse::redirect(product_path(*product.id())),
            Err(StoreError::Validation(errors)) => match self.repo.find(id) {
                Some(product) => ControllerResponse::render(Page::Edit { product, errors }),
                None => ControllerResponse::NotFound,
            },
            Err(StoreError::NotFound) => ControllerResponse::NotFound,
        }
    }

    /// DELETE /products/:id
    pub fn destroy(&self, id: ProductId) -> ControllerResponse {
        match self.repo.delete(id) {
            Ok(()) => ControllerResponse::redirect(products_path()),
            Err(_) => ControllerResponse::NotFound,
        }
    }
}
