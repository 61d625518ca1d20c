use std::collections::BTreeMap;
use std::sync::Arc;

use axum::{
    extract::{Extension, Form, Path},
    http::StatusCode,
    response::{IntoResponse, Redirect},
    routing::get,
    Router,
};

use shopfront_core::ProductId;

use crate::app::controller::{ControllerResponse, Page};
use crate::app::services::AppServices;
use crate::app::{dto, errors, views};

pub fn router() -> Router {
    Router::new()
        .route("/", get(index).post(create))
        .route("/new", get(new_form))
        .route(
            "/:id",
            get(show).post(form_override).put(update).delete(destroy),
        )
        .route("/:id/edit", get(edit))
}

pub async fn index(Extension(services): Extension<Arc<AppServices>>) -> axum::response::Response {
    respond(services.products_controller().index())
}

pub async fn show(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match parse_id(&id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    respond(services.products_controller().show(id))
}

pub async fn new_form(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    respond(services.products_controller().new_form())
}

pub async fn create(
    Extension(services): Extension<Arc<AppServices>>,
    Form(form): Form<BTreeMap<String, String>>,
) -> axum::response::Response {
    let draft = dto::draft_from_form(form);
    respond(services.products_controller().create(draft))
}

pub async fn edit(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match parse_id(&id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    respond(services.products_controller().edit(id))
}

pub async fn update(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    Form(form): Form<BTreeMap<String, String>>,
) -> axum::response::Response {
    let id = match parse_id(&id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let patch = dto::patch_from_form(form);
    respond(services.products_controller().update(id, patch))
}

pub async fn destroy(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match parse_id(&id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    respond(services.products_controller().destroy(id))
}

/// Browser forms can only POST; a `_method` field selects the real verb.
pub async fn form_override(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    Form(form): Form<BTreeMap<String, String>>,
) -> axum::response::Response {
    let id = match parse_id(&id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match form.get("_method").map(String::as_str) {
        Some("put") | Some("patch") => {
            let patch = dto::patch_from_form(form);
            respond(services.products_controller().update(id, patch))
        }
        Some("delete") => respond(services.products_controller().destroy(id)),
        _ => errors::html_error(
            StatusCode::METHOD_NOT_ALLOWED,
            "Method not allowed",
            "unsupported _method override",
        ),
    }
}

fn parse_id(raw: &str) -> Result<ProductId, axum::response::Response> {
    raw.parse::<ProductId>().map_err(|_| errors::invalid_id())
}

fn respond(response: ControllerResponse) -> axum::response::Response {
    match response {
        ControllerResponse::Render { page } => render_page(page),
        ControllerResponse::Redirect { location } => Redirect::to(&location).into_response(),
        ControllerResponse::NotFound => errors::not_found(),
    }
}

fn render_page(page: Page) -> axum::response::Response {
    let status = if page.has_errors() {
        StatusCode::UNPROCESSABLE_ENTITY
    } else {
        StatusCode::OK
    };

    (status, views::render(&page)).into_response()
}
