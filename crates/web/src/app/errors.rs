use axum::http::StatusCode;
use axum::response::{Html, IntoResponse};

use crate::app::views::escape_html;

pub fn html_error(
    status: StatusCode,
    title: &str,
    message: impl Into<String>,
) -> axum::response::Response {
    let body = format!(
        "<!DOCTYPE html>\n<html>\n<head><meta charset=\"utf-8\"><title>{}</title></head>\n\
         <body>\n<main data-template=\"error\">\n<h1>{}</h1>\n<p>{}</p>\n</main>\n</body>\n</html>\n",
        escape_html(title),
        escape_html(title),
        escape_html(&message.into())
    );

    (status, Html(body)).into_response()
}

pub fn not_found() -> axum::response::Response {
    html_error(
        StatusCode::NOT_FOUND,
        "Not found",
        "the record you were looking for does not exist",
    )
}

pub fn invalid_id() -> axum::response::Response {
    html_error(
        StatusCode::BAD_REQUEST,
        "Invalid identifier",
        "the identifier in the URL is not valid",
    )
}
