use std::sync::Arc;

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    middleware::Next,
    response::Response,
};
use chrono::Utc;

use shopfront_auth::SessionValidator;

use crate::context::RetailerContext;

#[derive(Clone)]
pub struct AuthState {
    pub sessions: Arc<dyn SessionValidator>,
}

pub async fn auth_middleware(
    State(state): State<AuthState>,
    mut req: axum::http::Request<axum::body::Body>,
    next: Next,
) -> Result<Response, StatusCode> {
    let token = extract_session_token(req.headers())?;

    let claims = state
        .sessions
        .validate(token, Utc::now())
        .map_err(|_e| StatusCode::UNAUTHORIZED)?;

    req.extensions_mut().insert(RetailerContext::new(claims.sub));

    Ok(next.run(req).await)
}

/// Session cookie takes precedence; `Authorization: Bearer` is the
/// non-browser fallback.
fn extract_session_token(headers: &HeaderMap) -> Result<&str, StatusCode> {
    if let Some(token) = session_cookie(headers) {
        return Ok(token);
    }
    extract_bearer(headers)
}

fn session_cookie(headers: &HeaderMap) -> Option<&str> {
    let cookies = headers.get(axum::http::header::COOKIE)?.to_str().ok()?;

    cookies
        .split(';')
        .map(str::trim)
        .find_map(|pair| pair.strip_prefix("retailer_session="))
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

fn extract_bearer(headers: &HeaderMap) -> Result<&str, StatusCode> {
    let header = headers
        .get(axum::http::header::AUTHORIZATION)
        .ok_or(StatusCode::UNAUTHORIZED)?;

    let header = header.to_str().map_err(|_| StatusCode::UNAUTHORIZED)?;

    let header = header
        .strip_prefix("Bearer ")
        .ok_or(StatusCode::UNAUTHORIZED)?;

    let token = header.trim();
    if token.is_empty() {
        return Err(StatusCode::UNAUTHORIZED);
    }

    Ok(token)
}
