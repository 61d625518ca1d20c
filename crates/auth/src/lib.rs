//! `shopfront-auth` — retailer session boundary.
//!
//! This crate is intentionally decoupled from HTTP and storage.

pub mod claims;
pub mod session;

pub use claims::{SessionClaims, TokenValidationError, validate_claims};
pub use session::{Hs256SessionValidator, SessionError, SessionValidator};
