//! # Authentication Boundary
//!
//! Session issuance and token verification belong to the external identity
//! provider; by the time a request reaches this service, the auth gateway
//! has already authenticated it and injected the caller's identity as
//! trusted headers. This module resolves those headers once into a typed
//! [`Caller`] so handlers never look at raw claims.

use axum::async_trait;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use hackhub_core::errors::HackError;
use hackhub_core::models::role::Role;

use crate::middleware::error_handling::AppError;

/// Header carrying the opaque user id assigned by the identity provider.
pub const UID_HEADER: &str = "x-uid";

/// Header carrying the `mentor` boolean claim.
pub const MENTOR_HEADER: &str = "x-mentor";

/// Authenticated caller identity.
///
/// The uid is opaque and trusted verbatim; the role is resolved from the
/// mentor claim exactly once, here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Caller {
    pub uid: String,
    pub role: Role,
}

impl Caller {
    /// Gate for mentor-only routes.
    pub fn require_mentor(&self) -> Result<(), AppError> {
        if self.role.is_mentor() {
            Ok(())
        } else {
            Err(AppError(HackError::Unauthorized(
                "mentor access required".to_string(),
            )))
        }
    }
}

/// Parses the gateway headers into a [`Caller`]. Used by tests and the
/// extractor below.
pub fn caller_from_headers(headers: &axum::http::HeaderMap) -> Result<Caller, AppError> {
    let uid = headers
        .get(UID_HEADER)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty())
        .ok_or_else(|| {
            AppError(HackError::Unauthorized(
                "missing or invalid identity header".to_string(),
            ))
        })?
        .to_string();

    let mentor = headers
        .get(MENTOR_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.eq_ignore_ascii_case("true"))
        .unwrap_or(false);

    Ok(Caller {
        uid,
        role: Role::from_mentor_claim(mentor),
    })
}

#[async_trait]
impl<S> FromRequestParts<S> for Caller
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        caller_from_headers(&parts.headers)
    }
}
