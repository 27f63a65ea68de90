//! Owner identity extractor.
//!
//! Authentication and session issuance live in the upstream gateway;
//! by the time a request reaches this service the gateway has already
//! verified the caller and forwards their id in the `x-user-id`
//! header. The extractor only parses that header.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use petkeeper_core::types::DbId;

use crate::error::AppError;

/// Header carrying the authenticated user's id, set by the gateway.
pub const USER_ID_HEADER: &str = "x-user-id";

/// Authenticated pet owner, extracted from the gateway-set header.
///
/// Use this as an extractor parameter in any handler that requires an
/// identified caller:
///
/// ```ignore
/// async fn my_handler(owner: AuthUser) -> AppResult<Json<()>> {
///     tracing::info!(owner_id = owner.user_id, "handling request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct AuthUser {
    pub user_id: DbId,
}

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(USER_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| AppError::Unauthorized(format!("Missing {USER_ID_HEADER} header")))?;

        let user_id: DbId = header
            .parse()
            .map_err(|_| AppError::Unauthorized(format!("Invalid {USER_ID_HEADER} header")))?;

        Ok(AuthUser { user_id })
    }
}
