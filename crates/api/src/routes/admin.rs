//! Route definitions for administrative operations.
//!
//! The decay trigger is meant for schedulers and operators, not end
//! users; the upstream gateway restricts who can reach `/admin`.

use axum::routing::post;
use axum::Router;

use crate::handlers::admin;
use crate::state::AppState;

/// Routes mounted at `/admin`.
pub fn router() -> Router<AppState> {
    Router::new().route("/decay/run", post(admin::run_decay))
}
