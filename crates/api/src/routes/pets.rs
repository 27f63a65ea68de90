//! Route definitions for the `/pets` resource.
//!
//! All `/me` endpoints resolve the caller's pet via the gateway-set
//! identity header.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::{care, history, items, pet};
use crate::state::AppState;

/// Routes mounted at `/pets`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(pet::create_pet))
        .route("/items", get(items::list_items))
        .route("/me", get(pet::get_pet))
        // Care actions
        .route("/me/feed", post(care::feed))
        .route("/me/play", post(care::play))
        .route("/me/clean", post(care::clean))
        .route("/me/rest", post(care::rest))
        // Cosmetics
        .route("/me/color", put(pet::change_color))
        // History & progression
        .route("/me/history", get(history::get_history))
        .route("/me/achievements", get(pet::get_achievements))
        .route("/me/statistics", get(pet::get_statistics))
}
