use axum::routing::{get, patch};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::forms;
use crate::state::AppState;

/// JSON API routes, ready to be merged into the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/forms/{id}", get(forms::get_form))
        .route("/api/forms/{id}/publish", patch(forms::publish_form))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
