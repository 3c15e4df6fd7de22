//! # Form endpoints
//!
//! | Route | Handler |
//! |-------|---------|
//! | `GET /api/forms/{id}` | [`get_form`]: the form as JSON, or 404. |
//! | `PATCH /api/forms/{id}/publish` | [`publish_form`]: set `isPublished`, refresh `updatedAt`. |
//!
//! The publish body must be `{ "isPublished": <bool> }`. Anything else (no body,
//! non-JSON, missing field, a string or number instead of a boolean) is rejected
//! with 400 before the store is touched. An unknown id is a 404, and a store
//! failure is a 500 whose detail is only logged.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use store::Form;

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// Body of a publish request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublishRequest {
    pub is_published: bool,
}

pub async fn get_form(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Form>> {
    let form = state
        .forms
        .get_form(&id)
        .await?
        .ok_or(ApiError::NotFound("Form"))?;
    Ok(Json(form))
}

pub async fn publish_form(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<PublishRequest>, JsonRejection>,
) -> ApiResult<Json<Form>> {
    let Json(request) = payload.map_err(|rejection| {
        tracing::debug!(form_id = %id, error = %rejection, "rejected publish body");
        ApiError::BadRequest(rejection.body_text())
    })?;

    let form = state
        .forms
        .set_published(&id, request.is_published)
        .await?
        .ok_or(ApiError::NotFound("Form"))?;

    tracing::info!(
        form_id = %form.id,
        is_published = form.is_published,
        "form publish state updated"
    );
    Ok(Json(form))
}
