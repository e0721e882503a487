use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use super::super::ApiError;
use super::super::ApiSuccess;
use crate::domain::item::models::ItemId;
use crate::domain::item::ports::ItemServicePort;
use crate::domain::user::models::UserId;
use crate::inbound::http::router::AppState;

/// Link an item to a user's catalog (the many-to-many association).
///
/// Adding an already-linked pair reports failure without duplicating the
/// row.
pub async fn add_item_to_user(
    State(state): State<AppState>,
    Path((user_id, item_id)): Path<(String, String)>,
) -> Result<ApiSuccess<String>, ApiError> {
    let user_id =
        UserId::from_string(&user_id).map_err(|e| ApiError::BadRequest(e.to_string()))?;
    let item_id =
        ItemId::from_string(&item_id).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    state
        .item_service
        .add_item_to_user(&user_id, &item_id)
        .await
        .map_err(ApiError::from)?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        format!("item {} added to user {} successfully", item_id, user_id),
    ))
}
