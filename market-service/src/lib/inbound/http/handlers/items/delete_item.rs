use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use super::super::ApiError;
use super::super::ApiSuccess;
use crate::domain::item::models::ItemId;
use crate::domain::item::ports::ItemServicePort;
use crate::inbound::http::router::AppState;

pub async fn delete_item(
    State(state): State<AppState>,
    Path(item_id): Path<String>,
) -> Result<ApiSuccess<String>, ApiError> {
    let item_id =
        ItemId::from_string(&item_id).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let item = state
        .item_service
        .delete_item(&item_id)
        .await
        .map_err(ApiError::from)?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        format!("item {} deleted successfully", item.id),
    ))
}
