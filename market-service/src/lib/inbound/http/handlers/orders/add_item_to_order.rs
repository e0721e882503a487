use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use super::super::ApiError;
use super::super::ApiSuccess;
use crate::domain::item::models::ItemId;
use crate::domain::order::models::OrderId;
use crate::domain::order::ports::OrderServicePort;
use crate::inbound::http::router::AppState;

/// Append a fresh snapshot of an item to an existing order.
///
/// Idempotent-reject: adding an item id already present in the order fails
/// and leaves the snapshot list unchanged.
pub async fn add_item_to_order(
    State(state): State<AppState>,
    Path((order_id, item_id)): Path<(String, String)>,
) -> Result<ApiSuccess<String>, ApiError> {
    let order_id =
        OrderId::from_string(&order_id).map_err(|e| ApiError::BadRequest(e.to_string()))?;
    let item_id =
        ItemId::from_string(&item_id).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    state
        .order_service
        .add_item(&order_id, &item_id)
        .await
        .map_err(ApiError::from)?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        format!("item {} added to order {}", item_id, order_id),
    ))
}
