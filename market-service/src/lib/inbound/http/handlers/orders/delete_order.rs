use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use super::super::ApiError;
use super::super::ApiSuccess;
use crate::domain::order::models::OrderId;
use crate::domain::order::ports::OrderServicePort;
use crate::inbound::http::router::AppState;

pub async fn delete_order(
    State(state): State<AppState>,
    Path(order_id): Path<String>,
) -> Result<ApiSuccess<String>, ApiError> {
    let order_id =
        OrderId::from_string(&order_id).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    state
        .order_service
        .delete_order(&order_id)
        .await
        .map_err(ApiError::from)?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        format!("order {} deleted successfully", order_id),
    ))
}
