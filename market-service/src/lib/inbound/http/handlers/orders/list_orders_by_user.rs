use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use super::super::ApiError;
use super::super::ApiSuccess;
use super::OrderListData;
use crate::domain::order::ports::OrderServicePort;
use crate::domain::user::models::UserId;
use crate::inbound::http::router::AppState;

pub async fn list_orders_by_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<ApiSuccess<OrderListData>, ApiError> {
    let user_id =
        UserId::from_string(&user_id).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let orders = state
        .order_service
        .list_orders_by_user(&user_id)
        .await
        .map_err(ApiError::from)?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        OrderListData::from_orders(&orders),
    ))
}
