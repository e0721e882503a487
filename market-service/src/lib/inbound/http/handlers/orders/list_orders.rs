use axum::extract::State;
use axum::http::StatusCode;

use super::super::ApiError;
use super::super::ApiSuccess;
use super::OrderListData;
use crate::domain::order::ports::OrderServicePort;
use crate::inbound::http::router::AppState;

pub async fn list_orders(
    State(state): State<AppState>,
) -> Result<ApiSuccess<OrderListData>, ApiError> {
    let orders = state
        .order_service
        .list_orders()
        .await
        .map_err(ApiError::from)?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        OrderListData::from_orders(&orders),
    ))
}
