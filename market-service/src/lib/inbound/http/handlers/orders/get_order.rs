use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use serde::Serialize;

use super::super::ApiError;
use super::super::ApiSuccess;
use super::OrderData;
use crate::domain::order::models::OrderId;
use crate::domain::order::ports::OrderServicePort;
use crate::inbound::http::router::AppState;

pub async fn get_order(
    State(state): State<AppState>,
    Path(order_id): Path<String>,
) -> Result<ApiSuccess<GetOrderResponseData>, ApiError> {
    let order_id =
        OrderId::from_string(&order_id).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let order = state
        .order_service
        .get_order(&order_id)
        .await
        .map_err(ApiError::from)?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        GetOrderResponseData {
            order: OrderData::from(&order),
        },
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GetOrderResponseData {
    pub order: OrderData,
}
