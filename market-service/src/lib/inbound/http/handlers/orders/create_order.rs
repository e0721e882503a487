use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use super::super::ApiError;
use super::super::ApiSuccess;
use crate::domain::item::models::ItemId;
use crate::domain::order::errors::OrderError;
use crate::domain::order::models::CreateOrderCommand;
use crate::domain::order::models::OrderItemRequest;
use crate::domain::order::ports::OrderServicePort;
use crate::domain::user::models::UserId;
use crate::inbound::http::router::AppState;

pub async fn create_order(
    State(state): State<AppState>,
    Json(body): Json<CreateOrderRequest>,
) -> Result<ApiSuccess<String>, ApiError> {
    let command = body.try_into_command()?;

    let order = state
        .order_service
        .create_order(command)
        .await
        // All-or-nothing create: a missing item or owner is a rejected
        // request here, not a lookup 404
        .map_err(|e| match e {
            OrderError::ItemNotFound(_) | OrderError::UserNotFound(_) => {
                ApiError::BadRequest(e.to_string())
            }
            other => ApiError::from(other),
        })?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        format!("order {} created successfully", order.id),
    ))
}

/// HTTP request body for creating an order (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    user_id: String,
    #[serde(default)]
    items: Vec<CreateOrderItemRequest>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderItemRequest {
    item_id: String,
    quantity: Option<i32>,
}

impl CreateOrderRequest {
    fn try_into_command(self) -> Result<CreateOrderCommand, ApiError> {
        if self.items.is_empty() {
            return Err(ApiError::BadRequest(
                "Missing data in the request body".to_string(),
            ));
        }

        let user_id =
            UserId::from_string(&self.user_id).map_err(|e| ApiError::BadRequest(e.to_string()))?;

        let items = self
            .items
            .into_iter()
            .map(|request| {
                Ok(OrderItemRequest {
                    item_id: ItemId::from_string(&request.item_id)
                        .map_err(|e| ApiError::BadRequest(e.to_string()))?,
                    quantity: request.quantity,
                })
            })
            .collect::<Result<Vec<_>, ApiError>>()?;

        Ok(CreateOrderCommand { user_id, items })
    }
}
