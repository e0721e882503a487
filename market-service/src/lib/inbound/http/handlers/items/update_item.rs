use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use super::super::ApiError;
use super::super::ApiSuccess;
use crate::domain::item::models::ItemId;
use crate::domain::item::models::Stock;
use crate::domain::item::models::UpdateItemCommand;
use crate::domain::item::ports::ItemServicePort;
use crate::inbound::http::router::AppState;

/// HTTP request body for updating an item (raw JSON)
#[derive(Debug, Deserialize)]
pub struct UpdateItemRequest {
    #[serde(rename = "itemName")]
    pub item_name: Option<String>,
    pub category: Option<String>,
    #[serde(rename = "itemDesc")]
    pub item_desc: Option<String>,
    pub stock: Option<i32>,
    pub rating: Option<i32>,
}

impl UpdateItemRequest {
    fn try_into_command(self) -> Result<UpdateItemCommand, ApiError> {
        let stock = self
            .stock
            .map(Stock::new)
            .transpose()
            .map_err(|e| ApiError::BadRequest(e.to_string()))?;

        Ok(UpdateItemCommand {
            name: self.item_name,
            category: self.category,
            description: self.item_desc,
            stock,
            rating: self.rating,
        })
    }
}

pub async fn update_item(
    State(state): State<AppState>,
    Path(item_id): Path<String>,
    Json(body): Json<UpdateItemRequest>,
) -> Result<ApiSuccess<String>, ApiError> {
    let item_id =
        ItemId::from_string(&item_id).map_err(|e| ApiError::BadRequest(e.to_string()))?;
    let command = body.try_into_command()?;

    let item = state
        .item_service
        .update_item(&item_id, command)
        .await
        .map_err(ApiError::from)?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        format!("item {} updated successfully", item.id),
    ))
}
