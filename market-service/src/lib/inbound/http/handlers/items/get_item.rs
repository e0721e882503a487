use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use serde::Serialize;

use super::super::ApiError;
use super::super::ApiSuccess;
use super::ItemData;
use crate::domain::item::models::ItemId;
use crate::domain::item::ports::ItemServicePort;
use crate::inbound::http::router::AppState;

pub async fn get_item(
    State(state): State<AppState>,
    Path(item_id): Path<String>,
) -> Result<ApiSuccess<GetItemResponseData>, ApiError> {
    let item_id =
        ItemId::from_string(&item_id).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let item = state
        .item_service
        .get_item(&item_id)
        .await
        .map_err(ApiError::from)?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        GetItemResponseData {
            item: ItemData::from(&item),
        },
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GetItemResponseData {
    pub item: ItemData,
}
