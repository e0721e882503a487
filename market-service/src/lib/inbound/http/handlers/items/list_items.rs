use axum::extract::State;
use axum::http::StatusCode;

use super::super::ApiError;
use super::super::ApiSuccess;
use super::ItemListData;
use crate::domain::item::ports::ItemServicePort;
use crate::inbound::http::router::AppState;

pub async fn list_items(
    State(state): State<AppState>,
) -> Result<ApiSuccess<ItemListData>, ApiError> {
    let items = state
        .item_service
        .list_items()
        .await
        .map_err(ApiError::from)?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        ItemListData::from_items(&items),
    ))
}
