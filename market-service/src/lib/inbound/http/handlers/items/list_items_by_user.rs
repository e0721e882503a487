use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use super::super::ApiError;
use super::super::ApiSuccess;
use super::ItemListData;
use crate::domain::item::ports::ItemServicePort;
use crate::domain::user::models::UserId;
use crate::inbound::http::router::AppState;

pub async fn list_items_by_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<ApiSuccess<ItemListData>, ApiError> {
    let user_id =
        UserId::from_string(&user_id).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let items = state
        .item_service
        .list_items_by_user(&user_id)
        .await
        .map_err(ApiError::from)?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        ItemListData::from_items(&items),
    ))
}
