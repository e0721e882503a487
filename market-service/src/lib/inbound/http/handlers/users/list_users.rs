use axum::extract::State;
use axum::http::StatusCode;
use serde::Serialize;

use super::super::ApiError;
use super::super::ApiSuccess;
use super::UserData;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::router::AppState;

pub async fn list_users(
    State(state): State<AppState>,
) -> Result<ApiSuccess<ListUsersResponseData>, ApiError> {
    let users = state
        .user_service
        .list_users()
        .await
        .map_err(ApiError::from)?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        ListUsersResponseData {
            users: users.iter().map(UserData::from).collect(),
        },
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListUsersResponseData {
    pub users: Vec<UserData>,
}
