use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use super::super::ApiError;
use super::super::ApiSuccess;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::UpdateUserCommand;
use crate::domain::user::models::UserId;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::router::AppState;

/// HTTP request body for updating a user (raw JSON)
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub address: Option<String>,
}

impl UpdateUserRequest {
    fn try_into_command(self) -> Result<UpdateUserCommand, ApiError> {
        let email = self
            .email
            .map(EmailAddress::new)
            .transpose()
            .map_err(|e| ApiError::BadRequest(e.to_string()))?;

        Ok(UpdateUserCommand {
            name: self.name,
            email,
            phone_number: self.phone_number,
            address: self.address,
        })
    }
}

pub async fn update_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Json(body): Json<UpdateUserRequest>,
) -> Result<ApiSuccess<String>, ApiError> {
    let user_id =
        UserId::from_string(&user_id).map_err(|e| ApiError::BadRequest(e.to_string()))?;
    let command = body.try_into_command()?;

    let user = state
        .user_service
        .update_user(&user_id, command)
        .await
        .map_err(ApiError::from)?;

    Ok(ApiSuccess::new(
        StatusCode::CREATED,
        format!("user {} updated successfully", user.name),
    ))
}
