use auth::Claims;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::super::authenticate::PRINCIPAL_KIND;
use super::super::ApiError;
use super::super::ApiSuccess;
use crate::domain::user::models::CreateUserCommand;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::router::AppState;

/// Register a new user and immediately log them in.
pub async fn create_user(
    State(state): State<AppState>,
    Json(body): Json<CreateUserRequest>,
) -> Result<ApiSuccess<CreateUserResponseData>, ApiError> {
    let command = body.try_into_command()?;

    let user = state
        .user_service
        .create_user(command)
        .await
        .map_err(ApiError::from)?;

    // Register-and-log-in: the fresh principal gets a token right away
    let claims = Claims::for_principal(
        user.id,
        PRINCIPAL_KIND,
        user.name.clone(),
        state.jwt_expiration_hours,
    );
    let token = state
        .authenticator
        .issue_token(&claims)
        .map_err(|e| ApiError::InternalServerError(format!("Token generation failed: {}", e)))?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        CreateUserResponseData {
            message: format!("user {} created successfully", user.name),
            token,
        },
    ))
}

/// HTTP request body for registration (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    #[serde(default)]
    name: String,
    #[serde(default)]
    email: String,
    #[serde(default)]
    phone_number: String,
    #[serde(default)]
    address: String,
    #[serde(default)]
    password: String,
}

impl CreateUserRequest {
    fn try_into_command(self) -> Result<CreateUserCommand, ApiError> {
        // Every profile field is required at registration
        if self.name.is_empty()
            || self.email.is_empty()
            || self.phone_number.is_empty()
            || self.address.is_empty()
            || self.password.is_empty()
        {
            return Err(ApiError::BadRequest(
                "Missing data in the request body".to_string(),
            ));
        }

        let email =
            EmailAddress::new(self.email).map_err(|e| ApiError::BadRequest(e.to_string()))?;

        Ok(CreateUserCommand::new(
            self.name,
            email,
            self.phone_number,
            self.address,
            self.password,
        ))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateUserResponseData {
    pub message: String,
    pub token: String,
}
