use auth::AuthenticationError;
use auth::Claims;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::router::AppState;

/// Principal kind discriminator reported on successful authentication.
///
/// The marketplace has a single unified principal kind; the discriminator is
/// kept in the token and the response so clients need not assume it.
pub const PRINCIPAL_KIND: &str = "user";

pub async fn authenticate(
    State(state): State<AppState>,
    Json(body): Json<AuthenticateRequestBody>,
) -> Result<ApiSuccess<AuthenticateResponseData>, ApiError> {
    // Empty credentials fail validation before any lookup runs
    if body.email.is_empty() || body.password.is_empty() {
        return Err(ApiError::BadRequest(
            "Missing data in the request body".to_string(),
        ));
    }

    let email = EmailAddress::new(body.email).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    // Unknown email is a 404; a known email with a wrong password must
    // short-circuit to 401 below, never fall back to another lookup.
    let user = state
        .user_service
        .get_user_by_email(&email)
        .await
        .map_err(ApiError::from)?;

    let claims = Claims::for_principal(
        user.id,
        PRINCIPAL_KIND,
        user.name.clone(),
        state.jwt_expiration_hours,
    );

    let result = state
        .authenticator
        .authenticate(&body.password, &user.password_hash, &claims)
        .map_err(|e| match e {
            AuthenticationError::InvalidCredentials => {
                ApiError::Unauthorized("Invalid password".to_string())
            }
            AuthenticationError::Password(err) => {
                ApiError::InternalServerError(format!("Password verification failed: {}", err))
            }
            AuthenticationError::Token(err) => {
                ApiError::InternalServerError(format!("Token generation failed: {}", err))
            }
        })?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        AuthenticateResponseData {
            token: result.access_token,
            kind: PRINCIPAL_KIND.to_string(),
            name: user.name,
        },
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AuthenticateRequestBody {
    email: String,
    password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthenticateResponseData {
    pub token: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub name: String,
}
