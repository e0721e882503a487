use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde::Serialize;

use crate::domain::item::errors::ItemError;
use crate::domain::order::errors::OrderError;
use crate::domain::user::errors::UserError;

pub mod authenticate;
pub mod items;
pub mod orders;
pub mod users;

/// Successful response: transport status plus the `{status, data}` envelope
/// mirroring it in-body.
#[derive(Debug, Clone)]
pub struct ApiSuccess<T: Serialize + PartialEq>(StatusCode, Json<ApiResponseBody<T>>);

impl<T> PartialEq for ApiSuccess<T>
where
    T: Serialize + PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0 && self.1 .0 == other.1 .0
    }
}

impl<T: Serialize + PartialEq> ApiSuccess<T> {
    pub fn new(status: StatusCode, data: T) -> Self {
        ApiSuccess(status, Json(ApiResponseBody::new(status, data)))
    }
}

impl<T: Serialize + PartialEq> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        (self.0, self.1).into_response()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    InternalServerError(String),
    BadRequest(String),
    NotFound(String),
    Conflict(String),
    Unauthorized(String),
    Forbidden(String),
}

impl From<anyhow::Error> for ApiError {
    fn from(e: anyhow::Error) -> Self {
        Self::InternalServerError(e.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::InternalServerError(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            ApiError::Forbidden(msg) => (StatusCode::FORBIDDEN, msg),
        };

        (status, Json(ApiResponseBody::new_error(status, message))).into_response()
    }
}

impl From<UserError> for ApiError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::NotFound(_) => ApiError::NotFound(err.to_string()),
            UserError::EmailAlreadyExists(_) => ApiError::Conflict(err.to_string()),
            UserError::OrdersExist(_) => ApiError::Conflict(err.to_string()),
            UserError::InvalidPassword => ApiError::Unauthorized(err.to_string()),
            UserError::InvalidUserId(_) | UserError::InvalidEmail(_) => {
                ApiError::BadRequest(err.to_string())
            }
            UserError::PasswordHash(_) | UserError::DatabaseError(_) => {
                ApiError::InternalServerError(err.to_string())
            }
        }
    }
}

impl From<ItemError> for ApiError {
    fn from(err: ItemError) -> Self {
        match err {
            ItemError::NotFound(_) | ItemError::UserNotFound(_) => {
                ApiError::NotFound(err.to_string())
            }
            ItemError::AlreadyAdded { .. } => ApiError::Conflict(err.to_string()),
            ItemError::InvalidItemId(_) | ItemError::InvalidStock(_) => {
                ApiError::BadRequest(err.to_string())
            }
            ItemError::ImageStore(_) | ItemError::DatabaseError(_) => {
                ApiError::InternalServerError(err.to_string())
            }
        }
    }
}

impl From<OrderError> for ApiError {
    fn from(err: OrderError) -> Self {
        match err {
            OrderError::NotFound(_)
            | OrderError::ItemNotFound(_)
            | OrderError::UserNotFound(_) => ApiError::NotFound(err.to_string()),
            OrderError::ItemAlreadyInOrder(_) => ApiError::Conflict(err.to_string()),
            OrderError::InvalidOrderId(_)
            | OrderError::InvalidStatus(_)
            | OrderError::EmptyItems => ApiError::BadRequest(err.to_string()),
            OrderError::Snapshot(_) | OrderError::DatabaseError(_) => {
                ApiError::InternalServerError(err.to_string())
            }
        }
    }
}

/// `{status, data}` response envelope shared by every endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiResponseBody<T: Serialize + PartialEq> {
    status: u16,
    data: T,
}

impl<T: Serialize + PartialEq> ApiResponseBody<T> {
    pub fn new(status: StatusCode, data: T) -> Self {
        Self {
            status: status.as_u16(),
            data,
        }
    }
}

impl ApiResponseBody<ApiErrorData> {
    pub fn new_error(status: StatusCode, message: String) -> Self {
        Self {
            status: status.as_u16(),
            data: ApiErrorData { message },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiErrorData {
    pub message: String,
}
