use std::sync::Arc;

use auth::ApiKey;
use auth::Authenticator;
use auth::TokenError;
use axum::extract::Request;
use axum::extract::State;
use axum::http::{self};
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;

use crate::domain::user::models::UserId;
use crate::inbound::http::handlers::ApiError;

/// Extension type carrying the authenticated principal through the request.
///
/// The middleware does not re-check that the principal still exists in
/// storage; the token's validity window is trusted as-is.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
    pub name: String,
}

/// Admin gate configuration: the shared secret and the header that carries it.
#[derive(Clone)]
pub struct AdminGate {
    pub api_key: ApiKey,
    pub header_name: String,
}

/// Middleware validating bearer tokens on protected routes.
pub async fn authenticate(
    State(authenticator): State<Arc<Authenticator>>,
    mut req: Request,
    next: Next,
) -> Result<Response, Response> {
    let token = extract_bearer_token(&req)?;

    let claims = authenticator.validate_token(token).map_err(|e| {
        tracing::warn!(error = %e, "Bearer token rejected");
        match e {
            TokenError::TokenExpired => {
                ApiError::Unauthorized("Token has expired".to_string()).into_response()
            }
            _ => ApiError::Unauthorized("Invalid token".to_string()).into_response(),
        }
    })?;

    let user_id = UserId::from_string(&claims.sub)
        .map_err(|_| ApiError::Unauthorized("Invalid token".to_string()).into_response())?;

    req.extensions_mut().insert(AuthenticatedUser {
        user_id,
        name: claims.name,
    });

    Ok(next.run(req).await)
}

/// Middleware gating admin-only routes behind the configured API key.
///
/// Independent of the bearer mechanism: it never consults the token
/// handler, and gated routes do not additionally require a bearer token.
pub async fn require_api_key(
    State(gate): State<Arc<AdminGate>>,
    req: Request,
    next: Next,
) -> Result<Response, Response> {
    let supplied = req.headers().get(&gate.header_name).ok_or_else(|| {
        ApiError::Forbidden("Access token header not found".to_string()).into_response()
    })?;

    let supplied = supplied
        .to_str()
        .map_err(|_| ApiError::Forbidden("Invalid API Key".to_string()).into_response())?;

    if !gate.api_key.verify(supplied) {
        tracing::warn!("Admin API key rejected");
        return Err(ApiError::Forbidden("Invalid API Key".to_string()).into_response());
    }

    Ok(next.run(req).await)
}

fn extract_bearer_token(req: &Request) -> Result<&str, Response> {
    let auth_header = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .ok_or_else(|| {
            ApiError::Forbidden("Authorization header missing".to_string()).into_response()
        })?;

    let auth_str = auth_header
        .to_str()
        .map_err(|_| ApiError::Unauthorized("Invalid token".to_string()).into_response())?;

    // A header without the scheme prefix is invalid, not a server error
    auth_str
        .strip_prefix("Bearer ")
        .ok_or_else(|| ApiError::Unauthorized("Invalid token".to_string()).into_response())
}

#[cfg(test)]
mod tests {
    use auth::Claims;
    use axum::body::Body;
    use axum::extract::Extension;
    use axum::http::Request;
    use axum::http::StatusCode;
    use axum::middleware;
    use axum::routing::get;
    use axum::Router;
    use tower::ServiceExt;

    use super::*;

    const SECRET: &[u8] = b"test-secret-key-for-jwt-signing-32b!";

    async fn whoami(Extension(user): Extension<AuthenticatedUser>) -> String {
        user.user_id.to_string()
    }

    fn bearer_app() -> Router {
        let authenticator = Arc::new(Authenticator::new(SECRET));
        Router::new()
            .route("/protected", get(whoami))
            .route_layer(middleware::from_fn_with_state(authenticator, authenticate))
    }

    fn admin_app() -> Router {
        let gate = Arc::new(AdminGate {
            api_key: ApiKey::new("admin-secret"),
            header_name: "X-API-Key".to_string(),
        });
        Router::new()
            .route("/admin", get(|| async { "ok" }))
            .route_layer(middleware::from_fn_with_state(gate, require_api_key))
    }

    async fn body_string(response: axum::response::Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_missing_authorization_header_is_forbidden() {
        let response = bearer_app()
            .oneshot(
                Request::builder()
                    .uri("/protected")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::FORBIDDEN);
        assert!(body_string(response)
            .await
            .contains("Authorization header missing"));
    }

    #[tokio::test]
    async fn test_malformed_header_is_unauthorized() {
        let response = bearer_app()
            .oneshot(
                Request::builder()
                    .uri("/protected")
                    .header("Authorization", "not-a-bearer-token")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert!(body_string(response).await.contains("Invalid token"));
    }

    #[tokio::test]
    async fn test_garbage_token_is_unauthorized() {
        let response = bearer_app()
            .oneshot(
                Request::builder()
                    .uri("/protected")
                    .header("Authorization", "Bearer garbage.token.here")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert!(body_string(response).await.contains("Invalid token"));
    }

    #[tokio::test]
    async fn test_expired_token_is_unauthorized() {
        let authenticator = Authenticator::new(SECRET);
        let claims = Claims::for_principal(UserId::new(), "user", "Ann", -1);
        let token = authenticator.issue_token(&claims).unwrap();

        let response = bearer_app()
            .oneshot(
                Request::builder()
                    .uri("/protected")
                    .header("Authorization", format!("Bearer {}", token))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert!(body_string(response).await.contains("Token has expired"));
    }

    #[tokio::test]
    async fn test_valid_token_exposes_principal_id() {
        let user_id = UserId::new();
        let authenticator = Authenticator::new(SECRET);
        let claims = Claims::for_principal(user_id, "user", "Ann", 24);
        let token = authenticator.issue_token(&claims).unwrap();

        let response = bearer_app()
            .oneshot(
                Request::builder()
                    .uri("/protected")
                    .header("Authorization", format!("Bearer {}", token))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_string(response).await, user_id.to_string());
    }

    #[tokio::test]
    async fn test_token_signed_with_other_secret_is_rejected() {
        let other = Authenticator::new(b"another-secret-key-32-bytes-long!!!!");
        let claims = Claims::for_principal(UserId::new(), "user", "Ann", 24);
        let token = other.issue_token(&claims).unwrap();

        let response = bearer_app()
            .oneshot(
                Request::builder()
                    .uri("/protected")
                    .header("Authorization", format!("Bearer {}", token))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_api_key_header_missing_is_forbidden() {
        let response = admin_app()
            .oneshot(Request::builder().uri("/admin").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::FORBIDDEN);
        assert!(body_string(response)
            .await
            .contains("Access token header not found"));
    }

    #[tokio::test]
    async fn test_api_key_mismatch_is_forbidden() {
        let response = admin_app()
            .oneshot(
                Request::builder()
                    .uri("/admin")
                    .header("X-API-Key", "wrong-key")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::FORBIDDEN);
        assert!(body_string(response).await.contains("Invalid API Key"));
    }

    #[tokio::test]
    async fn test_api_key_match_passes() {
        let response = admin_app()
            .oneshot(
                Request::builder()
                    .uri("/admin")
                    .header("X-API-Key", "admin-secret")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_admin_gate_ignores_bearer_tokens() {
        // A valid bearer token alone does not open the admin gate
        let authenticator = Authenticator::new(SECRET);
        let claims = Claims::for_principal(UserId::new(), "user", "Ann", 24);
        let token = authenticator.issue_token(&claims).unwrap();

        let response = admin_app()
            .oneshot(
                Request::builder()
                    .uri("/admin")
                    .header("Authorization", format!("Bearer {}", token))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }
}
