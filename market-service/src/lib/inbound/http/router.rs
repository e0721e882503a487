use std::sync::Arc;
use std::time::Duration;

use auth::Authenticator;
use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::delete;
use axum::routing::get;
use axum::routing::post;
use axum::routing::put;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::authenticate::authenticate;
use super::handlers::items::add_item_to_user::add_item_to_user;
use super::handlers::items::create_item::create_item;
use super::handlers::items::delete_item::delete_item;
use super::handlers::items::get_item::get_item;
use super::handlers::items::list_items::list_items;
use super::handlers::items::list_items_by_category::list_items_by_category;
use super::handlers::items::list_items_by_user::list_items_by_user;
use super::handlers::items::update_item::update_item;
use super::handlers::orders::add_item_to_order::add_item_to_order;
use super::handlers::orders::create_order::create_order;
use super::handlers::orders::delete_order::delete_order;
use super::handlers::orders::get_order::get_order;
use super::handlers::orders::list_orders::list_orders;
use super::handlers::orders::list_orders_by_user::list_orders_by_user;
use super::handlers::users::create_user::create_user;
use super::handlers::users::delete_user::delete_user;
use super::handlers::users::get_user::get_user;
use super::handlers::users::list_users::list_users;
use super::handlers::users::update_user::update_user;
use super::middleware::authenticate as bearer_middleware;
use super::middleware::require_api_key;
use super::middleware::AdminGate;
use crate::domain::item::service::ItemService;
use crate::domain::order::service::OrderService;
use crate::domain::user::service::UserService;
use crate::outbound::repositories::item::PostgresItemRepository;
use crate::outbound::repositories::order::PostgresOrderRepository;
use crate::outbound::repositories::user::PostgresUserRepository;
use crate::outbound::storage::images::FsImageStore;

#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<UserService<PostgresUserRepository>>,
    pub item_service:
        Arc<ItemService<PostgresItemRepository, PostgresUserRepository, FsImageStore>>,
    pub order_service:
        Arc<OrderService<PostgresOrderRepository, PostgresItemRepository, PostgresUserRepository>>,
    pub authenticator: Arc<Authenticator>,
    pub jwt_expiration_hours: i64,
}

pub fn create_router(
    user_service: Arc<UserService<PostgresUserRepository>>,
    item_service: Arc<
        ItemService<PostgresItemRepository, PostgresUserRepository, FsImageStore>,
    >,
    order_service: Arc<
        OrderService<PostgresOrderRepository, PostgresItemRepository, PostgresUserRepository>,
    >,
    authenticator: Arc<Authenticator>,
    admin_gate: Arc<AdminGate>,
    jwt_expiration_hours: i64,
) -> Router {
    let state = AppState {
        user_service,
        item_service,
        order_service,
        authenticator: Arc::clone(&authenticator),
        jwt_expiration_hours,
    };

    let public_routes = Router::new()
        .route("/api/auth", post(authenticate))
        .route("/api/users", post(create_user))
        .route("/api/items", get(list_items))
        .route("/api/items/:item_id", get(get_item))
        .route("/api/items/user/:user_id", get(list_items_by_user))
        .route("/api/items/category/:category", get(list_items_by_category))
        .route("/api/orders", post(create_order))
        .route("/api/orders", get(list_orders))
        .route("/api/orders/:order_id", get(get_order))
        .route("/api/orders/user/:user_id", get(list_orders_by_user))
        .route("/api/orders/:order_id/items/:item_id", post(add_item_to_order))
        .route("/api/orders/:order_id", delete(delete_order));

    let bearer_routes = Router::new()
        .route("/api/users/:user_id", put(update_user))
        .route("/api/items", post(create_item))
        .route("/api/items/:item_id", put(update_item))
        .route("/api/items/:item_id", delete(delete_item))
        .route("/api/items/add-item/:user_id/:item_id", post(add_item_to_user))
        .route_layer(middleware::from_fn_with_state(
            authenticator,
            bearer_middleware,
        ));

    // Separate trust mechanism: these routes take the admin key only, never
    // a bearer token.
    let admin_routes = Router::new()
        .route("/api/users", get(list_users))
        .route("/api/users/:user_id", get(get_user))
        .route("/api/users/:user_id", delete(delete_user))
        .route_layer(middleware::from_fn_with_state(admin_gate, require_api_key));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(public_routes)
        .merge(bearer_routes)
        .merge(admin_routes)
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
