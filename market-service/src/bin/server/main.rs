use std::sync::Arc;

use auth::ApiKey;
use auth::Authenticator;
use market_service::config::Config;
use market_service::domain::item::service::ItemService;
use market_service::domain::order::service::OrderService;
use market_service::domain::user::service::UserService;
use market_service::inbound::http::middleware::AdminGate;
use market_service::inbound::http::router::create_router;
use market_service::outbound::repositories::PostgresItemRepository;
use market_service::outbound::repositories::PostgresOrderRepository;
use market_service::outbound::repositories::PostgresUserRepository;
use market_service::outbound::storage::FsImageStore;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "market_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "market-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    // Missing required values (signing secret, admin key, database url)
    // abort startup here
    let config = Config::load()?;

    tracing::info!(
        http_port = config.server.http_port,
        image_dir = %config.storage.image_dir,
        admin_api_key_header = %config.auth.admin_api_key_header,
        "Configuration loaded"
    );

    let pg_pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&config.database.url)
        .await?;
    tracing::info!(
        max_connections = 5,
        database = "postgresql",
        "Database connection pool created"
    );

    sqlx::migrate!("./migrations").run(&pg_pool).await?;
    tracing::info!(database = "postgresql", "Database migrations completed");

    let authenticator = Arc::new(Authenticator::new(config.auth.jwt_secret.as_bytes()));
    let admin_gate = Arc::new(AdminGate {
        api_key: ApiKey::new(config.auth.admin_api_key.clone()),
        header_name: config.auth.admin_api_key_header.clone(),
    });

    let user_repository = Arc::new(PostgresUserRepository::new(pg_pool.clone()));
    let item_repository = Arc::new(PostgresItemRepository::new(pg_pool.clone()));
    let order_repository = Arc::new(PostgresOrderRepository::new(pg_pool));
    let image_store = Arc::new(FsImageStore::new(&config.storage.image_dir));

    let user_service = Arc::new(UserService::new(Arc::clone(&user_repository)));
    let item_service = Arc::new(ItemService::new(
        Arc::clone(&item_repository),
        Arc::clone(&user_repository),
        image_store,
    ));
    let order_service = Arc::new(OrderService::new(
        order_repository,
        item_repository,
        user_repository,
    ));

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    let application = create_router(
        user_service,
        item_service,
        order_service,
        authenticator,
        admin_gate,
        config.auth.jwt_expiration_hours,
    );

    axum::serve(http_listener, application).await?;

    Ok(())
}
