use std::str::FromStr;
use std::sync::Arc;

use auth::Authenticator;
use myflix_service::config::Config;
use myflix_service::domain::authentication::service::AuthService;
use myflix_service::domain::catalog::service::CatalogService;
use myflix_service::domain::user::service::UserService;
use myflix_service::inbound::http::router::create_router;
use myflix_service::outbound::repositories::PostgresCatalogRepository;
use myflix_service::outbound::repositories::PostgresUserRepository;
use sqlx::postgres::PgConnectOptions;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "myflix_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "myflix-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        http_port = config.server.http_port,
        max_connections = config.database.max_connections,
        token_lifetime_hours = config.jwt.expiration_hours,
        "Configuration loaded"
    );

    let connect_options = PgConnectOptions::from_str(&config.database.url)?.options([(
        "statement_timeout",
        config.database.statement_timeout_ms.to_string(),
    )]);

    let pg_pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .acquire_timeout(config.database.acquire_timeout())
        .connect_with(connect_options)
        .await?;
    tracing::info!(
        max_connections = config.database.max_connections,
        acquire_timeout_secs = config.database.acquire_timeout_secs,
        statement_timeout_ms = config.database.statement_timeout_ms,
        database = "postgresql",
        "Database connection pool created"
    );

    sqlx::migrate!("./migrations").run(&pg_pool).await?;
    tracing::info!(database = "postgresql", "Database migrations completed");

    let authenticator = Arc::new(Authenticator::new(config.authenticator_settings())?);
    let user_repository = Arc::new(PostgresUserRepository::new(pg_pool.clone()));
    let catalog_repository = Arc::new(PostgresCatalogRepository::new(pg_pool));

    let user_service = Arc::new(UserService::new(
        Arc::clone(&user_repository),
        Arc::clone(&catalog_repository),
        Arc::clone(&authenticator),
    ));
    let catalog_service = Arc::new(CatalogService::new(catalog_repository));
    let auth_service = Arc::new(AuthService::new(user_repository, authenticator));

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    let http_application = create_router(user_service, catalog_service, auth_service);
    axum::serve(http_listener, http_application).await?;

    tracing::info!("Server exited successfully");

    Ok(())
}
