use anyhow::Context;
use rental_api::config::Config;
use rental_api::constants::API_NAME;
use rental_api::repository::{CarRepository, CustomerRepository, RentalRepository};
use rental_api::service::{CarCatalogService, ImageStore, RentalBookingService};
use rental_api::AppState;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize configuration
    let config = Config::from_env()?;

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_level.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("{} Starting rental API server on port {}", API_NAME, config.server_port);

    // Create database connection pool
    let pool = PgPoolOptions::new()
        .max_connections(10)
        .connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;

    tracing::info!("{} Connected to database", API_NAME);

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to run database migrations")?;

    tokio::fs::create_dir_all(&config.images_dir)
        .await
        .with_context(|| format!("Failed to create images directory {}", config.images_dir))?;

    // Initialize repositories and services
    let images = ImageStore::new(&config.images_dir);
    let cars = CarCatalogService::new(
        CarRepository::new(pool.clone()),
        images,
        config.public_base_url.clone(),
    );
    let rentals = RentalBookingService::new(
        pool.clone(),
        CarRepository::new(pool.clone()),
        CustomerRepository::new(pool.clone()),
        RentalRepository::new(pool),
        config.total_validation,
    );

    // Build application router
    let app = rental_api::app(AppState { cars, rentals });

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    tracing::info!("{} Server listening on {}", API_NAME, addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
