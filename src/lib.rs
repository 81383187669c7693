pub mod config;
pub mod constants;
pub mod error;
pub mod handlers;
pub mod models;
pub mod repository;
pub mod service;

use axum::{routing::get, Router};
use tower_http::{cors::CorsLayer, services::ServeDir};

use crate::service::{CarCatalogService, RentalBookingService};

#[derive(Clone)]
pub struct AppState {
    pub cars: CarCatalogService,
    pub rentals: RentalBookingService,
}

/// Builds the application router: REST routes, permissive CORS and static
/// serving of the uploaded images directory.
pub fn app(state: AppState) -> Router {
    let images = ServeDir::new(state.cars.images().dir());

    Router::new()
        .route("/", get(handlers::health::root))
        .merge(handlers::health::router())
        .nest("/cars", handlers::cars::router())
        .nest("/rentals", handlers::rentals::router())
        .nest_service(constants::IMAGES_PATH, images)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
