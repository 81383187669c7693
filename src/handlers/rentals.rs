use axum::{
    extract::{Path, Query, State},
    response::Json,
    routing::{delete, get},
    Router,
};
use serde::Deserialize;
use serde_json::json;
use validator::Validate;

use crate::constants::API_NAME;
use crate::error::AppError;
use crate::models::{RentalCreate, RentalView};
use crate::repository::CarNotFoundError;
use crate::service::TotalUnderpricedError;
use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_rentals).post(create_rental).delete(delete_all_rentals))
        .route("/{id}", delete(delete_rental))
}

async fn list_rentals(State(state): State<AppState>) -> Result<Json<Vec<RentalView>>, AppError> {
    let rentals = state.rentals.list_rentals().await?;
    Ok(Json(rentals))
}

async fn create_rental(
    State(state): State<AppState>,
    Json(req): Json<RentalCreate>,
) -> Result<Json<serde_json::Value>, AppError> {
    req.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    tracing::info!("{} Booking car {} for {}", API_NAME, req.car_id, req.name);

    let receipt = state
        .rentals
        .create_rental(req)
        .await
        .map_err(map_booking_error)?;

    Ok(Json(json!({
        "success": true,
        "customer_id": receipt.customer_id,
        "rental_id": receipt.rental_id,
        "message": "Rental created successfully"
    })))
}

async fn delete_rental(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<serde_json::Value>, AppError> {
    let deleted = state.rentals.delete_rental(id).await?;
    if !deleted {
        return Err(AppError::NotFound("Rental not found".to_string()));
    }

    Ok(Json(json!({
        "success": true,
        "message": "Rental deleted"
    })))
}

#[derive(Debug, Deserialize)]
struct WipeConfirmation {
    #[serde(default)]
    confirm: bool,
}

// The bulk wipe has no scoping, so it refuses to run unless the caller
// passes confirm=true.
async fn delete_all_rentals(
    State(state): State<AppState>,
    Query(params): Query<WipeConfirmation>,
) -> Result<Json<serde_json::Value>, AppError> {
    if !params.confirm {
        return Err(AppError::BadRequest(
            "Deleting all rentals requires confirm=true".to_string(),
        ));
    }

    state.rentals.delete_all_rentals().await?;

    Ok(Json(json!({
        "success": true,
        "message": "All rentals deleted"
    })))
}

fn map_booking_error(e: anyhow::Error) -> AppError {
    if e.downcast_ref::<CarNotFoundError>().is_some() {
        return AppError::NotFound("Car not found".to_string());
    }
    if let Some(underpriced) = e.downcast_ref::<TotalUnderpricedError>() {
        return AppError::Validation(underpriced.to_string());
    }
    AppError::Internal(e)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_car_maps_to_not_found() {
        let err = map_booking_error(anyhow::anyhow!(CarNotFoundError::new(7)));
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[test]
    fn underpriced_total_maps_to_validation() {
        let err = map_booking_error(anyhow::anyhow!(TotalUnderpricedError {
            total: 70.0,
            floor: 80.0,
        }));
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn other_failures_map_to_internal() {
        let err = map_booking_error(anyhow::anyhow!("connection reset"));
        assert!(matches!(err, AppError::Internal(_)));
    }
}
