use axum::{
    extract::{Multipart, Path, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use serde_json::json;
use validator::Validate;

use crate::constants::API_NAME;
use crate::error::AppError;
use crate::models::{Car, CarUpdate, NewCar};
use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_cars).post(create_car))
        .route("/{id}", get(get_car).put(update_car).delete(delete_car))
}

async fn list_cars(State(state): State<AppState>) -> Result<Json<Vec<Car>>, AppError> {
    let cars = state.cars.list_cars().await?;
    Ok(Json(cars))
}

async fn get_car(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Car>, AppError> {
    let car = state
        .cars
        .get_car(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Car not found".to_string()))?;
    Ok(Json(car))
}

async fn create_car(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<Car>), AppError> {
    let mut name: Option<String> = None;
    let mut descrp: Option<String> = None;
    let mut priceday: Option<f64> = None;
    let mut discount: Option<f64> = None;
    let mut image: Option<(String, Vec<u8>)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(format!("Failed to parse multipart data: {}", e)))?
    {
        let field_name = field.name().unwrap_or("").to_string();

        match field_name.as_str() {
            "name" => name = Some(read_text_field(field, "name").await?),
            "descrp" => descrp = Some(read_text_field(field, "descrp").await?),
            "priceday" => {
                let raw = read_text_field(field, "priceday").await?;
                priceday = Some(parse_numeric_field("priceday", &raw)?);
            }
            "discount" => {
                let raw = read_text_field(field, "discount").await?;
                discount = Some(parse_numeric_field("discount", &raw)?);
            }
            "image" => {
                let filename = field
                    .file_name()
                    .map(|s| s.to_string())
                    .unwrap_or_else(|| "image".to_string());
                let bytes = field.bytes().await.map_err(|e| {
                    AppError::BadRequest(format!("Failed to read image file: {}", e))
                })?;
                image = Some((filename, bytes.to_vec()));
            }
            other => {
                tracing::debug!("{} Ignoring unknown multipart field: {}", API_NAME, other);
            }
        }
    }

    let (filename, bytes) = image
        .ok_or_else(|| AppError::BadRequest("image file is required".to_string()))?;

    let car = NewCar {
        name: name.unwrap_or_default(),
        descrp: descrp.unwrap_or_default(),
        priceday: priceday
            .ok_or_else(|| AppError::BadRequest("priceday is required".to_string()))?,
        discount: discount.unwrap_or(0.0),
    };
    car.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    tracing::info!("{} Received car upload: {}", API_NAME, car.name);

    let created = state.cars.create_car(car, &filename, &bytes).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

async fn update_car(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<CarUpdate>,
) -> Result<Json<serde_json::Value>, AppError> {
    payload
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let updated = state.cars.update_car(id, &payload).await?;
    if !updated {
        return Err(AppError::NotFound("Car not found".to_string()));
    }

    Ok(Json(json!({
        "success": true,
        "message": "Car updated successfully"
    })))
}

async fn delete_car(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<serde_json::Value>, AppError> {
    let deleted = state.cars.delete_car(id).await?;
    if !deleted {
        return Err(AppError::NotFound("Car not found".to_string()));
    }

    Ok(Json(json!({
        "success": true,
        "message": "Car deleted successfully"
    })))
}

async fn read_text_field(
    field: axum::extract::multipart::Field<'_>,
    name: &str,
) -> Result<String, AppError> {
    field
        .text()
        .await
        .map_err(|e| AppError::BadRequest(format!("Failed to read field {}: {}", name, e)))
}

fn parse_numeric_field(name: &str, raw: &str) -> Result<f64, AppError> {
    raw.trim()
        .parse()
        .map_err(|_| AppError::BadRequest(format!("{} must be a number, got {:?}", name, raw)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_fields_parse_with_surrounding_whitespace() {
        assert_eq!(parse_numeric_field("priceday", " 40.5 ").unwrap(), 40.5);
    }

    #[test]
    fn non_numeric_field_is_a_bad_request() {
        let err = parse_numeric_field("priceday", "cheap").unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }
}
