use thiserror::Error;

/// Raised when a booking references a car id with no matching row.
#[derive(Debug, Error)]
#[error("Car not found: {car_id}")]
pub struct CarNotFoundError {
    pub car_id: i64,
}

impl CarNotFoundError {
    pub fn new(car_id: i64) -> Self {
        Self { car_id }
    }
}
