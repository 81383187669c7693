use anyhow::Context;
use sqlx::PgPool;
use thiserror::Error;

use crate::config::TotalValidation;
use crate::constants::API_NAME;
use crate::models::{NewRental, RentalCreate, RentalView};
use crate::repository::{CarNotFoundError, CarRepository, CustomerRepository, RentalRepository};

/// Raised in strict mode when the client's total undercuts the car's
/// price for the booked day count.
#[derive(Debug, Error)]
#[error("total {total} is below the minimum {floor} for this booking")]
pub struct TotalUnderpricedError {
    pub total: f64,
    pub floor: f64,
}

#[derive(Debug, Clone, Copy)]
pub struct BookingReceipt {
    pub customer_id: i64,
    pub rental_id: i64,
}

#[derive(Clone)]
pub struct RentalBookingService {
    pool: PgPool,
    cars: CarRepository,
    customers: CustomerRepository,
    rentals: RentalRepository,
    total_validation: TotalValidation,
}

impl RentalBookingService {
    pub fn new(
        pool: PgPool,
        cars: CarRepository,
        customers: CustomerRepository,
        rentals: RentalRepository,
        total_validation: TotalValidation,
    ) -> Self {
        Self {
            pool,
            cars,
            customers,
            rentals,
            total_validation,
        }
    }

    pub async fn list_rentals(&self) -> anyhow::Result<Vec<RentalView>> {
        self.rentals
            .list()
            .await
            .context("Failed to fetch rentals")
    }

    /// Books a rental as one transaction: look up the car, insert a fresh
    /// customer row, insert the rental with the car's name/price
    /// snapshotted. Rollback on any step leaves no orphan customer row.
    pub async fn create_rental(&self, req: RentalCreate) -> anyhow::Result<BookingReceipt> {
        let mut tx = self
            .pool
            .begin()
            .await
            .context("Failed to begin transaction")?;

        let car = self
            .cars
            .find_by_id(req.car_id, Some(&mut tx))
            .await
            .context("Failed to look up car")?
            .ok_or_else(|| anyhow::anyhow!(CarNotFoundError::new(req.car_id)))?;

        if self.total_validation == TotalValidation::Strict {
            let floor = total_floor(car.priceday, req.days);
            if req.total < floor {
                return Err(anyhow::anyhow!(TotalUnderpricedError {
                    total: req.total,
                    floor,
                }));
            }
        }

        let customer_id = self
            .customers
            .create(&req.name, Some(&mut tx))
            .await
            .context("Failed to create customer")?;

        let rental = NewRental {
            customer_id,
            car_id: req.car_id,
            car_name: car.name,
            car_price: car.priceday,
            start_date: req.start_date,
            end_date: req.end_date,
            days: req.days,
            driver: if req.driver { 1 } else { 0 },
            total: req.total,
        };

        let rental_id = self
            .rentals
            .create(&rental, Some(&mut tx))
            .await
            .context("Failed to create rental")?;

        tx.commit().await.context("Failed to commit transaction")?;

        tracing::info!(
            "{} Created rental {} for customer {} (car {})",
            API_NAME,
            rental_id,
            customer_id,
            req.car_id
        );

        Ok(BookingReceipt {
            customer_id,
            rental_id,
        })
    }

    pub async fn delete_rental(&self, id: i64) -> anyhow::Result<bool> {
        let rows = self
            .rentals
            .delete_by_id(id)
            .await
            .context("Failed to delete rental")?;
        Ok(rows > 0)
    }

    pub async fn delete_all_rentals(&self) -> anyhow::Result<u64> {
        let rows = self
            .rentals
            .delete_all()
            .await
            .context("Failed to delete all rentals")?;
        tracing::warn!("{} Wiped {} rental rows", API_NAME, rows);
        Ok(rows)
    }
}

// The driver surcharge is priced by the client, so the floor is only the
// car's day rate times the day count; totals above it pass.
fn total_floor(priceday: f64, days: i32) -> f64 {
    priceday * f64::from(days)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_floor_is_price_times_days() {
        assert_eq!(total_floor(40.0, 2), 80.0);
        assert_eq!(total_floor(19.5, 3), 58.5);
    }

    #[test]
    fn underpriced_error_reports_total_and_floor() {
        let err = TotalUnderpricedError {
            total: 70.0,
            floor: 80.0,
        };
        assert_eq!(err.to_string(), "total 70 is below the minimum 80 for this booking");
    }
}
