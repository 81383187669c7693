use crate::models::{NewRental, RentalView};
use sqlx::{PgPool, Postgres, Transaction};

#[derive(Clone)]
pub struct RentalRepository {
    pool: PgPool,
}

impl RentalRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Denormalized listing across rentals, customers and cars, newest
    /// booking first.
    pub async fn list(&self) -> Result<Vec<RentalView>, sqlx::Error> {
        sqlx::query_as::<_, RentalView>(
            "SELECT r.id, \
                    c.name AS customer_name, \
                    r.car_name, \
                    r.car_price, \
                    r.start_date, \
                    r.end_date, \
                    r.days, \
                    r.driver, \
                    r.total, \
                    r.created_at \
             FROM rentals r \
             JOIN customers c ON r.customer_id = c.id \
             ORDER BY r.created_at DESC",
        )
        .fetch_all(&self.pool)
        .await
    }

    pub async fn create(
        &self,
        rental: &NewRental,
        tx: Option<&mut Transaction<'_, Postgres>>,
    ) -> Result<i64, sqlx::Error> {
        let query = sqlx::query_scalar::<_, i64>(
            "INSERT INTO rentals \
             (customer_id, car_id, car_name, car_price, start_date, end_date, days, driver, total) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9) \
             RETURNING id",
        )
        .bind(rental.customer_id)
        .bind(rental.car_id)
        .bind(&rental.car_name)
        .bind(rental.car_price)
        .bind(rental.start_date)
        .bind(rental.end_date)
        .bind(rental.days)
        .bind(rental.driver)
        .bind(rental.total);

        if let Some(t) = tx {
            query.fetch_one(&mut **t).await
        } else {
            query.fetch_one(&self.pool).await
        }
    }

    pub async fn delete_by_id(&self, id: i64) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM rentals WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    /// Unconditional wipe of the rentals table. Customers and cars are
    /// left untouched. Callers must gate this behind explicit
    /// confirmation.
    pub async fn delete_all(&self) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM rentals").execute(&self.pool).await?;
        Ok(result.rows_affected())
    }
}
