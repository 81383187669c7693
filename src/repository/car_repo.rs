use crate::models::{Car, CarUpdate, NewCar};
use sqlx::{PgPool, Postgres, Transaction};

#[derive(Clone)]
pub struct CarRepository {
    pool: PgPool,
}

impl CarRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<Car>, sqlx::Error> {
        sqlx::query_as::<_, Car>(
            "SELECT id, name, descrp, priceday, discount, img FROM cars ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await
    }

    pub async fn find_by_id(
        &self,
        id: i64,
        tx: Option<&mut Transaction<'_, Postgres>>,
    ) -> Result<Option<Car>, sqlx::Error> {
        let query = sqlx::query_as::<_, Car>(
            "SELECT id, name, descrp, priceday, discount, img FROM cars WHERE id = $1",
        )
        .bind(id);

        if let Some(t) = tx {
            query.fetch_optional(&mut **t).await
        } else {
            query.fetch_optional(&self.pool).await
        }
    }

    pub async fn create(&self, car: &NewCar, img: &str) -> Result<Car, sqlx::Error> {
        sqlx::query_as::<_, Car>(
            "INSERT INTO cars (name, descrp, priceday, discount, img) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING id, name, descrp, priceday, discount, img",
        )
        .bind(&car.name)
        .bind(&car.descrp)
        .bind(car.priceday)
        .bind(car.discount)
        .bind(img)
        .fetch_one(&self.pool)
        .await
    }

    pub async fn update(&self, id: i64, car: &CarUpdate) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE cars SET name = $1, descrp = $2, priceday = $3, discount = $4, img = $5 \
             WHERE id = $6",
        )
        .bind(&car.name)
        .bind(&car.descrp)
        .bind(car.priceday)
        .bind(car.discount)
        .bind(&car.img)
        .bind(id)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected())
    }

    pub async fn delete(&self, id: i64) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM cars WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}
