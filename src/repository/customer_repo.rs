use sqlx::{PgPool, Postgres, Transaction};

#[derive(Clone)]
pub struct CustomerRepository {
    pool: PgPool,
}

impl CustomerRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Inserts a customer row and returns its generated id. Every booking
    /// creates a fresh row; there is deliberately no lookup by name.
    pub async fn create(
        &self,
        name: &str,
        tx: Option<&mut Transaction<'_, Postgres>>,
    ) -> Result<i64, sqlx::Error> {
        let query = sqlx::query_scalar::<_, i64>(
            "INSERT INTO customers (name) VALUES ($1) RETURNING id",
        )
        .bind(name);

        if let Some(t) = tx {
            query.fetch_one(&mut **t).await
        } else {
            query.fetch_one(&self.pool).await
        }
    }
}
