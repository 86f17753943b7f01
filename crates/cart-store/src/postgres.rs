use async_trait::async_trait;
use chrono::{DateTime, Utc};
use common::CartId;
use sqlx::{PgPool, Row, postgres::PgRow};

use crate::{CartSnapshot, Result, store::CartStore};

/// PostgreSQL-backed cart store implementation.
///
/// Snapshots live in the `cart_snapshots` table, one row per cart, with the
/// serialized cart as a JSONB column. Saves are upserts keyed on the cart ID.
#[derive(Clone)]
pub struct PostgresCartStore {
    pool: PgPool,
}

impl PostgresCartStore {
    /// Creates a new PostgreSQL cart store.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Gets a reference to the underlying connection pool.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Runs the database migrations.
    pub async fn run_migrations(&self) -> std::result::Result<(), sqlx::migrate::MigrateError> {
        sqlx::migrate!("../../migrations").run(&self.pool).await
    }

    fn row_to_snapshot(row: PgRow) -> Result<CartSnapshot> {
        Ok(CartSnapshot {
            cart_id: CartId::new(row.try_get::<String, _>("cart_id")?),
            timestamp: row.try_get::<DateTime<Utc>, _>("updated_at")?,
            state: row.try_get("state")?,
        })
    }
}

#[async_trait]
impl CartStore for PostgresCartStore {
    async fn load(&self, cart_id: &CartId) -> Result<Option<CartSnapshot>> {
        let row: Option<PgRow> = sqlx::query(
            r#"
            SELECT cart_id, updated_at, state
            FROM cart_snapshots
            WHERE cart_id = $1
            "#,
        )
        .bind(cart_id.as_str())
        .fetch_optional(&self.pool)
        .await?;

        row.map(Self::row_to_snapshot).transpose()
    }

    async fn save(&self, snapshot: CartSnapshot) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO cart_snapshots (cart_id, updated_at, state)
            VALUES ($1, $2, $3)
            ON CONFLICT (cart_id) DO UPDATE SET
                updated_at = EXCLUDED.updated_at,
                state = EXCLUDED.state
            "#,
        )
        .bind(snapshot.cart_id.as_str())
        .bind(snapshot.timestamp)
        .bind(&snapshot.state)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
