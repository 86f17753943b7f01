//! PostgreSQL integration tests
//!
//! These tests use a shared PostgreSQL container for efficiency.
//! Run with:
//!
//! ```bash
//! cargo test -p cart-store --test postgres_integration -- --test-threads=1
//! ```

use std::sync::Arc;

use cart_store::{CartId, CartSnapshot, CartStore, CartStoreExt, PostgresCartStore};
use sqlx::PgPool;
use testcontainers::{ContainerAsync, runners::AsyncRunner};
use testcontainers_modules::postgres::Postgres;
use tokio::sync::OnceCell;

/// Shared container info - container stays alive for all tests
struct ContainerInfo {
    #[allow(dead_code)] // Container must stay alive for tests
    container: ContainerAsync<Postgres>,
    connection_string: String,
}

/// Global shared container
static CONTAINER: OnceCell<Arc<ContainerInfo>> = OnceCell::const_new();

async fn get_container_info() -> Arc<ContainerInfo> {
    CONTAINER
        .get_or_init(|| async {
            let container = Postgres::default().start().await.unwrap();

            let host = container.get_host().await.unwrap();
            let port = container.get_host_port_ipv4(5432).await.unwrap();

            let connection_string =
                format!("postgres://postgres:postgres@{}:{}/postgres", host, port);

            // Create a temporary pool just for migrations
            let temp_pool = PgPool::connect(&connection_string).await.unwrap();

            sqlx::raw_sql(include_str!(
                "../../../migrations/001_create_cart_snapshots.sql"
            ))
            .execute(&temp_pool)
            .await
            .unwrap();

            temp_pool.close().await;

            Arc::new(ContainerInfo {
                container,
                connection_string,
            })
        })
        .await
        .clone()
}

/// Get a fresh store with its own pool and cleared tables
async fn get_test_store() -> PostgresCartStore {
    let info = get_container_info().await;

    // Create a fresh pool for each test to avoid connection issues
    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(5)
        .connect(&info.connection_string)
        .await
        .unwrap();

    // Clear tables for test isolation
    sqlx::query("TRUNCATE TABLE cart_snapshots")
        .execute(&pool)
        .await
        .unwrap();

    PostgresCartStore::new(pool)
}

fn create_snapshot(cart_id: &str, state: serde_json::Value) -> CartSnapshot {
    CartSnapshot::new(CartId::new(cart_id), state)
}

#[tokio::test]
async fn save_and_load_snapshot() {
    let store = get_test_store().await;
    let cart_id = CartId::new("cart:session-1");

    let state = serde_json::json!({
        "items": [{"product_id": 1, "title": "Widget", "quantity": 2}]
    });
    store
        .save(create_snapshot("cart:session-1", state.clone()))
        .await
        .unwrap();

    let loaded = store.load(&cart_id).await.unwrap().unwrap();
    assert_eq!(loaded.cart_id, cart_id);
    assert_eq!(loaded.state, state);
}

#[tokio::test]
async fn load_missing_cart_returns_none() {
    let store = get_test_store().await;

    let loaded = store.load(&CartId::new("cart:missing")).await.unwrap();
    assert!(loaded.is_none());
    assert!(!store.exists(&CartId::new("cart:missing")).await.unwrap());
}

#[tokio::test]
async fn save_overwrites_previous_snapshot() {
    let store = get_test_store().await;
    let cart_id = CartId::new("cart:session-1");

    store
        .save(create_snapshot("cart:session-1", serde_json::json!([1])))
        .await
        .unwrap();
    store
        .save(create_snapshot("cart:session-1", serde_json::json!([1, 2])))
        .await
        .unwrap();

    let loaded = store.load(&cart_id).await.unwrap().unwrap();
    assert_eq!(loaded.state, serde_json::json!([1, 2]));

    // Only one row survives for the cart
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM cart_snapshots")
        .fetch_one(store.pool())
        .await
        .unwrap();
    assert_eq!(count, 1);
}

#[tokio::test]
async fn snapshots_are_keyed_by_cart_id() {
    let store = get_test_store().await;

    store
        .save(create_snapshot("cart:a", serde_json::json!(["a"])))
        .await
        .unwrap();
    store
        .save(create_snapshot("cart:b", serde_json::json!(["b"])))
        .await
        .unwrap();

    let a = store.load(&CartId::new("cart:a")).await.unwrap().unwrap();
    let b = store.load(&CartId::new("cart:b")).await.unwrap().unwrap();
    assert_eq!(a.state, serde_json::json!(["a"]));
    assert_eq!(b.state, serde_json::json!(["b"]));
}
