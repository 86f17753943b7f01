//! Durable storage for cart snapshots.
//!
//! The store is a keyed blob sink: the reconciler serializes its whole cart
//! into a [`CartSnapshot`] and saves it under a [`CartId`]; loading returns
//! the last committed snapshot, if any. Two implementations are provided:
//! an in-memory store for tests and a PostgreSQL-backed store.

pub mod error;
pub mod memory;
pub mod postgres;
pub mod snapshot;
pub mod store;

pub use common::CartId;
pub use error::{CartStoreError, Result};
pub use memory::InMemoryCartStore;
pub use postgres::PostgresCartStore;
pub use snapshot::CartSnapshot;
pub use store::{CartStore, CartStoreExt};
