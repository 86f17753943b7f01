//! Shared value types used across the cart reconciler crates.

pub mod types;

pub use types::{CartId, Money, ProductId};
