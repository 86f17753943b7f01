//! Line-items: one product entry in the cart with its desired quantity.

use common::{Money, ProductId};
use serde::{Deserialize, Serialize};

use crate::services::ProductInfo;

/// One product entry in a cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// The product identifier.
    pub product_id: ProductId,

    /// Human-readable product title.
    pub title: String,

    /// URL of the product image.
    pub image_url: String,

    /// Price per unit in cents.
    pub unit_price: Money,

    /// Desired quantity. Always >= 1 for a stored item.
    pub quantity: u32,
}

impl LineItem {
    /// Creates a new line-item.
    pub fn new(
        product_id: impl Into<ProductId>,
        title: impl Into<String>,
        image_url: impl Into<String>,
        unit_price: Money,
        quantity: u32,
    ) -> Self {
        Self {
            product_id: product_id.into(),
            title: title.into(),
            image_url: image_url.into(),
            unit_price,
            quantity,
        }
    }

    /// Creates a line-item from catalog product metadata.
    pub fn from_product(product: ProductInfo, quantity: u32) -> Self {
        Self {
            product_id: product.product_id,
            title: product.title,
            image_url: product.image_url,
            unit_price: product.unit_price,
            quantity,
        }
    }

    /// Returns the total price for this item (quantity * unit_price).
    pub fn total_price(&self) -> Money {
        self.unit_price.multiply(self.quantity)
    }
}
