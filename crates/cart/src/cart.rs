//! The cart collection: an ordered sequence of line-items, unique by product.

use common::{Money, ProductId};
use serde::{Deserialize, Serialize};

use crate::item::LineItem;

/// An ordered collection of line-items, unique by product ID.
///
/// Insertion order is preserved across all mutations: removing an item keeps
/// the relative order of the remainder, and quantity updates never reorder.
/// A quantity driven to zero removes the item; a stored quantity is never
/// zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<LineItem>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the items in insertion order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Returns the item for a product, if present.
    pub fn get(&self, product_id: ProductId) -> Option<&LineItem> {
        self.items.iter().find(|item| item.product_id == product_id)
    }

    /// Returns true if the cart holds an item for the product.
    pub fn contains(&self, product_id: ProductId) -> bool {
        self.get(product_id).is_some()
    }

    /// Returns the current quantity for a product (0 if absent).
    pub fn quantity_of(&self, product_id: ProductId) -> u32 {
        self.get(product_id).map_or(0, |item| item.quantity)
    }

    /// Returns the number of distinct products in the cart.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the cart holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the total quantity across all items.
    pub fn total_quantity(&self) -> u32 {
        self.items.iter().map(|item| item.quantity).sum()
    }

    /// Returns the total amount across all items.
    pub fn total_amount(&self) -> Money {
        self.items
            .iter()
            .fold(Money::zero(), |total, item| total + item.total_price())
    }

    /// Appends an item, keeping products unique.
    ///
    /// If the product is already present the existing item's quantity is
    /// replaced instead of appending a duplicate entry.
    pub fn push(&mut self, item: LineItem) {
        match self
            .items
            .iter_mut()
            .find(|existing| existing.product_id == item.product_id)
        {
            Some(existing) => existing.quantity = item.quantity,
            None => self.items.push(item),
        }
    }

    /// Sets the quantity for a product already in the cart.
    ///
    /// A quantity of 0 removes the item. Returns true if the cart changed;
    /// false if the product is absent or already at the requested quantity.
    pub fn set_quantity(&mut self, product_id: ProductId, quantity: u32) -> bool {
        if quantity == 0 {
            return self.remove(product_id).is_some();
        }

        match self
            .items
            .iter_mut()
            .find(|item| item.product_id == product_id)
        {
            Some(item) if item.quantity != quantity => {
                item.quantity = quantity;
                true
            }
            _ => false,
        }
    }

    /// Removes the item for a product, preserving the order of the rest.
    pub fn remove(&mut self, product_id: ProductId) -> Option<LineItem> {
        let position = self
            .items
            .iter()
            .position(|item| item.product_id == product_id)?;
        Some(self.items.remove(position))
    }
}
