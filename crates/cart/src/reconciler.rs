//! The cart reconciler: validates every cart mutation against inventory
//! before committing it to memory and to the durable store.

use cart_store::{CartId, CartSnapshot, CartStore};
use common::ProductId;
use tokio::sync::Mutex;

use crate::cart::Cart;
use crate::error::{CartError, Result};
use crate::item::LineItem;
use crate::services::{CatalogService, InventoryService, NotificationSink};

/// Stateful owner of one cart, synchronized with a durable store.
///
/// All three mutating operations are atomic with respect to the in-memory
/// cart: the cart lock is held across the whole read-validate-persist-commit
/// sequence, so no operation ever observes a half-updated collection and no
/// two mutations can interleave their stock checks.
///
/// The updated collection is persisted before it replaces the in-memory one.
/// A failed save therefore rolls back by never committing: the in-memory
/// cart and the stored snapshot stay equal to their pre-operation state.
pub struct CartReconciler<S, I, C, N>
where
    S: CartStore,
    I: InventoryService,
    C: CatalogService,
    N: NotificationSink,
{
    store: S,
    inventory: I,
    catalog: C,
    notifier: N,
    cart_id: CartId,
    cart: Mutex<Cart>,
}

impl<S, I, C, N> CartReconciler<S, I, C, N>
where
    S: CartStore,
    I: InventoryService,
    C: CatalogService,
    N: NotificationSink,
{
    /// Opens the cart stored under `cart_id`, starting empty if no snapshot
    /// has ever been committed for it.
    #[tracing::instrument(skip(store, inventory, catalog, notifier))]
    pub async fn open(
        cart_id: CartId,
        store: S,
        inventory: I,
        catalog: C,
        notifier: N,
    ) -> Result<Self> {
        let cart = match store.load(&cart_id).await? {
            Some(snapshot) => snapshot.into_state()?,
            None => Cart::new(),
        };

        tracing::info!(item_count = cart.item_count(), "cart opened");

        Ok(Self {
            store,
            inventory,
            catalog,
            notifier,
            cart_id,
            cart: Mutex::new(cart),
        })
    }

    /// Returns a copy of the current cart.
    pub async fn cart(&self) -> Cart {
        self.cart.lock().await.clone()
    }

    /// Returns the current line-items in insertion order.
    pub async fn items(&self) -> Vec<LineItem> {
        self.cart.lock().await.items().to_vec()
    }

    /// Adds one unit of a product to the cart.
    ///
    /// Queries the inventory for available stock; the desired quantity is
    /// the current cart quantity plus one. On the first addition of a
    /// product, its metadata is fetched from the catalog and a new line-item
    /// is appended; otherwise the existing item's quantity is replaced.
    #[tracing::instrument(skip(self))]
    pub async fn add(&self, product_id: ProductId) -> Result<()> {
        metrics::counter!("cart_operations_total", "op" => "add").increment(1);

        let mut cart = self.cart.lock().await;
        match self.try_add(&cart, product_id).await {
            Ok(updated) => {
                *cart = updated;
                Ok(())
            }
            Err(e) => Err(self.report(e)),
        }
    }

    /// Removes a product from the cart.
    ///
    /// Fails with [`CartError::NotInCart`] if the product is absent; the
    /// relative order of the remaining items is preserved.
    #[tracing::instrument(skip(self))]
    pub async fn remove(&self, product_id: ProductId) -> Result<()> {
        metrics::counter!("cart_operations_total", "op" => "remove").increment(1);

        let mut cart = self.cart.lock().await;
        match self.try_remove(&cart, product_id).await {
            Ok(updated) => {
                *cart = updated;
                Ok(())
            }
            Err(e) => Err(self.report(e)),
        }
    }

    /// Sets the absolute quantity for a product in the cart.
    ///
    /// A non-positive `amount` is a silent no-op: no error, no notification,
    /// no inventory read, no persistence. Otherwise the requested quantity
    /// is validated against available stock. A product absent from the cart
    /// is silently dropped after the stock check instead of failing like
    /// `remove`; DESIGN.md documents this asymmetry.
    #[tracing::instrument(skip(self))]
    pub async fn set_quantity(&self, product_id: ProductId, amount: i64) -> Result<()> {
        // Guard against accidental zero/negative requests from the caller;
        // deliberately not a user-facing failure.
        if amount <= 0 {
            return Ok(());
        }
        metrics::counter!("cart_operations_total", "op" => "set_quantity").increment(1);
        let requested = u32::try_from(amount).unwrap_or(u32::MAX);

        let mut cart = self.cart.lock().await;
        match self.try_set_quantity(&cart, product_id, requested).await {
            Ok(Some(updated)) => {
                *cart = updated;
                Ok(())
            }
            Ok(None) => Ok(()),
            Err(e) => Err(self.report(e)),
        }
    }

    async fn try_add(&self, cart: &Cart, product_id: ProductId) -> Result<Cart> {
        let current = cart.quantity_of(product_id);
        let stock = self.inventory.stock(product_id).await?;

        let desired = current.saturating_add(1);
        if desired > stock.available {
            return Err(CartError::OutOfStock {
                product_id,
                requested: desired,
                available: stock.available,
            });
        }

        let mut updated = cart.clone();
        if current > 0 {
            updated.set_quantity(product_id, desired);
        } else {
            let product = self.catalog.product(product_id).await?;
            updated.push(LineItem::from_product(product, 1));
        }

        self.persist(&updated).await?;
        tracing::info!(%product_id, quantity = desired, "item added");
        Ok(updated)
    }

    async fn try_remove(&self, cart: &Cart, product_id: ProductId) -> Result<Cart> {
        if !cart.contains(product_id) {
            return Err(CartError::NotInCart(product_id));
        }

        let mut updated = cart.clone();
        updated.remove(product_id);

        self.persist(&updated).await?;
        tracing::info!(%product_id, "item removed");
        Ok(updated)
    }

    /// Returns `Ok(None)` when nothing changed and no persistence is needed.
    async fn try_set_quantity(
        &self,
        cart: &Cart,
        product_id: ProductId,
        requested: u32,
    ) -> Result<Option<Cart>> {
        let stock = self.inventory.stock(product_id).await?;

        if requested > stock.available {
            return Err(CartError::OutOfStock {
                product_id,
                requested,
                available: stock.available,
            });
        }

        let mut updated = cart.clone();
        if !updated.set_quantity(product_id, requested) {
            // Absent product or unchanged quantity
            return Ok(None);
        }

        self.persist(&updated).await?;
        tracing::info!(%product_id, quantity = requested, "quantity updated");
        Ok(Some(updated))
    }

    async fn persist(&self, cart: &Cart) -> Result<()> {
        let snapshot = CartSnapshot::from_state(self.cart_id.clone(), cart)?;
        self.store.save(snapshot).await?;
        Ok(())
    }

    /// Routes the per-kind user message to the notification sink and hands
    /// the typed error back for the caller's `Result`.
    fn report(&self, error: CartError) -> CartError {
        metrics::counter!("cart_operation_failures_total", "kind" => error.kind()).increment(1);
        tracing::warn!(error = %error, kind = error.kind(), "cart operation failed");
        self.notifier.notify_error(error.user_message());
        error
    }
}
