//! Cart Store
//!
//! Owns the cart snapshot for one view. The snapshot is only ever replaced
//! with a cart the vendor returned; a failed action leaves it untouched.

use storefront::{carts::Cart, quantity::Quantity};
use tracing::error;

use crate::{
    domain::carts::{CartsService, CartsServiceError},
    notifications::{Notice, Notifier},
};

/// A cart operation requested by the user.
///
/// Titles are carried along so notices can name the product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartAction {
    /// Fetch the current cart.
    Load,

    /// Add units of a product.
    Add {
        /// Product identifier
        product_id: String,

        /// Product title, for notices
        title: String,

        /// Units to add
        qty: Quantity,
    },

    /// Set a line's quantity; zero removes the line.
    UpdateQuantity {
        /// Cart line identifier
        item_id: String,

        /// Product on that line
        product_id: String,

        /// Product title, for notices
        title: String,

        /// New quantity
        qty: u32,
    },

    /// Remove one line.
    Remove {
        /// Cart line identifier
        item_id: String,

        /// Product title, for notices
        title: String,
    },

    /// Remove every line.
    Clear,
}

impl CartAction {
    /// Run the action against the carts service, returning the refreshed cart.
    ///
    /// # Errors
    ///
    /// Returns the service error unchanged.
    pub async fn dispatch(&self, carts: &dyn CartsService) -> Result<Cart, CartsServiceError> {
        match self {
            Self::Load => carts.get_cart().await,
            Self::Add {
                product_id, qty, ..
            } => carts.add_item(product_id, *qty).await,
            Self::UpdateQuantity {
                item_id,
                product_id,
                qty,
                ..
            } => carts.update_item_quantity(item_id, product_id, *qty).await,
            Self::Remove { item_id, .. } => carts.remove_item(item_id).await,
            Self::Clear => carts.clear_cart().await,
        }
    }

    /// The notice for a successful action. Loading is silent.
    pub fn succeeded(&self) -> Option<Notice> {
        let message = match self {
            Self::Load => return None,
            Self::Add { title, .. } => format!("Added {title} to the cart."),
            Self::UpdateQuantity { title, qty: 0, .. } | Self::Remove { title, .. } => {
                format!("Removed {title} from the cart.")
            }
            Self::UpdateQuantity { title, .. } => format!("Updated the quantity of {title}."),
            Self::Clear => "Cleared the cart.".to_string(),
        };

        Some(Notice::success(message))
    }

    /// Log the failure and build the notice for it.
    pub fn failed(&self, error: &CartsServiceError) -> Notice {
        error!("cart action {self:?} failed: {error}");

        // The write went through but the cart could not be reloaded.
        if matches!(error, CartsServiceError::Fetch(_)) {
            return Notice::failure("Could not load the cart.");
        }

        let message = match self {
            Self::Load => "Could not load the cart.".to_string(),
            Self::Add { title, .. } => format!("Could not add {title} to the cart."),
            Self::UpdateQuantity { title, qty: 0, .. } | Self::Remove { title, .. } => {
                format!("Could not remove {title} from the cart.")
            }
            Self::UpdateQuantity { title, .. } => {
                format!("Could not update the quantity of {title}.")
            }
            Self::Clear => "Could not clear the cart.".to_string(),
        };

        Notice::failure(message)
    }
}

/// Cart snapshot for one view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CartStore {
    snapshot: Option<Cart>,
}

impl CartStore {
    /// A store that has not loaded a cart yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// The last cart the vendor returned.
    pub fn cart(&self) -> Option<&Cart> {
        self.snapshot.as_ref()
    }

    /// Whether a cart has been loaded.
    pub fn is_loaded(&self) -> bool {
        self.snapshot.is_some()
    }

    /// Whether there is nothing to check out. An unloaded cart counts as empty.
    pub fn is_empty(&self) -> bool {
        self.snapshot.as_ref().is_none_or(Cart::is_empty)
    }

    /// Number of lines in the snapshot.
    pub fn line_count(&self) -> usize {
        self.snapshot.as_ref().map_or(0, Cart::line_count)
    }

    /// Replace the snapshot with a cart the vendor returned.
    pub fn accept(&mut self, action: &CartAction, cart: Cart) -> Option<Notice> {
        self.snapshot = Some(cart);

        action.succeeded()
    }

    /// Fold an action's outcome into the store, returning the notice to show.
    pub fn apply(
        &mut self,
        action: &CartAction,
        outcome: Result<Cart, CartsServiceError>,
    ) -> Option<Notice> {
        match outcome {
            Ok(cart) => self.accept(action, cart),
            Err(error) => Some(action.failed(&error)),
        }
    }

    /// Dispatch an action, update the snapshot and notify the user.
    ///
    /// # Errors
    ///
    /// Returns the service error after the failure notice has been shown.
    pub async fn run(
        &mut self,
        carts: &dyn CartsService,
        notifier: &dyn Notifier,
        action: CartAction,
    ) -> Result<(), CartsServiceError> {
        match action.dispatch(carts).await {
            Ok(cart) => {
                if let Some(notice) = self.accept(&action, cart) {
                    notifier.notify(&notice);
                }

                Ok(())
            }
            Err(error) => {
                notifier.notify(&action.failed(&error));

                Err(error)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use storefront::money::format_price;
    use testresult::TestResult;

    use crate::{
        domain::carts::MockCartsService,
        notifications::NoticeLevel,
        test::{RecordingNotifier, cart, line},
        vendor::{VendorError, VendorMessage},
    };

    use super::*;

    fn rejected() -> VendorError {
        VendorError::Rejected {
            status: 400,
            message: VendorMessage::Text("bad request".to_string()),
        }
    }

    fn add(
        product_id: &str,
        title: &str,
        qty: u32,
    ) -> Result<CartAction, storefront::quantity::QuantityError> {
        Ok(CartAction::Add {
            product_id: product_id.to_string(),
            title: title.to_string(),
            qty: Quantity::new(qty)?,
        })
    }

    #[tokio::test]
    async fn added_item_shows_server_quantity_and_total() -> TestResult {
        let mut carts = MockCartsService::new();

        carts
            .expect_add_item()
            .once()
            .withf(|product_id, qty| product_id == "p1" && qty.get() == 3)
            .return_once(|_, _| Ok(cart(vec![line("c1", "p1", 3, 300)], 300)));

        let notifier = RecordingNotifier::default();
        let mut store = CartStore::new();

        store
            .run(&carts, &notifier, add("p1", "Notebook", 3)?)
            .await?;

        let snapshot = store.cart().ok_or("cart not loaded")?;
        let item = snapshot.item("c1").ok_or("missing line c1")?;

        assert_eq!(item.qty, 3);
        assert_eq!(item.product_ref(), "p1");
        assert_eq!(format_price(snapshot.total), "$300");
        assert_eq!(notifier.messages(), vec!["Added Notebook to the cart."]);

        Ok(())
    }

    #[tokio::test]
    async fn failed_action_keeps_previous_snapshot() -> TestResult {
        let mut carts = MockCartsService::new();

        carts
            .expect_get_cart()
            .once()
            .return_once(|| Ok(cart(vec![line("c1", "p1", 2, 200)], 200)));

        carts
            .expect_add_item()
            .once()
            .return_once(|_, _| Err(CartsServiceError::Mutation(rejected())));

        let notifier = RecordingNotifier::default();
        let mut store = CartStore::new();

        store.run(&carts, &notifier, CartAction::Load).await?;

        let before = store.clone();

        let result = store
            .run(&carts, &notifier, add("p2", "Brass Pen", 1)?)
            .await;

        assert!(result.is_err(), "expected the add to fail");
        assert_eq!(store, before);

        let notices = notifier.notices();

        assert_eq!(notices.len(), 1, "load should be silent");
        assert_eq!(notices.first().map(|notice| notice.level), Some(NoticeLevel::Failure));
        assert_eq!(notifier.messages(), vec!["Could not add Brass Pen to the cart."]);

        Ok(())
    }

    #[tokio::test]
    async fn failed_load_is_reported() {
        let mut carts = MockCartsService::new();

        carts
            .expect_get_cart()
            .once()
            .return_once(|| Err(CartsServiceError::Fetch(rejected())));

        let notifier = RecordingNotifier::default();
        let mut store = CartStore::new();

        let result = store.run(&carts, &notifier, CartAction::Load).await;

        assert!(result.is_err(), "expected the load to fail");
        assert!(!store.is_loaded());
        assert_eq!(notifier.messages(), vec!["Could not load the cart."]);
    }

    #[test]
    fn zero_quantity_update_reads_as_removal() {
        let action = CartAction::UpdateQuantity {
            item_id: "c1".to_string(),
            product_id: "p1".to_string(),
            title: "Notebook".to_string(),
            qty: 0,
        };

        assert_eq!(
            action.succeeded().map(|notice| notice.message),
            Some("Removed Notebook from the cart.".to_string())
        );
        assert_eq!(
            action
                .failed(&CartsServiceError::Mutation(rejected()))
                .message,
            "Could not remove Notebook from the cart."
        );
    }

    #[test]
    fn refetch_failure_after_write_reports_load_failure() {
        let action = CartAction::Clear;
        let notice = action.failed(&CartsServiceError::Fetch(rejected()));

        assert!(notice.is_failure());
        assert_eq!(notice.message, "Could not load the cart.");
    }

    #[test]
    fn apply_replaces_snapshot_on_success_only() {
        let mut store = CartStore::new();

        let notice = store.apply(&CartAction::Clear, Ok(cart(Vec::new(), 0)));

        assert_eq!(notice, Some(Notice::success("Cleared the cart.")));
        assert!(store.is_loaded());
        assert!(store.is_empty());

        let notice = store.apply(
            &CartAction::Load,
            Err(CartsServiceError::Fetch(rejected())),
        );

        assert!(notice.is_some_and(|notice| notice.is_failure()));
        assert_eq!(store.cart().map(|cart| cart.total), Some(Decimal::ZERO));
    }

    #[test]
    fn unloaded_store_counts_as_empty() {
        let store = CartStore::new();

        assert!(store.is_empty());
        assert_eq!(store.line_count(), 0);
    }
}
