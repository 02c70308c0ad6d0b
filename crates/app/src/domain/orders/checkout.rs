//! Checkout
//!
//! Drives the checkout form through `Idle -> Submitting -> Idle`. A form that
//! fails validation never leaves `Idle` and never reaches the vendor.

use storefront::checkout::{CheckoutForm, Field, Order, OrderReceipt, ValidationErrors};
use tracing::{debug, error};

use crate::{
    domain::{
        carts::{CartAction, CartStore, CartsService},
        orders::{CheckoutError, OrdersService, OrdersServiceError},
    },
    notifications::{Notice, Notifier},
};

/// Where the checkout is in its submission cycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CheckoutPhase {
    /// Accepting edits.
    #[default]
    Idle,

    /// An order is on its way to the vendor.
    Submitting,
}

/// Checkout form state for one view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Checkout {
    /// Values as entered
    pub form: CheckoutForm,

    phase: CheckoutPhase,
    errors: ValidationErrors,
}

impl Checkout {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> CheckoutPhase {
        self.phase
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == CheckoutPhase::Submitting
    }

    /// Issues from the last rejected attempt.
    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    /// The message to show under a field, if it failed validation.
    pub fn error_for(&self, field: Field) -> Option<String> {
        self.errors.get(field).map(ToString::to_string)
    }

    /// Whether the submit control should be enabled.
    pub fn can_submit(&self, cart: &CartStore) -> bool {
        !self.is_submitting() && !cart.is_empty()
    }

    /// Validate the form and enter `Submitting`.
    ///
    /// # Errors
    ///
    /// Fails without changing phase when a submission is in flight, the cart
    /// is empty, or any field fails validation.
    pub fn begin(&mut self, cart: &CartStore) -> Result<Order, CheckoutError> {
        if self.is_submitting() {
            return Err(CheckoutError::SubmissionInFlight);
        }

        if cart.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }

        match self.form.validate() {
            Ok(order) => {
                self.errors = ValidationErrors::default();
                self.phase = CheckoutPhase::Submitting;

                Ok(order)
            }
            Err(errors) => {
                debug!(count = errors.len(), "checkout form rejected");

                self.errors = errors.clone();

                Err(CheckoutError::Validation(errors))
            }
        }
    }

    /// Leave `Submitting`. The form resets on success and keeps its values
    /// on failure.
    pub fn finish(&mut self, outcome: &Result<OrderReceipt, OrdersServiceError>) -> Notice {
        self.phase = CheckoutPhase::Idle;

        match outcome {
            Ok(receipt) => {
                self.form.reset();

                match &receipt.order_id {
                    Some(order_id) => Notice::success(format!("Order placed (order {order_id}).")),
                    None => Notice::success("Order placed."),
                }
            }
            Err(submission_error) => {
                error!("order submission failed: {submission_error}");

                Notice::failure("Could not place the order.")
            }
        }
    }

    /// Validate, submit, reload the cart on success and notify the user.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError`] when the attempt was refused locally or the
    /// vendor rejected the order.
    pub async fn submit(
        &mut self,
        orders: &dyn OrdersService,
        carts: &dyn CartsService,
        cart: &mut CartStore,
        notifier: &dyn Notifier,
    ) -> Result<OrderReceipt, CheckoutError> {
        let order = self.begin(cart)?;

        let outcome = orders.submit_order(&order).await;

        if outcome.is_ok()
            && let Err(reload_error) = cart.run(carts, notifier, CartAction::Load).await
        {
            debug!("cart reload after order failed: {reload_error}");
        }

        notifier.notify(&self.finish(&outcome));

        outcome.map_err(CheckoutError::Submission)
    }
}

#[cfg(test)]
mod tests {
    use storefront::checkout::ValidationIssue;
    use testresult::TestResult;

    use crate::{
        domain::{carts::MockCartsService, orders::MockOrdersService},
        test::{RecordingNotifier, cart, line},
        vendor::{VendorError, VendorMessage},
    };

    use super::*;

    fn filled() -> Checkout {
        let mut checkout = Checkout::new();

        checkout.form.set(Field::Email, "buyer@example.com");
        checkout.form.set(Field::Name, "Lin");
        checkout.form.set(Field::Tel, "0212345678");
        checkout.form.set(Field::Address, "1 Harbour Road");
        checkout.form.set(Field::Message, "Leave at the door");

        checkout
    }

    fn stocked() -> CartStore {
        let mut store = CartStore::new();

        store.accept(&CartAction::Load, cart(vec![line("c1", "p1", 3, 300)], 300));

        store
    }

    #[tokio::test]
    async fn invalid_form_never_reaches_the_vendor() {
        let mut orders = MockOrdersService::new();
        let mut carts = MockCartsService::new();

        orders.expect_submit_order().never();
        carts.expect_get_cart().never();

        let mut checkout = filled();
        checkout.form.set(Field::Tel, "123");

        let notifier = RecordingNotifier::default();
        let mut store = stocked();

        let result = checkout.submit(&orders, &carts, &mut store, &notifier).await;

        assert!(
            matches!(&result, Err(CheckoutError::Validation(errors)) if errors.len() == 1),
            "expected one validation issue, got {result:?}"
        );
        assert_eq!(checkout.phase(), CheckoutPhase::Idle);
        assert_eq!(
            checkout.errors().get(Field::Tel),
            Some(&ValidationIssue::TelMalformed)
        );
        assert_eq!(
            checkout.error_for(Field::Tel).as_deref(),
            Some("The phone number is not valid.")
        );
        assert!(notifier.notices().is_empty());
    }

    #[tokio::test]
    async fn empty_cart_is_refused() {
        let mut orders = MockOrdersService::new();
        let carts = MockCartsService::new();

        orders.expect_submit_order().never();

        let mut checkout = filled();
        let mut store = CartStore::new();
        store.accept(&CartAction::Load, cart(Vec::new(), 0));

        assert!(!checkout.can_submit(&store));

        let result = checkout
            .submit(&orders, &carts, &mut store, &RecordingNotifier::default())
            .await;

        assert!(
            matches!(result, Err(CheckoutError::EmptyCart)),
            "expected EmptyCart, got {result:?}"
        );
    }

    #[test]
    fn second_begin_while_submitting_is_refused() -> TestResult {
        let mut checkout = filled();
        let store = stocked();

        checkout.begin(&store)?;

        assert!(checkout.is_submitting());
        assert!(!checkout.can_submit(&store));

        let result = checkout.begin(&store);

        assert!(
            matches!(result, Err(CheckoutError::SubmissionInFlight)),
            "expected SubmissionInFlight, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn successful_order_resets_form_and_empties_cart() -> TestResult {
        let mut orders = MockOrdersService::new();
        let mut carts = MockCartsService::new();

        orders
            .expect_submit_order()
            .once()
            .withf(|order| {
                order.user.email == "buyer@example.com" && order.message == "Leave at the door"
            })
            .return_once(|_| {
                Ok(OrderReceipt {
                    order_id: Some("-Nx1".to_string()),
                })
            });

        carts
            .expect_get_cart()
            .once()
            .return_once(|| Ok(cart(Vec::new(), 0)));

        let mut checkout = filled();
        let notifier = RecordingNotifier::default();
        let mut store = stocked();

        let receipt = checkout
            .submit(&orders, &carts, &mut store, &notifier)
            .await?;

        assert_eq!(receipt.order_id.as_deref(), Some("-Nx1"));
        assert_eq!(checkout.form, CheckoutForm::default());
        assert_eq!(checkout.phase(), CheckoutPhase::Idle);
        assert!(store.is_empty());
        assert_eq!(notifier.messages(), vec!["Order placed (order -Nx1)."]);

        Ok(())
    }

    #[tokio::test]
    async fn failed_order_keeps_entered_values() {
        let mut orders = MockOrdersService::new();
        let mut carts = MockCartsService::new();

        orders.expect_submit_order().once().return_once(|_| {
            Err(OrdersServiceError::Submission(VendorError::Rejected {
                status: 500,
                message: VendorMessage::None,
            }))
        });

        carts.expect_get_cart().never();

        let mut checkout = filled();
        let entered = checkout.form.clone();
        let notifier = RecordingNotifier::default();
        let mut store = stocked();
        let before = store.clone();

        let result = checkout.submit(&orders, &carts, &mut store, &notifier).await;

        assert!(
            matches!(result, Err(CheckoutError::Submission(_))),
            "expected Submission, got {result:?}"
        );
        assert_eq!(checkout.form, entered);
        assert_eq!(checkout.phase(), CheckoutPhase::Idle);
        assert_eq!(store, before);
        assert_eq!(notifier.messages(), vec!["Could not place the order."]);
    }

    #[test]
    fn receipt_without_id_uses_plain_notice() {
        let mut checkout = Checkout::new();

        let notice = checkout.finish(&Ok(OrderReceipt::default()));

        assert_eq!(notice, Notice::success("Order placed."));
    }
}
