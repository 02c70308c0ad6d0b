//! Orders errors.

use storefront::checkout::ValidationErrors;
use thiserror::Error;

use crate::vendor::VendorError;

#[derive(Debug, Error)]
pub enum OrdersServiceError {
    #[error("failed to submit the order")]
    Submission(#[from] VendorError),
}

/// Reasons a checkout attempt did not reach the vendor, or failed there.
#[derive(Debug, Error)]
pub enum CheckoutError {
    #[error("the checkout form is invalid: {0}")]
    Validation(ValidationErrors),

    #[error("the cart is empty")]
    EmptyCart,

    #[error("an order is already being submitted")]
    SubmissionInFlight,

    #[error(transparent)]
    Submission(OrdersServiceError),
}
