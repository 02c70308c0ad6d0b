//! Carts service errors.

use thiserror::Error;

use crate::vendor::VendorError;

#[derive(Debug, Error)]
pub enum CartsServiceError {
    /// Reading the cart failed. After a mutation this means the write went
    /// through but the refreshed cart could not be fetched.
    #[error("failed to fetch the cart")]
    Fetch(#[source] VendorError),

    /// The vendor refused or never received the write.
    #[error("failed to update the cart")]
    Mutation(#[source] VendorError),
}
