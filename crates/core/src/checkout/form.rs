//! Checkout Form

use serde::{Deserialize, Serialize};

use super::{
    order::{Customer, Order},
    validation::{ValidationErrors, validate_address, validate_email, validate_name, validate_tel},
};

/// Form field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    /// Contact email
    Email,

    /// Recipient name
    Name,

    /// Recipient phone number
    Tel,

    /// Delivery address
    Address,

    /// Free-form note to the seller
    Message,
}

impl Field {
    /// Every field, in display order.
    pub const ALL: [Self; 5] = [
        Self::Email,
        Self::Name,
        Self::Tel,
        Self::Address,
        Self::Message,
    ];

    /// Human readable label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Email => "Email",
            Self::Name => "Recipient name",
            Self::Tel => "Recipient phone",
            Self::Address => "Recipient address",
            Self::Message => "Message",
        }
    }

    /// Whether the field must be filled in.
    pub fn is_required(self) -> bool {
        !matches!(self, Self::Message)
    }
}

/// Buyer contact details as entered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutForm {
    /// Contact email
    pub email: String,

    /// Recipient name
    pub name: String,

    /// Recipient phone number
    pub tel: String,

    /// Delivery address
    pub address: String,

    /// Optional note to the seller
    pub message: String,
}

impl CheckoutForm {
    /// Current value of a field.
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Email => &self.email,
            Field::Name => &self.name,
            Field::Tel => &self.tel,
            Field::Address => &self.address,
            Field::Message => &self.message,
        }
    }

    /// Replace the value of a field.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Email => &mut self.email,
            Field::Name => &mut self.name,
            Field::Tel => &mut self.tel,
            Field::Address => &mut self.address,
            Field::Message => &mut self.message,
        };

        *slot = value.into();
    }

    /// Clear every field back to its default.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Check every rule and build the order on success.
    ///
    /// All failing fields are reported, not only the first.
    ///
    /// # Errors
    ///
    /// Returns the collected [`ValidationErrors`] when any required field
    /// fails its rule.
    pub fn validate(&self) -> Result<Order, ValidationErrors> {
        let issues: ValidationErrors = [
            validate_email(&self.email),
            validate_name(&self.name),
            validate_tel(&self.tel),
            validate_address(&self.address),
        ]
        .into_iter()
        .flatten()
        .collect();

        if !issues.is_empty() {
            return Err(issues);
        }

        Ok(Order {
            user: Customer {
                email: self.email.clone(),
                name: self.name.clone(),
                tel: self.tel.clone(),
                address: self.address.clone(),
            },
            message: self.message.clone(),
        })
    }
}
