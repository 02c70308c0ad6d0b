//! Checkout Validation

use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    sync::LazyLock,
};

use regex::Regex;
use thiserror::Error;

use super::form::Field;

const EMAIL_MIN_CHARS: usize = 4;
const NAME_MIN_CHARS: usize = 2;
const ADDRESS_MIN_CHARS: usize = 5;

#[expect(clippy::expect_used, reason = "pattern is a compile-time literal")]
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("valid email pattern")
});

// Landlines are 0[2-8] plus seven digits, mobiles 09 plus eight. Digits are
// ASCII only; `\d` would also match fullwidth and other Unicode digits.
#[expect(clippy::expect_used, reason = "pattern is a compile-time literal")]
static TEL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(0[2-8][0-9]{7}|09[0-9]{8})$").expect("valid phone pattern")
});

/// A single failed form rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationIssue {
    /// Email shorter than the minimum length.
    #[error("Please enter an email address.")]
    EmailMissing,

    /// Email does not look like an address.
    #[error("The email address is not valid.")]
    EmailMalformed,

    /// Name shorter than the minimum length.
    #[error("Please enter the recipient's name.")]
    NameTooShort,

    /// Phone number matches neither the landline nor the mobile pattern.
    #[error("The phone number is not valid.")]
    TelMalformed,

    /// Address shorter than the minimum length.
    #[error("Please enter the delivery address.")]
    AddressTooShort,
}

impl ValidationIssue {
    /// The field this issue belongs to.
    pub fn field(self) -> Field {
        match self {
            Self::EmailMissing | Self::EmailMalformed => Field::Email,
            Self::NameTooShort => Field::Name,
            Self::TelMalformed => Field::Tel,
            Self::AddressTooShort => Field::Address,
        }
    }
}

/// Every failed rule of a form, at most one per field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    issues: Vec<ValidationIssue>,
}

impl ValidationErrors {
    /// Whether no rule failed.
    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    /// Number of failed fields.
    pub fn len(&self) -> usize {
        self.issues.len()
    }

    /// The issue reported for `field`, if any.
    pub fn get(&self, field: Field) -> Option<&ValidationIssue> {
        self.issues.iter().find(|issue| issue.field() == field)
    }

    /// Iterate issues in field order.
    pub fn iter(&self) -> impl Iterator<Item = &ValidationIssue> {
        self.issues.iter()
    }
}

impl FromIterator<ValidationIssue> for ValidationErrors {
    fn from_iter<I: IntoIterator<Item = ValidationIssue>>(iter: I) -> Self {
        Self {
            issues: iter.into_iter().collect(),
        }
    }
}

impl Display for ValidationErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        for (index, issue) in self.issues.iter().enumerate() {
            if index > 0 {
                f.write_str(" ")?;
            }

            Display::fmt(issue, f)?;
        }

        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

pub(super) fn validate_email(email: &str) -> Option<ValidationIssue> {
    if email.chars().count() < EMAIL_MIN_CHARS {
        return Some(ValidationIssue::EmailMissing);
    }

    (!EMAIL_PATTERN.is_match(email)).then_some(ValidationIssue::EmailMalformed)
}

pub(super) fn validate_name(name: &str) -> Option<ValidationIssue> {
    (name.chars().count() < NAME_MIN_CHARS).then_some(ValidationIssue::NameTooShort)
}

pub(super) fn validate_tel(tel: &str) -> Option<ValidationIssue> {
    (!TEL_PATTERN.is_match(tel)).then_some(ValidationIssue::TelMalformed)
}

pub(super) fn validate_address(address: &str) -> Option<ValidationIssue> {
    (address.chars().count() < ADDRESS_MIN_CHARS).then_some(ValidationIssue::AddressTooShort)
}
