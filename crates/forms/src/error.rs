//! Form validation outcomes.

use thiserror::Error;

/// Why a form was rejected. The `Display` text is what the user sees.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("please fill in all fields")]
    MissingFields,

    #[error("please enter a valid email address")]
    InvalidEmail,

    /// A decimal field did not parse, or was not greater than zero.
    #[error("please enter a valid {field} greater than 0")]
    InvalidAmount { field: &'static str },

    #[error("the product name must be at least {min} characters long")]
    NameTooShort { min: usize },

    #[error("the product name must be at most {max} characters long")]
    NameTooLong { max: usize },

    /// Adding the quantity would take the stock past the largest representable value.
    #[error("the quantity is too large for the current stock")]
    QuantityTooLarge,

    #[error("please enter a valid date (YYYY-MM-DD)")]
    InvalidDate,

    #[error("the effective date cannot be in the past")]
    DateInPast,

    #[error("there are no products for the selected company")]
    NoProductsForCompany,

    /// A picked option is not among the ones the screen offers.
    #[error("the selected {field} is not available")]
    UnknownSelection { field: &'static str },

    #[error("incorrect email or password")]
    InvalidCredentials,
}

/// Non-blocking remarks attached to a successful submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormWarning {
    DuplicateTaxId(String),
    DuplicateEmail(String),
}

impl core::fmt::Display for FormWarning {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            FormWarning::DuplicateTaxId(tax_id) => {
                write!(f, "another company already uses tax id {tax_id}")
            }
            FormWarning::DuplicateEmail(email) => {
                write!(f, "another user already uses {email}")
            }
        }
    }
}

/// A form that passed validation and reached the store.
#[derive(Debug, Clone, PartialEq)]
pub struct Submitted<T> {
    pub entity: T,
    pub warnings: Vec<FormWarning>,
}

impl<T> Submitted<T> {
    pub fn clean(entity: T) -> Self {
        Self {
            entity,
            warnings: Vec::new(),
        }
    }
}
