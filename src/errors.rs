//! Error types for the review widget.
//!
//! None of these are fatal: validation failures become a toast, malformed
//! storage is read as an empty list, and a vanished review is reported once.

use std::fmt;

use thiserror::Error;

use crate::models::review::ReviewId;

/// Form input that failed the non-empty check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    ShopName,
    ReviewText,
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormField::ShopName => write!(f, "shop name"),
            FormField::ReviewText => write!(f, "review text"),
        }
    }
}

#[derive(Error, Debug)]
pub enum ReviewError {
    /// A required form field was empty or whitespace only.
    #[error("Please fill in both Shop Name and Review.")]
    Validation { field: FormField },

    /// The persisted list could not be decoded.
    #[error("Stored reviews are malformed: {0}")]
    StorageParse(#[from] serde_json::Error),

    /// Update or delete referenced a review that is not in the store.
    #[error("Review not found: {id}")]
    NotFound { id: ReviewId },

    /// Another update or delete is still waiting for confirmation.
    #[error("Another action is waiting for confirmation")]
    ConfirmationPending,

    #[error("Rating must be between 1 and 5, got {value}")]
    InvalidRating { value: u8 },

    /// Writing to the key-value storage failed.
    #[error("Storage write failed: {message}")]
    StorageWrite { message: String },
}

pub type Result<T> = std::result::Result<T, ReviewError>;
