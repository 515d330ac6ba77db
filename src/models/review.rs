// src/models/review.rs
use std::fmt;

use chrono::{DateTime, TimeZone};
use serde::{Deserialize, Serialize};

use crate::errors::ReviewError;

/// Identifier of a stored review. Serialized as a bare JSON number (the
/// creation time in milliseconds) so previously written data stays readable.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(transparent)]
pub struct ReviewId(pub i64);

impl fmt::Display for ReviewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Star rating between 1 and 5 inclusive.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rating(u8);

impl Rating {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;
    pub const DEFAULT: Rating = Rating(5);

    pub fn new(value: u8) -> Result<Self, ReviewError> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Rating(value))
        } else {
            Err(ReviewError::InvalidRating { value })
        }
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// All ratings, highest first, in the order the rating picker lists them.
    pub fn descending() -> impl Iterator<Item = Rating> {
        (Self::MIN..=Self::MAX).rev().map(Rating)
    }

    /// "1 star", "4 stars".
    pub fn label(self) -> String {
        if self.0 == 1 {
            "1 star".to_string()
        } else {
            format!("{} stars", self.0)
        }
    }
}

impl Default for Rating {
    fn default() -> Self {
        Rating::DEFAULT
    }
}

impl TryFrom<u8> for Rating {
    type Error = ReviewError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Rating::new(value)
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> u8 {
        rating.0
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: ReviewId,          // Unique, assigned once at creation
    pub shop_name: String,     // Trimmed, never empty
    pub review_text: String,   // Trimmed, line breaks kept as typed
    pub rating: Rating,
    pub date: String,          // Creation time as display text, never rewritten
}

impl Review {
    /// Builds a review from already validated values, stamping it with `created`.
    pub fn new<Tz>(id: ReviewId, patch: ReviewPatch, created: &DateTime<Tz>) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        Review {
            id,
            shop_name: patch.shop_name,
            review_text: patch.review_text,
            rating: patch.rating,
            date: format_review_date(created),
        }
    }

    /// Overwrites the editable fields. `id` and `date` are left alone.
    pub fn apply(&mut self, patch: ReviewPatch) {
        self.shop_name = patch.shop_name;
        self.review_text = patch.review_text;
        self.rating = patch.rating;
    }
}

/// The editable part of a review, as produced by a validated form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewPatch {
    pub shop_name: String,
    pub review_text: String,
    pub rating: Rating,
}

/// Formats a timestamp the way browsers render `toLocaleString()` for en-US,
/// e.g. `3/7/2025, 9:05:02 PM`.
pub fn format_review_date<Tz>(at: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    at.format("%-m/%-d/%Y, %-I:%M:%S %p").to_string()
}
