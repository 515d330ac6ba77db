use std::time::Duration;

use crate::models::review::Rating;

/// Key under which the whole review list is stored.
pub const DEFAULT_STORAGE_KEY: &str = "onlineShopReviews";

/// How long a toast stays on screen.
pub const DEFAULT_TOAST_DURATION: Duration = Duration::from_millis(2000);

/// Settings for a review board. There is no environment configuration; the
/// defaults are what the page uses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardConfig {
    pub storage_key: String,
    pub toast_duration: Duration,
    pub default_rating: Rating,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            toast_duration: DEFAULT_TOAST_DURATION,
            default_rating: Rating::DEFAULT,
        }
    }
}

impl BoardConfig {
    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    pub fn with_toast_duration(mut self, duration: Duration) -> Self {
        self.toast_duration = duration;
        self
    }

    pub fn with_default_rating(mut self, rating: Rating) -> Self {
        self.default_rating = rating;
        self
    }
}
