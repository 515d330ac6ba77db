use std::collections::HashSet;

use leptos::logging::{error, log, warn};

use crate::errors::{Result, ReviewError};
use crate::models::review::{Review, ReviewId, ReviewPatch};
use crate::storage::KeyValueStorage;

/// Decodes the persisted JSON array of reviews.
pub fn decode_reviews(raw: &str) -> Result<Vec<Review>> {
    Ok(serde_json::from_str(raw)?)
}

/// Encodes the full review list as a JSON array.
pub fn encode_reviews(reviews: &[Review]) -> Result<String> {
    Ok(serde_json::to_string(reviews)?)
}

/// The authoritative, ordered review list (most recent first), mirrored to a
/// single storage key after every mutation.
pub struct ReviewStore {
    storage: Box<dyn KeyValueStorage>,
    key: String,
    reviews: Vec<Review>,
    last_id: i64,
}

impl ReviewStore {
    /// An empty store over `storage`; nothing is read until `reload`.
    pub fn new(storage: Box<dyn KeyValueStorage>, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
            reviews: Vec::new(),
            last_id: 0,
        }
    }

    /// Opens the store and loads whatever is stored under `key`.
    pub fn open(storage: Box<dyn KeyValueStorage>, key: impl Into<String>) -> Self {
        let mut store = Self::new(storage, key);
        store.reload();
        store
    }

    /// Reads the list from storage. A missing key or malformed content both
    /// yield an empty list; the user is never told about the latter.
    pub fn load(&self) -> Vec<Review> {
        let Some(raw) = self.storage.get(&self.key) else {
            log!("[STORE] No stored reviews under '{}'", self.key);
            return Vec::new();
        };

        match decode_reviews(&raw) {
            Ok(reviews) => dedup_ids(reviews),
            Err(e) => {
                warn!("[STORE] Ignoring malformed stored reviews: {}", e);
                Vec::new()
            }
        }
    }

    /// Replaces the in-memory list with the stored one.
    pub fn reload(&mut self) {
        self.reviews = self.load();
        self.last_id = self.reviews.iter().map(|r| r.id.0).max().unwrap_or(0);
        log!("[STORE] Loaded {} reviews", self.reviews.len());
    }

    pub fn reviews(&self) -> &[Review] {
        &self.reviews
    }

    pub fn get(&self, id: ReviewId) -> Option<&Review> {
        self.reviews.iter().find(|r| r.id == id)
    }

    pub fn len(&self) -> usize {
        self.reviews.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reviews.is_empty()
    }

    /// Allocates an id from the current time, never reusing or going below a
    /// previously issued one. If stored data already holds `i64::MAX`, falls
    /// back to the smallest positive id not in use.
    pub fn next_id(&mut self, now_millis: i64) -> ReviewId {
        let Some(after_last) = self.last_id.checked_add(1) else {
            warn!("[STORE] Id space exhausted by stored data, reusing a free id");
            let mut candidate = 1;
            while self.get(ReviewId(candidate)).is_some() {
                candidate += 1;
            }
            return ReviewId(candidate);
        };
        let id = now_millis.max(after_last);
        self.last_id = id;
        ReviewId(id)
    }

    /// Prepends `review` and persists.
    pub fn add(&mut self, review: Review) {
        log!("[STORE] Adding review {} for '{}'", review.id, review.shop_name);
        self.last_id = self.last_id.max(review.id.0);
        self.reviews.insert(0, review);
        self.persist();
    }

    /// Applies `patch` to the review with `id` in place and persists.
    pub fn update(&mut self, id: ReviewId, patch: ReviewPatch) -> Result<()> {
        let review = self
            .reviews
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(ReviewError::NotFound { id })?;
        review.apply(patch);
        log!("[STORE] Updated review {}", id);
        self.persist();
        Ok(())
    }

    /// Removes the review with `id` and persists.
    pub fn remove(&mut self, id: ReviewId) -> Result<Review> {
        let index = self
            .reviews
            .iter()
            .position(|r| r.id == id)
            .ok_or(ReviewError::NotFound { id })?;
        let removed = self.reviews.remove(index);
        log!("[STORE] Removed review {}", id);
        self.persist();
        Ok(removed)
    }

    /// Writes the whole list. A failed write leaves memory as is; the next
    /// successful write resyncs everything.
    fn persist(&self) {
        let result = encode_reviews(&self.reviews).and_then(|raw| self.storage.set(&self.key, &raw));
        if let Err(e) = result {
            error!("[STORE] Failed to persist {} reviews: {}", self.reviews.len(), e);
        }
    }
}

fn dedup_ids(reviews: Vec<Review>) -> Vec<Review> {
    let mut seen = HashSet::new();
    let total = reviews.len();
    let unique: Vec<Review> = reviews.into_iter().filter(|r| seen.insert(r.id)).collect();
    if unique.len() != total {
        warn!("[STORE] Dropped {} reviews with duplicate ids", total - unique.len());
    }
    unique
}
