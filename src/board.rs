//! The review board: store, form, confirmation gate and search term owned
//! together, with one method per user action.
//!
//! Every action runs to completion synchronously. Actions that change what
//! the user sees return the notification they trigger, so the caller can
//! show exactly one toast per action.

use std::fmt;

use chrono::{DateTime, Local, TimeZone};
use leptos::logging::log;

use crate::config::BoardConfig;
use crate::confirm::ConfirmationGate;
use crate::errors::{Result, ReviewError};
use crate::form::FormController;
use crate::models::review::{Review, ReviewId};
use crate::notify::{Notification, MSG_ADDED, MSG_DELETED, MSG_UPDATED};
use crate::search::filter_reviews;
use crate::storage::KeyValueStorage;
use crate::store::ReviewStore;

pub struct ReviewBoard {
    store: ReviewStore,
    form: FormController,
    gate: ConfirmationGate,
    search_term: String,
    config: BoardConfig,
}

impl fmt::Debug for ReviewBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReviewBoard")
            .field("reviews", &self.store.len())
            .field("form", &self.form)
            .field("gate", &self.gate)
            .field("search_term", &self.search_term)
            .finish()
    }
}

impl ReviewBoard {
    /// Opens a board over `storage`, loading the stored reviews.
    pub fn open(storage: Box<dyn KeyValueStorage>, config: BoardConfig) -> Self {
        let mut board = Self::new(storage, config);
        board.reload();
        board
    }

    /// A board whose store stays empty until `reload`.
    pub fn new(storage: Box<dyn KeyValueStorage>, config: BoardConfig) -> Self {
        let store = ReviewStore::new(storage, config.storage_key.clone());
        Self {
            store,
            form: FormController::new(config.default_rating),
            gate: ConfirmationGate::Idle,
            search_term: String::new(),
            config,
        }
    }

    /// Re-reads storage. Used once the page is live in the browser.
    pub fn reload(&mut self) {
        self.store.reload();
    }

    pub fn store(&self) -> &ReviewStore {
        &self.store
    }

    pub fn reviews(&self) -> &[Review] {
        self.store.reviews()
    }

    pub fn form(&self) -> &FormController {
        &self.form
    }

    /// Field setters for the open form.
    pub fn form_mut(&mut self) -> &mut FormController {
        &mut self.form
    }

    pub fn gate(&self) -> &ConfirmationGate {
        &self.gate
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    /// The filtered list to display, recomputed on every call.
    pub fn visible_reviews(&self) -> Vec<&Review> {
        filter_reviews(self.store.reviews(), &self.search_term)
    }

    fn ensure_gate_idle(&self) -> Result<()> {
        if self.gate.is_idle() {
            Ok(())
        } else {
            Err(ReviewError::ConfirmationPending)
        }
    }

    /// Opens the empty form.
    pub fn start_create(&mut self) -> Result<()> {
        self.ensure_gate_idle()?;
        self.form.start_create();
        Ok(())
    }

    /// Opens the form pre-filled with the review `id`.
    pub fn start_edit(&mut self, id: ReviewId) -> Result<()> {
        self.ensure_gate_idle()?;
        let review = self.store.get(id).ok_or(ReviewError::NotFound { id })?;
        self.form.start_edit(review);
        Ok(())
    }

    /// Closes the form without saving.
    pub fn close_form(&mut self) {
        self.form.close();
    }

    /// Submits the form using the current local time for new reviews.
    pub fn submit(&mut self) -> Option<Notification> {
        self.submit_at(&Local::now())
    }

    /// Submits the form. A create is applied immediately; an edit only opens
    /// the confirmation gate and returns no notification.
    pub fn submit_at<Tz>(&mut self, now: &DateTime<Tz>) -> Option<Notification>
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        if let Err(e) = self.ensure_gate_idle() {
            log!("[BOARD] Submit ignored: {}", e);
            return None;
        }

        let patch = match self.form.validate() {
            Ok(patch) => patch,
            Err(e) => {
                log!("[BOARD] Validation failed: {:?}", e);
                return Some(Notification::from(&e));
            }
        };

        match self.form.edit_id() {
            Some(id) => {
                if let Err(e) = self.gate.request_update(id) {
                    log!("[BOARD] Update of {} not staged: {}", id, e);
                    return None;
                }
                log!("[BOARD] Update of {} awaiting confirmation", id);
                None
            }
            None => {
                let id = self.store.next_id(now.timestamp_millis());
                self.store.add(Review::new(id, patch, now));
                self.form.close();
                Some(Notification::success(MSG_ADDED))
            }
        }
    }

    /// Asks for confirmation before deleting `id`.
    pub fn request_delete(&mut self, id: ReviewId) -> Result<()> {
        self.gate.request_delete(id)?;
        log!("[BOARD] Delete of {} awaiting confirmation", id);
        Ok(())
    }

    /// Runs the pending action. Returns `None` if nothing was pending.
    pub fn confirm(&mut self) -> Option<Notification> {
        match self.gate.take() {
            ConfirmationGate::Idle => None,
            ConfirmationGate::PendingUpdate(id) => Some(self.confirm_update(id)),
            ConfirmationGate::PendingDelete(id) => Some(self.confirm_delete(id)),
        }
    }

    fn confirm_update(&mut self, id: ReviewId) -> Notification {
        // The form may have changed while the gate was open
        let patch = match self.form.validate() {
            Ok(patch) => patch,
            Err(e) => return Notification::from(&e),
        };
        let result = self.store.update(id, patch);
        self.form.close();
        match result {
            Ok(()) => Notification::success(MSG_UPDATED),
            Err(e) => {
                log!("[BOARD] Update failed: {}", e);
                Notification::from(&e)
            }
        }
    }

    fn confirm_delete(&mut self, id: ReviewId) -> Notification {
        match self.store.remove(id) {
            Ok(_) => {
                if self.form.edit_id() == Some(id) {
                    self.form.close();
                }
                Notification::info(MSG_DELETED)
            }
            Err(e) => {
                log!("[BOARD] Delete failed: {}", e);
                Notification::from(&e)
            }
        }
    }

    /// Drops the pending action. The form, if open, keeps its values.
    pub fn cancel_confirmation(&mut self) {
        if !self.gate.is_idle() {
            log!("[BOARD] Cancelled {:?}", self.gate);
        }
        self.gate.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::FormField;
    use crate::models::review::Rating;
    use crate::notify::{NotificationKind, MSG_VANISHED};
    use crate::storage::MemoryStorage;
    use crate::store::encode_reviews;
    use chrono::Utc;
    use std::rc::Rc;

    fn create_test_board() -> (ReviewBoard, Rc<MemoryStorage>) {
        let storage = Rc::new(MemoryStorage::new());
        let board = ReviewBoard::open(Box::new(Rc::clone(&storage)), BoardConfig::default());
        (board, storage)
    }

    fn at(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(1_700_000_000 + secs, 0).unwrap()
    }

    fn create(board: &mut ReviewBoard, shop: &str, text: &str, rating: u8, secs: i64) -> Option<Notification> {
        board.start_create().unwrap();
        let form = board.form_mut();
        form.set_shop_name(shop);
        form.set_review_text(text);
        form.set_rating(Rating::new(rating).unwrap());
        board.submit_at(&at(secs))
    }

    #[test]
    fn test_create_into_empty_store() {
        let (mut board, storage) = create_test_board();
        let note = create(&mut board, "A", "B", 3, 0).unwrap();

        assert_eq!(note.kind, NotificationKind::Success);
        assert_eq!(note.message, MSG_ADDED);
        assert_eq!(board.reviews().len(), 1);
        let review = &board.reviews()[0];
        assert_eq!(review.shop_name, "A");
        assert_eq!(review.review_text, "B");
        assert_eq!(review.rating.value(), 3);
        assert!(!review.date.is_empty());
        assert!(!board.form().is_open());
        assert!(storage.raw("onlineShopReviews").is_some());
    }

    #[test]
    fn test_validation_leaves_store_and_form_alone() {
        let (mut board, storage) = create_test_board();
        let note = create(&mut board, "  ", "Text", 2, 0).unwrap();

        assert_eq!(note.kind, NotificationKind::Error);
        assert_eq!(note.message, "Please fill in both Shop Name and Review.");
        assert!(board.reviews().is_empty());
        assert!(board.form().is_open());
        assert_eq!(board.form().review_text(), "Text");
        assert_eq!(storage.raw("onlineShopReviews"), None);
        assert!(matches!(
            board.form().validate(),
            Err(ReviewError::Validation { field: FormField::ShopName })
        ));
    }

    #[test]
    fn test_newest_first_with_distinct_ids() {
        let (mut board, _) = create_test_board();
        create(&mut board, "R1", "first", 5, 0);
        // Same instant, still a fresh id
        create(&mut board, "R2", "second", 4, 0);

        let reviews = board.reviews();
        assert_eq!(reviews[0].shop_name, "R2");
        assert_eq!(reviews[1].shop_name, "R1");
        assert_ne!(reviews[0].id, reviews[1].id);
    }

    #[test]
    fn test_update_requires_confirmation() {
        let (mut board, storage) = create_test_board();
        create(&mut board, "Old", "Old text", 2, 0);
        let original = board.reviews()[0].clone();
        let raw_before = storage.raw("onlineShopReviews");

        board.start_edit(original.id).unwrap();
        board.form_mut().set_shop_name("New");
        board.form_mut().set_review_text("New text");
        board.form_mut().set_rating_input("5");
        assert_eq!(board.submit_at(&at(60)), None);
        assert_eq!(board.gate(), &ConfirmationGate::PendingUpdate(original.id));
        assert_eq!(storage.raw("onlineShopReviews"), raw_before);

        let note = board.confirm().unwrap();
        assert_eq!(note.message, MSG_UPDATED);
        let updated = &board.reviews()[0];
        assert_eq!(updated.id, original.id);
        assert_eq!(updated.date, original.date);
        assert_eq!(updated.shop_name, "New");
        assert_eq!(updated.rating.value(), 5);
        assert!(board.gate().is_idle());
        assert!(!board.form().is_open());
        assert!(!board.form().is_editing());
    }

    #[test]
    fn test_confirm_update_revalidates_form() {
        let (mut board, storage) = create_test_board();
        create(&mut board, "Steady", "Text", 4, 0);
        let id = board.reviews()[0].id;
        let raw_before = storage.raw("onlineShopReviews");

        board.start_edit(id).unwrap();
        board.form_mut().set_review_text("Edited");
        assert_eq!(board.submit_at(&at(1)), None);
        assert_eq!(board.gate(), &ConfirmationGate::PendingUpdate(id));

        // Shop name cleared while the confirmation is showing
        board.form_mut().set_shop_name("   ");
        let note = board.confirm().unwrap();

        assert_eq!(note.kind, NotificationKind::Error);
        assert_eq!(note.message, "Please fill in both Shop Name and Review.");
        assert!(board.gate().is_idle());
        assert!(board.form().is_open());
        assert_eq!(board.form().edit_id(), Some(id));
        assert_eq!(board.reviews()[0].shop_name, "Steady");
        assert_eq!(storage.raw("onlineShopReviews"), raw_before);
    }

    #[test]
    fn test_cancel_update_keeps_form_open() {
        let (mut board, storage) = create_test_board();
        create(&mut board, "Keep", "Me", 3, 0);
        let raw_before = storage.raw("onlineShopReviews");
        let id = board.reviews()[0].id;

        board.start_edit(id).unwrap();
        board.form_mut().set_shop_name("Changed");
        board.submit_at(&at(1));
        board.cancel_confirmation();

        assert!(board.gate().is_idle());
        assert_eq!(storage.raw("onlineShopReviews"), raw_before);
        assert_eq!(board.reviews()[0].shop_name, "Keep");
        assert!(board.form().is_open());
        assert_eq!(board.form().edit_id(), Some(id));
        assert_eq!(board.form().shop_name(), "Changed");
    }

    #[test]
    fn test_gate_blocks_other_actions() {
        let (mut board, _) = create_test_board();
        create(&mut board, "One", "x", 1, 0);
        create(&mut board, "Two", "y", 1, 1);
        let first = board.reviews()[0].id;
        let second = board.reviews()[1].id;

        board.request_delete(first).unwrap();
        assert!(matches!(board.request_delete(second), Err(ReviewError::ConfirmationPending)));
        assert!(matches!(board.start_create(), Err(ReviewError::ConfirmationPending)));
        assert!(matches!(board.start_edit(second), Err(ReviewError::ConfirmationPending)));
        assert_eq!(board.submit_at(&at(2)), None);

        let note = board.confirm().unwrap();
        assert_eq!(note.kind, NotificationKind::Info);
        assert_eq!(note.message, MSG_DELETED);
        assert_eq!(board.reviews().len(), 1);
        assert_eq!(board.reviews()[0].id, second);
    }

    #[test]
    fn test_confirm_when_idle_is_silent() {
        let (mut board, _) = create_test_board();
        assert_eq!(board.confirm(), None);
    }

    #[test]
    fn test_vanished_review_reported_once() {
        let storage = Rc::new(MemoryStorage::new());
        let mut board = ReviewBoard::open(Box::new(Rc::clone(&storage)), BoardConfig::default());
        create(&mut board, "Gone soon", "x", 1, 0);
        let id = board.reviews()[0].id;

        board.request_delete(id).unwrap();
        // Another tab wiped the list in the meantime
        storage.set("onlineShopReviews", &encode_reviews(&[]).unwrap()).unwrap();
        board.reload();

        let note = board.confirm().unwrap();
        assert_eq!(note.kind, NotificationKind::Error);
        assert_eq!(note.message, MSG_VANISHED);
        assert!(board.gate().is_idle());
        assert_eq!(board.confirm(), None);
    }

    #[test]
    fn test_deleting_edited_review_closes_form() {
        let (mut board, _) = create_test_board();
        create(&mut board, "Edited", "x", 1, 0);
        let id = board.reviews()[0].id;

        board.start_edit(id).unwrap();
        board.request_delete(id).unwrap();
        board.confirm();
        assert!(!board.form().is_open());
        assert!(matches!(board.start_edit(id), Err(ReviewError::NotFound { .. })));
    }

    #[test]
    fn test_search_view() {
        let (mut board, _) = create_test_board();
        create(&mut board, "ALPHA Foods", "x", 1, 0);
        create(&mut board, "beta shop", "x", 1, 1);
        create(&mut board, "Alpha Mart", "x", 1, 2);

        board.set_search_term("alpha");
        let names: Vec<&str> = board.visible_reviews().iter().map(|r| r.shop_name.as_str()).collect();
        assert_eq!(names, vec!["Alpha Mart", "ALPHA Foods"]);
        assert_eq!(board.reviews().len(), 3);

        board.set_search_term("");
        assert_eq!(board.visible_reviews().len(), 3);
    }
}
