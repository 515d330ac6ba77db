use crate::errors::{FormField, Result, ReviewError};
use crate::models::review::{Rating, Review, ReviewId, ReviewPatch};

/// Whether the form creates a new review or edits an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormMode {
    #[default]
    Create,
    Edit(ReviewId),
}

/// Draft values of the add/edit form plus its open state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormController {
    shop_name: String,
    review_text: String,
    rating: Rating,
    default_rating: Rating,
    mode: FormMode,
    is_open: bool,
}

impl Default for FormController {
    fn default() -> Self {
        Self::new(Rating::DEFAULT)
    }
}

impl FormController {
    pub fn new(default_rating: Rating) -> Self {
        Self {
            shop_name: String::new(),
            review_text: String::new(),
            rating: default_rating,
            default_rating,
            mode: FormMode::Create,
            is_open: false,
        }
    }

    /// Opens an empty form for a new review.
    pub fn start_create(&mut self) {
        self.reset();
        self.is_open = true;
    }

    /// Opens the form pre-filled with `review`.
    pub fn start_edit(&mut self, review: &Review) {
        self.shop_name = review.shop_name.clone();
        self.review_text = review.review_text.clone();
        self.rating = review.rating;
        self.mode = FormMode::Edit(review.id);
        self.is_open = true;
    }

    /// Closes the form and clears it back to create mode.
    pub fn close(&mut self) {
        self.reset();
        self.is_open = false;
    }

    fn reset(&mut self) {
        self.shop_name.clear();
        self.review_text.clear();
        self.rating = self.default_rating;
        self.mode = FormMode::Create;
    }

    pub fn set_shop_name(&mut self, value: impl Into<String>) {
        self.shop_name = value.into();
    }

    pub fn set_review_text(&mut self, value: impl Into<String>) {
        self.review_text = value.into();
    }

    pub fn set_rating(&mut self, rating: Rating) {
        self.rating = rating;
    }

    /// Takes the raw `<select>` value. Anything that is not 1-5 is ignored.
    pub fn set_rating_input(&mut self, value: &str) {
        if let Some(rating) = value.trim().parse::<u8>().ok().and_then(|v| Rating::new(v).ok()) {
            self.rating = rating;
        }
    }

    /// Trimmed field values, or the first empty field.
    pub fn validate(&self) -> Result<ReviewPatch> {
        let shop_name = self.shop_name.trim();
        let review_text = self.review_text.trim();
        if shop_name.is_empty() {
            return Err(ReviewError::Validation { field: FormField::ShopName });
        }
        if review_text.is_empty() {
            return Err(ReviewError::Validation { field: FormField::ReviewText });
        }
        Ok(ReviewPatch {
            shop_name: shop_name.to_string(),
            review_text: review_text.to_string(),
            rating: self.rating,
        })
    }

    pub fn shop_name(&self) -> &str {
        &self.shop_name
    }

    pub fn review_text(&self) -> &str {
        &self.review_text
    }

    pub fn rating(&self) -> Rating {
        self.rating
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.mode, FormMode::Edit(_))
    }

    pub fn edit_id(&self) -> Option<ReviewId> {
        match self.mode {
            FormMode::Edit(id) => Some(id),
            FormMode::Create => None,
        }
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn title(&self) -> &'static str {
        if self.is_editing() {
            "Edit Review"
        } else {
            "Add Review"
        }
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_editing() {
            "Update Review"
        } else {
            "Submit Review"
        }
    }
}
